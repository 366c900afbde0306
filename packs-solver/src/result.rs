use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pack size -> number of packs of that size. Sizes with a count of zero are absent.
pub type Breakdown = BTreeMap<u64, u64>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub packs: Breakdown,
    pub total_items: u64,
    pub requested_amount: u64,
    pub overage: u64,
    pub total_packs: u64,
}

impl CalculationResult {
    /// Shapes a breakdown that covers `requested_amount` into a result.
    ///
    /// Totals are derived from the breakdown itself so that
    /// `total_items == sum(size * count)` and `total_packs == sum(count)` always hold.
    pub fn new(packs: Breakdown, requested_amount: u64) -> Self {
        let total_items = packs.iter().map(|(size, count)| size * count).sum::<u64>();
        let total_packs = packs.values().sum::<u64>();
        debug_assert!(total_items >= requested_amount);
        Self {
            packs,
            total_items,
            requested_amount,
            overage: total_items - requested_amount,
            total_packs,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.overage == 0
    }
}
