//! Minimum-pack table over every reachable total, for catalogs where the first exact match
//! of the branch search is not good enough.
//!
//! Sizes and target are first divided by the catalog gcd. Any optimal breakdown can be
//! rewritten to hold fewer than `largest` packs of the other sizes (some subset of them
//! sums to a multiple of `largest` and can be swapped for no more packs of `largest`), so
//! for large targets a prefix of largest packs is committed up front and the table only
//! spans the remaining `largest^2` window.

use crate::{
    catalog::PackCatalog,
    error::ConfigurationError,
    result::{Breakdown, CalculationResult},
};
use tracing::trace;

const UNREACHABLE: u64 = u64::MAX;

/// Most table entries a single calculation may allocate.
pub const MAX_TABLE_ENTRIES: u64 = 1 << 22;

/// Largest table any target can need: the window below the committed prefix holds fewer
/// than `largest^2 + largest` sums, plus `largest - 1` sums above it.
fn worst_case_entries(catalog: &PackCatalog) -> Option<u64> {
    let largest = catalog.largest() / catalog.gcd();
    largest.checked_add(2)?.checked_mul(largest)
}

/// Rejects catalogs whose table would not fit in [`MAX_TABLE_ENTRIES`].
pub fn check_table_size(catalog: &PackCatalog) -> Result<(), ConfigurationError> {
    match worst_case_entries(catalog) {
        Some(entries) if entries <= MAX_TABLE_ENTRIES => Ok(()),
        _ => Err(ConfigurationError::TableTooLarge {
            largest: catalog.largest(),
            limit: MAX_TABLE_ENTRIES,
        }),
    }
}

/// Finds the breakdown for `target` with the fewest packs among those with the lowest
/// overage. The catalog must have passed [`check_table_size`].
pub fn solve(catalog: &PackCatalog, target: u64) -> CalculationResult {
    let gcd = catalog.gcd();
    let sizes: Vec<u64> = catalog.sizes().iter().map(|size| size / gcd).collect();
    let largest = sizes[0];
    let reduced_target = target.div_ceil(gcd);

    let window = largest.saturating_mul(largest);
    let committed = if reduced_target > window {
        (reduced_target - window) / largest
    } else {
        0
    };
    let rest = reduced_target - committed * largest;
    // The next multiple of `largest` is always reachable, so the answer lies below this.
    let limit = (rest + largest - 1) as usize;
    trace!(gcd, committed, rest, limit, "building pack table");

    let mut min_packs = vec![UNREACHABLE; limit + 1];
    let mut last_pack = vec![0usize; limit + 1];
    min_packs[0] = 0;
    for sum in 1..=limit {
        for (i, &size) in sizes.iter().enumerate() {
            let size = size as usize;
            if size > sum || min_packs[sum - size] == UNREACHABLE {
                continue;
            }
            let packs = min_packs[sum - size] + 1;
            if packs < min_packs[sum] {
                min_packs[sum] = packs;
                last_pack[sum] = i;
            }
        }
    }

    let mut sum = (rest as usize..=limit)
        .find(|&sum| min_packs[sum] != UNREACHABLE)
        .unwrap_or((rest.div_ceil(largest) * largest) as usize);

    let mut breakdown = Breakdown::new();
    if committed > 0 {
        breakdown.insert(catalog.largest(), committed);
    }
    while sum > 0 {
        let i = last_pack[sum];
        *breakdown.entry(catalog.sizes()[i]).or_insert(0) += 1;
        sum -= sizes[i] as usize;
    }
    CalculationResult::new(breakdown, target)
}
