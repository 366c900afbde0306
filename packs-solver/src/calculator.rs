use crate::{
    catalog::PackCatalog,
    dynamic,
    error::{CalculateError, ConfigurationError},
    result::CalculationResult,
    search,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::info;

/// How a calculator turns a catalog and an amount into a breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Branch search that stops at the first exact match.
    #[default]
    Search,
    /// Minimum-pack table; always returns the fewest packs for the lowest overage.
    Dynamic,
}

impl Strategy {
    pub(crate) fn solve(self, catalog: &PackCatalog, target: u64) -> CalculationResult {
        match self {
            Strategy::Search => search::solve(catalog, target),
            Strategy::Dynamic => dynamic::solve(catalog, target),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Search => write!(f, "search"),
            Strategy::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Strategy::Search),
            "dynamic" => Ok(Strategy::Dynamic),
            _ => Err(format!("unknown strategy '{}'", s)),
        }
    }
}

pub trait PackCalculatorService {
    fn calculate_packs(&self, amount: i64) -> Result<CalculationResult, CalculateError>;
}

#[derive(Debug, Clone)]
pub struct PackCalculator {
    catalog: PackCatalog,
    strategy: Strategy,
}

impl PackCalculator {
    pub fn new(pack_sizes: &[i64], strategy: Strategy) -> Result<Self, ConfigurationError> {
        let catalog = PackCatalog::new(pack_sizes)?;
        if strategy == Strategy::Dynamic {
            dynamic::check_table_size(&catalog)?;
        }
        Ok(Self { catalog, strategy })
    }

    pub fn catalog(&self) -> &PackCatalog {
        &self.catalog
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl PackCalculatorService for PackCalculator {
    fn calculate_packs(&self, amount: i64) -> Result<CalculationResult, CalculateError> {
        if amount <= 0 {
            return Err(CalculateError::InvalidAmount { amount });
        }

        let result = self.strategy.solve(&self.catalog, amount as u64);
        info!(
            requested = result.requested_amount,
            total_items = result.total_items,
            overage = result.overage,
            total_packs = result.total_packs,
            exact = result.is_exact(),
            strategy = %self.strategy,
            "calculated optimal packs"
        );
        Ok(result)
    }
}
