pub mod calculator;
pub use calculator::{PackCalculator, PackCalculatorService, Strategy};
pub mod catalog;
pub use catalog::PackCatalog;
mod dynamic;
pub use dynamic::MAX_TABLE_ENTRIES;
pub mod error;
pub use error::{CalculateError, ConfigurationError};
pub mod result;
pub use result::{Breakdown, CalculationResult};
mod search;
