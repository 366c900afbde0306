use thiserror::Error;

/// Rejection of a single calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculateError {
    #[error("amount must be greater than 0")]
    InvalidAmount { amount: i64 },
}

/// A pack catalog that cannot be served. Raised before any request is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("pack catalog is empty")]
    EmptyCatalog,
    #[error("pack size ({0}) must be greater than 0")]
    InvalidPackSize(i64),
    #[error("pack size ({0}) is listed more than once")]
    DuplicatePackSize(u64),
    #[error("pack size ({largest}) needs more than {limit} table entries for the dynamic strategy")]
    TableTooLarge { largest: u64, limit: u64 },
}
