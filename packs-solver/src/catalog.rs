use crate::error::ConfigurationError;
use std::collections::HashSet;

/// Distinct positive pack sizes, held largest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackCatalog {
    sizes: Vec<u64>,
    gcd: u64,
}

impl PackCatalog {
    pub fn new(sizes: &[i64]) -> Result<Self, ConfigurationError> {
        if sizes.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(sizes.len());
        let mut validated = Vec::with_capacity(sizes.len());
        for &size in sizes {
            if size <= 0 {
                return Err(ConfigurationError::InvalidPackSize(size));
            }
            let size = size as u64;
            if !seen.insert(size) {
                return Err(ConfigurationError::DuplicatePackSize(size));
            }
            validated.push(size);
        }

        validated.sort_unstable_by(|a, b| b.cmp(a));
        let gcd = validated.iter().fold(0, |acc, &size| gcd(acc, size));

        Ok(Self {
            sizes: validated,
            gcd,
        })
    }

    /// Pack sizes in descending order.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn largest(&self) -> u64 {
        self.sizes[0]
    }

    /// Greatest common divisor of every pack size. Every achievable total is a multiple of it.
    pub fn gcd(&self) -> u64 {
        self.gcd
    }

    /// Lower bound on the overage of any combination of packs for `target`.
    pub fn min_overage(&self, target: u64) -> u64 {
        match target % self.gcd {
            0 => 0,
            r => self.gcd - r,
        }
    }
}

pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
