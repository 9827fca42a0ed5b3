//! Error types for table construction.

use thiserror::Error;

/// Configuration errors reported when building a table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Capacity must be at least one bucket
    #[error("invalid capacity {0}: a table needs at least one bucket")]
    InvalidCapacity(usize),

    /// Load factor outside of (0, 1)
    #[error("invalid max load factor {0}: must be greater than 0 and less than 1")]
    InvalidLoadFactor(f64),

    /// Growth factor below 2
    #[error("invalid growth factor {0}: must be at least 2")]
    InvalidGrowthFactor(usize),

    /// Growing once would need more slots than can be allocated
    #[error("capacity {capacity} grown by {growth_factor} exceeds the largest slot array")]
    CapacityOverflow {
        /// Initial number of buckets
        capacity: usize,
        /// Multiple applied on growth
        growth_factor: usize,
    },
}

/// Result type for table construction
pub type Result<T> = std::result::Result<T, Error>;
