//! Hash table implementations.
//!
//! - [`robin_hood`]: open addressing with Robin Hood displacement and tombstone deletion.

pub mod robin_hood;

pub use robin_hood::{
    RobinHoodBuilder, RobinHoodTable, DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR,
    DEFAULT_MAX_LOAD_FACTOR,
};
