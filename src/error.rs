//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Misses and absent keys
//! are regular outcomes (`None`), so the only failure is a bad construction.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity, policy or configuration value rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
