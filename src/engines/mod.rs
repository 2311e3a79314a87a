//! Low-level alignment engines
//!
//! This module contains the dynamic-programming machinery behind the public
//! alignment API: score tableaus, recurrence fills and traceback walkers.

pub mod align;

/// Error types for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("memory allocation error: {0}")]
    Memory(String),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
