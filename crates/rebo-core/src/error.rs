//! # Error Types — Structured Error Hierarchy
//!
//! Shared error type for the back-office stack. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Domain-specific errors (lifecycle transitions, gateway failures) live in
//! the crates that own them; this is only the foundation-level surface.

use thiserror::Error;

/// Top-level error type for foundational operations.
#[derive(Error, Debug)]
pub enum ReboError {
    /// A timestamp string failed validation or parsing.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
