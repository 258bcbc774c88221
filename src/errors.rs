//! Error types for the ragsearch query pipeline
//!
//! Each mandatory pipeline stage fails with its own variant so callers can
//! tell which dependency broke without parsing transport details.

use thiserror::Error;

/// Main error type for the query pipeline
#[derive(Error, Debug)]
pub enum RagError {
    /// Input validation: rejected before any remote call
    #[error("query text must not be empty")]
    EmptyQuery,

    /// Embedding service call failed
    #[error("embedding request failed: {0}")]
    Embedding(String),

    /// Vector index search failed
    #[error("vector search failed: {0}")]
    Search(String),

    /// Answer generation failed
    #[error("answer generation failed: {0}")]
    Generation(String),

    /// Startup configuration errors (missing or malformed settings)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, RagError>;
