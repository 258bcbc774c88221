//! ragsearch - retrieval-augmented question answering
//!
//! Given a question, embeds it (or a HyDE expansion of it), searches a
//! pre-populated vector collection for the closest passages, and asks a
//! chat model for an answer grounded in them. The response carries the
//! identifiers of the passages used, in retrieval order.

pub mod chat;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod errors;
pub mod index;
pub mod rag;

// Re-export commonly used types
pub use config::Config;
pub use errors::{RagError, Result};
pub use rag::{Answer, QueryPipeline};
