//! Retrieval-augmented query pipeline
//!
//! The orchestration core: optional HyDE expansion, embedding, vector
//! search, context assembly, and grounded answer generation.

pub mod context;
pub mod hyde;
pub mod pipeline;

pub use context::{assemble, AssembledContext};
pub use hyde::{Expansion, HydeExpander};
pub use pipeline::{Answer, QueryPipeline, SYSTEM_PROMPT};
