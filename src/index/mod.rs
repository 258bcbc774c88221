//! Vector index client

pub mod client;

pub use client::{QdrantSearcher, SearchHit, VectorSearcher};
