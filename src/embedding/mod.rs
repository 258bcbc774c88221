//! Embedding service client

pub mod client;

pub use client::{Embedder, HttpEmbedder};
