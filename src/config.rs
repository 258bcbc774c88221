//! Startup configuration
//!
//! All settings are resolved from the environment exactly once at process
//! start. A missing required value fails startup; nothing is re-read per
//! request.

use crate::errors::{RagError, Result};
use serde::{Deserialize, Serialize};

/// Default vector collection to search
pub const DEFAULT_COLLECTION: &str = "LaBSE_embeddings_3";

/// Default chat model name
pub const DEFAULT_CHAT_MODEL: &str = "GigaChat";

/// Default embedding dimensionality (LaBSE)
pub const DEFAULT_EMBEDDING_DIM: u64 = 768;

/// Default retrieval width
pub const DEFAULT_SEARCH_LIMIT: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Embedding service base URL (http:// prepended to EMBEDDER_ADDRESS)
    pub embedder_url: String,
    /// Vector index base URL (http:// prepended to QDRANT_ADDRESS)
    pub index_url: String,
    /// Chat-completions service base URL
    pub chat_url: String,
    /// Bearer credential for the chat service
    pub chat_api_key: String,
    /// Chat model name sent with each request
    pub chat_model: String,
    /// Collection searched for every query
    pub collection: String,
    /// Expected vector width; checked against the collection at startup
    pub embedding_dim: u64,
    /// Skip TLS certificate verification on the chat client
    pub chat_insecure_tls: bool,
    /// Number of hits retrieved per query
    pub search_limit: usize,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an injected lookup
    pub fn resolve<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| RagError::Config(format!("missing required setting: {}", key)))
        };

        let embedding_dim = match get("EMBEDDING_DIM") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| RagError::Config(format!("invalid EMBEDDING_DIM: {}", raw)))?,
            None => DEFAULT_EMBEDDING_DIM,
        };

        let search_limit = match get("SEARCH_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| RagError::Config(format!("invalid SEARCH_LIMIT: {}", raw)))?,
            None => DEFAULT_SEARCH_LIMIT,
        };

        let chat_insecure_tls = match get("CHAT_INSECURE_TLS") {
            Some(raw) => raw
                .parse::<bool>()
                .map_err(|_| RagError::Config(format!("invalid CHAT_INSECURE_TLS: {}", raw)))?,
            None => false,
        };

        Ok(Config {
            embedder_url: format!("http://{}", required("EMBEDDER_ADDRESS")?),
            index_url: format!("http://{}", required("QDRANT_ADDRESS")?),
            chat_url: required("CHAT_ADDRESS")?,
            chat_api_key: required("CHAT_API_KEY")?,
            chat_model: get("CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            collection: get("COLLECTION_NAME").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            embedding_dim,
            chat_insecure_tls,
            search_limit,
        })
    }
}
