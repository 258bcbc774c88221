//! Remote embedding client
//!
//! POSTs `{"query": <text>}` to the embedder and decodes a raw JSON array
//! of floats. One call per embedding: no retry, no batching. The vector
//! width is fixed by the remote model; the startup readiness check in the
//! index client verifies it against the collection.

use crate::errors::{RagError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Request timeout for one embedding call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Port for text embedding, injectable for tests
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Embedder backed by a remote HTTP service
#[derive(Debug, Clone)]
pub struct HttpEmbedder {
    client: Client,
    url: String,
}

impl HttpEmbedder {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RagError::Embedding(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Embedder endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbedRequest { query: text };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Embedding(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RagError::Embedding(format!("HTTP {}: {}", status, body)));
        }

        // The embedder answers with a bare JSON array of floats
        let embedding: Vec<f32> = response
            .json()
            .await
            .map_err(|e| RagError::Embedding(format!("invalid response body: {}", e)))?;

        if embedding.is_empty() {
            return Err(RagError::Embedding("empty embedding returned".to_string()));
        }

        Ok(embedding)
    }
}

/// Embedder request body
#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    query: &'a str,
}
