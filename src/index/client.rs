//! Qdrant-backed nearest-neighbor search
//!
//! The collection is pre-populated and must be ready before the first
//! query; `ready()` is the one-time startup action that also verifies the
//! collection's vector width against the embedder's dimensionality. Hits
//! come back in the index's own relevance order and are never re-scored.

use crate::errors::{RagError, Result};
use async_trait::async_trait;
use qdrant_client::{
    client::QdrantClient,
    qdrant::{
        value::Kind, vectors_config::Config as VectorsKind,
        with_payload_selector::SelectorOptions, PointId, SearchPoints, WithPayloadSelector,
    },
};
use serde::{Deserialize, Serialize};

/// Payload field holding the passage text
const TEXT_FIELD: &str = "text";

/// One retrieved passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub text: String,
}

/// Port for nearest-neighbor search, injectable for tests
#[async_trait]
pub trait VectorSearcher: Send + Sync {
    /// Top `limit` hits in descending relevance order
    async fn search(&self, embedding: &[f32], limit: usize) -> Result<Vec<SearchHit>>;
}

/// Vector searcher backed by a Qdrant collection
pub struct QdrantSearcher {
    client: QdrantClient,
    collection: String,
    expected_dim: u64,
}

impl QdrantSearcher {
    pub fn new(url: &str, collection: &str, expected_dim: u64) -> Result<Self> {
        let client = QdrantClient::from_url(url)
            .build()
            .map_err(|e| RagError::Search(format!("failed to create index client: {}", e)))?;

        Ok(Self {
            client,
            collection: collection.to_string(),
            expected_dim,
        })
    }

    /// One-time startup check: collection exists and its configured vector
    /// width matches the embedder's dimensionality
    pub async fn ready(&self) -> Result<()> {
        let info = self
            .client
            .collection_info(&self.collection)
            .await
            .map_err(|e| {
                RagError::Search(format!("collection {} not ready: {}", self.collection, e))
            })?;

        let configured = info
            .result
            .and_then(|r| r.config)
            .and_then(|c| c.params)
            .and_then(|p| p.vectors_config)
            .and_then(|v| v.config)
            .and_then(|kind| match kind {
                VectorsKind::Params(params) => Some(params.size),
                VectorsKind::ParamsMap(_) => None,
            })
            .ok_or_else(|| {
                RagError::Search(format!(
                    "cannot determine vector width of collection {}",
                    self.collection
                ))
            })?;

        if configured != self.expected_dim {
            return Err(RagError::Search(format!(
                "collection {} has vector width {} but embedder produces {}",
                self.collection, configured, self.expected_dim
            )));
        }

        Ok(())
    }

    /// Collection this searcher queries
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

#[async_trait]
impl VectorSearcher for QdrantSearcher {
    async fn search(&self, embedding: &[f32], limit: usize) -> Result<Vec<SearchHit>> {
        let response = self
            .client
            .search_points(&SearchPoints {
                collection_name: self.collection.clone(),
                vector: embedding.to_vec(),
                limit: limit as u64,
                with_payload: Some(WithPayloadSelector {
                    selector_options: Some(SelectorOptions::Enable(true)),
                }),
                ..Default::default()
            })
            .await
            .map_err(|e| RagError::Search(e.to_string()))?;

        // Qdrant returns points already ranked by similarity; keep that order
        let hits = response
            .result
            .into_iter()
            .map(|point| {
                let text = point
                    .payload
                    .get(TEXT_FIELD)
                    .and_then(payload_string)
                    .unwrap_or_default();

                SearchHit {
                    id: point_id_to_string(&point.id),
                    text,
                }
            })
            .collect();

        Ok(hits)
    }
}

fn payload_string(value: &qdrant_client::qdrant::Value) -> Option<String> {
    value.kind.as_ref().and_then(|kind| match kind {
        Kind::StringValue(s) => Some(s.clone()),
        _ => None,
    })
}

fn point_id_to_string(point_id: &Option<PointId>) -> String {
    use qdrant_client::qdrant::point_id::PointIdOptions;

    point_id
        .as_ref()
        .and_then(|id| id.point_id_options.as_ref())
        .map(|options| match options {
            PointIdOptions::Num(n) => n.to_string(),
            PointIdOptions::Uuid(u) => u.clone(),
        })
        .unwrap_or_else(|| "unknown".to_string())
}
