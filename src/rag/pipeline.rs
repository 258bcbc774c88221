//! End-to-end query pipeline
//!
//! Strictly sequential per query: optional HyDE expansion, embed, search,
//! assemble context, generate. The HyDE stage is the only one allowed to
//! fail without failing the request; the mandatory stages are all-or-nothing.

use crate::chat::ChatModel;
use crate::embedding::Embedder;
use crate::errors::{RagError, Result};
use crate::index::VectorSearcher;
use crate::rag::context;
use crate::rag::hyde::HydeExpander;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Deployment-fixed persona for both expansion and answering
pub const SYSTEM_PROMPT: &str = "You answer questions thoroughly and professionally, \
using both your own knowledge and the context provided in the messages.";

/// Final response: the grounded answer plus the passages it drew on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub document_ids: Vec<String>,
}

/// Query pipeline with injected clients
///
/// Clients are constructed once at startup and shared across concurrent
/// queries; the pipeline itself holds no mutable state.
pub struct QueryPipeline {
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn VectorSearcher>,
    chat: Arc<dyn ChatModel>,
    hyde: HydeExpander,
    limit: usize,
}

impl QueryPipeline {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        index: Arc<dyn VectorSearcher>,
        chat: Arc<dyn ChatModel>,
        limit: usize,
    ) -> Self {
        let hyde = HydeExpander::new(chat.clone(), SYSTEM_PROMPT);

        Self {
            embedder,
            index,
            chat,
            hyde,
            limit,
        }
    }

    /// Answer a query, optionally routing it through HyDE expansion first
    pub async fn answer(&self, query: &str, use_hyde: bool) -> Result<Answer> {
        if query.trim().is_empty() {
            return Err(RagError::EmptyQuery);
        }

        let embedding_key = if use_hyde {
            self.expansion_key(query).await
        } else {
            query.to_string()
        };

        let embedding = self.embedder.embed(&embedding_key).await?;
        let hits = self.index.search(&embedding, self.limit).await?;

        debug!(hits = hits.len(), "retrieved passages");
        let assembled = context::assemble(&hits);

        let user_message = format!(
            "{}\n\nUsing the information above, answer the question:\n{}",
            assembled.text, query
        );

        let generation = self.chat.generate(SYSTEM_PROMPT, &user_message).await?;

        Ok(Answer {
            answer: generation.content,
            document_ids: assembled.document_ids,
        })
    }

    /// HyDE stage: rejected or failed expansions degrade to the raw query
    async fn expansion_key(&self, query: &str) -> String {
        match self.hyde.expand(query).await {
            Ok(expansion) if expansion.accepted => {
                debug!("using HyDE expansion as embedding key");
                expansion.text
            }
            Ok(_) => {
                debug!("HyDE expansion rejected by content policy, using raw query");
                query.to_string()
            }
            Err(e) => {
                warn!(error = %e, "HyDE expansion failed, using raw query");
                query.to_string()
            }
        }
    }
}
