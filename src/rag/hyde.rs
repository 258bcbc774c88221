//! HyDE query expansion
//!
//! Asks the chat model for a hypothetical answer document and tags the
//! result with an explicit accept/reject flag. The only rejecting signal
//! is the content-policy blacklist; every other finish reason, including
//! ones this client has never seen, is accepted.

use crate::chat::{ChatModel, FinishReason};
use crate::errors::Result;
use std::sync::Arc;

/// Expansion outcome with an explicit acceptance flag
#[derive(Debug, Clone)]
pub struct Expansion {
    pub text: String,
    pub accepted: bool,
}

/// Hypothetical-document expander driving the chat model
pub struct HydeExpander {
    chat: Arc<dyn ChatModel>,
    system_prompt: String,
}

impl HydeExpander {
    pub fn new(chat: Arc<dyn ChatModel>, system_prompt: impl Into<String>) -> Self {
        Self {
            chat,
            system_prompt: system_prompt.into(),
        }
    }

    /// Generate a hypothetical answer for `query_text`
    ///
    /// Transport errors surface as `Err`; the caller decides the fallback.
    pub async fn expand(&self, query_text: &str) -> Result<Expansion> {
        let generation = self.chat.generate(&self.system_prompt, query_text).await?;

        let accepted = generation.finish_reason != FinishReason::Blacklist;

        Ok(Expansion {
            text: generation.content,
            accepted,
        })
    }
}
