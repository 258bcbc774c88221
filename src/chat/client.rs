//! HTTP chat-completions client
//!
//! Speaks the chat-completions wire shape: POST {base}/chat/completions with
//! an ordered message list, bearer credential in the Authorization header.

use crate::chat::{ChatMessage, FinishReason, Generation};
use crate::errors::{RagError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout for one generation call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Port for answer generation, injectable for tests
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// One system turn plus one user turn; no history between calls
    async fn generate(&self, system: &str, user: &str) -> Result<Generation>;
}

/// Chat client backed by a remote chat-completions service
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl HttpChatClient {
    /// Create a chat client
    ///
    /// `insecure_tls` disables certificate verification; a deployment
    /// choice for services behind self-signed certificates.
    pub fn new(base_url: &str, api_key: &str, model: &str, insecure_tls: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(insecure_tls)
            .build()
            .map_err(|e| RagError::Generation(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    /// Current model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Base URL of the chat service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChatModel for HttpChatClient {
    async fn generate(&self, system: &str, user: &str) -> Result<Generation> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| RagError::Generation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RagError::Generation(format!("HTTP {}: {}", status, body)));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| RagError::Generation(format!("invalid response body: {}", e)))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RagError::Generation("response contained no choices".to_string()))?;

        Ok(Generation {
            content: choice.message.content,
            finish_reason: FinishReason::from_wire(&choice.finish_reason),
        })
    }
}

/// Chat-completions request body
#[derive(Debug, Clone, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// Chat-completions response body
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
    finish_reason: String,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpChatClient::new("https://chat.example/api/v1/", "key", "GigaChat", false);
        assert!(client.is_ok());

        let client = client.unwrap();
        assert_eq!(client.model(), "GigaChat");
        // Trailing slash is stripped so the path joins cleanly
        assert_eq!(client.base_url(), "https://chat.example/api/v1");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "choices": [
                {"message": {"content": "Paris."}, "finish_reason": "stop"}
            ]
        }"#;
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].message.content, "Paris.");
        assert_eq!(
            FinishReason::from_wire(&parsed.choices[0].finish_reason),
            FinishReason::Stop
        );
    }

    #[tokio::test]
    #[ignore] // Integration test - requires a live chat service
    async fn test_generate_live() {
        let client =
            HttpChatClient::new("https://chat.example/api/v1", "key", "GigaChat", false).unwrap();
        let result = client.generate("You are helpful.", "Say hi.").await;
        assert!(result.is_ok());
    }
}
