//! Chat-completion types and client
//!
//! Wraps a stateless chat service: every call sends exactly one system turn
//! and one user turn, and nothing is retained between calls.

pub mod client;

pub use client::{ChatModel, HttpChatClient};

use serde::{Deserialize, Serialize};

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Normal completion
    Stop,
    /// Output hit the length limit
    Length,
    /// Rejected by the service's content policy
    Blacklist,
    /// Any signal this client does not know about
    Other(String),
}

impl FinishReason {
    /// Map the wire string onto a known reason
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "stop" => FinishReason::Stop,
            "length" => FinishReason::Length,
            "blacklist" => FinishReason::Blacklist,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// One completed generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub content: String,
    pub finish_reason: FinishReason,
}

/// A single role-tagged message on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
