use async_trait::async_trait;

use crate::error::RankError;

use super::message::ChatMessage;

/// A single response from the scoring oracle.
pub trait ChatResponse: std::fmt::Debug + std::fmt::Display + Send + Sync {
    fn text(&self) -> Option<String>;
}

/// Trait for oracle backends that support chat-style interactions.
#[async_trait]
pub trait ChatProvider: Sync + Send {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, RankError>;
}
