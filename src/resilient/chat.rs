use async_trait::async_trait;

use crate::{
    chat::{ChatMessage, ChatProvider, ChatResponse},
    error::RankError,
};

use super::wrapper::ResilientOracle;

#[async_trait]
impl ChatProvider for ResilientOracle {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, RankError> {
        self.retry(|| self.inner.chat(messages)).await
    }
}
