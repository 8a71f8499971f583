use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    chat::{ChatMessage, ChatProvider, ChatResponse},
    error::RankError,
};

use super::{ResilienceConfig, ResilientOracle};

#[derive(Debug)]
struct TextResponse(String);

impl std::fmt::Display for TextResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ChatResponse for TextResponse {
    fn text(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Fails a scripted number of times before answering.
struct FlakyProvider {
    calls: Arc<AtomicUsize>,
    failures: usize,
    error: fn() -> RankError,
}

#[async_trait]
impl ChatProvider for FlakyProvider {
    async fn chat(&self, _messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, RankError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err((self.error)());
        }
        Ok(Box::new(TextResponse("recovered".to_string())))
    }
}

fn fast_config(max_attempts: usize) -> ResilienceConfig {
    ResilienceConfig {
        max_attempts,
        base_delay_ms: 1,
        max_delay_ms: 2,
        jitter: false,
    }
}

fn transport_error() -> RankError {
    RankError::HttpError("connection reset".to_string())
}

fn auth_error() -> RankError {
    RankError::AuthError("bad key".to_string())
}

#[tokio::test]
async fn transient_failure_is_retried_until_success() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = FlakyProvider {
        calls: calls.clone(),
        failures: 2,
        error: transport_error,
    };
    let oracle = ResilientOracle::new(Box::new(provider), fast_config(3));

    let messages = [ChatMessage::user().content("score").build()];
    let response = oracle.chat(&messages).await.unwrap();

    assert_eq!(response.text().as_deref(), Some("recovered"));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn exhausted_retries_report_attempt_count() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = FlakyProvider {
        calls: calls.clone(),
        failures: usize::MAX,
        error: transport_error,
    };
    let oracle = ResilientOracle::new(Box::new(provider), fast_config(3));

    let messages = [ChatMessage::user().content("score").build()];
    let err = oracle.chat(&messages).await.unwrap_err();

    match err {
        RankError::RetryExceeded {
            attempts,
            last_error,
        } => {
            assert_eq!(attempts, 3);
            assert!(last_error.contains("connection reset"));
        }
        other => panic!("expected RetryExceeded, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn non_retryable_errors_short_circuit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = FlakyProvider {
        calls: calls.clone(),
        failures: usize::MAX,
        error: auth_error,
    };
    let oracle = ResilientOracle::new(Box::new(provider), fast_config(3));

    let messages = [ChatMessage::user().content("score").build()];
    let err = oracle.chat(&messages).await.unwrap_err();

    assert!(matches!(err, RankError::AuthError(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
