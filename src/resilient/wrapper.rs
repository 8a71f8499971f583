use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::{chat::ChatProvider, error::RankError};

use super::config::ResilienceConfig;

/// Resilient wrapper that retries transient oracle failures using
/// exponential backoff.
pub struct ResilientOracle {
    pub(super) inner: Box<dyn ChatProvider>,
    pub(super) cfg: ResilienceConfig,
}

impl ResilientOracle {
    /// Creates a new resilient wrapper around an existing oracle backend.
    pub fn new(inner: Box<dyn ChatProvider>, cfg: ResilienceConfig) -> Self {
        Self { inner, cfg }
    }

    pub(super) async fn retry<F, Fut, T>(&self, mut op: F) -> Result<T, RankError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, RankError>>,
    {
        let max_attempts = self.cfg.max_attempts.max(1);
        let mut attempt = 0usize;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if !Self::is_retryable(&err) {
                        return Err(err);
                    }
                    if attempt >= max_attempts {
                        return Err(RankError::RetryExceeded {
                            attempts: attempt,
                            last_error: err.to_string(),
                        });
                    }
                    self.backoff_sleep(attempt - 1).await;
                }
            }
        }
    }

    fn is_retryable(err: &RankError) -> bool {
        match err {
            RankError::HttpError(_) => true,
            RankError::OracleError(_) => true,
            RankError::ResponseFormatError { .. } => true,
            RankError::JsonError(_) => true,
            RankError::Generic(_) => true,
            RankError::RetryExceeded { .. } => false,
            RankError::AuthError(_) => false,
            RankError::InvalidInput(_) => false,
            RankError::Cancelled { .. } => false,
        }
    }

    async fn backoff_sleep(&self, attempt_index: usize) {
        let mut delay = self
            .cfg
            .base_delay_ms
            .saturating_mul(1u64 << attempt_index.min(16));
        delay = delay.min(self.cfg.max_delay_ms);
        if self.cfg.jitter {
            let span = (delay / 2).max(1);
            let jitter = ((attempt_index as u64)
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1))
                % span;
            delay = delay.saturating_sub(jitter);
        }
        sleep(Duration::from_millis(delay)).await;
    }
}
