use std::time::Duration;

use secrecy::SecretString;

#[derive(Default)]
pub(crate) struct BuilderState {
    pub(crate) api_key: Option<SecretString>,
    pub(crate) base_url: Option<String>,
    pub(crate) model: Option<String>,
    pub(crate) max_tokens: Option<u32>,
    pub(crate) temperature: Option<f32>,
    pub(crate) system: Option<String>,
    pub(crate) timeout_seconds: Option<u64>,
    pub(crate) retries: Option<usize>,
    pub(crate) backoff_base_delay_ms: Option<u64>,
    pub(crate) backoff_max_delay_ms: Option<u64>,
    pub(crate) jitter: Option<bool>,
    pub(crate) max_in_flight: Option<usize>,
    pub(crate) deadline: Option<Duration>,
}

impl BuilderState {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}
