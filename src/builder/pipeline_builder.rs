use std::time::Duration;

use secrecy::SecretString;

use super::state::BuilderState;

/// Builder for configuring and instantiating a ranking [`Pipeline`].
///
/// [`Pipeline`]: crate::pipeline::Pipeline
pub struct PipelineBuilder {
    pub(super) state: BuilderState,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            state: BuilderState::new(),
        }
    }
}

impl PipelineBuilder {
    /// Creates a new empty builder instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key for authenticating with the scoring oracle.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.state.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Sets the base URL for oracle API requests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.state.base_url = Some(url.into());
        self
    }

    /// Sets the model identifier to use.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.state.model = Some(model.into());
        self
    }

    /// Sets the maximum number of tokens the oracle may generate.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.state.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the temperature for controlling response randomness (0.0-1.0).
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.state.temperature = Some(temperature);
        self
    }

    /// Sets the system prompt/context.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.state.system = Some(system.into());
        self
    }

    /// Sets the per-request timeout in seconds.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.state.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Sets how many times a failed scoring request is retried.
    pub fn retries(mut self, retries: usize) -> Self {
        self.state.retries = Some(retries);
        self
    }

    /// Sets base and max backoff delays in milliseconds.
    pub fn backoff(mut self, base_delay_ms: u64, max_delay_ms: u64) -> Self {
        self.state.backoff_base_delay_ms = Some(base_delay_ms);
        self.state.backoff_max_delay_ms = Some(max_delay_ms);
        self
    }

    /// Sets jitter toggle for backoff.
    pub fn jitter(mut self, jitter: bool) -> Self {
        self.state.jitter = Some(jitter);
        self
    }

    /// Caps how many scoring calls run concurrently during dispatch.
    pub fn max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.state.max_in_flight = Some(max_in_flight);
        self
    }

    /// Sets a deadline for a whole ranking batch.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.state.deadline = Some(deadline);
        self
    }
}
