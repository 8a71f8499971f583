use secrecy::ExposeSecret;

use crate::{
    backends::groq::Groq,
    chat::ChatProvider,
    error::RankError,
    pipeline::{Pipeline, PipelineOptions},
    resilient::{ResilienceConfig, ResilientOracle},
    scorer::Scorer,
};

use super::pipeline_builder::PipelineBuilder;
use super::state::BuilderState;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

impl PipelineBuilder {
    /// Assembles the oracle backend, resilience wrapper, scorer, and
    /// pipeline.
    pub fn build(self) -> Result<Pipeline, RankError> {
        self.state.build()
    }
}

impl BuilderState {
    fn build(mut self) -> Result<Pipeline, RankError> {
        log_builder_state(&self);

        if self.max_in_flight == Some(0) {
            return Err(RankError::InvalidInput(
                "max_in_flight must be greater than 0".to_string(),
            ));
        }

        let api_key = require_api_key(&mut self)?;
        let backend = Groq::new(
            api_key,
            self.base_url.take(),
            self.model.take(),
            self.max_tokens,
            self.temperature,
            Some(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)),
            self.system.take(),
        );
        let provider = wrap_with_resilience(&self, Box::new(backend));

        Ok(Pipeline::with_options(
            Scorer::new(provider),
            PipelineOptions {
                max_in_flight: self.max_in_flight,
                deadline: self.deadline,
            },
        ))
    }
}

fn log_builder_state(state: &BuilderState) {
    log::debug!(
        "Building ranking pipeline. model={:?} temp={:?} retries={:?} max_in_flight={:?} deadline={:?}",
        state.model,
        state.temperature,
        state.retries,
        state.max_in_flight,
        state.deadline,
    );
}

fn require_api_key(state: &mut BuilderState) -> Result<String, RankError> {
    let Some(key) = state.api_key.take() else {
        return Err(RankError::InvalidInput(
            "No API key provided for the scoring oracle".to_string(),
        ));
    };
    Ok(key.expose_secret().to_string())
}

fn wrap_with_resilience(
    state: &BuilderState,
    provider: Box<dyn ChatProvider>,
) -> Box<dyn ChatProvider> {
    let mut cfg = ResilienceConfig::defaults();
    if let Some(retries) = state.retries {
        cfg.max_attempts = retries + 1;
    }
    if let Some(base) = state.backoff_base_delay_ms {
        cfg.base_delay_ms = base;
    }
    if let Some(maxd) = state.backoff_max_delay_ms {
        cfg.max_delay_ms = maxd;
    }
    if let Some(jitter) = state.jitter {
        cfg.jitter = jitter;
    }
    Box::new(ResilientOracle::new(provider, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_rejected() {
        let err = PipelineBuilder::new().build().unwrap_err();
        assert!(matches!(err, RankError::InvalidInput(_)));
    }

    #[test]
    fn zero_in_flight_cap_is_rejected() {
        let err = PipelineBuilder::new()
            .api_key("key")
            .max_in_flight(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, RankError::InvalidInput(_)));
    }

    #[test]
    fn full_configuration_builds() {
        let pipeline = PipelineBuilder::new()
            .api_key("key")
            .model("llama-3.3-70b-versatile")
            .temperature(0.5)
            .timeout_seconds(20)
            .retries(2)
            .backoff(100, 1_000)
            .jitter(false)
            .max_in_flight(8)
            .deadline(std::time::Duration::from_secs(60))
            .build();
        assert!(pipeline.is_ok());
    }
}
