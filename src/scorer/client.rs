use crate::{
    chat::{ChatMessage, ChatProvider},
    error::RankError,
};

use super::judgment::{decode_judgment, Judgment};
use super::prompt::scoring_prompt;

/// Sentinel score assigned when a resume could not be evaluated.
pub(crate) const DEGRADED_SCORE: u8 = 0;

/// Diagnostic reasoning for failures reaching the scoring oracle.
pub(crate) const TRANSPORT_DIAGNOSTIC: &str =
    "Scoring service unavailable: the resume could not be evaluated.";

/// Diagnostic reasoning for oracle output that failed schema validation.
pub(crate) const SCHEMA_DIAGNOSTIC: &str =
    "Could not parse the scoring response into a relevance judgment.";

/// The result of one scoring call, either validated or degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Relevance score 1-10, or 0 when the call failed
    pub score: u8,
    /// Oracle reasoning, or a fixed diagnostic on failure
    pub reasoning: String,
}

/// Scores one resume against a job description through an oracle backend.
///
/// The backend is constructed and passed in explicitly, including its own
/// timeout and retry configuration; the scorer holds no global state.
pub struct Scorer {
    provider: Box<dyn ChatProvider>,
}

impl Scorer {
    pub fn new(provider: Box<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Evaluates a resume against the job description.
    ///
    /// Every failure mode (transport, retry exhaustion, malformed or
    /// schema-violating output) is converted into a degraded [`Evaluation`]
    /// with score 0 and a diagnostic reasoning string. This call never
    /// propagates an error, so one bad resume cannot abort a batch.
    pub async fn evaluate(&self, job_description: &str, resume: &str) -> Evaluation {
        match self.try_evaluate(job_description, resume).await {
            Ok(judgment) => Evaluation {
                score: judgment.relevance_score as u8,
                reasoning: judgment.reasoning,
            },
            Err(err) => degrade(err),
        }
    }

    async fn try_evaluate(
        &self,
        job_description: &str,
        resume: &str,
    ) -> Result<Judgment, RankError> {
        let prompt = scoring_prompt(job_description, resume);
        let messages = [ChatMessage::user().content(prompt).build()];

        let response = self.provider.chat(&messages).await?;
        let text = response
            .text()
            .ok_or_else(|| RankError::ResponseFormatError {
                message: "no text in oracle response".to_string(),
                raw_response: String::new(),
            })?;

        decode_judgment(&text)
    }
}

fn degrade(err: RankError) -> Evaluation {
    log::warn!("scoring call degraded: {err}");
    let reasoning = match err {
        RankError::ResponseFormatError { .. } | RankError::JsonError(_) => SCHEMA_DIAGNOSTIC,
        _ => TRANSPORT_DIAGNOSTIC,
    };
    Evaluation {
        score: DEGRADED_SCORE,
        reasoning: reasoning.to_string(),
    }
}
