use std::time::Duration;

use tokio::time::timeout;

use crate::{
    dispatch::{dispatch, DispatchOptions, RankedResume},
    error::RankError,
    ranking::rank,
    scorer::Scorer,
};

use super::request::RankRequest;

/// Tuning knobs for a [`Pipeline`].
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Maximum number of scoring calls in flight at once.
    pub max_in_flight: Option<usize>,
    /// Deadline for the whole batch. On expiry every in-flight call is
    /// cancelled and the run fails with [`RankError::Cancelled`]; completed
    /// outcomes are discarded rather than returned as a partial ranking.
    pub deadline: Option<Duration>,
}

/// Scores a batch of resumes against a job description and ranks the
/// results.
///
/// Two stages run exactly once per call, in order: dispatch all scoring
/// calls and join them, then sort the outcomes. Per-resume failures were
/// absorbed by the scorer and show up as score-0 entries; only input
/// validation and a batch deadline expiry fail the run as a whole.
pub struct Pipeline {
    scorer: Scorer,
    options: PipelineOptions,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    pub fn new(scorer: Scorer) -> Self {
        Self::with_options(scorer, PipelineOptions::default())
    }

    pub fn with_options(scorer: Scorer, options: PipelineOptions) -> Self {
        Self { scorer, options }
    }

    /// Runs the scoring and ranking stages for one request.
    pub async fn run(&self, request: &RankRequest) -> Result<Vec<RankedResume>, RankError> {
        request.validate()?;

        log::debug!(
            "dispatching {} scoring calls (max_in_flight={:?}, deadline={:?})",
            request.resumes.len(),
            self.options.max_in_flight,
            self.options.deadline,
        );

        let dispatch_options = DispatchOptions {
            max_in_flight: self.options.max_in_flight,
        };
        let scoring = dispatch(
            &self.scorer,
            &request.job_description,
            &request.resumes,
            &dispatch_options,
        );

        let outcomes = match self.options.deadline {
            Some(deadline) => timeout(deadline, scoring).await.map_err(|_| {
                RankError::Cancelled {
                    deadline_ms: deadline.as_millis() as u64,
                }
            })?,
            None => scoring.await,
        };

        Ok(rank(outcomes))
    }
}
