use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::pipeline::Resume;
use crate::scorer::Scorer;

use super::types::{DispatchOptions, RankedResume};

/// Issues one scoring call per resume, all concurrently, and joins the
/// results.
///
/// Every call resolves to a [`RankedResume`]: scoring failures were already
/// converted to degraded evaluations by the scorer, so the returned vector
/// always has one element per input resume, in input order. Dropping the
/// returned future (e.g. on a caller-level deadline) cancels all in-flight
/// calls.
pub async fn dispatch(
    scorer: &Scorer,
    job_description: &str,
    resumes: &[Resume],
    options: &DispatchOptions,
) -> Vec<RankedResume> {
    let limiter = options
        .max_in_flight
        .map(|cap| Arc::new(Semaphore::new(cap)));

    let calls = resumes.iter().map(|resume| {
        let limiter = limiter.clone();
        async move {
            // The semaphore is never closed, so acquire cannot fail.
            let _permit = match &limiter {
                Some(semaphore) => semaphore.acquire().await.ok(),
                None => None,
            };
            let evaluation = scorer.evaluate(job_description, &resume.text).await;
            RankedResume {
                filename: resume.filename.clone(),
                score: evaluation.score,
                reasoning: evaluation.reasoning,
            }
        }
    });

    join_all(calls).await
}
