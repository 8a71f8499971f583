use serde::Serialize;

/// One scored resume, ready for ranking and for serialization to the
/// response layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedResume {
    /// Identifier of the resume, the uploaded filename in practice.
    pub filename: String,
    /// Relevance score 1-10, or 0 when the scoring call was degraded.
    pub score: u8,
    /// Oracle reasoning, or a diagnostic string on degraded calls.
    pub reasoning: String,
}

/// Tuning knobs for one dispatch round.
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Maximum number of scoring calls in flight at once. `None` runs the
    /// whole batch concurrently; callers with oracle-side rate limits set a
    /// cap and excess calls queue in input order.
    pub max_in_flight: Option<usize>,
}
