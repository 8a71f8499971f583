use serde::Deserialize;

use crate::error::RankError;

/// A validated relevance judgment decoded from the oracle's response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Judgment {
    /// Relevance score on a scale of 1 to 10
    pub relevance_score: i64,
    /// Reasoning for the assigned relevance score
    pub reasoning: String,
}

/// Decodes raw oracle output into a [`Judgment`], validating the schema.
///
/// Models frequently wrap the JSON object in a markdown fence or surround it
/// with prose, so decoding starts from the outermost object found in the text.
pub(super) fn decode_judgment(raw: &str) -> Result<Judgment, RankError> {
    let object = extract_object(raw).ok_or_else(|| RankError::ResponseFormatError {
        message: "no JSON object in oracle response".to_string(),
        raw_response: raw.to_string(),
    })?;

    let judgment: Judgment =
        serde_json::from_str(object).map_err(|err| RankError::ResponseFormatError {
            message: err.to_string(),
            raw_response: raw.to_string(),
        })?;

    if !(1..=10).contains(&judgment.relevance_score) {
        return Err(RankError::ResponseFormatError {
            message: format!(
                "relevance_score {} outside the 1-10 scale",
                judgment.relevance_score
            ),
            raw_response: raw.to_string(),
        });
    }
    if judgment.reasoning.trim().is_empty() {
        return Err(RankError::ResponseFormatError {
            message: "empty reasoning".to_string(),
            raw_response: raw.to_string(),
        });
    }

    Ok(judgment)
}

/// Returns the outermost `{..}` slice of `raw`, if any.
fn extract_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
