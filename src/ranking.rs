use std::cmp::Reverse;

use crate::dispatch::RankedResume;

/// Sorts scored resumes by relevance, best first.
///
/// The sort is stable, so resumes with equal scores keep the order they were
/// submitted in. Degraded entries (score 0) end up at the bottom instead of
/// disappearing from the list. Pure function: same input, same output.
pub fn rank(mut outcomes: Vec<RankedResume>) -> Vec<RankedResume> {
    outcomes.sort_by_key(|outcome| Reverse(outcome.score));
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(filename: &str, score: u8) -> RankedResume {
        RankedResume {
            filename: filename.to_string(),
            score,
            reasoning: "r".to_string(),
        }
    }

    #[test]
    fn orders_by_score_descending() {
        let ranked = rank(vec![
            outcome("low.pdf", 2),
            outcome("high.pdf", 9),
            outcome("mid.pdf", 5),
        ]);
        let names: Vec<&str> = ranked.iter().map(|o| o.filename.as_str()).collect();
        assert_eq!(names, ["high.pdf", "mid.pdf", "low.pdf"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(vec![
            outcome("first.pdf", 7),
            outcome("second.pdf", 7),
            outcome("third.pdf", 7),
        ]);
        let names: Vec<&str> = ranked.iter().map(|o| o.filename.as_str()).collect();
        assert_eq!(names, ["first.pdf", "second.pdf", "third.pdf"]);
    }

    #[test]
    fn degraded_entries_sink_to_the_bottom_in_input_order() {
        let ranked = rank(vec![
            outcome("failed-a.pdf", 0),
            outcome("scored.pdf", 4),
            outcome("failed-b.pdf", 0),
        ]);
        let names: Vec<&str> = ranked.iter().map(|o| o.filename.as_str()).collect();
        assert_eq!(names, ["scored.pdf", "failed-a.pdf", "failed-b.pdf"]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
