/// Output-schema instructions appended to every scoring prompt.
const FORMAT_INSTRUCTIONS: &str = "Respond only with a JSON object containing exactly two fields: \
\"relevance_score\", an integer from 1 to 10, and \"reasoning\", a brief explanation for the \
score. Do not include any other text.";

/// Builds the evaluation prompt embedding the job description, the resume,
/// and the expected output schema.
pub(super) fn scoring_prompt(job_description: &str, resume: &str) -> String {
    format!(
        "You are an experienced recruiter evaluating resumes against a job description. \
Please read the following job description and resume and provide a relevance score on a scale \
of 1 to 10 (1 being least relevant, 10 being most relevant) and a brief explanation for your \
score.\n\nJob Description:\n{job_description}\n\nResume:\n{resume}\n\n{FORMAT_INSTRUCTIONS}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_both_documents_and_schema() {
        let prompt = scoring_prompt("Senior backend engineer", "5 years Go microservices");
        assert!(prompt.contains("Senior backend engineer"));
        assert!(prompt.contains("5 years Go microservices"));
        assert!(prompt.contains("relevance_score"));
        assert!(prompt.contains("reasoning"));
    }
}
