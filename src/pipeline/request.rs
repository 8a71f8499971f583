use std::collections::HashSet;

use crate::error::RankError;

/// One candidate resume, already extracted to plain text by the upload
/// layer.
#[derive(Debug, Clone)]
pub struct Resume {
    /// Identifier of the resume, the uploaded filename in practice.
    pub filename: String,
    /// Extracted text content.
    pub text: String,
}

impl Resume {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }
}

/// Input for one ranking run. Resume order is the submission order and
/// decides ties in the final ranking.
#[derive(Debug, Clone)]
pub struct RankRequest {
    /// The job description all resumes are scored against.
    pub job_description: String,
    /// The resumes to score, in submission order.
    pub resumes: Vec<Resume>,
}

impl RankRequest {
    pub fn new(job_description: impl Into<String>, resumes: Vec<Resume>) -> Self {
        Self {
            job_description: job_description.into(),
            resumes,
        }
    }

    /// Checks the request before any oracle call is made.
    pub(crate) fn validate(&self) -> Result<(), RankError> {
        if self.resumes.is_empty() {
            return Err(RankError::InvalidInput("no resumes to rank".to_string()));
        }
        let mut seen = HashSet::new();
        for resume in &self.resumes {
            if !seen.insert(resume.filename.as_str()) {
                return Err(RankError::InvalidInput(format!(
                    "duplicate resume filename: {}",
                    resume.filename
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_distinct_filenames() {
        let request = RankRequest::new(
            "job",
            vec![Resume::new("a.pdf", "x"), Resume::new("b.pdf", "y")],
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn rejects_empty_batch() {
        let request = RankRequest::new("job", Vec::new());
        assert!(matches!(
            request.validate(),
            Err(RankError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_duplicate_filenames() {
        let request = RankRequest::new(
            "job",
            vec![Resume::new("a.pdf", "x"), Resume::new("a.pdf", "y")],
        );
        assert!(matches!(
            request.validate(),
            Err(RankError::InvalidInput(_))
        ));
    }
}
