use crate::QuestionId;

/// Error type for survey runs and survey hand-off.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// Respondent abandoned the survey.
    #[error("Survey cancelled by respondent")]
    Cancelled,

    /// A required question was left unanswered.
    #[error("Required question '{0}' was not answered")]
    MissingAnswer(QuestionId),

    /// A survey document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific failure (I/O, storage, UI framework crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents respondent cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
