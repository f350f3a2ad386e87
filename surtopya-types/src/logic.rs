use std::fmt;

use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// Destination value that terminates the survey instead of jumping to a question.
pub const END_SURVEY: &str = "end_survey";

/// Where a logic jump leads.
///
/// Serialized as a plain string: either [`END_SURVEY`] or the id of the
/// destination question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Destination {
    /// Submit the survey.
    EndSurvey,

    /// Continue at the page containing this question (or this section).
    Question(QuestionId),
}

impl Destination {
    /// Create a destination pointing at a question.
    pub fn question(id: impl Into<QuestionId>) -> Self {
        Self::Question(id.into())
    }

    /// Check if this destination ends the survey.
    pub fn is_end(&self) -> bool {
        matches!(self, Self::EndSurvey)
    }

    /// Get the destination question id, if any.
    pub fn question_id(&self) -> Option<&QuestionId> {
        match self {
            Self::EndSurvey => None,
            Self::Question(id) => Some(id),
        }
    }
}

impl From<String> for Destination {
    fn from(s: String) -> Self {
        if s == END_SURVEY {
            Self::EndSurvey
        } else {
            Self::Question(QuestionId::new(s))
        }
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Destination> for String {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::EndSurvey => END_SURVEY.to_string(),
            Destination::Question(id) => id.as_str().to_string(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndSurvey => f.write_str(END_SURVEY),
            Self::Question(id) => write!(f, "{id}"),
        }
    }
}

/// A conditional branch: when the owning question is answered with
/// `trigger_option`, navigation continues at `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicRule {
    /// The option that activates this rule.
    pub trigger_option: String,

    /// Where to go when the rule fires.
    #[serde(rename = "destinationQuestionId")]
    pub destination: Destination,
}

impl LogicRule {
    /// Create a new rule.
    pub fn new(trigger_option: impl Into<String>, destination: impl Into<Destination>) -> Self {
        Self {
            trigger_option: trigger_option.into(),
            destination: destination.into(),
        }
    }

    /// Create a rule that ends the survey.
    pub fn end_survey(trigger_option: impl Into<String>) -> Self {
        Self::new(trigger_option, Destination::EndSurvey)
    }

    /// Create a rule that jumps to the given question.
    pub fn jump_to(trigger_option: impl Into<String>, id: impl Into<QuestionId>) -> Self {
        Self::new(trigger_option, Destination::question(id))
    }
}
