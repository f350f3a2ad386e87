use serde::{Deserialize, Serialize};

/// A single answer given by a respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerValue {
    /// Free text (from text, short and long questions).
    Text(String),

    /// The chosen option (from single and select questions).
    Choice(String),

    /// The chosen options (from multi questions).
    Choices(Vec<String>),

    /// Number of stars (from rating questions).
    Rating(u8),

    /// An ISO 8601 date (from date questions).
    Date(String),
}

impl AnswerValue {
    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a single choice.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a list of choices.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(list) => Some(list),
            _ => None,
        }
    }

    /// Try to get this value as a rating.
    pub fn as_rating(&self) -> Option<u8> {
        match self {
            Self::Rating(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<&str> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Check if the respondent actually provided something.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) | Self::Choice(s) | Self::Date(s) => s.trim().is_empty(),
            Self::Choices(list) => list.is_empty(),
            Self::Rating(r) => *r == 0,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Choices(_) => "Choices",
            Self::Rating(_) => "Rating",
            Self::Date(_) => "Date",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<u8> for AnswerValue {
    fn from(r: u8) -> Self {
        Self::Rating(r)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(choices: Vec<String>) -> Self {
        Self::Choices(choices)
    }
}
