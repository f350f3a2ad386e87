use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerValue, QuestionId};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected from a respondent, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<QuestionId, AnswerValue>,
}

impl Answers {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record an answer, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer to a question.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Check if a question has a non-blank answer.
    pub fn has_value(&self, id: &QuestionId) -> bool {
        self.get(id).is_some_and(|value| !value.is_blank())
    }

    /// Remove an answer.
    pub fn remove(&mut self, id: &QuestionId) -> Option<AnswerValue> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another answer set into this one.
    pub fn extend(&mut self, other: Answers) {
        self.values.extend(other.values);
    }

    /// The option a choice question was answered with, if any.
    ///
    /// Logic rules are matched against this value.
    pub fn chosen_option(&self, id: &QuestionId) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_choice)
    }

    // === Convenience accessors ===

    /// Get a text answer.
    pub fn get_text(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Text(s)) => Ok(s),
            Some(other) => Err(mismatch(id, "Text", other)),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a single-choice answer.
    pub fn get_choice(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Choice(s)) => Ok(s),
            Some(other) => Err(mismatch(id, "Choice", other)),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a multi-choice answer.
    pub fn get_choices(&self, id: &QuestionId) -> Result<&[String], AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Choices(list)) => Ok(list),
            Some(other) => Err(mismatch(id, "Choices", other)),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a rating answer.
    pub fn get_rating(&self, id: &QuestionId) -> Result<u8, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Rating(r)) => Ok(*r),
            Some(other) => Err(mismatch(id, "Rating", other)),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a date answer.
    pub fn get_date(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Date(d)) => Ok(d),
            Some(other) => Err(mismatch(id, "Date", other)),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }
}

fn mismatch(id: &QuestionId, expected: &'static str, actual: &AnswerValue) -> AnswerError {
    AnswerError::TypeMismatch {
        id: id.clone(),
        expected,
        actual: actual.type_name(),
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a QuestionId, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("q1", AnswerValue::Choice("Weekly".into()));
        answers.insert("q3", "Slow delivery");
        answers.insert("q4", 4u8);

        assert_eq!(answers.get_choice(&"q1".into()).unwrap(), "Weekly");
        assert_eq!(answers.get_text(&"q3".into()).unwrap(), "Slow delivery");
        assert_eq!(answers.get_rating(&"q4".into()).unwrap(), 4);
        assert_eq!(answers.chosen_option(&"q1".into()), Some("Weekly"));
        assert_eq!(answers.chosen_option(&"q3".into()), None);
    }

    #[test]
    fn blank_answers_have_no_value() {
        let mut answers = Answers::new();
        answers.insert("name", "   ");
        answers.insert("platforms", AnswerValue::Choices(Vec::new()));

        assert!(answers.contains(&"name".into()));
        assert!(!answers.has_value(&"name".into()));
        assert!(!answers.has_value(&"platforms".into()));
        assert!(!answers.has_value(&"missing".into()));
    }

    #[test]
    fn type_mismatch_error() {
        let mut answers = Answers::new();
        answers.insert("q4", 3u8);

        let result = answers.get_text(&"q4".into());
        assert!(matches!(result, Err(AnswerError::TypeMismatch { .. })));
        assert!(matches!(
            answers.get_date(&"nope".into()),
            Err(AnswerError::Missing(_))
        ));
    }
}
