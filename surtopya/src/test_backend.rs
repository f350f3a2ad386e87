//! Scripted respondent for running surveys without user interaction.
//!
//! `ScriptedRespondent` answers every page from a pre-configured map. It is
//! meant for tests of survey navigation and logic jumps.
//!
//! # Example
//!
//! ```rust
//! use surtopya::{Question, QuestionType, Runner, ScriptedRespondent};
//!
//! let questions = vec![
//!     Question::section("page-1", "Page 1"),
//!     Question::new("q1", QuestionType::Single, "Shop online?")
//!         .with_options(["Yes", "No"])
//!         .with_required(true),
//! ];
//!
//! let mut respondent = ScriptedRespondent::new().with_choice("q1", "Yes");
//! let answers = Runner::new(&questions).run(&mut respondent).unwrap();
//!
//! assert_eq!(answers.get_choice(&"q1".into()).unwrap(), "Yes");
//! ```

use std::collections::HashMap;

use crate::{AnswerValue, Answers, Page, Question, QuestionId, QuestionType, RespondentBackend};

/// A respondent that gives pre-configured answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    responses: HashMap<QuestionId, AnswerValue>,
    visited: Vec<Option<String>>,
}

/// Error type for ScriptedRespondent.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Missing response for required question: {0}")]
    MissingResponse(QuestionId),

    #[error("Invalid response for '{id}': {message}")]
    InvalidResponse { id: QuestionId, message: String },
}

impl ScriptedRespondent {
    /// Create a respondent with no answers.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            visited: Vec::new(),
        }
    }

    /// Add an answer for a question.
    pub fn with_response(mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        self.responses.insert(id.into(), value.into());
        self
    }

    /// Add a free-text answer.
    pub fn with_text(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_response(id, AnswerValue::Text(value.into()))
    }

    /// Add a single-choice answer.
    pub fn with_choice(self, id: impl Into<QuestionId>, option: impl Into<String>) -> Self {
        self.with_response(id, AnswerValue::Choice(option.into()))
    }

    /// Add a multi-choice answer.
    pub fn with_choices<I, S>(self, id: impl Into<QuestionId>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        self.with_response(id, AnswerValue::Choices(options))
    }

    /// Add a rating answer.
    pub fn with_rating(self, id: impl Into<QuestionId>, stars: u8) -> Self {
        self.with_response(id, AnswerValue::Rating(stars))
    }

    /// Add a date answer.
    pub fn with_date(self, id: impl Into<QuestionId>, date: impl Into<String>) -> Self {
        self.with_response(id, AnswerValue::Date(date.into()))
    }

    /// Titles of the pages shown so far, in order. Unheaded pages are `None`.
    pub fn visited(&self) -> &[Option<String>] {
        &self.visited
    }
}

impl RespondentBackend for ScriptedRespondent {
    type Error = ScriptError;

    fn answer_page(&mut self, page: &Page<'_>, _answers: &Answers) -> Result<Answers, Self::Error> {
        self.visited.push(page.title().map(str::to_string));

        let mut answers = Answers::new();
        for question in &page.children {
            match self.responses.get(question.id()) {
                Some(value) => {
                    check_response(question, value)?;
                    answers.insert(question.id().clone(), value.clone());
                }
                None if question.required() => {
                    return Err(ScriptError::MissingResponse(question.id().clone()));
                }
                None => {}
            }
        }

        Ok(answers)
    }
}

fn check_response(question: &Question, value: &AnswerValue) -> Result<(), ScriptError> {
    let invalid = |message: String| ScriptError::InvalidResponse {
        id: question.id().clone(),
        message,
    };
    let is_option = |choice: &String| question.options().contains(choice);

    match (question.kind(), value) {
        (QuestionType::Single | QuestionType::Select, AnswerValue::Choice(choice)) => {
            if !is_option(choice) {
                return Err(invalid(format!("'{choice}' is not an option")));
            }
        }
        (QuestionType::Multi, AnswerValue::Choices(choices)) => {
            if let Some(choice) = choices.iter().find(|&choice| !is_option(choice)) {
                return Err(invalid(format!("'{choice}' is not an option")));
            }
        }
        (QuestionType::Rating, AnswerValue::Rating(stars)) => {
            let max = question.effective_max_rating();
            if !(1..=max).contains(stars) {
                return Err(invalid(format!("rating {stars} is outside 1..={max}")));
            }
        }
        (QuestionType::Text | QuestionType::Short | QuestionType::Long, AnswerValue::Text(_))
        | (QuestionType::Date, AnswerValue::Date(_)) => {}
        (kind, value) => {
            return Err(invalid(format!(
                "{} answer given to a {kind} question",
                value.type_name()
            )));
        }
    }

    Ok(())
}
