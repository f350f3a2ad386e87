//! Core types for the surtopya survey builder.
//!
//! This crate provides the serializable survey model:
//! - `Survey`, `SurveySettings` and `SurveyTheme` - The top-level document
//! - `Question`, `QuestionType` and `QuestionId` - Survey items and page markers
//! - `LogicRule` and `Destination` - Branching rules
//! - `Answers` and `AnswerValue` - Collected data keyed by question id
//! - `Page` and `RespondentBackend` - For presenting a survey to respondents

mod question_id;
pub use question_id::QuestionId;

mod logic;
pub use logic::{Destination, END_SURVEY, LogicRule};

mod question;
pub use question::{DEFAULT_MAX_RATING, MAX_RATING_LIMIT, Question, QuestionPatch, QuestionType};

mod survey;
pub use survey::{Survey, SurveySettings, SurveyTheme, Visibility};

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod page;
pub use page::Page;

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::RespondentBackend;
