use crate::QuestionId;

/// A structural edit that was refused. The question list is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The first section opens the survey and cannot be removed or displaced.
    #[error("The first page cannot be deleted")]
    FirstSection,

    /// The edit would leave a question in front of the first section.
    #[error("The first item of a survey must be a section")]
    LeadingQuestion,

    /// A survey always has at least one page.
    #[error("A survey needs at least one page")]
    Empty,

    #[error("No question with id '{0}'")]
    NotFound(QuestionId),

    #[error("Question '{0}' has no options")]
    NotAChoiceQuestion(QuestionId),

    #[error("Option index {index} is out of range for question '{id}'")]
    OptionOutOfRange { id: QuestionId, index: usize },
}
