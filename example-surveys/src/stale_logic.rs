use surtopya::{EditError, LogicRule, Question, QuestionList, QuestionType};

/// A list whose logic went stale after editing.
///
/// - `color` jumps back to `name`
/// - `size` jumps to `removed`, which no longer exists
/// - `fit` triggers on `"Baggy"`, which is no longer one of its options
/// - `ok` only has valid jumps
pub fn stale_logic() -> Result<QuestionList, EditError> {
    let questions = vec![
        Question::section("page-1", "Page 1"),
        Question::new("name", QuestionType::Short, "Name"),
        Question::new("color", QuestionType::Single, "Favourite colour")
            .with_options(["Red", "Green"])
            .with_logic(vec![
                LogicRule::end_survey("Red"),
                LogicRule::jump_to("Green", "name"),
            ]),
        Question::new("size", QuestionType::Select, "Size")
            .with_options(["S", "M", "L"])
            .with_logic(vec![LogicRule::jump_to("L", "removed")]),
        Question::section("page-2", "Page 2"),
        Question::new("fit", QuestionType::Single, "Fit")
            .with_options(["Slim", "Regular"])
            .with_logic(vec![LogicRule::jump_to("Baggy", "done")]),
        Question::new("ok", QuestionType::Select, "All good?")
            .with_options(["Yes", "No"])
            .with_logic(vec![
                LogicRule::jump_to("Yes", "page-3"),
                LogicRule::end_survey("No"),
            ]),
        Question::section("page-3", "Page 3"),
        Question::new("done", QuestionType::Date, "Delivery date"),
    ];

    QuestionList::from_questions(questions)
}
