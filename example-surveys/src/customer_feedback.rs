use surtopya::{LogicRule, Question, QuestionType, Survey};

/// A branching feedback survey.
///
/// | page      | questions            | logic                                      |
/// |-----------|----------------------|--------------------------------------------|
/// | `visit`   | `visited`, `stars`   | `visited = No` ends the survey             |
/// | `details` | `recommend`, `liked` | `Never` jumps to `complaint`, `Definitely` to `comment` |
/// | `issues`  | `complaint`          |                                            |
/// | `closing` | `comment`            |                                            |
pub fn customer_feedback() -> Survey {
    let questions = vec![
        Question::section("visit", "Your visit"),
        Question::new("visited", QuestionType::Single, "Did you visit us this month?")
            .with_options(["Yes", "No"])
            .with_required(true)
            .with_logic(vec![LogicRule::end_survey("No")]),
        Question::new("stars", QuestionType::Rating, "How was it?")
            .with_max_rating(10)
            .with_required(true),
        Question::section("details", "Details"),
        Question::new("recommend", QuestionType::Select, "Would you recommend us?")
            .with_options(["Definitely", "Maybe", "Never"])
            .with_required(true)
            .with_logic(vec![
                LogicRule::jump_to("Never", "complaint"),
                LogicRule::jump_to("Definitely", "comment"),
            ]),
        Question::new("liked", QuestionType::Short, "What did you like most?"),
        Question::section("issues", "What went wrong"),
        Question::new("complaint", QuestionType::Long, "Tell us what went wrong")
            .with_required(true)
            .with_points(20),
        Question::section("closing", "Anything else?"),
        Question::new("comment", QuestionType::Text, "Any last words?"),
    ];

    Survey::new("feedback", "Customer feedback", questions)
}
