use surtopya::{Question, QuestionType, Survey, SurveySettings};

/// Shopping-habits survey over two pages, one question of most types.
///
/// Pages: `shopping` (q1-q3), `about-you` (q4-q6). No logic.
pub fn consumer_preferences() -> Survey {
    let questions = vec![
        Question::section("shopping", "Shopping habits"),
        Question::new("q1", QuestionType::Single, "How often do you shop online?")
            .with_options(["Daily", "Weekly", "Monthly", "Rarely"])
            .with_required(true)
            .with_points(10),
        Question::new(
            "q2",
            QuestionType::Multi,
            "Which platforms do you use? (Select all that apply)",
        )
        .with_options(["Amazon", "eBay", "Shopify Stores", "Etsy", "AliExpress"])
        .with_points(10),
        Question::new(
            "q3",
            QuestionType::Text,
            "What is your biggest frustration with online shopping?",
        )
        .with_required(true)
        .with_points(10),
        Question::section("about-you", "About you"),
        Question::new("q4", QuestionType::Rating, "Rate your last online shopping experience")
            .with_required(true)
            .with_points(10),
        Question::new("q5", QuestionType::Select, "What is your age group?")
            .with_options(["18-24", "25-34", "35-44", "45-54", "55+"])
            .with_required(true)
            .with_points(10),
        Question::new("q6", QuestionType::Date, "When did you last make an online purchase?")
            .with_points(10),
    ];

    let settings = SurveySettings {
        points_reward: 50,
        ..SurveySettings::default()
    };

    Survey::new("1", "Consumer Preferences 2024", questions)
        .with_description(
            "Help us understand your shopping habits. This survey takes about 2 minutes.",
        )
        .with_settings(settings)
}
