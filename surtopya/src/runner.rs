//! Page-by-page navigation for respondents, following logic jumps.

use crate::pages::{page_of, paginate};
use crate::{
    AnswerValue, Answers, Destination, Page, Question, QuestionId, RespondentBackend, SurveyError,
};

/// Where to go after the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Page(usize),
    Finished,
}

/// Decide which page follows page `current`.
///
/// Questions on the page are checked in order. For each one, the first rule
/// whose trigger equals the recorded answer is taken: `end_survey` finishes
/// the survey, any other destination moves to the page that holds it. A
/// destination that no longer exists is skipped. Without a jump the survey
/// continues on the next page, or finishes after the last one.
pub fn next_page(pages: &[Page<'_>], current: usize, answers: &Answers) -> Navigation {
    let Some(page) = pages.get(current) else {
        return Navigation::Finished;
    };

    for question in &page.children {
        let Some(answer) = answers.chosen_option(question.id()) else {
            continue;
        };
        let Some(rule) = question
            .logic()
            .iter()
            .find(|rule| rule.trigger_option == answer)
        else {
            continue;
        };

        match &rule.destination {
            Destination::EndSurvey => return Navigation::Finished,
            Destination::Question(id) => {
                if let Some(target) = page_of(pages, id) {
                    return Navigation::Page(target);
                }
                log::debug!("Logic jump from {} to missing {id} ignored", question.id());
            }
        }
    }

    if current + 1 < pages.len() {
        Navigation::Page(current + 1)
    } else {
        Navigation::Finished
    }
}

/// One respondent working through a survey.
#[derive(Debug, Clone)]
pub struct Runner<'a> {
    pages: Vec<Page<'a>>,
    current: Option<usize>,
    answers: Answers,
    history: Vec<usize>,
}

impl<'a> Runner<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        let pages = paginate(questions);
        let current = if pages.is_empty() { None } else { Some(0) };
        Self {
            pages,
            current,
            answers: Answers::new(),
            history: Vec::new(),
        }
    }

    pub fn pages(&self) -> &[Page<'a>] {
        &self.pages
    }

    /// Index of the page being shown, `None` once finished.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page<'a>> {
        self.current.and_then(|index| self.pages.get(index))
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn into_answers(self) -> Answers {
        self.answers
    }

    pub fn answer(&mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        self.answers.insert(id, value);
    }

    /// Record the answers given on a page.
    pub fn record(&mut self, answers: Answers) {
        self.answers.extend(answers);
    }

    /// First required question on the current page without an answer.
    pub fn missing_required(&self) -> Option<&'a QuestionId> {
        self.current_page()?
            .children
            .iter()
            .find(|q| q.required() && !self.answers.has_value(q.id()))
            .map(|q| q.id())
    }

    /// Leave the current page.
    pub fn next(&mut self) -> Navigation {
        let Some(current) = self.current else {
            return Navigation::Finished;
        };

        let navigation = next_page(&self.pages, current, &self.answers);
        self.go(current, navigation)
    }

    /// Leave the current page, never landing on it or an earlier one.
    ///
    /// A jump to the current page or back falls through to the next page.
    fn next_forward(&mut self) -> Navigation {
        let Some(current) = self.current else {
            return Navigation::Finished;
        };

        let navigation = match next_page(&self.pages, current, &self.answers) {
            Navigation::Page(target) if target <= current => {
                log::warn!("Jump from page {current} back to page {target} ignored");
                if current + 1 < self.pages.len() {
                    Navigation::Page(current + 1)
                } else {
                    Navigation::Finished
                }
            }
            navigation => navigation,
        };
        self.go(current, navigation)
    }

    fn go(&mut self, current: usize, navigation: Navigation) -> Navigation {
        self.history.push(current);
        self.current = match navigation {
            Navigation::Page(index) => Some(index),
            Navigation::Finished => None,
        };
        log::debug!("Page {current} -> {navigation:?}");
        navigation
    }

    /// Return to the page shown before the current one.
    ///
    /// Follows the pages actually visited, so a jump is undone in one step.
    /// Going back from the end of the survey reopens the last page shown.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = Some(previous);
                true
            }
            None => false,
        }
    }

    /// Completion in percent, counting the current page as reached.
    pub fn progress(&self) -> f64 {
        match self.current {
            None => 100.0,
            Some(_) if self.pages.is_empty() => 100.0,
            Some(index) => (index + 1) as f64 / self.pages.len() as f64 * 100.0,
        }
    }

    /// Let `backend` answer page after page until the survey finishes.
    ///
    /// Each page is asked at most once: jumps that do not lead forward
    /// continue with the next page instead.
    pub fn run<B: RespondentBackend>(mut self, backend: &mut B) -> Result<Answers, SurveyError> {
        while let Some(index) = self.current {
            let answers = backend
                .answer_page(&self.pages[index], &self.answers)
                .map_err(|err| into_survey_error(err.into()))?;
            self.record(answers);

            if let Some(id) = self.missing_required() {
                return Err(SurveyError::MissingAnswer(id.clone()));
            }
            self.next_forward();
        }
        Ok(self.answers)
    }
}

/// Keep survey errors raised by a backend, wrap anything else.
fn into_survey_error(err: anyhow::Error) -> SurveyError {
    match err.downcast::<SurveyError>() {
        Ok(err) => err,
        Err(err) => SurveyError::Backend(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogicRule, QuestionType};

    fn branching() -> Vec<Question> {
        vec![
            Question::section("P1", "Start"),
            Question::new("q1", QuestionType::Single, "Continue?")
                .with_options(["Yes", "No", "Skip"])
                .with_logic(vec![
                    LogicRule::end_survey("No"),
                    LogicRule::jump_to("Skip", "q3"),
                ]),
            Question::section("P2", "Middle"),
            Question::new("q2", QuestionType::Text, "Why?"),
            Question::section("P3", "End"),
            Question::new("q3", QuestionType::Rating, "Rate us"),
        ]
    }

    #[test]
    fn default_is_next_page() {
        let questions = branching();
        let pages = paginate(&questions);
        let answers = Answers::new();
        assert_eq!(next_page(&pages, 0, &answers), Navigation::Page(1));
        assert_eq!(next_page(&pages, 1, &answers), Navigation::Page(2));
        assert_eq!(next_page(&pages, 2, &answers), Navigation::Finished);
    }

    #[test]
    fn matching_rule_decides() {
        let questions = branching();
        let pages = paginate(&questions);
        let mut answers = Answers::new();

        answers.insert("q1", AnswerValue::Choice("No".into()));
        assert_eq!(next_page(&pages, 0, &answers), Navigation::Finished);

        answers.insert("q1", AnswerValue::Choice("Skip".into()));
        assert_eq!(next_page(&pages, 0, &answers), Navigation::Page(2));

        answers.insert("q1", AnswerValue::Choice("Yes".into()));
        assert_eq!(next_page(&pages, 0, &answers), Navigation::Page(1));
    }

    #[test]
    fn missing_destination_falls_through() {
        let questions = vec![
            Question::section("P1", "Start"),
            Question::new("q1", QuestionType::Select, "Pick")
                .with_options(["A"])
                .with_logic(vec![LogicRule::jump_to("A", "gone")]),
            Question::section("P2", "Next"),
        ];
        let pages = paginate(&questions);
        let mut answers = Answers::new();
        answers.insert("q1", AnswerValue::Choice("A".into()));
        assert_eq!(next_page(&pages, 0, &answers), Navigation::Page(1));
    }

    #[test]
    fn back_follows_visited_pages() {
        let questions = branching();
        let mut runner = Runner::new(&questions);
        assert!(!runner.back());

        runner.answer("q1", AnswerValue::Choice("Skip".into()));
        assert_eq!(runner.next(), Navigation::Page(2));
        assert!(runner.back());
        assert_eq!(runner.current(), Some(0));
    }

    #[test]
    fn progress_and_finish() {
        let questions = branching();
        let mut runner = Runner::new(&questions);
        assert!((runner.progress() - 100.0 / 3.0).abs() < 1e-9);

        runner.answer("q1", AnswerValue::Choice("No".into()));
        assert_eq!(runner.next(), Navigation::Finished);
        assert!(runner.is_finished());
        assert_eq!(runner.progress(), 100.0);
        assert_eq!(runner.next(), Navigation::Finished);

        assert!(runner.back());
        assert_eq!(runner.current(), Some(0));
    }

    #[test]
    fn run_does_not_revisit_pages() -> anyhow::Result<()> {
        use crate::ScriptedRespondent;

        let questions = vec![
            Question::section("P1", "Start"),
            Question::new("q1", QuestionType::Single, "Pick")
                .with_options(["A", "B"])
                .with_logic(vec![
                    LogicRule::jump_to("A", "q2"),
                    LogicRule::jump_to("B", "q1"),
                ]),
            Question::new("q2", QuestionType::Text, "Why?"),
            Question::section("P2", "Next"),
            Question::new("q3", QuestionType::Short, "Name"),
            Question::new("q4", QuestionType::Select, "Again?")
                .with_options(["Yes"])
                .with_logic(vec![LogicRule::jump_to("Yes", "P1")]),
        ];

        for choice in ["A", "B"] {
            let mut backend = ScriptedRespondent::new()
                .with_choice("q1", choice)
                .with_text("q2", "because")
                .with_text("q3", "Ada")
                .with_choice("q4", "Yes");
            let answers = Runner::new(&questions).run(&mut backend)?;

            assert_eq!(backend.visited(), [Some("Start".to_string()), Some("Next".to_string())]);
            assert_eq!(answers.chosen_option(&"q1".into()), Some(choice));
        }
        Ok(())
    }

    #[test]
    fn next_still_follows_same_page_jump() {
        let questions = vec![
            Question::section("P1", "Start"),
            Question::new("q1", QuestionType::Single, "Pick")
                .with_options(["A"])
                .with_logic(vec![LogicRule::jump_to("A", "q2")]),
            Question::new("q2", QuestionType::Text, "Why?"),
            Question::section("P2", "Next"),
        ];
        let mut runner = Runner::new(&questions);
        runner.answer("q1", AnswerValue::Choice("A".into()));
        assert_eq!(runner.next(), Navigation::Page(0));
    }

    #[test]
    fn reports_missing_required() {
        let questions = vec![
            Question::section("P1", "Start"),
            Question::new("q1", QuestionType::Short, "Name").with_required(true),
        ];
        let mut runner = Runner::new(&questions);
        assert_eq!(runner.missing_required().map(QuestionId::as_str), Some("q1"));
        runner.answer("q1", "Ada");
        assert_eq!(runner.missing_required(), None);
    }
}
