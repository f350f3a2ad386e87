use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::config::{BuilderConfig, QuestionDefaults};
use crate::{
    DEFAULT_MAX_RATING, EditError, LogicRule, Question, QuestionId, QuestionPatch, QuestionType,
};

/// The ordered list of questions and section markers of one survey draft.
///
/// The first item is always a section. Every other item belongs to the
/// closest section before it. All mutations either apply completely or
/// leave the list untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionList {
    items: Vec<Question>,
    defaults: QuestionDefaults,
    page_title: String,
    rating_max: u8,
}

impl QuestionList {
    /// Create a list holding only the default first page.
    pub fn new() -> Self {
        Self::with_config(&BuilderConfig::default())
    }

    /// Create a list holding only the first page, using the configured defaults.
    pub fn with_config(config: &BuilderConfig) -> Self {
        let first = Question::section(config.page.first_id.as_str(), config.page.first_title.as_str());
        Self {
            items: vec![first],
            defaults: config.question.clone(),
            page_title: config.page.title.clone(),
            rating_max: config.rating.default_max,
        }
    }

    /// Wrap existing questions. The first one must be a section.
    pub fn from_questions(items: Vec<Question>) -> Result<Self, EditError> {
        match items.first() {
            None => Err(EditError::Empty),
            Some(first) if !first.is_section() => Err(EditError::LeadingQuestion),
            Some(_) => {
                let config = BuilderConfig::default();
                Ok(Self {
                    items,
                    defaults: config.question,
                    page_title: config.page.title,
                    rating_max: config.rating.default_max,
                })
            }
        }
    }

    /// Use the configured defaults for items created from now on.
    pub fn configure(&mut self, config: &BuilderConfig) {
        self.defaults = config.question.clone();
        self.page_title = config.page.title.clone();
        self.rating_max = config.rating.default_max;
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.items.iter()
    }

    /// Number of items, sections included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: a list holds at least its first section.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of sections, which is also the number of pages.
    pub fn section_count(&self) -> usize {
        self.items.iter().filter(|q| q.is_section()).count()
    }

    /// Find the index of an item.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.items.iter().position(|q| q.id() == id)
    }

    /// Get an item by id.
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.items.iter().find(|q| q.id() == id)
    }

    /// Check if an item exists.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.position(id).is_some()
    }

    /// Check if the item is the undeletable first section.
    pub fn is_first_section(&self, id: &QuestionId) -> bool {
        self.items
            .first()
            .is_some_and(|first| first.is_section() && first.id() == id)
    }

    /// Take the questions out of the list.
    pub fn into_questions(self) -> Vec<Question> {
        self.items
    }

    /// Build a fresh question of the given type, as the toolbox would.
    pub fn template(&self, kind: QuestionType) -> Question {
        if kind.is_section() {
            return Question::section(QuestionId::generate(), self.page_title.as_str());
        }

        let question = Question::new(QuestionId::generate(), kind, self.defaults.title.as_str())
            .with_points(self.defaults.points);

        if kind.has_options() {
            question.with_options(self.defaults.options.iter().cloned())
        } else if kind == QuestionType::Rating && self.rating_max != DEFAULT_MAX_RATING {
            question.with_max_rating(self.rating_max)
        } else {
            question
        }
    }

    /// Append a new question of the given type at the end.
    pub fn append(&mut self, kind: QuestionType) -> QuestionId {
        let question = self.template(kind);
        let id = question.id().clone();
        log::debug!("Appending {kind} question {id}");
        self.items.push(question);
        id
    }

    /// Insert a new question of the given type at `index`.
    ///
    /// The index is clamped so that nothing is ever inserted in front of
    /// the first section, nor past the end of the list.
    pub fn insert_new(&mut self, kind: QuestionType, index: usize) -> QuestionId {
        let question = self.template(kind);
        let id = question.id().clone();
        let index = index.clamp(1, self.items.len());
        log::debug!("Inserting {kind} question {id} at {index}");
        self.items.insert(index, question);
        id
    }

    /// Append a new section, which opens a new page.
    pub fn add_page(&mut self) -> QuestionId {
        self.append(QuestionType::Section)
    }

    /// Apply a partial update to an item. Returns `false` if the id is unknown.
    pub fn update(&mut self, id: &QuestionId, patch: QuestionPatch) -> bool {
        match self.items.iter_mut().find(|q| q.id() == id) {
            Some(question) => {
                question.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Replace the logic rules of a question. Returns `false` if the id is unknown.
    pub fn save_logic(&mut self, id: &QuestionId, rules: Vec<LogicRule>) -> bool {
        match self.items.iter_mut().find(|q| q.id() == id) {
            Some(question) => {
                log::debug!("Saving {} logic rules on {id}", rules.len());
                question.set_logic(rules);
                true
            }
            None => false,
        }
    }

    /// Delete an item and return what was removed.
    ///
    /// Deleting a section also deletes every question on its page. The first
    /// section cannot be deleted.
    pub fn delete(&mut self, id: &QuestionId) -> Result<Vec<Question>, EditError> {
        let index = self
            .position(id)
            .ok_or_else(|| EditError::NotFound(id.clone()))?;

        if index == 0 {
            log::warn!("Refusing to delete the first page {id}");
            return Err(EditError::FirstSection);
        }

        let range = if self.items[index].is_section() {
            self.block_range(index)
        } else {
            index..index + 1
        };

        log::debug!("Deleting {} item(s) starting at {id}", range.len());
        Ok(self.items.drain(range).collect())
    }

    /// Insert a copy of an item right after it and return the copy's id.
    pub fn duplicate(&mut self, id: &QuestionId) -> Result<QuestionId, EditError> {
        let index = self
            .position(id)
            .ok_or_else(|| EditError::NotFound(id.clone()))?;

        let copy = self.items[index].duplicate(QuestionId::generate());
        let copy_id = copy.id().clone();
        log::debug!("Duplicating {id} as {copy_id}");
        self.items.insert(index + 1, copy);
        Ok(copy_id)
    }

    /// Append `"Option N"` to a choice question and return its index.
    pub fn add_option(&mut self, id: &QuestionId) -> Result<usize, EditError> {
        let options = self.options_mut(id)?;
        options.push(format!("Option {}", options.len() + 1));
        Ok(options.len() - 1)
    }

    /// Rename one option of a choice question.
    ///
    /// Logic rules triggered by the old text are left as they are.
    pub fn rename_option(
        &mut self,
        id: &QuestionId,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), EditError> {
        let options = self.options_mut(id)?;
        let slot = options.get_mut(index).ok_or_else(|| EditError::OptionOutOfRange {
            id: id.clone(),
            index,
        })?;
        *slot = text.into();
        Ok(())
    }

    /// Remove one option of a choice question and return it.
    pub fn remove_option(&mut self, id: &QuestionId, index: usize) -> Result<String, EditError> {
        let options = self.options_mut(id)?;
        if index >= options.len() {
            return Err(EditError::OptionOutOfRange {
                id: id.clone(),
                index,
            });
        }
        Ok(options.remove(index))
    }

    fn options_mut(&mut self, id: &QuestionId) -> Result<&mut Vec<String>, EditError> {
        let question = self
            .items
            .iter_mut()
            .find(|q| q.id() == id)
            .ok_or_else(|| EditError::NotFound(id.clone()))?;
        question
            .options_mut()
            .ok_or_else(|| EditError::NotAChoiceQuestion(id.clone()))
    }

    /// The range covering the section at `start` and every question on its page.
    pub(crate) fn block_range(&self, start: usize) -> Range<usize> {
        let end = self.items[start + 1..]
            .iter()
            .position(Question::is_section)
            .map_or(self.items.len(), |offset| start + 1 + offset);
        start..end
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Question> {
        &mut self.items
    }
}

impl Default for QuestionList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for QuestionList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl TryFrom<Vec<Question>> for QuestionList {
    type Error = EditError;

    fn try_from(items: Vec<Question>) -> Result<Self, Self::Error> {
        Self::from_questions(items)
    }
}

impl From<QuestionList> for Vec<Question> {
    fn from(list: QuestionList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a QuestionList {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &QuestionList) -> Vec<&str> {
        list.iter().map(|q| q.id().as_str()).collect()
    }

    /// `[S1, Q1, Q2, S2, Q3, S3]`
    fn sample() -> QuestionList {
        QuestionList::from_questions(vec![
            Question::section("S1", "Page 1"),
            Question::new("Q1", QuestionType::Single, "One").with_options(["A", "B"]),
            Question::new("Q2", QuestionType::Text, "Two"),
            Question::section("S2", "Page 2"),
            Question::new("Q3", QuestionType::Date, "Three"),
            Question::section("S3", "Page 3"),
        ])
        .unwrap()
    }

    #[test]
    fn starts_with_first_page() {
        let list = QuestionList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.questions()[0].kind(), QuestionType::Section);
        assert_eq!(list.questions()[0].title(), "Page 1");
        assert_eq!(list.questions()[0].id().as_str(), "page-1");
        assert_eq!(list.questions()[0].points(), 0);
    }

    #[test]
    fn rejects_lists_without_leading_section() {
        assert_eq!(
            QuestionList::from_questions(Vec::new()).unwrap_err(),
            EditError::Empty
        );
        assert_eq!(
            QuestionList::from_questions(vec![Question::new("q", QuestionType::Text, "Q")])
                .unwrap_err(),
            EditError::LeadingQuestion
        );
    }

    #[test]
    fn append_uses_defaults() {
        let mut list = QuestionList::new();
        let single = list.append(QuestionType::Single);
        let text = list.append(QuestionType::Text);

        let single = list.get(&single).unwrap();
        assert_eq!(single.title(), "New Question");
        assert_eq!(single.points(), 10);
        assert!(!single.required());
        assert_eq!(single.options(), ["Option 1", "Option 2"]);

        let text = list.get(&text).unwrap();
        assert!(text.options().is_empty());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn add_page_appends_section() {
        let mut list = QuestionList::new();
        list.append(QuestionType::Short);
        let page = list.add_page();

        assert_eq!(list.position(&page), Some(2));
        let page = list.get(&page).unwrap();
        assert!(page.is_section());
        assert_eq!(page.title(), "New Page");
        assert_eq!(page.points(), 0);
    }

    #[test]
    fn insert_new_never_goes_before_first_section() {
        let mut list = sample();
        let id = list.insert_new(QuestionType::Rating, 0);
        assert_eq!(list.position(&id), Some(1));

        let id = list.insert_new(QuestionType::Rating, 999);
        assert_eq!(list.position(&id), Some(list.len() - 1));
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut list = sample();
        let before = list.clone();
        assert!(!list.update(&"nope".into(), QuestionPatch::new().title("x")));
        assert_eq!(list, before);

        assert!(list.update(&"Q2".into(), QuestionPatch::new().required(true)));
        assert!(list.get(&"Q2".into()).unwrap().required());
        assert_eq!(ids(&list), ids(&before));
    }

    #[test]
    fn deleting_first_section_is_refused() {
        let mut list = QuestionList::new();
        let before = list.clone();
        assert_eq!(list.delete(&"page-1".into()), Err(EditError::FirstSection));
        assert_eq!(list, before);
    }

    #[test]
    fn deleting_section_cascades_to_its_page() {
        let mut list = sample();
        let removed = list.delete(&"S2".into()).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(ids(&list), ["S1", "Q1", "Q2", "S3"]);
    }

    #[test]
    fn deleting_last_section_takes_the_tail() {
        let mut list = sample();
        list.append(QuestionType::Long);
        list.append(QuestionType::Long);
        let removed = list.delete(&"S3".into()).unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(ids(&list), ["S1", "Q1", "Q2", "S2", "Q3"]);
    }

    #[test]
    fn deleting_question_removes_only_it() {
        let mut list = sample();
        list.delete(&"Q1".into()).unwrap();
        assert_eq!(ids(&list), ["S1", "Q2", "S2", "Q3", "S3"]);

        assert_eq!(
            list.delete(&"Q1".into()),
            Err(EditError::NotFound("Q1".into()))
        );
    }

    #[test]
    fn duplicate_inserts_after_source() {
        let mut list = sample();
        list.save_logic(&"Q1".into(), vec![LogicRule::jump_to("B", "Q3")]);

        let copy = list.duplicate(&"Q1".into()).unwrap();
        assert_eq!(list.position(&copy), Some(2));

        let copy = list.get(&copy).unwrap();
        assert_ne!(copy.id().as_str(), "Q1");
        assert_eq!(copy.title(), "One (Copy)");
        assert!(copy.logic().is_empty());

        let original = list.get(&"Q1".into()).unwrap();
        assert_eq!(original.title(), "One");
        assert_eq!(original.logic().len(), 1);
    }

    #[test]
    fn option_editing() {
        let mut list = sample();
        let q1: QuestionId = "Q1".into();

        assert_eq!(list.add_option(&q1).unwrap(), 2);
        assert_eq!(list.get(&q1).unwrap().options(), ["A", "B", "Option 3"]);

        list.rename_option(&q1, 0, "Alpha").unwrap();
        assert_eq!(list.remove_option(&q1, 1).unwrap(), "B");
        assert_eq!(list.get(&q1).unwrap().options(), ["Alpha", "Option 3"]);

        assert!(matches!(
            list.remove_option(&q1, 5),
            Err(EditError::OptionOutOfRange { index: 5, .. })
        ));
        assert_eq!(
            list.add_option(&"Q2".into()),
            Err(EditError::NotAChoiceQuestion("Q2".into()))
        );
    }

    #[test]
    fn block_range_spans_page() {
        let list = sample();
        assert_eq!(list.block_range(0), 0..3);
        assert_eq!(list.block_range(3), 3..5);
        assert_eq!(list.block_range(5), 5..6);
    }

    #[test]
    fn configured_defaults() {
        let mut config = BuilderConfig::default();
        config.question.points = 3;
        config.question.options = vec!["Yes".into(), "No".into()];
        config.page.title = "Another page".into();

        let mut list = QuestionList::with_config(&config);
        let q = list.append(QuestionType::Select);
        let p = list.add_page();
        assert_eq!(list.get(&q).unwrap().points(), 3);
        assert_eq!(list.get(&q).unwrap().options(), ["Yes", "No"]);
        assert_eq!(list.get(&p).unwrap().title(), "Another page");
    }

    #[test]
    fn configured_rating_scale() {
        let mut list = QuestionList::new();
        let plain = list.append(QuestionType::Rating);
        assert_eq!(list.get(&plain).unwrap().max_rating(), None);

        let mut config = BuilderConfig::default();
        config.rating.default_max = 10;
        list.configure(&config);
        let wide = list.append(QuestionType::Rating);
        assert_eq!(list.get(&wide).unwrap().max_rating(), Some(10));
        assert_eq!(list.get(&wide).unwrap().effective_max_rating(), 10);
    }

    #[test]
    fn json_round_trip_checks_invariant() {
        let list = sample();
        let json = serde_json::to_string(&list).unwrap();
        let back: QuestionList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);

        let bad = r#"[{ "id": "q", "type": "text", "title": "Orphan", "required": false, "points": 10 }]"#;
        assert!(serde_json::from_str::<QuestionList>(bad).is_err());
    }
}
