use crate::{Question, QuestionId};

/// One page of a survey: a section header and the questions that follow it
/// up to the next section.
///
/// Pages are a view over a question list and are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// The section that opens this page. `None` only for questions that
    /// precede every section.
    pub header: Option<&'a Question>,

    /// The non-section questions on this page, in list order.
    pub children: Vec<&'a Question>,
}

impl<'a> Page<'a> {
    /// Create an empty page opened by the given section.
    pub fn new(header: Option<&'a Question>) -> Self {
        Self {
            header,
            children: Vec::new(),
        }
    }

    /// The page title, taken from the section header.
    pub fn title(&self) -> Option<&'a str> {
        self.header.map(Question::title)
    }

    /// Check if the page holds the given item, either as header or child.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.header.is_some_and(|h| h.id() == id) || self.children.iter().any(|q| q.id() == id)
    }

    /// The header followed by the children.
    pub fn items(&self) -> impl Iterator<Item = &'a Question> + '_ {
        self.header.into_iter().chain(self.children.iter().copied())
    }

    /// Number of items on the page, header included.
    pub fn len(&self) -> usize {
        usize::from(self.header.is_some()) + self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
