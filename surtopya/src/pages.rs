use crate::{Page, Question, QuestionId, QuestionList};

/// Group questions into pages.
///
/// Every section opens a new page; every other item joins the page that is
/// currently open. Items that come before the first section form a page
/// without a header.
pub fn paginate(questions: &[Question]) -> Vec<Page<'_>> {
    let mut pages = Vec::new();
    let mut current: Option<Page<'_>> = None;

    for question in questions {
        if question.is_section() {
            if let Some(page) = current.take() {
                pages.push(page);
            }
            current = Some(Page::new(Some(question)));
        } else {
            current
                .get_or_insert_with(|| Page::new(None))
                .children
                .push(question);
        }
    }

    if let Some(page) = current {
        pages.push(page);
    }

    pages
}

/// Index of the page that holds the given item.
pub fn page_of(pages: &[Page<'_>], id: &QuestionId) -> Option<usize> {
    pages.iter().position(|page| page.contains(id))
}

impl QuestionList {
    /// The pages of this list.
    pub fn pages(&self) -> Vec<Page<'_>> {
        paginate(self.questions())
    }

    /// Index of the page that holds the given item.
    pub fn page_of(&self, id: &QuestionId) -> Option<usize> {
        page_of(&self.pages(), id)
    }
}
