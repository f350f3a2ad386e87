use crate::{Answers, Page};

/// Trait for respondent-facing implementations that fill in a survey page by page.
///
/// A backend receives one page at a time and returns the answers given on it.
/// It decides how to present the page (form, wizard, scripted answers, etc.).
pub trait RespondentBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect answers for the questions on one page.
    ///
    /// # Arguments
    /// * `page` - The page being shown
    /// * `answers` - Answers collected on earlier pages
    ///
    /// # Returns
    /// * `Ok(answers)` with the answers given on this page
    /// * `Err` on cancellation or backend failure
    fn answer_page(&mut self, page: &Page<'_>, answers: &Answers)
    -> Result<Answers, Self::Error>;
}
