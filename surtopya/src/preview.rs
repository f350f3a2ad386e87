//! Hand-off of an unsaved draft to the preview view.
//!
//! The builder writes the whole survey, theme included, as one JSON blob
//! under [`PREVIEW_KEY`]; the preview view reads it back.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::{Survey, SurveyError};

/// Key the preview blob is stored under.
pub const PREVIEW_KEY: &str = "preview_survey";

/// A string key-value store scoped to one browser session or process.
pub trait SessionStore {
    type Error: Into<anyhow::Error>;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    fn set(&mut self, key: &str, value: String) -> Result<(), Self::Error>;
}

/// In-memory [`SessionStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), Self::Error> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store `survey` for the preview view, replacing any earlier preview.
pub fn write_preview<S: SessionStore>(store: &mut S, survey: &Survey) -> Result<(), SurveyError> {
    let json = serde_json::to_string(survey)?;
    store
        .set(PREVIEW_KEY, json)
        .map_err(SurveyError::backend)?;
    log::debug!("Stored preview of survey '{}'", survey.id);
    Ok(())
}

/// Load the survey stored by [`write_preview`], if there is one.
pub fn read_preview<S: SessionStore>(store: &S) -> Result<Option<Survey>, SurveyError> {
    let Some(json) = store.get(PREVIEW_KEY).map_err(SurveyError::backend)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&json)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Question, QuestionType, SurveyTheme};

    #[test]
    fn round_trips_survey_with_theme() {
        let theme = SurveyTheme {
            primary_color: "#000000".into(),
            ..SurveyTheme::default()
        };
        let survey = Survey::new(
            "draft",
            "Draft",
            vec![
                Question::section("page-1", "Page 1"),
                Question::new("q1", QuestionType::Rating, "How?").with_max_rating(7),
            ],
        )
        .with_theme(theme);

        let mut store = MemoryStore::new();
        write_preview(&mut store, &survey).unwrap();
        assert!(store.get(PREVIEW_KEY).unwrap().is_some());
        assert_eq!(read_preview(&store).unwrap(), Some(survey));
    }

    #[test]
    fn empty_store_has_no_preview() {
        assert_eq!(read_preview(&MemoryStore::new()).unwrap(), None);
    }

    #[test]
    fn corrupt_blob_is_a_serialization_error() {
        let mut store = MemoryStore::new();
        store.set(PREVIEW_KEY, "{not json".into()).unwrap();
        assert!(matches!(
            read_preview(&store),
            Err(SurveyError::Serialization(_))
        ));
    }
}
