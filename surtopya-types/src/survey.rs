use serde::{Deserialize, Serialize};

use crate::Question;

/// Who can find a published survey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Listed in the marketplace and indexed by search engines.
    #[default]
    #[serde(rename = "public")]
    Public,

    /// Reachable only through its link.
    #[serde(rename = "non-public")]
    NonPublic,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        self == Self::Public
    }
}

/// Visual theme of a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyTheme {
    pub primary_color: String,
    pub background_color: String,
    pub font_family: String,
}

impl Default for SurveyTheme {
    fn default() -> Self {
        Self {
            primary_color: "#9333ea".to_string(),
            background_color: "#f9fafb".to_string(),
            font_family: "inter".to_string(),
        }
    }
}

/// Publication and marketplace settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySettings {
    pub visibility: Visibility,

    pub is_published: bool,

    /// Whether de-identified responses are contributed to the dataset marketplace.
    pub include_in_datasets: bool,

    /// Points paid to a respondent for completing the survey.
    pub points_reward: u32,

    /// Expiry date as entered by the author (ISO 8601 date).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    #[serde(default)]
    pub published_count: u32,
}

impl SurveySettings {
    /// Change visibility. Public surveys are always enrolled in the dataset
    /// marketplace; switching to non-public opts out.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        self.include_in_datasets = visibility.is_public();
    }

    /// Opt in or out of the dataset marketplace. Ignored for public surveys,
    /// which are always enrolled.
    pub fn set_include_in_datasets(&mut self, include: bool) {
        self.include_in_datasets = include || self.visibility.is_public();
    }
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            visibility: Visibility::Public,
            is_published: false,
            include_in_datasets: true,
            points_reward: 0,
            expires_at: None,
            published_count: 0,
        }
    }
}

/// The top-level survey document, as handed to a backend or the preview view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// All questions and section markers, in page order.
    pub questions: Vec<Question>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<SurveyTheme>,

    #[serde(default)]
    pub settings: SurveySettings,
}

impl Survey {
    /// Create a survey with default settings and no theme.
    pub fn new(id: impl Into<String>, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            questions,
            theme: None,
            settings: SurveySettings::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: SurveyTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the settings.
    pub fn with_settings(mut self, settings: SurveySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The theme in effect.
    pub fn theme_or_default(&self) -> SurveyTheme {
        self.theme.clone().unwrap_or_default()
    }

    /// Number of answerable (non-section) questions.
    pub fn question_count(&self) -> usize {
        self.questions.iter().filter(|q| !q.is_section()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_forces_dataset_enrollment() {
        let mut settings = SurveySettings::default();
        settings.set_include_in_datasets(false);
        assert!(settings.include_in_datasets);

        settings.set_visibility(Visibility::NonPublic);
        assert!(!settings.include_in_datasets);

        settings.set_include_in_datasets(true);
        assert!(settings.include_in_datasets);

        settings.set_visibility(Visibility::Public);
        assert!(settings.include_in_datasets);
    }

    #[test]
    fn visibility_wire_names() {
        assert_eq!(
            serde_json::to_string(&Visibility::NonPublic).unwrap(),
            "\"non-public\""
        );
        assert_eq!(
            serde_json::from_str::<Visibility>("\"public\"").unwrap(),
            Visibility::Public
        );
    }

    #[test]
    fn default_theme() {
        let theme = SurveyTheme::default();
        assert_eq!(theme.primary_color, "#9333ea");
        assert_eq!(theme.background_color, "#f9fafb");
        assert_eq!(theme.font_family, "inter");
    }
}
