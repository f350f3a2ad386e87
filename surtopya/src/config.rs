//! Builder configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! [question]
//! title = "New Question"
//! points = 10
//! options = ["Option 1", "Option 2"]
//!
//! [page]
//! first_id = "page-1"
//! first_title = "Page 1"
//! title = "New Page"
//!
//! [drag]
//! activation_distance = 8.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_MAX_RATING, SurveyTheme};

/// Error type for loading a [`BuilderConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Defaults for freshly created questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionDefaults {
    pub title: String,
    pub points: u32,
    /// Options given to new single, multi and select questions.
    pub options: Vec<String>,
}

impl Default for QuestionDefaults {
    fn default() -> Self {
        Self {
            title: "New Question".to_string(),
            points: 10,
            options: vec!["Option 1".to_string(), "Option 2".to_string()],
        }
    }
}

/// Defaults for sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDefaults {
    /// Id of the section every new survey starts with.
    pub first_id: String,
    pub first_title: String,
    /// Title of sections added later.
    pub title: String,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            first_id: "page-1".to_string(),
            first_title: "Page 1".to_string(),
            title: "New Page".to_string(),
        }
    }
}

/// Drag-and-drop tolerances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Pointer travel, in pixels, before a press turns into a drag.
    pub activation_distance: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            activation_distance: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingDefaults {
    pub default_max: u8,
}

impl Default for RatingDefaults {
    fn default() -> Self {
        Self {
            default_max: DEFAULT_MAX_RATING,
        }
    }
}

/// Configuration of a builder session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub question: QuestionDefaults,
    pub page: PageDefaults,
    pub drag: DragSettings,
    pub rating: RatingDefaults,
    pub theme: SurveyTheme,
}

impl BuilderConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded builder config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = BuilderConfig::from_toml_str("").unwrap();
        assert_eq!(config, BuilderConfig::default());
        assert_eq!(config.question.points, 10);
        assert_eq!(config.question.options, ["Option 1", "Option 2"]);
        assert_eq!(config.page.first_title, "Page 1");
        assert_eq!(config.drag.activation_distance, 8.0);
        assert_eq!(config.rating.default_max, 5);
    }

    #[test]
    fn partial_override() {
        let config = BuilderConfig::from_toml_str(
            r##"
            [question]
            points = 25

            [drag]
            activation_distance = 4.5

            [theme]
            primaryColor = "#000000"
            backgroundColor = "#ffffff"
            fontFamily = "serif"
            "##,
        )
        .unwrap();

        assert_eq!(config.question.points, 25);
        assert_eq!(config.question.title, "New Question");
        assert_eq!(config.drag.activation_distance, 4.5);
        assert_eq!(config.theme.font_family, "serif");
    }

    #[test]
    fn invalid_document() {
        let result = BuilderConfig::from_toml_str("[question]\npoints = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file() {
        let result = BuilderConfig::load("/definitely/not/here/surtopya.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
