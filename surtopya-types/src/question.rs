use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{LogicRule, QuestionId};

/// Rating scale used when a rating question does not set `maxRating`.
pub const DEFAULT_MAX_RATING: u8 = 5;

/// Largest rating scale a question may use.
pub const MAX_RATING_LIMIT: u8 = 10;

/// The kind of survey item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Pick exactly one option (radio buttons).
    Single,

    /// Pick any number of options (checkboxes).
    Multi,

    /// Free text.
    Text,

    /// Single-line text.
    Short,

    /// Multi-line text.
    Long,

    /// Star rating from 1 to `maxRating`.
    Rating,

    /// Calendar date.
    Date,

    /// Pick one option from a dropdown.
    Select,

    /// Page marker. Not answerable.
    Section,
}

impl QuestionType {
    /// All question types, in toolbox order.
    pub const ALL: [QuestionType; 9] = [
        Self::Section,
        Self::Single,
        Self::Multi,
        Self::Select,
        Self::Text,
        Self::Short,
        Self::Long,
        Self::Rating,
        Self::Date,
    ];

    /// Check if this is a page marker.
    pub fn is_section(self) -> bool {
        self == Self::Section
    }

    /// Check if this type carries a list of options.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Single | Self::Multi | Self::Select)
    }

    /// Check if logic jumps can be attached to this type.
    pub fn supports_logic(self) -> bool {
        matches!(self, Self::Single | Self::Select)
    }

    /// The wire name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Text => "text",
            Self::Short => "short",
            Self::Long => "long",
            Self::Rating => "rating",
            Self::Date => "date",
            Self::Select => "select",
            Self::Section => "section",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single survey item: either an answerable question or a section marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: QuestionId,

    #[serde(rename = "type")]
    kind: QuestionType,

    title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,

    #[serde(default)]
    required: bool,

    #[serde(default)]
    points: u32,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "clamped_max_rating"
    )]
    max_rating: Option<u8>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    logic: Vec<LogicRule>,
}

impl Question {
    /// Create a new question with no options, no logic and zero points.
    pub fn new(id: impl Into<QuestionId>, kind: QuestionType, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: None,
            options: None,
            required: false,
            points: 0,
            max_rating: None,
            logic: Vec::new(),
        }
    }

    /// Create a section (page marker).
    pub fn section(id: impl Into<QuestionId>, title: impl Into<String>) -> Self {
        Self::new(id, QuestionType::Section, title)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Mark the question as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the reward points.
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Set the rating scale (clamped to 1..=10).
    pub fn with_max_rating(mut self, max_rating: u8) -> Self {
        self.max_rating = Some(max_rating.clamp(1, MAX_RATING_LIMIT));
        self
    }

    /// Set the logic rules.
    pub fn with_logic(mut self, logic: Vec<LogicRule>) -> Self {
        self.logic = logic;
        self
    }

    /// Get the identifier.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the question type.
    pub fn kind(&self) -> QuestionType {
        self.kind
    }

    /// Get the prompt text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the optional help text.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The options, or an empty slice for types without options.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Get a mutable reference to the options, if this question has any.
    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        self.options.as_mut()
    }

    /// Check if an answer is mandatory.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Get the reward points. Always 0 for sections.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// The rating scale as stored, without falling back to the default.
    pub fn max_rating(&self) -> Option<u8> {
        self.max_rating
    }

    /// The rating scale in effect.
    pub fn effective_max_rating(&self) -> u8 {
        self.max_rating.unwrap_or(DEFAULT_MAX_RATING)
    }

    /// Get the logic rules, in evaluation order.
    pub fn logic(&self) -> &[LogicRule] {
        &self.logic
    }

    /// Check if this is a section marker.
    pub fn is_section(&self) -> bool {
        self.kind.is_section()
    }

    /// Replace the logic rules wholesale.
    pub fn set_logic(&mut self, logic: Vec<LogicRule>) {
        self.logic = logic;
    }

    /// Clone this question under a new id, with `" (Copy)"` appended to the
    /// title and no logic.
    pub fn duplicate(&self, id: QuestionId) -> Self {
        Self {
            id,
            title: format!("{} (Copy)", self.title),
            logic: Vec::new(),
            ..self.clone()
        }
    }

    /// Apply a partial update.
    ///
    /// Points are ignored for sections and options for types without
    /// options.
    pub fn apply(&mut self, patch: QuestionPatch) {
        let QuestionPatch {
            title,
            description,
            options,
            required,
            points,
            max_rating,
            logic,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(options) = options
            && self.kind.has_options()
        {
            self.options = Some(options);
        }
        if let Some(required) = required {
            self.required = required;
        }
        if let Some(points) = points
            && !self.is_section()
        {
            self.points = points;
        }
        if let Some(max_rating) = max_rating {
            self.max_rating = Some(max_rating.clamp(1, MAX_RATING_LIMIT));
        }
        if let Some(logic) = logic {
            self.logic = logic;
        }
    }
}

fn clamped_max_rating<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let max_rating = Option::<u8>::deserialize(deserializer)?;
    Ok(max_rating.map(|max| max.clamp(1, MAX_RATING_LIMIT)))
}

/// A partial update to a [`Question`]. Fields left as `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionPatch {
    pub title: Option<String>,

    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,

    pub options: Option<Vec<String>>,

    pub required: Option<bool>,

    pub points: Option<u32>,

    pub max_rating: Option<u8>,

    pub logic: Option<Vec<LogicRule>>,
}

impl QuestionPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn points(mut self, points: u32) -> Self {
        self.points = Some(points);
        self
    }

    pub fn max_rating(mut self, max_rating: u8) -> Self {
        self.max_rating = Some(max_rating);
        self
    }

    pub fn logic(mut self, logic: Vec<LogicRule>) -> Self {
        self.logic = Some(logic);
        self
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
