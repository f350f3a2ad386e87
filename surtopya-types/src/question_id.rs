use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question or section, e.g. `"page-1"` or `"k3j9x0a2b"`.
///
/// Ids are stable across reordering and editing. New questions, pages and
/// duplicates always receive a freshly generated id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create an id from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the id is empty (an unset logic destination, for example).
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for QuestionId {
    fn eq(&self, other: &str) -> bool {
        self.id == other
    }
}

impl PartialEq<&str> for QuestionId {
    fn eq(&self, other: &&str) -> bool {
        self.id == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let id = QuestionId::new("q1");
        assert_eq!(id.as_str(), "q1");
    }

    #[test]
    fn generated_ids_differ() {
        let a = QuestionId::generate();
        let b = QuestionId::generate();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn display() {
        let id = QuestionId::new("page-1");
        assert_eq!(format!("{}", id), "page-1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = QuestionId::new("q7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q7\"");
        let back: QuestionId = serde_json::from_str("\"q7\"").unwrap();
        assert_eq!(back, id);
    }
}
