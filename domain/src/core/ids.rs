//! Identifier value objects
//!
//! Newtypes for the identifiers that flow through the assembly pipeline.
//! Keeping them distinct prevents the classic mix-up between the identifier
//! an evaluator is allowed to see (`BlindId`) and the ones they must not
//! (`SourceId`, raw item titles).

use serde::{Deserialize, Serialize};

/// Identifier of an origin document (Value Object)
///
/// Stable across all items derived from the same source document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Create a new source id
    ///
    /// # Panics
    /// Panics if the id is empty or only whitespace
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.trim().is_empty(), "SourceId cannot be empty");
        Self(id)
    }

    /// Try to create a new source id, returning None if invalid
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() { None } else { Some(Self(id)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        SourceId::new(s)
    }
}

/// One of the five canonical questions tied to a document (Value Object)
///
/// Question numbers are 1-based in the corpus naming scheme (`Q1`..`Q5`);
/// [`QuestionId::index`] gives the 0-based form used by the partitioner's
/// rotation arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u8);

impl QuestionId {
    /// Number of distinct questions per document
    pub const COUNT: u8 = 5;

    /// Create a question id from a 1-based number
    ///
    /// # Panics
    /// Panics if `number` is not in `1..=5`
    pub fn new(number: u8) -> Self {
        Self::try_new(number).expect("question number must be in 1..=5")
    }

    /// Try to create a question id, returning None for numbers outside 1..=5
    pub fn try_new(number: u8) -> Option<Self> {
        (1..=Self::COUNT).contains(&number).then_some(Self(number))
    }

    /// All five question ids in ascending order
    pub fn all() -> [QuestionId; 5] {
        [Self(1), Self(2), Self(3), Self(4), Self(5)]
    }

    /// 1-based question number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// 0-based index, used for rotation arithmetic
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// Identifier of one evaluator (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluatorId(String);

impl EvaluatorId {
    /// Create a new evaluator id
    ///
    /// # Panics
    /// Panics if the id is empty or only whitespace
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.trim().is_empty(), "EvaluatorId cannot be empty");
        Self(id)
    }

    /// Try to create a new evaluator id, returning None if invalid
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() { None } else { Some(Self(id)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EvaluatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EvaluatorId {
    fn from(s: &str) -> Self {
        EvaluatorId::new(s)
    }
}

/// Opaque blind token shown to evaluators in place of any source-revealing
/// label (Value Object)
///
/// Carries no decodable relationship to source, question or display order.
/// Minted exclusively by [`crate::assignment::blind::BlindIdMinter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlindId(String);

impl BlindId {
    pub(crate) fn from_token(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlindId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_id_creation() {
        let id = SourceId::new("2302.03287v3.pdf");
        assert_eq!(id.as_str(), "2302.03287v3.pdf");
    }

    #[test]
    #[should_panic]
    fn test_empty_source_id_panics() {
        SourceId::new("  ");
    }

    #[test]
    fn test_question_id_range() {
        assert!(QuestionId::try_new(0).is_none());
        assert!(QuestionId::try_new(6).is_none());
        assert_eq!(QuestionId::try_new(3).map(|q| q.index()), Some(2));
    }

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId::new(4).to_string(), "Q4");
    }

    #[test]
    fn test_question_id_all_in_order() {
        let numbers: Vec<u8> = QuestionId::all().iter().map(|q| q.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_evaluator_id_from_str() {
        let id: EvaluatorId = "annotator1".into();
        assert_eq!(id.as_str(), "annotator1");
    }

    #[test]
    fn test_evaluator_id_try_new_rejects_blank_names() {
        assert!(EvaluatorId::try_new("").is_none());
        assert!(EvaluatorId::try_new("   ").is_none());
        assert_eq!(
            EvaluatorId::try_new("alice").map(|e| e.as_str().to_string()),
            Some("alice".to_string())
        );
    }
}
