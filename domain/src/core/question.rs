//! Validated question prompt

use serde::{Deserialize, Serialize};

/// A validated, non-empty prompt addressed to the advisor panel.
///
/// Construction goes through [`Question::parse`], so holding a `Question`
/// is proof the prompt carries content. Callers that accept raw strings
/// parse at the boundary and work with the typed value from there on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Validate a raw prompt; whitespace-only input is rejected.
    pub fn parse(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_content_verbatim() {
        let q = Question::parse("Should we run a second trial arm?").unwrap();
        assert_eq!(q.content(), "Should we run a second trial arm?");
        assert_eq!(q.to_string(), "Should we run a second trial arm?");
    }

    #[test]
    fn test_parse_rejects_empty_and_whitespace() {
        assert!(Question::parse("").is_none());
        assert!(Question::parse("   \t\n").is_none());
    }

    #[test]
    fn test_into_content_round_trips() {
        let q = Question::parse("What dosage is safe?").unwrap();
        assert_eq!(q.into_content(), "What dosage is safe?");
    }
}
