//! Consultation error types

use crate::advisor::AdvisorId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a consultation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A per-advisor call exceeded the configured timeout
    Timeout,
    /// Transport or connectivity failure surfaced by the responder
    NetworkError,
    /// Invalid input to response generation (e.g. empty prompt)
    PersonaError,
    /// Uncategorized, including "all advisors failed" batch errors
    Unknown,
}

impl ErrorKind {
    /// Classify an opaque error message by substring inspection.
    ///
    /// Only used at the boundary where an external failure carries no
    /// structured category of its own. Typed responder errors map directly
    /// instead.
    pub fn classify_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("timeout") || lower.contains("timed out") {
            ErrorKind::Timeout
        } else if lower.contains("network")
            || lower.contains("fetch")
            || lower.contains("connection")
        {
            ErrorKind::NetworkError
        } else if lower.contains("persona") {
            ErrorKind::PersonaError
        } else {
            ErrorKind::Unknown
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Timeout => write!(f, "TIMEOUT"),
            ErrorKind::NetworkError => write!(f, "NETWORK_ERROR"),
            ErrorKind::PersonaError => write!(f, "PERSONA_ERROR"),
            ErrorKind::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A consultation failure, scoped either to one advisor or to a whole batch.
///
/// `advisor_id` is `None` for batch-level errors (the sentinel case).
/// Errors are never silently dropped: a partial-failure dispatch logs them
/// and returns them out-of-band; a total failure propagates one batch error.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationError {
    /// The advisor this error is scoped to, or `None` for batch-level
    pub advisor_id: Option<AdvisorId>,
    pub kind: ErrorKind,
    pub message: String,
}

impl ConsultationError {
    /// Create an error scoped to a single advisor
    pub fn for_advisor(advisor_id: AdvisorId, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            advisor_id: Some(advisor_id),
            kind,
            message: message.into(),
        }
    }

    /// Create a batch-level error (no advisor scope)
    pub fn batch(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            advisor_id: None,
            kind,
            message: message.into(),
        }
    }

    /// Convenience constructor for a per-advisor timeout
    pub fn timeout(advisor_id: AdvisorId, timeout_ms: u64) -> Self {
        Self::for_advisor(
            advisor_id,
            ErrorKind::Timeout,
            format!("call exceeded {timeout_ms}ms timeout"),
        )
    }

    /// Whether this error is batch-level rather than advisor-scoped
    pub fn is_batch(&self) -> bool {
        self.advisor_id.is_none()
    }

    fn scope(&self) -> &str {
        match &self.advisor_id {
            Some(id) => id.as_str(),
            None => "batch",
        }
    }
}

impl std::fmt::Display for ConsultationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.kind, self.scope(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_timeout_message() {
        assert_eq!(
            ErrorKind::classify_message("request timed out"),
            ErrorKind::Timeout
        );
        assert_eq!(
            ErrorKind::classify_message("Timeout after 30s"),
            ErrorKind::Timeout
        );
    }

    #[test]
    fn test_classify_network_message() {
        assert_eq!(
            ErrorKind::classify_message("failed to fetch"),
            ErrorKind::NetworkError
        );
        assert_eq!(
            ErrorKind::classify_message("connection refused"),
            ErrorKind::NetworkError
        );
        assert_eq!(
            ErrorKind::classify_message("network unreachable"),
            ErrorKind::NetworkError
        );
    }

    #[test]
    fn test_classify_persona_and_unknown() {
        assert_eq!(
            ErrorKind::classify_message("persona rejected prompt"),
            ErrorKind::PersonaError
        );
        assert_eq!(
            ErrorKind::classify_message("something odd"),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_advisor_scoped_display() {
        let err = ConsultationError::timeout(AdvisorId::new("adv-1"), 5000);
        assert_eq!(
            err.to_string(),
            "TIMEOUT [adv-1]: call exceeded 5000ms timeout"
        );
        assert!(!err.is_batch());
    }

    #[test]
    fn test_batch_display() {
        let err = ConsultationError::batch(ErrorKind::Unknown, "all advisors failed");
        assert_eq!(err.to_string(), "UNKNOWN [batch]: all advisors failed");
        assert!(err.is_batch());
    }
}
