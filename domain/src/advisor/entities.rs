//! Advisor entity and identity

use super::domain::Domain;
use serde::{Deserialize, Serialize};

/// Unique identifier for an advisor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisorId(String);

impl AdvisorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AdvisorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AdvisorId {
    fn from(s: &str) -> Self {
        AdvisorId::new(s)
    }
}

impl From<String> for AdvisorId {
    fn from(s: String) -> Self {
        AdvisorId::new(s)
    }
}

/// A panel member that questions are addressed to.
///
/// Immutable for the duration of a consultation; owned by the caller and
/// referenced (not copied) by the orchestrator. The persona tone is derived
/// from `domain` on demand, never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisor {
    pub id: AdvisorId,
    pub name: String,
    pub expertise: String,
    pub background: String,
    pub domain: Domain,
}

impl Advisor {
    pub fn new(
        id: impl Into<AdvisorId>,
        name: impl Into<String>,
        expertise: impl Into<String>,
        background: impl Into<String>,
        domain: Domain,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            expertise: expertise.into(),
            background: background.into(),
            domain,
        }
    }
}
