//! Advisor response value objects

use crate::advisor::{AdvisorId, PersonaConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One advisor's answer to one dispatched prompt.
///
/// Immutable after creation: a retry produces a new `AdvisorResponse` that
/// replaces the old one for that advisor, never a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorResponse {
    pub advisor_id: AdvisorId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Snapshot of the persona used to produce this response
    pub persona: PersonaConfig,
}

impl AdvisorResponse {
    pub fn new(advisor_id: AdvisorId, content: impl Into<String>, persona: PersonaConfig) -> Self {
        Self {
            advisor_id,
            content: content.into(),
            created_at: Utc::now(),
            persona,
        }
    }
}

/// Response collection keyed 1:1 by advisor id, in insertion order.
///
/// Owned by the calling session; enforces the replace-not-append invariant
/// for retries of the same advisor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseSet {
    responses: Vec<AdvisorResponse>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a response, replacing any prior entry for the same advisor
    /// in place (position preserved).
    pub fn upsert(&mut self, response: AdvisorResponse) {
        match self
            .responses
            .iter_mut()
            .find(|r| r.advisor_id == response.advisor_id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
    }

    pub fn get(&self, advisor_id: &AdvisorId) -> Option<&AdvisorResponse> {
        self.responses.iter().find(|r| &r.advisor_id == advisor_id)
    }

    pub fn remove(&mut self, advisor_id: &AdvisorId) -> Option<AdvisorResponse> {
        let index = self
            .responses
            .iter()
            .position(|r| &r.advisor_id == advisor_id)?;
        Some(self.responses.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdvisorResponse> {
        self.responses.iter()
    }

    pub fn as_slice(&self) -> &[AdvisorResponse] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }
}

impl From<Vec<AdvisorResponse>> for ResponseSet {
    fn from(responses: Vec<AdvisorResponse>) -> Self {
        let mut set = ResponseSet::new();
        for response in responses {
            set.upsert(response);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{Advisor, Domain};

    fn response(id: &str, content: &str) -> AdvisorResponse {
        let advisor = Advisor::new(id, "Name", "expertise", "background", Domain::Product);
        AdvisorResponse::new(advisor.id.clone(), content, PersonaConfig::for_advisor(&advisor))
    }

    #[test]
    fn test_upsert_replaces_not_appends() {
        let mut set = ResponseSet::new();
        set.upsert(response("adv-1", "first answer"));
        set.upsert(response("adv-2", "other advisor"));
        set.upsert(response("adv-1", "retried answer"));

        assert_eq!(set.len(), 2);
        let entry = set.get(&"adv-1".into()).unwrap();
        assert_eq!(entry.content, "retried answer");
        // Position preserved after replacement
        assert_eq!(set.as_slice()[0].advisor_id.as_str(), "adv-1");
    }

    #[test]
    fn test_get_missing() {
        let set = ResponseSet::new();
        assert!(set.get(&"nobody".into()).is_none());
    }

    #[test]
    fn test_remove() {
        let mut set = ResponseSet::new();
        set.upsert(response("adv-1", "answer"));
        assert!(set.remove(&"adv-1".into()).is_some());
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_vec_deduplicates() {
        let set = ResponseSet::from(vec![
            response("adv-1", "old"),
            response("adv-1", "new"),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&"adv-1".into()).unwrap().content, "new");
    }
}
