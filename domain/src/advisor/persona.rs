//! Persona derivation
//!
//! A [`PersonaConfig`] is the ephemeral, read-only view of an advisor used
//! to shape one generated response. It is rebuilt fresh for every call and
//! snapshotted onto the resulting `AdvisorResponse`, never persisted on its
//! own.

use super::entities::Advisor;
use crate::analysis::lexicon::content_tokens;
use serde::{Deserialize, Serialize};

/// Maximum number of specialization keywords carried by a persona
pub const MAX_SPECIALIZATIONS: usize = 5;

/// Derived presentation of an advisor for one response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaConfig {
    pub name: String,
    pub expertise: String,
    pub background: String,
    /// Domain-specific tone string, from the fixed per-domain lookup
    pub tone: String,
    /// Up to [`MAX_SPECIALIZATIONS`] keywords extracted from the expertise text
    pub specializations: Vec<String>,
}

impl PersonaConfig {
    /// Build a persona view for one advisor.
    ///
    /// Specialization keywords use the same tokenizing rule as question
    /// analysis (stop words and short tokens dropped) without the
    /// domain-dictionary ranking step.
    pub fn for_advisor(advisor: &Advisor) -> Self {
        let mut specializations = Vec::new();
        for token in content_tokens(&advisor.expertise) {
            if specializations.contains(&token) {
                continue;
            }
            specializations.push(token);
            if specializations.len() == MAX_SPECIALIZATIONS {
                break;
            }
        }

        Self {
            name: advisor.name.clone(),
            expertise: advisor.expertise.clone(),
            background: advisor.background.clone(),
            tone: advisor.domain.tone().to_string(),
            specializations,
        }
    }
}
