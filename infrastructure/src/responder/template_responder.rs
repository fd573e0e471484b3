//! Template-engine persona responder
//!
//! A local, deterministic [`PersonaResponder`] implementation. Template
//! variant choice goes through an injectable [`TemplateSelector`] so tests
//! can pin exact output; there is no unseeded global randomness.

use super::templates;
use async_trait::async_trait;
use panel_application::{PersonaResponder, ResponderError};
use panel_domain::{Advisor, PersonaConfig};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Strategy for picking one template variant out of a family
pub trait TemplateSelector: Send + Sync {
    /// Return an index in `0..variants`; `variants` is never zero
    fn select(&self, advisor_id: &str, prompt: &str, variants: usize) -> usize;
}

/// Deterministic default: FNV-1a over advisor id and prompt
#[derive(Debug, Default, Clone, Copy)]
pub struct HashSelector;

impl TemplateSelector for HashSelector {
    fn select(&self, advisor_id: &str, prompt: &str, variants: usize) -> usize {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in advisor_id.bytes().chain(prompt.bytes()) {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        (hash % variants as u64) as usize
    }
}

/// Always picks the same variant; for tests asserting exact output
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn select(&self, _advisor_id: &str, _prompt: &str, variants: usize) -> usize {
        self.0.min(variants - 1)
    }
}

/// Template-backed responder with optional simulated latency
pub struct TemplateResponder<S: TemplateSelector = HashSelector> {
    selector: S,
    latency: Duration,
}

impl TemplateResponder<HashSelector> {
    pub fn new() -> Self {
        Self::with_selector(HashSelector)
    }
}

impl Default for TemplateResponder<HashSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TemplateSelector> TemplateResponder<S> {
    pub fn with_selector(selector: S) -> Self {
        Self {
            selector,
            latency: Duration::ZERO,
        }
    }

    /// Simulate generation latency before answering
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl<S: TemplateSelector> PersonaResponder for TemplateResponder<S> {
    async fn respond(
        &self,
        advisor: &Advisor,
        prompt: &str,
        persona: &PersonaConfig,
        session_context: Option<&str>,
    ) -> Result<String, ResponderError> {
        if prompt.trim().is_empty() {
            return Err(ResponderError::EmptyPrompt);
        }
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        let variants = templates::variants(advisor.domain);
        let index = self.selector.select(advisor.id.as_str(), prompt, variants.len());
        debug!(advisor = %advisor.id, index, "rendering template response");

        let mut content = templates::render(variants[index], persona, prompt.trim());
        if let Some(context) = session_context {
            content.push_str(&format!(
                "\n\n(Taking the earlier discussion into account: {context})"
            ));
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::Domain;

    fn advisor() -> Advisor {
        Advisor::new(
            "adv-prod",
            "Iris Chen",
            "product strategy and pricing",
            "Launched three startups",
            Domain::Product,
        )
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected() {
        let responder = TemplateResponder::new();
        let advisor = advisor();
        let persona = PersonaConfig::for_advisor(&advisor);
        let err = responder
            .respond(&advisor, "  ", &persona, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ResponderError::EmptyPrompt));
    }

    #[tokio::test]
    async fn test_response_reflects_persona() {
        let responder = TemplateResponder::with_selector(FixedSelector(0));
        let advisor = advisor();
        let persona = PersonaConfig::for_advisor(&advisor);
        let content = responder
            .respond(&advisor, "When should we launch?", &persona, None)
            .await
            .unwrap();
        assert!(content.contains("Iris Chen"));
        assert!(content.contains("When should we launch?"));
    }

    #[tokio::test]
    async fn test_deterministic_selection() {
        let responder = TemplateResponder::new();
        let advisor = advisor();
        let persona = PersonaConfig::for_advisor(&advisor);
        let first = responder
            .respond(&advisor, "Same question", &persona, None)
            .await
            .unwrap();
        let second = responder
            .respond(&advisor, "Same question", &persona, None)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_session_context_appended() {
        let responder = TemplateResponder::with_selector(FixedSelector(1));
        let advisor = advisor();
        let persona = PersonaConfig::for_advisor(&advisor);
        let content = responder
            .respond(&advisor, "Pricing?", &persona, Some("we discussed freemium"))
            .await
            .unwrap();
        assert!(content.contains("we discussed freemium"));
    }

    #[test]
    fn test_hash_selector_in_range() {
        for prompt in ["a", "b", "a longer prompt", ""] {
            let index = HashSelector.select("adv-1", prompt, 3);
            assert!(index < 3);
        }
    }
}
