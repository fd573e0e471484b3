//! Persona responder port
//!
//! Defines the interface for turning a prompt into persona-shaped response
//! text. Implementations (adapters) live in the infrastructure layer and may
//! be a template engine or a remote language model; the application layer
//! treats them as opaque and assumes neither success, latency bound, nor
//! determinism.

use async_trait::async_trait;
use panel_domain::{Advisor, ErrorKind, PersonaConfig};
use thiserror::Error;

/// Errors that can occur during response generation.
///
/// Typed variants are preferred; `Other` exists for opaque external
/// failures and is classified by message sniffing only at this boundary.
#[derive(Error, Debug, Clone)]
pub enum ResponderError {
    #[error("persona error: prompt is empty")]
    EmptyPrompt,

    #[error("network error: {0}")]
    Network(String),

    #[error("persona error: {0}")]
    Persona(String),

    #[error("{0}")]
    Other(String),
}

impl ResponderError {
    /// Map this error into the consultation error taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResponderError::EmptyPrompt | ResponderError::Persona(_) => ErrorKind::PersonaError,
            ResponderError::Network(_) => ErrorKind::NetworkError,
            ResponderError::Other(message) => ErrorKind::classify_message(message),
        }
    }
}

/// Gateway for persona response generation
///
/// This port defines how the application layer obtains an advisor's answer.
/// Must reject empty prompts with [`ResponderError::EmptyPrompt`].
#[async_trait]
pub trait PersonaResponder: Send + Sync {
    /// Generate response text for one advisor.
    ///
    /// `persona` is the derived view the response should be shaped by;
    /// `session_context` is optional free-form context carried from the
    /// calling session.
    async fn respond(
        &self,
        advisor: &Advisor,
        prompt: &str,
        persona: &PersonaConfig,
        session_context: Option<&str>,
    ) -> Result<String, ResponderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_variants_map_directly() {
        assert_eq!(ResponderError::EmptyPrompt.kind(), ErrorKind::PersonaError);
        assert_eq!(
            ResponderError::Network("down".into()).kind(),
            ErrorKind::NetworkError
        );
        assert_eq!(
            ResponderError::Persona("bad input".into()).kind(),
            ErrorKind::PersonaError
        );
    }

    #[test]
    fn test_other_falls_back_to_message_sniffing() {
        assert_eq!(
            ResponderError::Other("fetch failed".into()).kind(),
            ErrorKind::NetworkError
        );
        assert_eq!(
            ResponderError::Other("upstream timeout".into()).kind(),
            ErrorKind::Timeout
        );
        assert_eq!(
            ResponderError::Other("mystery".into()).kind(),
            ErrorKind::Unknown
        );
    }
}
