//! Application layer for advisor-panel
//!
//! Use cases and ports: the orchestration pipeline lives here, between the
//! pure domain logic and the infrastructure adapters. The layer depends on
//! the [`PersonaResponder`] port and never on a concrete responder.

pub mod config;
pub mod ports;
pub mod use_cases;

pub use config::{ServiceConfig, ServiceConfigPatch, SharedServiceConfig};
pub use ports::{PersonaResponder, ResponderError};
pub use use_cases::{ConsultationOrchestrator, ConsultationSession, DispatchOutcome};
