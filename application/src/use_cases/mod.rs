//! Use cases built on the ports

pub mod consultation;
pub mod session;

pub use consultation::{ConsultationOrchestrator, DispatchOutcome};
pub use session::ConsultationSession;
