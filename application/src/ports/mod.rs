//! Ports (interfaces) consumed by the application layer

pub mod persona_responder;

pub use persona_responder::{PersonaResponder, ResponderError};
