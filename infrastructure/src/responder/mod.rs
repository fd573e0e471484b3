//! Persona responder adapters

pub mod template_responder;
pub mod templates;

pub use template_responder::{FixedSelector, HashSelector, TemplateResponder, TemplateSelector};
