//! Infrastructure layer for advisor-panel
//!
//! Concrete adapters behind the application ports: the template-engine
//! persona responder and the file configuration loader.

pub mod config;
pub mod responder;

pub use config::{AdvisorEntry, ConfigLoader, FileConfig, PanelConfig};
pub use responder::{FixedSelector, HashSelector, TemplateResponder, TemplateSelector};
