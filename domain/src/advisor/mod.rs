//! Advisors, their domains, and derived personas

pub mod domain;
pub mod entities;
pub mod persona;

pub use domain::Domain;
pub use entities::{Advisor, AdvisorId};
pub use persona::{MAX_SPECIALIZATIONS, PersonaConfig};
