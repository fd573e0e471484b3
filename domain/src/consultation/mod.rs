//! Consultation response value objects

pub mod response;

pub use response::{AdvisorResponse, ResponseSet};
