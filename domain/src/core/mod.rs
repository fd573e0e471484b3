//! Core domain types shared by every module

pub mod error;
pub mod question;

pub use error::{ConsultationError, ErrorKind};
pub use question::Question;
