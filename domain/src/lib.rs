//! Domain layer for advisor-panel
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Consultation
//!
//! A consultation dispatches one question to a panel of advisors and
//! collects their independent answers:
//!
//! - **Analysis**: deterministic, lexicon-based classification of the question
//! - **Personas**: each advisor answers through a derived persona view
//! - **Synthesis**: completed responses fold into one consensus report
//!
//! ## Partial failure
//!
//! A batch tolerates individual advisor failures; only a batch where every
//! advisor fails is an error.

pub mod advisor;
pub mod analysis;
pub mod consultation;
pub mod core;
pub mod summary;

// Re-export commonly used types
pub use advisor::{Advisor, AdvisorId, Domain, PersonaConfig};
pub use analysis::{
    AnalysisContext, Complexity, DetectedDomain, QuestionAnalysis, QuestionAnalyzer,
    QuestionContext, QuestionType, Sentiment, Urgency,
};
pub use consultation::{AdvisorResponse, ResponseSet};
pub use crate::core::{ConsultationError, ErrorKind, Question};
pub use summary::{SummarySynthesizer, Theme};
