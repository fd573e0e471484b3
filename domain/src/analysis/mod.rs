//! Deterministic, lexicon-based question analysis

pub mod analyzer;
pub mod lexicon;
pub mod types;

pub use analyzer::QuestionAnalyzer;
pub use types::{
    AnalysisContext, Complexity, DetectedDomain, QuestionAnalysis, QuestionContext, QuestionType,
    Sentiment, Urgency,
};
