//! Question analysis result types

use crate::advisor::Domain;
use serde::{Deserialize, Serialize};

/// Category tag assigned to a question by the ordered rule list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Ideation,
    Strategy,
    Technical,
    Clinical,
    Educational,
    Remedial,
    General,
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuestionType::Ideation => "ideation",
            QuestionType::Strategy => "strategy",
            QuestionType::Technical => "technical",
            QuestionType::Clinical => "clinical",
            QuestionType::Educational => "educational",
            QuestionType::Remedial => "remedial",
            QuestionType::General => "general",
        };
        write!(f, "{s}")
    }
}

/// Domain classification of a question.
///
/// `Single` only when exactly one domain's keyword score strictly exceeds
/// all others; ties and zero-score questions both resolve to `Multi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectedDomain {
    Single(Domain),
    #[serde(rename = "multi-domain")]
    Multi,
}

impl DetectedDomain {
    pub fn is_single(&self) -> bool {
        matches!(self, DetectedDomain::Single(_))
    }
}

impl std::fmt::Display for DetectedDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedDomain::Single(domain) => write!(f, "{domain}"),
            DetectedDomain::Multi => write!(f, "multi-domain"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    High,
}

/// Caller-supplied session context carried into an analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionContext {
    pub session_id: Option<String>,
    #[serde(default)]
    pub previous_questions: Vec<String>,
    pub user_intent: Option<String>,
}

/// Context block attached to an analysis when input context was supplied.
///
/// The caller's fields pass through unchanged; follow-up indicators and
/// related topics are derived from the question itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisContext {
    pub session_id: Option<String>,
    #[serde(default)]
    pub previous_questions: Vec<String>,
    pub user_intent: Option<String>,
    #[serde(default)]
    pub follow_up_indicators: Vec<String>,
    #[serde(default)]
    pub related_topics: Vec<String>,
}

/// Structured analysis of one question.
///
/// Computed fresh per question; stateless apart from the optional
/// carried-in context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnalysis {
    pub question_type: QuestionType,
    pub domain: DetectedDomain,
    /// Extracted keywords, domain-relevant ones ranked first
    pub keywords: Vec<String>,
    /// Classification confidence, always within [0, 1]
    pub confidence: f64,
    pub complexity: Complexity,
    pub sentiment: Sentiment,
    pub urgency: Urgency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<AnalysisContext>,
}
