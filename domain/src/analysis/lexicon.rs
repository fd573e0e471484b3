//! Fixed word lists and tokenizing rules for question analysis.
//!
//! The analyzer is a deterministic, lexicon-based heuristic, not a
//! statistical model. Everything it knows about language lives in the
//! tables below.

/// Words carrying no classification signal, dropped during tokenization
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "for", "nor", "with", "into", "onto", "from", "this",
    "that", "these", "those", "what", "when", "where", "which", "while", "who", "whom", "how",
    "why", "are", "is", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "can", "may", "might", "must", "shall", "about",
    "above", "after", "before", "between", "over", "under", "there", "their", "they", "them",
    "then", "than", "your", "yours", "ours", "some", "such", "very", "just", "also", "more",
    "most", "much", "many", "each", "every", "other", "another",
];

use super::types::QuestionType;

/// Ordered trigger table for question type categorization.
///
/// The first entry whose triggers appear in the keyword set or raw text
/// wins; the analyzer falls back to [`QuestionType::General`] when nothing
/// matches.
pub const TYPE_TRIGGERS: &[(QuestionType, &[&str])] = &[
    (
        QuestionType::Ideation,
        &["idea", "brainstorm", "creative", "innovative", "concept", "invent"],
    ),
    (
        QuestionType::Strategy,
        &["strategy", "strategic", "plan", "planning", "launch", "roadmap", "positioning", "growth"],
    ),
    (
        QuestionType::Technical,
        &["technical", "implementation", "architecture", "integration", "infrastructure", "system", "code"],
    ),
    (
        QuestionType::Clinical,
        &["clinical", "trial", "patient", "dosage", "regulatory", "efficacy"],
    ),
    (
        QuestionType::Educational,
        &["teach", "teaching", "curriculum", "learning", "course", "workshop", "student"],
    ),
    (
        QuestionType::Remedial,
        &["remedy", "remedies", "herbal", "supplement", "holistic", "tincture"],
    ),
];

/// Words signalling a multi-part or demanding question
pub const COMPLEXITY_MARKERS: &[&str] = &[
    "comprehensive",
    "multi-faceted",
    "multifaceted",
    "interdependent",
    "end-to-end",
    "cross-functional",
    "trade-off",
    "trade-offs",
    "tradeoff",
    "long-term",
    "ecosystem",
    "holistically",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "love",
    "excited",
    "improve",
    "improvement",
    "opportunity",
    "success",
    "successful",
    "benefit",
    "hope",
    "confident",
    "promising",
    "best",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "problem",
    "problems",
    "issue",
    "issues",
    "worried",
    "worry",
    "fail",
    "failure",
    "failing",
    "risk",
    "risks",
    "concern",
    "concerned",
    "bad",
    "struggle",
    "struggling",
    "crisis",
    "afraid",
    "pain",
];

/// Tokens that mark a question as time-pressured
pub const URGENCY_WORDS: &[&str] = &[
    "urgent",
    "urgently",
    "immediate",
    "immediately",
    "asap",
    "emergency",
];

/// Phrases indicating a follow-up to an earlier question
pub const FOLLOW_UP_INDICATORS: &[&str] = &[
    "also",
    "additionally",
    "what about",
    "furthermore",
    "as well",
    "another thing",
    "on top of that",
];

/// Minimum token length kept by [`content_tokens`]
pub const MIN_TOKEN_LEN: usize = 4;

/// Lowercase and split on any non-alphanumeric boundary.
///
/// No filtering: sentiment counting wants the full token stream.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize, then drop stop words and tokens shorter than
/// [`MIN_TOKEN_LEN`] characters.
pub fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.len() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(&t.as_str()))
        .collect()
}
