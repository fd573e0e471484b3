//! Cross-response extraction: domain labels, key insights, common themes,
//! and per-advisor perspectives.
//!
//! Pure text heuristics over completed responses — no I/O, no session
//! state, just pattern matching.

use crate::consultation::AdvisorResponse;

/// Words that mark a sentence as carrying an actionable insight
pub const INSIGHT_MARKERS: &[&str] = &[
    "recommend",
    "important",
    "key",
    "critical",
    "essential",
    "should",
    "must",
];

/// Domain-agnostic signal words scanned for cross-advisor themes
pub const THEME_SIGNALS: &[&str] = &[
    "safety",
    "evidence",
    "approach",
    "compliance",
    "quality",
    "data",
    "research",
    "cost",
    "risk",
    "growth",
    "trust",
    "community",
];

/// Minimum sentence length considered for insight extraction
const MIN_INSIGHT_SENTENCE_LEN: usize = 20;

/// Prefix length used to deduplicate near-identical insights
const INSIGHT_DEDUP_PREFIX: usize = 30;

const MAX_INSIGHTS: usize = 5;
const MAX_THEMES: usize = 3;

/// Map a persona's expertise text to a human-readable domain label
/// by substring families; unmatched expertise reads as general advisory.
pub fn infer_domain_label(expertise: &str) -> &'static str {
    let lower = expertise.to_lowercase();
    let matches = |keys: &[&str]| keys.iter().any(|k| lower.contains(k));

    if matches(&["clinical", "regulatory", "trial", "pharma"]) {
        "Clinical Research"
    } else if matches(&["educat", "teach", "curriculum", "learning"]) {
        "Education & Training"
    } else if matches(&["herbal", "remed", "natural", "holistic", "supplement", "wellness"]) {
        "Natural Remedies"
    } else if matches(&["product", "market", "brand", "launch", "strategy", "startup"]) {
        "Product Strategy"
    } else {
        "General Advisory"
    }
}

/// A signal word judged common to a majority of advisors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub signal: String,
    /// Names of the advisors who raised this signal
    pub advisors: Vec<String>,
}

fn split_sentences(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Pull the first marked sentence from each advisor's response.
///
/// Sentences shorter than [`MIN_INSIGHT_SENTENCE_LEN`] characters or without
/// an insight marker are skipped; near-duplicates (same leading
/// [`INSIGHT_DEDUP_PREFIX`] characters) collapse to the first occurrence.
/// Capped at [`MAX_INSIGHTS`].
pub fn extract_key_insights(responses: &[AdvisorResponse]) -> Vec<String> {
    let mut seen_prefixes: Vec<String> = Vec::new();
    let mut insights = Vec::new();

    for response in responses {
        let candidate = split_sentences(&response.content).find(|sentence| {
            sentence.len() > MIN_INSIGHT_SENTENCE_LEN && {
                let lower = sentence.to_lowercase();
                INSIGHT_MARKERS.iter().any(|m| lower.contains(m))
            }
        });

        if let Some(sentence) = candidate {
            let prefix: String = sentence
                .to_lowercase()
                .chars()
                .take(INSIGHT_DEDUP_PREFIX)
                .collect();
            if seen_prefixes.contains(&prefix) {
                continue;
            }
            seen_prefixes.push(prefix);
            insights.push(format!("{}: {}", response.persona.name, sentence));
            if insights.len() == MAX_INSIGHTS {
                break;
            }
        }
    }

    insights
}

/// Find signal words used by enough distinct advisors to count as a theme.
///
/// The strict threshold is `max(2, ceil(n/2))` distinct advisors; when the
/// strict pass yields nothing the threshold relaxes to two. Capped at
/// [`MAX_THEMES`].
pub fn detect_common_themes(responses: &[AdvisorResponse]) -> Vec<Theme> {
    let strict = 2usize.max(responses.len().div_ceil(2));

    let candidates: Vec<Theme> = THEME_SIGNALS
        .iter()
        .filter_map(|signal| {
            let advisors: Vec<String> = responses
                .iter()
                .filter(|r| r.content.to_lowercase().contains(signal))
                .map(|r| r.persona.name.clone())
                .collect();
            if advisors.len() >= 2 {
                Some(Theme {
                    signal: signal.to_string(),
                    advisors,
                })
            } else {
                None
            }
        })
        .collect();

    let mut themes: Vec<Theme> = candidates
        .iter()
        .filter(|t| t.advisors.len() >= strict)
        .cloned()
        .collect();
    if themes.is_empty() {
        themes = candidates;
    }
    themes.truncate(MAX_THEMES);
    themes
}

/// One domain-flavored sentence per advisor, always exactly as many
/// entries as there are responses.
pub fn unique_perspectives(responses: &[AdvisorResponse]) -> Vec<String> {
    responses
        .iter()
        .map(|response| {
            let name = &response.persona.name;
            match infer_domain_label(&response.persona.expertise) {
                "Clinical Research" => format!(
                    "{name} approaches the question through a clinical lens, weighing evidence and patient safety."
                ),
                "Education & Training" => format!(
                    "{name} frames the question around how people learn and how knowledge transfers."
                ),
                "Natural Remedies" => format!(
                    "{name} takes a holistic angle, favoring gentle and natural interventions."
                ),
                "Product Strategy" => format!(
                    "{name} reads the question commercially, focused on market fit and execution."
                ),
                _ => format!("{name} offers a generalist view that balances the other perspectives."),
            }
        })
        .collect()
}
