//! Question analyzer
//!
//! Pure, deterministic classification of an incoming question: type,
//! domain, keywords, confidence, complexity, sentiment, and urgency.
//! Never fails; empty or unrecognizable input degrades to a low-confidence
//! general/multi-domain result.

use super::lexicon::{
    COMPLEXITY_MARKERS, FOLLOW_UP_INDICATORS, NEGATIVE_WORDS, POSITIVE_WORDS, TYPE_TRIGGERS,
    URGENCY_WORDS, content_tokens, tokenize,
};
use super::types::{
    AnalysisContext, Complexity, DetectedDomain, QuestionAnalysis, QuestionContext, QuestionType,
    Sentiment, Urgency,
};
use crate::advisor::Domain;

/// Maximum number of keywords carried by an analysis
const MAX_KEYWORDS: usize = 10;

/// Word-count threshold below which a question reads as low complexity
const LOW_COMPLEXITY_WORDS: usize = 12;

/// Word-count threshold at which a question reads as high complexity
const HIGH_COMPLEXITY_WORDS: usize = 25;

/// Base classification confidence before adjustments
const BASE_CONFIDENCE: f64 = 0.4;

/// Stateless question analyzer
pub struct QuestionAnalyzer;

impl QuestionAnalyzer {
    /// Analyze a question, optionally carrying session context through.
    ///
    /// The output context block is present exactly when input context was
    /// supplied; its caller-owned fields pass through unchanged.
    pub fn analyze(question: &str, context: Option<QuestionContext>) -> QuestionAnalysis {
        let raw_lower = question.to_lowercase();
        let all_tokens = tokenize(question);
        let tokens = content_tokens(question);
        let word_count = question.split_whitespace().count();

        let keywords = extract_keywords(&tokens);
        let domain = identify_domain(&tokens);
        let question_type = categorize(&keywords, &raw_lower);
        let confidence = score_confidence(&keywords, domain.is_single(), word_count);
        let complexity = assess_complexity(&raw_lower, word_count);
        let sentiment = assess_sentiment(&all_tokens);
        let urgency = assess_urgency(question, &all_tokens);

        let context = context.map(|ctx| AnalysisContext {
            session_id: ctx.session_id,
            previous_questions: ctx.previous_questions,
            user_intent: ctx.user_intent,
            follow_up_indicators: follow_up_indicators(&raw_lower),
            related_topics: related_topics(&keywords),
        });

        QuestionAnalysis {
            question_type,
            domain,
            keywords,
            confidence,
            complexity,
            sentiment,
            urgency,
            context,
        }
    }
}

fn is_domain_keyword(token: &str) -> bool {
    Domain::ALL.iter().any(|d| d.contains(token))
}

/// Rank domain-dictionary members ahead of generic tokens, deduplicated,
/// capped at [`MAX_KEYWORDS`].
fn extract_keywords(tokens: &[String]) -> Vec<String> {
    let mut domain_hits = Vec::new();
    let mut generic = Vec::new();
    for token in tokens {
        if domain_hits.contains(token) || generic.contains(token) {
            continue;
        }
        if is_domain_keyword(token) {
            domain_hits.push(token.clone());
        } else {
            generic.push(token.clone());
        }
    }
    domain_hits.extend(generic);
    domain_hits.truncate(MAX_KEYWORDS);
    domain_hits
}

/// Score every domain by dictionary hits over the question tokens.
///
/// A single domain wins only with a strictly greater nonzero score than
/// every other; ties and zero-score questions both resolve to multi-domain
/// with no further tie-breaking.
fn identify_domain(tokens: &[String]) -> DetectedDomain {
    let scores: Vec<(Domain, usize)> = Domain::ALL
        .iter()
        .map(|d| (*d, tokens.iter().filter(|t| d.contains(t)).count()))
        .collect();

    let best = scores.iter().map(|(_, s)| *s).max().unwrap_or(0);
    if best == 0 {
        return DetectedDomain::Multi;
    }

    let mut leaders = scores.iter().filter(|(_, s)| *s == best);
    let leader = leaders.next().map(|(d, _)| *d);
    match (leader, leaders.next()) {
        (Some(domain), None) => DetectedDomain::Single(domain),
        _ => DetectedDomain::Multi,
    }
}

/// First trigger rule hit wins; default `General`.
fn categorize(keywords: &[String], raw_lower: &str) -> QuestionType {
    for (question_type, triggers) in TYPE_TRIGGERS {
        let hit = triggers
            .iter()
            .any(|t| keywords.iter().any(|k| k == t) || raw_lower.contains(t));
        if hit {
            return *question_type;
        }
    }
    QuestionType::General
}

/// Bounded confidence: rewarded for domain-keyword density, an unambiguous
/// single-domain match, and length; penalized for very short or
/// keyword-free input.
fn score_confidence(keywords: &[String], single_domain: bool, word_count: usize) -> f64 {
    let domain_hits = keywords.iter().filter(|k| is_domain_keyword(k)).count();

    let mut confidence = BASE_CONFIDENCE;
    confidence += 0.05 * domain_hits.min(5) as f64;
    if single_domain {
        confidence += 0.15;
    }
    if word_count >= 8 {
        confidence += 0.10;
    }
    if word_count < 5 {
        confidence -= 0.15;
    }
    if keywords.is_empty() {
        confidence -= 0.10;
    }
    confidence.clamp(0.0, 1.0)
}

fn assess_complexity(raw_lower: &str, word_count: usize) -> Complexity {
    let markers = COMPLEXITY_MARKERS
        .iter()
        .filter(|m| raw_lower.contains(*m))
        .count();

    if word_count >= HIGH_COMPLEXITY_WORDS || markers >= 2 {
        Complexity::High
    } else if word_count < LOW_COMPLEXITY_WORDS && markers == 0 {
        Complexity::Low
    } else {
        Complexity::Medium
    }
}

/// Lexicon polarity count; ties resolve to neutral
fn assess_sentiment(tokens: &[String]) -> Sentiment {
    let positive = tokens
        .iter()
        .filter(|t| POSITIVE_WORDS.contains(&t.as_str()))
        .count();
    let negative = tokens
        .iter()
        .filter(|t| NEGATIVE_WORDS.contains(&t.as_str()))
        .count();

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

/// Urgency markers: an urgency word, an ALL-CAPS emphasis word, or dense
/// exclamation marks.
fn assess_urgency(raw: &str, tokens: &[String]) -> Urgency {
    let has_urgency_word = tokens.iter().any(|t| URGENCY_WORDS.contains(&t.as_str()));
    let has_caps_emphasis = raw
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphabetic()))
        .any(|w| w.len() >= 4 && w.chars().all(|c| c.is_ascii_uppercase()));
    let exclamations = raw.matches('!').count();

    if has_urgency_word || has_caps_emphasis || exclamations >= 2 {
        Urgency::High
    } else {
        Urgency::Normal
    }
}

fn follow_up_indicators(raw_lower: &str) -> Vec<String> {
    FOLLOW_UP_INDICATORS
        .iter()
        .filter(|phrase| raw_lower.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect()
}

/// Domain-relevant keywords double as related topics; fall back to the
/// leading keywords when none are domain-relevant.
fn related_topics(keywords: &[String]) -> Vec<String> {
    let domain_relevant: Vec<String> = keywords
        .iter()
        .filter(|k| is_domain_keyword(k))
        .take(3)
        .cloned()
        .collect();
    if !domain_relevant.is_empty() {
        return domain_relevant;
    }
    keywords.iter().take(3).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_always_bounded() {
        let samples = [
            "",
            "?",
            "help",
            "Should we run a comprehensive multi-faceted clinical trial with patient safety \
             monitoring, dosage escalation, regulatory review, and long-term efficacy tracking \
             across several sites?",
            "URGENT: need immediate help with product launch strategy!",
        ];
        for sample in samples {
            let analysis = QuestionAnalyzer::analyze(sample, None);
            assert!(
                (0.0..=1.0).contains(&analysis.confidence),
                "confidence out of range for {sample:?}"
            );
        }
    }

    #[test]
    fn test_empty_question_degrades_gracefully() {
        let analysis = QuestionAnalyzer::analyze("", None);
        assert_eq!(analysis.domain, DetectedDomain::Multi);
        assert!(analysis.keywords.is_empty());
        assert!(analysis.confidence < 0.6);
        assert_eq!(analysis.question_type, QuestionType::General);
    }

    #[test]
    fn test_unrecognized_tokens_stay_multi_domain() {
        let analysis = QuestionAnalyzer::analyze("is it so", None);
        assert_eq!(analysis.domain, DetectedDomain::Multi);
        assert!(analysis.keywords.is_empty());
        assert!(analysis.confidence < 0.6);
    }

    #[test]
    fn test_urgent_product_question() {
        let analysis =
            QuestionAnalyzer::analyze("URGENT: need immediate help with product launch strategy!", None);
        assert_eq!(analysis.urgency, Urgency::High);
        assert_eq!(analysis.domain, DetectedDomain::Single(Domain::Product));
        assert_eq!(analysis.question_type, QuestionType::Strategy);
    }

    #[test]
    fn test_single_dominant_domain_high_confidence() {
        let analysis = QuestionAnalyzer::analyze(
            "How should we structure the clinical trial protocol so patient safety and dosage \
             escalation satisfy regulatory review?",
            None,
        );
        assert_eq!(analysis.domain, DetectedDomain::Single(Domain::Clinical));
        assert!(analysis.confidence > 0.8, "got {}", analysis.confidence);
    }

    #[test]
    fn test_tied_domains_resolve_to_multi() {
        let analysis =
            QuestionAnalyzer::analyze("Compare herbal remedies against clinical treatment", None);
        assert_eq!(analysis.domain, DetectedDomain::Multi);
    }

    #[test]
    fn test_keywords_rank_domain_hits_first_and_cap() {
        let analysis = QuestionAnalyzer::analyze(
            "Considering budget realities, should the product launch wait until branding, \
             pricing, positioning, audience research, channel mixes, partner outreach and \
             onboarding flows settle?",
            None,
        );
        assert!(analysis.keywords.len() <= 10);
        // Domain-dictionary members sort ahead of generic tokens
        assert!(is_domain_keyword(&analysis.keywords[0]));
        assert!(analysis.keywords.contains(&"product".to_string()));
    }

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(
            QuestionAnalyzer::analyze("Is this safe?", None).complexity,
            Complexity::Low
        );
        assert_eq!(
            QuestionAnalyzer::analyze(
                "We need a comprehensive, long-term rollout plan",
                None
            )
            .complexity,
            Complexity::High
        );
        let long = "word ".repeat(26);
        assert_eq!(
            QuestionAnalyzer::analyze(&long, None).complexity,
            Complexity::High
        );
        assert_eq!(
            QuestionAnalyzer::analyze(
                "What would a comprehensive onboarding program look like?",
                None
            )
            .complexity,
            Complexity::Medium
        );
    }

    #[test]
    fn test_sentiment_polarity() {
        assert_eq!(
            QuestionAnalyzer::analyze("Is this a great opportunity to improve retention?", None)
                .sentiment,
            Sentiment::Positive
        );
        assert_eq!(
            QuestionAnalyzer::analyze("I am worried this launch will fail", None).sentiment,
            Sentiment::Negative
        );
        assert_eq!(
            QuestionAnalyzer::analyze("Where should the workshop happen?", None).sentiment,
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_urgency_from_exclamations() {
        let analysis = QuestionAnalyzer::analyze("Ship it now!! Please!", None);
        assert_eq!(analysis.urgency, Urgency::High);
    }

    #[test]
    fn test_context_carry_through() {
        let context = QuestionContext {
            session_id: Some("sess-42".into()),
            previous_questions: vec!["How do we price?".into()],
            user_intent: Some("launch planning".into()),
        };
        let analysis = QuestionAnalyzer::analyze(
            "What about the product launch timeline?",
            Some(context),
        );
        let ctx = analysis.context.expect("context should carry through");
        assert_eq!(ctx.session_id.as_deref(), Some("sess-42"));
        assert_eq!(ctx.previous_questions.len(), 1);
        assert_eq!(ctx.user_intent.as_deref(), Some("launch planning"));
        assert!(ctx.follow_up_indicators.contains(&"what about".to_string()));
        assert!(!ctx.related_topics.is_empty());
    }

    #[test]
    fn test_no_context_block_without_input_context() {
        let analysis = QuestionAnalyzer::analyze("Also, what about pricing?", None);
        assert!(analysis.context.is_none());
    }
}
