//! Summary synthesizer
//!
//! Turns a completed batch of per-advisor responses into a single
//! fixed-section consensus report. Each call is a pure transformation over
//! its inputs.

use super::insights::{detect_common_themes, extract_key_insights, infer_domain_label, unique_perspectives};
use crate::consultation::AdvisorResponse;
use crate::core::{ConsultationError, ErrorKind};

/// Stateless synthesizer for cross-advisor summaries
pub struct SummarySynthesizer;

impl SummarySynthesizer {
    /// Produce a consensus report over the given responses.
    ///
    /// Fails with a persona-kind error on an empty response list — an empty
    /// summary is never silently produced. A single response yields a short
    /// single-advisor paragraph with no extraction.
    pub fn summarize(
        responses: &[AdvisorResponse],
        original_prompt: &str,
    ) -> Result<String, ConsultationError> {
        match responses {
            [] => Err(ConsultationError::batch(
                ErrorKind::PersonaError,
                "cannot summarize an empty response list",
            )),
            [only] => Ok(single_advisor_summary(only, original_prompt)),
            _ => Ok(full_summary(responses, original_prompt)),
        }
    }
}

fn single_advisor_summary(response: &AdvisorResponse, original_prompt: &str) -> String {
    format!(
        "Single-advisor consultation: {} ({}) was the only panel member to answer \
         \"{}\". Read their response directly; cross-advisor synthesis needs at \
         least two replies.",
        response.persona.name, response.persona.expertise, original_prompt
    )
}

fn full_summary(responses: &[AdvisorResponse], original_prompt: &str) -> String {
    let domains = distinct_domains(responses);
    let themes = detect_common_themes(responses);
    let insights = extract_key_insights(responses);
    let perspectives = unique_perspectives(responses);

    let mut sections: Vec<String> = Vec::new();
    sections.push("=== Panel Consultation Summary ===".to_string());
    sections.push(format!("Question: {original_prompt}"));

    let advisor_lines: Vec<String> = responses
        .iter()
        .map(|r| format!("  - {} ({})", r.persona.name, r.persona.expertise))
        .collect();
    sections.push(format!("Advisors consulted:\n{}", advisor_lines.join("\n")));

    sections.push(format!("Domains represented: {}", domains.join(", ")));

    if !themes.is_empty() {
        let theme_lines: Vec<String> = themes
            .iter()
            .map(|t| format!("  - \"{}\" raised by {}", t.signal, t.advisors.join(", ")))
            .collect();
        sections.push(format!("Consensus points:\n{}", theme_lines.join("\n")));
    }

    if !insights.is_empty() {
        let insight_lines: Vec<String> =
            insights.iter().map(|i| format!("  - {i}")).collect();
        sections.push(format!("Key insights:\n{}", insight_lines.join("\n")));
    }

    if !perspectives.is_empty() {
        let perspective_lines: Vec<String> =
            perspectives.iter().map(|p| format!("  - {p}")).collect();
        sections.push(format!(
            "Unique perspectives:\n{}",
            perspective_lines.join("\n")
        ));
    }

    sections.push(format!("Recommendation:\n{}", recommendation(&domains)));

    sections.join("\n\n")
}

/// Distinct inferred domain labels, in first-seen order
fn distinct_domains(responses: &[AdvisorResponse]) -> Vec<&'static str> {
    let mut domains = Vec::new();
    for response in responses {
        let label = infer_domain_label(&response.persona.expertise);
        if !domains.contains(&label) {
            domains.push(label);
        }
    }
    domains
}

/// Single domain: focused plan. Exactly two: integrated approach. Three or
/// more: phased multi-domain roadmap.
fn recommendation(domains: &[&'static str]) -> String {
    match domains {
        [single] => format!(
            "All advisors converge within {single}. Proceed with a focused {single} plan \
             built on their shared guidance."
        ),
        [first, second] => format!(
            "An integrated approach combining {first} and {second} is recommended, \
             pairing each advisor's strengths."
        ),
        _ => format!(
            "A phased, multi-domain roadmap is recommended, sequencing input from {} \
             so each discipline informs the next.",
            domains.join(", ")
        ),
    }
}
