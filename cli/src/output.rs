//! Console and JSON rendering of consultation results

use colored::Colorize;
use panel_domain::{AdvisorResponse, ConsultationError, QuestionAnalysis};
use serde::Serialize;

/// Serializable bundle of everything one run produced
#[derive(Debug, Serialize)]
pub struct ConsultationReport<'a> {
    pub question: &'a str,
    pub analysis: &'a QuestionAnalysis,
    pub responses: &'a [AdvisorResponse],
    pub failures: &'a [ConsultationError],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a str>,
}

pub fn format_analysis(analysis: &QuestionAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Question analysis".bold().underline()));
    out.push_str(&format!("  type:       {}\n", analysis.question_type));
    out.push_str(&format!("  domain:     {}\n", analysis.domain));
    out.push_str(&format!("  confidence: {:.2}\n", analysis.confidence));
    out.push_str(&format!("  complexity: {:?}\n", analysis.complexity));
    out.push_str(&format!("  sentiment:  {:?}\n", analysis.sentiment));
    out.push_str(&format!("  urgency:    {:?}\n", analysis.urgency));
    if !analysis.keywords.is_empty() {
        out.push_str(&format!("  keywords:   {}\n", analysis.keywords.join(", ")));
    }
    out
}

pub fn format_responses(responses: &[AdvisorResponse]) -> String {
    let mut out = String::new();
    for response in responses {
        out.push_str(&format!(
            "\n{} {}\n",
            "●".green(),
            format!("{} ({})", response.persona.name, response.persona.expertise).bold()
        ));
        out.push_str(&format!("{}\n", response.content));
    }
    out
}

pub fn format_failures(failures: &[ConsultationError]) -> String {
    let mut out = String::new();
    for failure in failures {
        out.push_str(&format!("{} {}\n", "warning:".yellow().bold(), failure));
    }
    if !failures.is_empty() {
        out.push_str("Failed advisors can be retried once the cause clears.\n");
    }
    out
}

pub fn format_summary(summary: &str) -> String {
    format!("\n{}\n{}\n", "Panel summary".bold().underline(), summary)
}
