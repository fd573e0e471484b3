//! CLI entrypoint for advisor-panel
//!
//! Wires the layers together with dependency injection: file config feeds
//! the roster and service tuning, the template responder backs the
//! orchestrator, and a session owns the run.

mod args;
mod output;

use anyhow::{Result, bail};
use args::{Cli, OutputFormat};
use clap::Parser;
use panel_application::{ConsultationOrchestrator, ConsultationSession, ServiceConfig};
use panel_domain::Advisor;
use panel_infrastructure::{ConfigLoader, TemplateResponder};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Simulated generation latency for the local template responder
const RESPONDER_LATENCY: Duration = Duration::from_millis(150);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("starting advisor-panel");

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let advisors = select_advisors(file_config.advisors(), &cli.advisor)?;

    let mut service_config: ServiceConfig = file_config.service;
    if let Some(timeout_ms) = cli.timeout_ms {
        service_config.timeout_ms = timeout_ms;
    }
    if let Some(retries) = cli.retries {
        service_config.retry_attempts = retries;
    }

    // === Dependency injection ===
    let responder = Arc::new(TemplateResponder::new().with_latency(RESPONDER_LATENCY));
    let orchestrator = ConsultationOrchestrator::with_config(responder, service_config);
    let mut session = ConsultationSession::new(orchestrator, advisors);

    let analysis = session.analyze_question(&cli.question, None);

    if cli.analyze_only {
        match cli.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
            _ => print!("{}", output::format_analysis(&analysis)),
        }
        return Ok(());
    }

    let responses = session
        .submit_consultation(&cli.question, cli.context.as_deref())
        .await?;

    let summary = if cli.no_summary {
        None
    } else {
        Some(session.summarize_responses(&cli.question)?)
    };

    match cli.output {
        OutputFormat::Json => {
            let report = output::ConsultationReport {
                question: &cli.question,
                analysis: &analysis,
                responses: &responses,
                failures: session.last_failures(),
                summary: summary.as_deref(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Summary => {
            eprint!("{}", output::format_failures(session.last_failures()));
            if let Some(summary) = &summary {
                println!("{summary}");
            }
        }
        OutputFormat::Full => {
            print!("{}", output::format_analysis(&analysis));
            println!("{}", output::format_responses(&responses));
            eprint!("{}", output::format_failures(session.last_failures()));
            if let Some(summary) = &summary {
                print!("{}", output::format_summary(summary));
            }
        }
    }

    Ok(())
}

/// Restrict the configured roster to the requested advisor ids, keeping
/// the full roster when none were requested.
fn select_advisors(roster: Vec<Advisor>, requested: &[String]) -> Result<Vec<Advisor>> {
    if requested.is_empty() {
        return Ok(roster);
    }
    let mut selected = Vec::with_capacity(requested.len());
    for id in requested {
        match roster.iter().find(|a| a.id.as_str() == id) {
            Some(advisor) => selected.push(advisor.clone()),
            None => bail!("unknown advisor id: {id}"),
        }
    }
    Ok(selected)
}
