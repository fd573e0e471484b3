//! Consultation orchestrator
//!
//! Drives concurrent per-advisor calls to the [`PersonaResponder`] port,
//! owning the retry/timeout policy and partial-failure aggregation. One
//! slow or failing advisor never blocks or cancels another's response.

use crate::config::{ServiceConfig, ServiceConfigPatch, SharedServiceConfig};
use crate::ports::PersonaResponder;
use panel_domain::{Advisor, AdvisorResponse, ConsultationError, ErrorKind, PersonaConfig};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Settled result of one batch dispatch: the successful subset plus the
/// out-of-band failure list (never fatal while at least one succeeded).
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Successful responses, ordered by the requested advisor order
    pub responses: Vec<AdvisorResponse>,
    /// Per-advisor errors recorded after retries were exhausted
    pub failures: Vec<ConsultationError>,
}

impl DispatchOutcome {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Orchestrates one concurrent round of advisor calls
pub struct ConsultationOrchestrator<R: PersonaResponder + 'static> {
    responder: Arc<R>,
    config: SharedServiceConfig,
}

impl<R: PersonaResponder + 'static> ConsultationOrchestrator<R> {
    pub fn new(responder: Arc<R>) -> Self {
        Self::with_config(responder, ServiceConfig::default())
    }

    pub fn with_config(responder: Arc<R>, config: ServiceConfig) -> Self {
        Self {
            responder,
            config: SharedServiceConfig::new(config),
        }
    }

    /// Copy of the current service configuration
    pub fn config(&self) -> ServiceConfig {
        self.config.snapshot()
    }

    /// Replace configuration fields at runtime; the swap is atomic and
    /// in-flight dispatches keep the snapshot they started with.
    pub fn update_config(&self, patch: ServiceConfigPatch) -> ServiceConfig {
        let updated = self.config.update(patch);
        info!(
            timeout_ms = updated.timeout_ms,
            retry_attempts = updated.retry_attempts,
            retry_delay_ms = updated.retry_delay_ms,
            "service config updated"
        );
        updated
    }

    /// Dispatch one prompt to every advisor concurrently.
    ///
    /// Waits for all retry-wrapped calls to settle, then partitions into
    /// successes and failures. Individual failures are logged and returned
    /// out-of-band; only a batch where every advisor failed is an error.
    pub async fn dispatch_all(
        &self,
        advisors: &[Advisor],
        prompt: &str,
        session_context: Option<&str>,
    ) -> Result<DispatchOutcome, ConsultationError> {
        if advisors.is_empty() {
            return Err(ConsultationError::batch(
                ErrorKind::PersonaError,
                "no advisors selected for dispatch",
            ));
        }

        // One snapshot per dispatch: every advisor in this batch sees the
        // same configuration.
        let config = self.config.snapshot();
        info!(advisors = advisors.len(), "dispatching consultation");

        let mut join_set = JoinSet::new();
        for (index, advisor) in advisors.iter().enumerate() {
            let responder = Arc::clone(&self.responder);
            let advisor = advisor.clone();
            let prompt = prompt.to_string();
            let context = session_context.map(str::to_string);

            join_set.spawn(async move {
                let result =
                    call_with_retries(responder, &advisor, &prompt, context.as_deref(), config)
                        .await;
                (index, result)
            });
        }

        let mut settled = Vec::with_capacity(advisors.len());
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(entry) => settled.push(entry),
                Err(e) => warn!("task join error: {e}"),
            }
        }
        // Completion order is arbitrary; the returned list tracks the
        // requested advisor order.
        settled.sort_by_key(|(index, _)| *index);

        let mut responses = Vec::new();
        let mut failures = Vec::new();
        for (_, result) in settled {
            match result {
                Ok(response) => responses.push(response),
                Err(error) => failures.push(error),
            }
        }

        if responses.is_empty() {
            return Err(ConsultationError::batch(
                ErrorKind::Unknown,
                format!("all {} advisors failed", advisors.len()),
            ));
        }

        for failure in &failures {
            warn!("advisor failed after retries: {failure}");
        }
        info!(
            succeeded = responses.len(),
            failed = failures.len(),
            "consultation settled"
        );

        Ok(DispatchOutcome {
            responses,
            failures,
        })
    }

    /// Dispatch to a single advisor, retrying per configuration.
    ///
    /// Used for initial dispatch and for explicit per-advisor retry; the
    /// final attempt's error propagates advisor-scoped.
    pub async fn dispatch_one(
        &self,
        advisor: &Advisor,
        prompt: &str,
        session_context: Option<&str>,
    ) -> Result<AdvisorResponse, ConsultationError> {
        let config = self.config.snapshot();
        call_with_retries(
            Arc::clone(&self.responder),
            advisor,
            prompt,
            session_context,
            config,
        )
        .await
    }
}

/// Attempt loop for one advisor: each try races the responder against the
/// configured timeout; attempt N+1 starts only after attempt N has failed
/// and the linear backoff (`retry_delay_ms * N`) has elapsed. A timed-out
/// call may still run to completion in the background, but its result is
/// discarded.
async fn call_with_retries<R: PersonaResponder>(
    responder: Arc<R>,
    advisor: &Advisor,
    prompt: &str,
    session_context: Option<&str>,
    config: ServiceConfig,
) -> Result<AdvisorResponse, ConsultationError> {
    let persona = PersonaConfig::for_advisor(advisor);
    let attempts = config.retry_attempts.max(1);
    let mut last_error = ConsultationError::for_advisor(
        advisor.id.clone(),
        ErrorKind::Unknown,
        "no attempt executed",
    );

    for attempt in 1..=attempts {
        if attempt > 1 {
            tokio::time::sleep(config.backoff(attempt - 1)).await;
        }
        debug!(advisor = %advisor.id, attempt, "requesting persona response");

        let call = responder.respond(advisor, prompt, &persona, session_context);
        match tokio::time::timeout(config.timeout(), call).await {
            Ok(Ok(content)) => {
                debug!(advisor = %advisor.id, attempt, "advisor responded");
                return Ok(AdvisorResponse::new(advisor.id.clone(), content, persona));
            }
            Ok(Err(error)) => {
                warn!(advisor = %advisor.id, attempt, "responder error: {error}");
                last_error =
                    ConsultationError::for_advisor(advisor.id.clone(), error.kind(), error.to_string());
            }
            Err(_elapsed) => {
                warn!(advisor = %advisor.id, attempt, "call timed out");
                last_error = ConsultationError::timeout(advisor.id.clone(), config.timeout_ms);
            }
        }
    }

    Err(last_error)
}
