//! Consultation session
//!
//! The session owns what the orchestrator never retains: the advisor panel
//! and the response collection accumulated across question submissions.
//! It is the surface consumed by UI/CLI layers.

use crate::config::{ServiceConfig, ServiceConfigPatch};
use crate::ports::PersonaResponder;
use crate::use_cases::consultation::ConsultationOrchestrator;
use panel_domain::{
    Advisor, AdvisorId, AdvisorResponse, ConsultationError, ErrorKind, Question, QuestionAnalysis,
    QuestionAnalyzer, QuestionContext, ResponseSet, SummarySynthesizer,
};
use tracing::info;

/// One caller's consultation state: panel, responses, and recent failures
pub struct ConsultationSession<R: PersonaResponder + 'static> {
    orchestrator: ConsultationOrchestrator<R>,
    advisors: Vec<Advisor>,
    responses: ResponseSet,
    last_failures: Vec<ConsultationError>,
}

impl<R: PersonaResponder + 'static> ConsultationSession<R> {
    pub fn new(orchestrator: ConsultationOrchestrator<R>, advisors: Vec<Advisor>) -> Self {
        Self {
            orchestrator,
            advisors,
            responses: ResponseSet::new(),
            last_failures: Vec::new(),
        }
    }

    pub fn advisors(&self) -> &[Advisor] {
        &self.advisors
    }

    pub fn advisor(&self, advisor_id: &AdvisorId) -> Option<&Advisor> {
        self.advisors.iter().find(|a| &a.id == advisor_id)
    }

    /// Responses accumulated so far, one entry per answered advisor
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Advisor-scoped failures from the most recent submission.
    ///
    /// Non-fatal: present alongside the successful responses so a UI can
    /// surface a warning and offer per-advisor retry.
    pub fn last_failures(&self) -> &[ConsultationError] {
        &self.last_failures
    }

    /// Classify a question; informational, never fails
    pub fn analyze_question(
        &self,
        question: &str,
        context: Option<QuestionContext>,
    ) -> QuestionAnalysis {
        QuestionAnalyzer::analyze(question, context)
    }

    /// Dispatch a prompt to the whole panel and fold the results into the
    /// session's response collection.
    ///
    /// Fails only when the prompt is empty or every advisor failed;
    /// otherwise partial failures are recorded in [`Self::last_failures`].
    pub async fn submit_consultation(
        &mut self,
        prompt: &str,
        session_context: Option<&str>,
    ) -> Result<Vec<AdvisorResponse>, ConsultationError> {
        let question = Question::parse(prompt).ok_or_else(|| {
            ConsultationError::batch(ErrorKind::PersonaError, "prompt is empty")
        })?;

        let outcome = self
            .orchestrator
            .dispatch_all(&self.advisors, question.content(), session_context)
            .await?;

        for response in &outcome.responses {
            self.responses.upsert(response.clone());
        }
        self.last_failures = outcome.failures;
        info!(
            total = self.responses.len(),
            failures = self.last_failures.len(),
            "consultation folded into session"
        );

        Ok(outcome.responses)
    }

    /// Retry a single advisor; on success the new response replaces the
    /// prior entry for that advisor (never appended alongside it).
    pub async fn retry_advisor(
        &mut self,
        advisor_id: &AdvisorId,
        prompt: &str,
    ) -> Result<AdvisorResponse, ConsultationError> {
        let question = Question::parse(prompt).ok_or_else(|| {
            ConsultationError::for_advisor(
                advisor_id.clone(),
                ErrorKind::PersonaError,
                "prompt is empty",
            )
        })?;
        let advisor = self
            .advisor(advisor_id)
            .ok_or_else(|| {
                ConsultationError::for_advisor(
                    advisor_id.clone(),
                    ErrorKind::PersonaError,
                    "unknown advisor",
                )
            })?
            .clone();

        let response = self
            .orchestrator
            .dispatch_one(&advisor, question.content(), None)
            .await?;
        self.responses.upsert(response.clone());
        self.last_failures
            .retain(|f| f.advisor_id.as_ref() != Some(advisor_id));
        Ok(response)
    }

    /// Synthesize the accumulated responses into a consensus report
    pub fn summarize_responses(&self, original_prompt: &str) -> Result<String, ConsultationError> {
        SummarySynthesizer::summarize(self.responses.as_slice(), original_prompt)
    }

    pub fn service_config(&self) -> ServiceConfig {
        self.orchestrator.config()
    }

    pub fn update_service_config(&self, patch: ServiceConfigPatch) -> ServiceConfig {
        self.orchestrator.update_config(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ResponderError;
    use async_trait::async_trait;
    use panel_domain::{Domain, PersonaConfig};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Succeeds always, numbering each response per advisor
    struct CountingResponder {
        calls: AtomicU32,
    }

    #[async_trait]
    impl PersonaResponder for CountingResponder {
        async fn respond(
            &self,
            advisor: &Advisor,
            _prompt: &str,
            _persona: &PersonaConfig,
            _session_context: Option<&str>,
        ) -> Result<String, ResponderError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(format!("answer #{n} from {}", advisor.id))
        }
    }

    fn panel() -> Vec<Advisor> {
        vec![
            Advisor::new("a", "Ana", "clinical trials", "bg", Domain::Clinical),
            Advisor::new("b", "Bo", "product marketing", "bg", Domain::Product),
        ]
    }

    fn session() -> ConsultationSession<CountingResponder> {
        let responder = Arc::new(CountingResponder {
            calls: AtomicU32::new(0),
        });
        ConsultationSession::new(ConsultationOrchestrator::new(responder), panel())
    }

    #[tokio::test]
    async fn test_submit_accumulates_responses() {
        let mut session = session();
        let responses = session.submit_consultation("How to launch?", None).await.unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(session.responses().len(), 2);
        assert!(session.last_failures().is_empty());
    }

    #[tokio::test]
    async fn test_resubmission_replaces_per_advisor() {
        let mut session = session();
        session.submit_consultation("first question", None).await.unwrap();
        session.submit_consultation("second question", None).await.unwrap();
        // Still one entry per advisor
        assert_eq!(session.responses().len(), 2);
    }

    #[tokio::test]
    async fn test_retry_replaces_single_entry() {
        let mut session = session();
        session.submit_consultation("question", None).await.unwrap();
        let before = session
            .responses()
            .get(&"a".into())
            .unwrap()
            .content
            .clone();

        session.retry_advisor(&"a".into(), "question").await.unwrap();

        assert_eq!(session.responses().len(), 2);
        let after = &session.responses().get(&"a".into()).unwrap().content;
        assert_ne!(&before, after);
    }

    #[tokio::test]
    async fn test_retry_unknown_advisor_rejected() {
        let mut session = session();
        let err = session
            .retry_advisor(&"ghost".into(), "question")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::PersonaError);
        assert_eq!(err.advisor_id.unwrap().as_str(), "ghost");
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected() {
        let mut session = session();
        let err = session.submit_consultation("   ", None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::PersonaError);
        assert!(err.is_batch());

        let err = session.retry_advisor(&"a".into(), "").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::PersonaError);
        assert_eq!(err.advisor_id.unwrap().as_str(), "a");
    }

    #[tokio::test]
    async fn test_summary_requires_responses() {
        let session = session();
        let err = session.summarize_responses("question").unwrap_err();
        assert_eq!(err.kind, ErrorKind::PersonaError);
    }

    #[tokio::test]
    async fn test_summary_over_accumulated_responses() {
        let mut session = session();
        session.submit_consultation("Should we launch?", None).await.unwrap();
        let summary = session.summarize_responses("Should we launch?").unwrap();
        assert!(summary.contains("Ana"));
        assert!(summary.contains("Bo"));
    }

    #[tokio::test]
    async fn test_config_round_trip() {
        let session = session();
        let updated = session.update_service_config(ServiceConfigPatch {
            timeout_ms: Some(2_500),
            ..Default::default()
        });
        assert_eq!(updated.timeout_ms, 2_500);
        assert_eq!(session.service_config().timeout_ms, 2_500);
    }
}
