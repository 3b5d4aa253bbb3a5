//! The contact form's submission state machine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::obs;

use super::gateway::{ContactGateway, SubmissionAck, SubmissionError};
use super::message::ContactMessage;

/// Where the form currently stands. Drives the submit button label and
/// the banner under the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormState {
    /// Nothing in flight; the form is editable.
    Idle,
    /// A submission is with the gateway; the submit button is disabled.
    Submitting,
    /// The gateway acknowledged the last submission.
    Succeeded { ack: SubmissionAck },
    /// Validation or delivery failed; the form stays filled for a retry.
    Failed { error: String },
}

/// One visitor's interaction with the contact form.
///
/// Double submission is ruled out by construction: `submit` takes
/// `&mut self` and only returns once the machine has settled in
/// `Succeeded` or `Failed`.
pub struct FormSession {
    gateway: Arc<dyn ContactGateway>,
    state: FormState,
    attempts: u32,
}

impl FormSession {
    pub fn new(gateway: Arc<dyn ContactGateway>) -> Self {
        Self {
            gateway,
            state: FormState::Idle,
            attempts: 0,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Submissions attempted in this session, including failed ones.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Validate and submit a message, driving the machine through
    /// `Submitting` to a settled state.
    ///
    /// Invalid messages fail fast: the gateway is never contacted and no
    /// latency is paid.
    pub async fn submit(
        &mut self,
        message: ContactMessage,
    ) -> Result<SubmissionAck, SubmissionError> {
        self.attempts += 1;
        obs::emit_submission_started(self.attempts);

        if let Err(field_error) = message.validate() {
            let error = SubmissionError::Invalid(field_error);
            obs::emit_submission_failed(&error);
            self.state = FormState::Failed {
                error: error.to_string(),
            };
            return Err(error);
        }

        self.state = FormState::Submitting;
        let started = tokio::time::Instant::now();
        match self.gateway.submit(&message).await {
            Ok(ack) => {
                let latency_ms = started.elapsed().as_millis() as u64;
                obs::emit_submission_accepted(&ack.id.0, latency_ms);
                self.state = FormState::Succeeded { ack: ack.clone() };
                Ok(ack)
            }
            Err(error) => {
                obs::emit_submission_failed(&error);
                self.state = FormState::Failed {
                    error: error.to_string(),
                };
                Err(error)
            }
        }
    }

    /// Return the form to `Idle`, ready for a fresh message.
    pub fn reset(&mut self) {
        self.state = FormState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::simulated::{SimulatedGateway, SUBMIT_LATENCY_MS};
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage::new(
            "Rohan Iyer",
            "rohan@example.com",
            "Workshop",
            "Could you run a frontend performance workshop for our team?",
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_submit_settles_in_succeeded() {
        let mut session = FormSession::new(Arc::new(SimulatedGateway::new()));
        assert_eq!(*session.state(), FormState::Idle);

        let ack = session.submit(filled()).await.unwrap();
        match session.state() {
            FormState::Succeeded { ack: stored } => assert_eq!(*stored, ack),
            other => panic!("unexpected state: {other:?}"),
        }
        assert_eq!(session.attempts(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_message_fails_without_paying_latency() {
        let mut session = FormSession::new(Arc::new(SimulatedGateway::new()));
        let started = tokio::time::Instant::now();

        let mut message = filled();
        message.email = "not-an-address".to_string();
        let err = session.submit(message).await.unwrap_err();

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(matches!(err, SubmissionError::Invalid(_)));
        assert!(matches!(session.state(), FormState::Failed { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivery_failure_keeps_error_for_display() {
        let mut session = FormSession::new(Arc::new(SimulatedGateway::rejecting("relay offline")));
        session.submit(filled()).await.unwrap_err();
        match session.state() {
            FormState::Failed { error } => assert!(error.contains("relay offline")),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_returns_to_idle_and_allows_retry() {
        let gateway = Arc::new(SimulatedGateway::new());
        let mut session = FormSession::new(gateway.clone());

        session.submit(filled()).await.unwrap();
        session.reset();
        assert_eq!(*session.state(), FormState::Idle);

        session.submit(filled()).await.unwrap();
        assert_eq!(session.attempts(), 2);
        assert_eq!(gateway.received().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_waits_the_advertised_latency() {
        let mut session = FormSession::new(Arc::new(SimulatedGateway::new()));
        let started = tokio::time::Instant::now();
        session.submit(filled()).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(SUBMIT_LATENCY_MS));
    }

    #[test]
    fn test_form_state_serializes_with_status_tag() {
        let json = serde_json::to_string(&FormState::Submitting).unwrap();
        assert_eq!(json, r#"{"status":"submitting"}"#);
        let failed = FormState::Failed {
            error: "delivery failed: relay offline".to_string(),
        };
        let json = serde_json::to_string(&failed).unwrap();
        assert!(json.contains(r#""status":"failed""#));
    }
}
