//! Simulated contact gateway.
//!
//! The published site has no backend, so delivery is simulated: the
//! gateway waits the same fixed interval the page script does, then
//! acknowledges. Tests use it both as the happy-path backend and, via
//! [`SimulatedGateway::rejecting`], as a failure source.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::gateway::{ContactGateway, GatewayResult, SubmissionAck, SubmissionError, SubmissionId};
use super::message::ContactMessage;

/// How long a simulated submission takes, in milliseconds. The generated
/// page script uses the same figure, so native tests time exactly what a
/// visitor experiences.
pub const SUBMIT_LATENCY_MS: u64 = 2000;

/// In-memory gateway that acknowledges after a fixed delay.
#[derive(Debug)]
pub struct SimulatedGateway {
    latency: Duration,
    reject_reason: Option<String>,
    received: Mutex<Vec<ContactMessage>>,
}

impl SimulatedGateway {
    /// A gateway that accepts everything after [`SUBMIT_LATENCY_MS`].
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(SUBMIT_LATENCY_MS))
    }

    /// A gateway with a custom delay.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            reject_reason: None,
            received: Mutex::new(Vec::new()),
        }
    }

    /// A gateway that waits the full delay and then fails delivery.
    pub fn rejecting(reason: &str) -> Self {
        Self {
            latency: Duration::from_millis(SUBMIT_LATENCY_MS),
            reject_reason: Some(reason.to_string()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Messages accepted so far, in submission order.
    pub fn received(&self) -> Vec<ContactMessage> {
        self.received.lock().unwrap().clone()
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactGateway for SimulatedGateway {
    async fn submit(&self, message: &ContactMessage) -> GatewayResult<SubmissionAck> {
        tokio::time::sleep(self.latency).await;
        if let Some(reason) = &self.reject_reason {
            return Err(SubmissionError::Delivery {
                reason: reason.clone(),
            });
        }
        let mut received = self.received.lock().unwrap();
        received.push(message.clone());
        Ok(SubmissionAck {
            id: SubmissionId::new(),
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactMessage {
        ContactMessage::new("Dev", "dev@example.com", "Hello", "Testing the gateway.")
    }

    #[tokio::test(start_paused = true)]
    async fn test_ack_arrives_after_fixed_latency() {
        let gateway = SimulatedGateway::new();
        let started = tokio::time::Instant::now();
        let ack = gateway.submit(&sample()).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(SUBMIT_LATENCY_MS));
        assert!(!ack.id.0.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_accepted_messages_are_recorded() {
        let gateway = SimulatedGateway::new();
        gateway.submit(&sample()).await.unwrap();
        let received = gateway.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].subject, "Hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejecting_gateway_fails_after_delay() {
        let gateway = SimulatedGateway::rejecting("relay offline");
        let started = tokio::time::Instant::now();
        let err = gateway.submit(&sample()).await.unwrap_err();
        assert_eq!(started.elapsed(), Duration::from_millis(SUBMIT_LATENCY_MS));
        assert!(matches!(err, SubmissionError::Delivery { .. }));
        assert!(gateway.received().is_empty());
    }
}
