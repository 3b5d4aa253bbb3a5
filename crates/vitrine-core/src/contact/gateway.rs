//! The delivery seam for contact submissions.
//!
//! The rendered site only ever talks to a simulated gateway, but the
//! trait keeps delivery swappable: a mail relay, a ticket queue, and the
//! simulator all look the same to the form session.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::{ContactMessage, MessageError};

/// Result type for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, SubmissionError>;

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("invalid message: {0}")]
    Invalid(#[from] MessageError),

    /// Transport-level failure from the delivery backend. Network
    /// errors, rate limits, and timeouts all surface here with the
    /// backend's reason.
    #[error("delivery failed: {reason}")]
    Delivery { reason: String },
}

/// Unique identifier assigned to an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    /// Generate a new random SubmissionId.
    pub fn new() -> Self {
        SubmissionId(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Acknowledgement returned when a gateway accepts a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub id: SubmissionId,
    pub received_at: DateTime<Utc>,
}

/// Accepts contact messages for delivery.
///
/// Guarantees:
/// - `submit` resolves exactly once per call, with an ack or an error.
/// - Callers validate messages before submitting; gateways may assume a
///   structurally valid payload.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Hand a message to the delivery backend.
    async fn submit(&self, message: &ContactMessage) -> GatewayResult<SubmissionAck>;
}
