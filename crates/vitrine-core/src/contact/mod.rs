//! The contact form: message validation, the delivery seam, and the
//! submission state machine.

pub mod gateway;
pub mod message;
pub mod session;
pub mod simulated;

pub use gateway::{ContactGateway, GatewayResult, SubmissionAck, SubmissionError, SubmissionId};
pub use message::{ContactMessage, MessageError};
pub use session::{FormSession, FormState};
pub use simulated::{SimulatedGateway, SUBMIT_LATENCY_MS};
