//! The contact form payload and its field-level validation.

use serde::{Deserialize, Serialize};

/// Validation failures for a contact message, one variant per field rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("subject must not be empty")]
    EmptySubject,
    #[error("message body must not be empty")]
    EmptyBody,
}

/// One filled-in contact form: all four fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Check the message the way the rendered form does, reporting the
    /// first failing field in form order.
    ///
    /// The email rule matches what the form's `type="email"` input
    /// enforces: a single `@` with text on both sides and no surrounding
    /// whitespace. Dotless domains pass, as they do in the browser;
    /// anything stricter rejects addresses the form accepts.
    pub fn validate(&self) -> Result<(), MessageError> {
        if self.name.trim().is_empty() {
            return Err(MessageError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(MessageError::EmptyEmail);
        }
        if !is_plausible_email(&self.email) {
            return Err(MessageError::InvalidEmail(self.email.clone()));
        }
        if self.subject.trim().is_empty() {
            return Err(MessageError::EmptySubject);
        }
        if self.body.trim().is_empty() {
            return Err(MessageError::EmptyBody);
        }
        Ok(())
    }
}

fn is_plausible_email(candidate: &str) -> bool {
    if candidate.trim() != candidate {
        return false;
    }
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
