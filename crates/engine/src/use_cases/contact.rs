//! Contact form relay.

use std::sync::Arc;

use roster_domain::TextInput;
use serde::Deserialize;

use crate::infrastructure::ports::{ContactRelay, ContactSubmission};
use crate::use_cases::validation::{require_present, require_text, ValidationError};

/// Raw contact form as posted by a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: Option<TextInput>,
    pub email: Option<TextInput>,
    pub message: Option<TextInput>,
}

/// What the caller gets back; the upstream cause is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStatus {
    Sent,
    Failed,
}

pub struct ContactUseCases {
    relay: Arc<dyn ContactRelay>,
}

impl ContactUseCases {
    pub fn new(relay: Arc<dyn ContactRelay>) -> Self {
        Self { relay }
    }

    /// Validate and forward a submission once.
    pub async fn send(&self, form: ContactForm) -> Result<RelayStatus, ValidationError> {
        let submission = validate(&form)?;

        match self.relay.submit(&submission).await {
            Ok(()) => {
                tracing::info!("Contact submission relayed");
                Ok(RelayStatus::Sent)
            }
            Err(e) => {
                tracing::error!(error = %e, "Contact relay failed");
                Ok(RelayStatus::Failed)
            }
        }
    }
}

fn validate(form: &ContactForm) -> Result<ContactSubmission, ValidationError> {
    let name = require_text(form.name.as_ref(), "name")?;
    let name = require_present(name, "name")?;
    let email = require_text(form.email.as_ref(), "email")?;
    let email = require_present(email, "email")?;
    if !email.contains('@') {
        return Err(ValidationError::Invalid {
            field_name: "email",
            reason: "must be an email address".to_string(),
        });
    }
    let message = require_text(form.message.as_ref(), "message")?;
    let message = require_present(message, "message")?;

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}
