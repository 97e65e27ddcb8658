//! Client side of the contact form.
//!
//! Only one request may be outstanding: while `Sending`, the submit control
//! is disabled and further submits are refused.

use serde::Deserialize;

use crate::domain::ContactMessage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// What the endpoint answered, or why it could not be reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormReply {
    Endpoint { status: u16, body: String },
    Network(String),
}

#[derive(Deserialize)]
struct EndpointBody {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    draft: ContactMessage,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self { draft: ContactMessage::default(), status: FormStatus::Idle }
    }

    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        self.draft.set_field(name, value.to_string())
    }

    pub fn submit_enabled(&self) -> bool {
        self.status != FormStatus::Sending && self.draft.is_complete()
    }

    /// Move to `Sending` and hand back the message to post.
    ///
    /// Returns `None` while a request is outstanding or the draft is incomplete.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if !self.submit_enabled() {
            return None;
        }
        self.status = FormStatus::Sending;
        Some(self.draft.trimmed())
    }

    /// Record the outcome. Ignored unless a request is outstanding.
    pub fn finish(&mut self, reply: FormReply) -> &FormStatus {
        if self.status != FormStatus::Sending {
            return &self.status;
        }
        self.status = match reply {
            FormReply::Network(reason) => FormStatus::Failed(reason),
            FormReply::Endpoint { status, body } => match serde_json::from_str::<EndpointBody>(&body) {
                Ok(parsed) if parsed.success && (200..300).contains(&status) => FormStatus::Sent,
                Ok(parsed) => FormStatus::Failed(
                    parsed.message.unwrap_or_else(|| format!("HTTP {status}")),
                ),
                Err(_) => FormStatus::Failed(format!("HTTP {status}")),
            },
        };
        if self.status == FormStatus::Sent {
            self.draft = ContactMessage::default();
        }
        &self.status
    }

    pub fn to_json(message: &ContactMessage) -> String {
        serde_json::to_string(message).unwrap_or_default()
    }
}
