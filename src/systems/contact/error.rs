use thiserror::Error;

/// Failure of a single mail delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider rejected message: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Why a submission was refused. Every variant ends the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed body: {0}")]
    MalformedBody(String),

    #[error("mail credential {0} is not set")]
    MissingCredential(String),

    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl SubmissionError {
    pub fn status(&self) -> u16 {
        match self {
            SubmissionError::MethodNotAllowed(_) => 405,
            SubmissionError::MissingField(_) | SubmissionError::MalformedBody(_) => 400,
            SubmissionError::MissingCredential(_) | SubmissionError::Delivery(_) => 500,
        }
    }

    /// Message safe to show the submitter.
    pub fn public_message(&self) -> String {
        match self {
            SubmissionError::MethodNotAllowed(_) => "Method not allowed".to_string(),
            SubmissionError::MissingField(field) => format!("All fields required ({field} is missing)"),
            SubmissionError::MalformedBody(_) => "All fields required (unreadable form data)".to_string(),
            SubmissionError::MissingCredential(_) => "Email service is not configured".to_string(),
            SubmissionError::Delivery(_) => "Failed to send email".to_string(),
        }
    }
}
