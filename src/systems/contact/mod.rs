//! Contact form submission
//!
//! One handler covers every deployment: method check, field validation,
//! credential lookup at request time, then a single delivery attempt through
//! the configured hosted mail API. Failures are reported to the caller and
//! never retried.

pub mod compose;
pub mod credentials;
pub mod error;
pub mod form;
pub mod handler;
pub mod provider;
pub mod request;
pub mod transport;

pub use compose::{compose, OutboundMail};
pub use credentials::{CredentialSource, MailAccount, MapCredentials};
#[cfg(not(target_arch = "wasm32"))]
pub use credentials::ProcessEnv;
pub use error::{DeliveryError, SubmissionError};
pub use form::{ContactForm, FormReply, FormStatus};
pub use handler::{accept, handle_submission, resolve_account};
pub use provider::{HttpCall, HttpReply, ProviderSpec, PROVIDERS};
pub use request::{parse_message, Method, SubmissionRequest, SubmissionResponse};
pub use transport::{HttpExecutor, HttpMailTransport, MailTransport};
