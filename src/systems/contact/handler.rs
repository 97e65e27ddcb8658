use crate::core::log;
use crate::domain::{ContactMessage, MailSettings};

use super::compose::compose;
use super::credentials::{CredentialSource, MailAccount};
use super::error::SubmissionError;
use super::provider::credential_keys;
use super::request::{parse_message, Method, SubmissionRequest, SubmissionResponse};
use super::transport::MailTransport;

/// Read the account named by the settings. Missing or blank values fail
/// this request only; nothing is cached between requests.
pub fn resolve_account<C: CredentialSource + ?Sized>(
    settings: &MailSettings,
    credentials: &C,
) -> Result<MailAccount, SubmissionError> {
    let (user_key, secret_key) = credential_keys(settings);
    let read = |key: &str| {
        credentials
            .lookup(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SubmissionError::MissingCredential(key.to_string()))
    };
    Ok(MailAccount { user: read(&user_key)?, secret: read(&secret_key)? })
}

/// Check method, body and fields before touching credentials.
pub fn accept(request: &SubmissionRequest) -> Result<ContactMessage, SubmissionError> {
    match request.method() {
        Method::Post => {}
        Method::Options | Method::Other => {
            return Err(SubmissionError::MethodNotAllowed(request.method.clone()));
        }
    }
    let message = parse_message(request)?;
    if let Some(field) = message.first_missing_field() {
        return Err(SubmissionError::MissingField(field));
    }
    Ok(message.trimmed())
}

async fn submit<C, T>(
    request: &SubmissionRequest,
    settings: &MailSettings,
    credentials: &C,
    transport: &T,
) -> Result<(), SubmissionError>
where
    C: CredentialSource + ?Sized,
    T: MailTransport,
{
    let message = accept(request)?;
    let account = resolve_account(settings, credentials)?;
    let mail = compose(settings, &account, &message);
    transport.deliver(settings, &mail, &account).await?;
    Ok(())
}

/// Handle one contact form request end to end.
///
/// At most one delivery attempt is made, and only for a well-formed POST
/// with credentials present.
pub async fn handle_submission<C, T>(
    request: &SubmissionRequest,
    settings: &MailSettings,
    credentials: &C,
    transport: &T,
) -> SubmissionResponse
where
    C: CredentialSource + ?Sized,
    T: MailTransport,
{
    if request.method() == Method::Options {
        return SubmissionResponse::preflight(settings);
    }

    match submit(request, settings, credentials, transport).await {
        Ok(()) => SubmissionResponse::sent(settings),
        Err(err) => {
            match &err {
                SubmissionError::Delivery(cause) => log::error(&format!("Email error: {cause}")),
                SubmissionError::MissingCredential(key) => {
                    log::error(&format!("contact: credential {key} is not configured"))
                }
                _ => {}
            }
            SubmissionResponse::rejected(settings, &err)
        }
    }
}

#[cfg(test)]
#[path = "tests/handler_tests.rs"]
mod handler_tests;
