//! Hosted mail API table.
//!
//! Each provider turns an `OutboundMail` into one HTTP call. Executing the
//! call is someone else's job (see `transport`).

use serde_json::json;

use crate::domain::{MailSettings, ProviderKind};

use super::compose::OutboundMail;
use super::credentials::MailAccount;

/// Static description of a provider.
#[derive(Clone, Copy, Debug)]
pub struct ProviderSpec {
    pub kind: ProviderKind,
    pub endpoint: &'static str,
    pub user_env: &'static str,
    pub secret_env: &'static str,
}

pub static PROVIDERS: [ProviderSpec; 2] = [
    ProviderSpec {
        kind: ProviderKind::Resend,
        endpoint: "https://api.resend.com/emails",
        user_env: "EMAIL_USER",
        secret_env: "EMAIL_PASS",
    },
    ProviderSpec {
        kind: ProviderKind::SendGrid,
        endpoint: "https://api.sendgrid.com/v3/mail/send",
        user_env: "EMAIL_USER",
        secret_env: "EMAIL_PASS",
    },
];

pub fn spec(kind: ProviderKind) -> &'static ProviderSpec {
    // The table has one row per variant.
    PROVIDERS
        .iter()
        .find(|p| p.kind == kind)
        .unwrap_or(&PROVIDERS[0])
}

/// Env keys to read for this configuration, after overrides.
pub fn credential_keys(settings: &MailSettings) -> (String, String) {
    let spec = spec(settings.provider);
    (
        settings.user_env.clone().unwrap_or_else(|| spec.user_env.to_string()),
        settings.secret_env.clone().unwrap_or_else(|| spec.secret_env.to_string()),
    )
}

/// One outgoing HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpCall {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Status and body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn build_call(settings: &MailSettings, account: &MailAccount, mail: &OutboundMail) -> HttpCall {
    let spec = spec(settings.provider);
    let url = settings
        .endpoint
        .clone()
        .unwrap_or_else(|| spec.endpoint.to_string());

    let body = match settings.provider {
        ProviderKind::Resend => json!({
            "from": mail.from,
            "to": [mail.to],
            "reply_to": mail.reply_to,
            "subject": mail.subject,
            "html": mail.html,
            "text": mail.text,
        }),
        ProviderKind::SendGrid => json!({
            "personalizations": [{ "to": [{ "email": mail.to }] }],
            "from": { "email": mail.from },
            "reply_to": { "email": mail.reply_to },
            "subject": mail.subject,
            "content": [
                { "type": "text/plain", "value": mail.text },
                { "type": "text/html", "value": mail.html },
            ],
        }),
    };

    HttpCall {
        method: "POST",
        url,
        headers: vec![
            ("Authorization".to_string(), format!("Bearer {}", account.secret)),
            ("Content-Type".to_string(), "application/json".to_string()),
        ],
        body: body.to_string(),
    }
}
