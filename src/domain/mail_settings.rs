use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hosted mail APIs the contact endpoint knows how to talk to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Resend,
    SendGrid,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Contact endpoint configuration.
///
/// Credentials are never stored here; only the names of the environment
/// keys that hold them. They are looked up on every request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    pub provider: ProviderKind,
    /// Overrides the provider's default API URL.
    pub endpoint: Option<String>,
    /// Env key holding the account identifier (the sender address).
    pub user_env: Option<String>,
    /// Env key holding the API secret.
    pub secret_env: Option<String>,
    /// Operator inbox. Defaults to the account identifier.
    pub to: Option<String>,
    pub subject_prefix: String,
    /// Hide delivery diagnostics from callers.
    pub production: bool,
    pub allowed_origin: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            endpoint: None,
            user_env: None,
            secret_env: None,
            to: None,
            subject_prefix: "Portfolio: ".to_string(),
            production: true,
            allowed_origin: "*".to_string(),
        }
    }
}

impl MailSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: MailSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
                return Err(SettingsError::Invalid {
                    field: "endpoint",
                    reason: format!("not an http(s) URL: {endpoint}"),
                });
            }
        }
        for (field, key) in [("user_env", &self.user_env), ("secret_env", &self.secret_env)] {
            if matches!(key, Some(k) if k.trim().is_empty()) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: "empty environment key".to_string(),
                });
            }
        }
        if self.allowed_origin.trim().is_empty() {
            return Err(SettingsError::Invalid {
                field: "allowed_origin",
                reason: "empty origin".to_string(),
            });
        }
        Ok(())
    }
}
