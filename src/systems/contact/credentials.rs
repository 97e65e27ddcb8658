use std::collections::HashMap;

/// Read access to the host environment, consulted on every request.
pub trait CredentialSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Fixed key/value environment (tests, or values copied out of the host).
#[derive(Clone, Debug, Default)]
pub struct MapCredentials {
    vars: HashMap<String, String>,
}

impl MapCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let vars: HashMap<String, String> = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(Self { vars })
    }
}

impl CredentialSource for MapCredentials {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// The process environment, for native hosts.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

#[cfg(not(target_arch = "wasm32"))]
impl CredentialSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Sender address and secret for one request.
#[derive(Clone, PartialEq, Eq)]
pub struct MailAccount {
    pub user: String,
    pub secret: String,
}

impl std::fmt::Debug for MailAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailAccount")
            .field("user", &self.user)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_credentials_from_json() {
        let env = MapCredentials::from_json(r#"{"EMAIL_USER":"me@site.dev"}"#).unwrap();
        assert_eq!(env.lookup("EMAIL_USER").as_deref(), Some("me@site.dev"));
        assert_eq!(env.lookup("EMAIL_PASS"), None);
        assert!(MapCredentials::from_json("[]").is_err());
    }

    #[test]
    fn account_debug_redacts_secret() {
        let account = MailAccount { user: "me@site.dev".into(), secret: "hunter2".into() };
        let printed = format!("{account:?}");
        assert!(printed.contains("me@site.dev"));
        assert!(!printed.contains("hunter2"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn process_env_reads_cargo_vars() {
        assert_eq!(ProcessEnv.lookup("CARGO_PKG_NAME").as_deref(), Some("folio-engine"));
        assert_eq!(ProcessEnv.lookup("FOLIO_ENGINE_SURELY_UNSET"), None);
    }
}
