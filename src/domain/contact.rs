use serde::{Deserialize, Serialize};

/// Field names in the order they are checked and reported.
pub const CONTACT_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// One contact form submission.
///
/// Lives only for the duration of a request: it is parsed, validated,
/// turned into an outbound mail and dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "email" => Some(&mut self.email),
            "subject" => Some(&mut self.subject),
            "message" => Some(&mut self.message),
            _ => None,
        }
    }

    /// Set a field by its wire name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// First field that is missing or blank, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        CONTACT_FIELDS
            .iter()
            .copied()
            .find(|f| self.field(f).map_or(true, |v| v.trim().is_empty()))
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing_field().is_none()
    }

    /// Trimmed copy, used once validation has passed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_blank_field_in_wire_order() {
        let msg = ContactMessage::new("A", "", "S", "  ");
        assert_eq!(msg.first_missing_field(), Some("email"));

        let msg = ContactMessage::new("A", "a@b.com", "S", "\n\t");
        assert_eq!(msg.first_missing_field(), Some("message"));

        assert!(ContactMessage::new("A", "a@b.com", "S", "M").is_complete());
    }

    #[test]
    fn set_field_ignores_unknown_names() {
        let mut msg = ContactMessage::default();
        assert!(msg.set_field("subject", "Hi".into()));
        assert!(!msg.set_field("phone", "123".into()));
        assert_eq!(msg.subject, "Hi");
    }
}
