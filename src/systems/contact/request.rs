use percent_encoding::percent_decode_str;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{ContactMessage, MailSettings};

use super::error::SubmissionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Options,
    Other,
}

impl Method {
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("POST") {
            Method::Post
        } else if raw.eq_ignore_ascii_case("OPTIONS") {
            Method::Options
        } else {
            Method::Other
        }
    }
}

/// A request as handed over by the serverless host.
#[derive(Clone, Debug)]
pub struct SubmissionRequest {
    pub method: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl SubmissionRequest {
    pub fn new(method: impl Into<String>, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    pub fn json(body: impl Into<String>) -> Self {
        Self::new("POST", Some("application/json"), body)
    }

    pub fn method(&self) -> Method {
        Method::parse(self.method.trim())
    }

    fn is_form_encoded(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false)
    }
}

/// Decode the four contact fields from a JSON or form-encoded body.
///
/// Bodies without a form content type are read as JSON. Non-string JSON
/// values count as missing.
pub fn parse_message(request: &SubmissionRequest) -> Result<ContactMessage, SubmissionError> {
    if request.is_form_encoded() {
        Ok(parse_form(&request.body))
    } else {
        parse_json(&request.body)
    }
}

fn parse_json(body: &str) -> Result<ContactMessage, SubmissionError> {
    if body.trim().is_empty() {
        return Ok(ContactMessage::default());
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| SubmissionError::MalformedBody(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(SubmissionError::MalformedBody("expected a JSON object".to_string()));
    };

    let mut msg = ContactMessage::default();
    for (key, value) in map {
        if let Value::String(s) = value {
            msg.set_field(&key, s);
        }
    }
    Ok(msg)
}

fn parse_form(body: &str) -> ContactMessage {
    let mut msg = ContactMessage::default();
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let mut it = pair.splitn(2, '=');
        let Some(key) = it.next() else { continue };
        let value = it.next().unwrap_or("");
        msg.set_field(&form_decode(key), form_decode(value));
    }
    msg
}

fn form_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}

#[derive(Serialize)]
struct ReplyBody<'a> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Response handed back to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// `None` for an empty body.
    pub body: Option<String>,
}

impl SubmissionResponse {
    fn with_cors(status: u16, settings: &MailSettings) -> Self {
        Self {
            status,
            headers: vec![
                ("Access-Control-Allow-Origin".to_string(), settings.allowed_origin.clone()),
                ("Access-Control-Allow-Methods".to_string(), "POST, OPTIONS".to_string()),
                ("Access-Control-Allow-Headers".to_string(), "Content-Type".to_string()),
            ],
            body: None,
        }
    }

    pub fn preflight(settings: &MailSettings) -> Self {
        Self::with_cors(200, settings)
    }

    pub fn sent(settings: &MailSettings) -> Self {
        Self::reply(200, settings, &ReplyBody { success: true, message: "Email sent!", error: None })
    }

    pub fn rejected(settings: &MailSettings, err: &SubmissionError) -> Self {
        let message = err.public_message();
        let detail = (!settings.production).then(|| err.to_string());
        Self::reply(
            err.status(),
            settings,
            &ReplyBody { success: false, message: &message, error: detail.as_deref() },
        )
    }

    fn reply(status: u16, settings: &MailSettings, body: &ReplyBody<'_>) -> Self {
        let mut response = Self::with_cors(status, settings);
        response
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        // Plain structs of strings and bools always serialize.
        response.body = Some(serde_json::to_string(body).unwrap_or_default());
        response
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Option<Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_and_ignores_unknown_or_non_string_fields() {
        let req = SubmissionRequest::json(
            r#"{"name":"A","email":"a@b.com","subject":7,"message":"M","phone":"1"}"#,
        );
        let msg = parse_message(&req).unwrap();
        assert_eq!(msg.name, "A");
        assert_eq!(msg.subject, "");
        assert_eq!(msg.first_missing_field(), Some("subject"));
    }

    #[test]
    fn parses_form_encoded_body() {
        let req = SubmissionRequest::new(
            "POST",
            Some("application/x-www-form-urlencoded; charset=UTF-8"),
            "name=Ada+Lovelace&email=ada%40example.com&subject=Hi&message=caf%C3%A9%20%26%20tea",
        );
        let msg = parse_message(&req).unwrap();
        assert_eq!(msg.name, "Ada Lovelace");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "café & tea");
    }

    #[test]
    fn non_object_json_is_malformed() {
        let err = parse_message(&SubmissionRequest::json("[1,2]")).unwrap_err();
        assert!(matches!(err, SubmissionError::MalformedBody(_)));
        let err = parse_message(&SubmissionRequest::json("{nope")).unwrap_err();
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn method_parsing_is_case_insensitive() {
        assert_eq!(Method::parse("post"), Method::Post);
        assert_eq!(Method::parse("OPTIONS"), Method::Options);
        assert_eq!(Method::parse("GET"), Method::Other);
    }

    #[test]
    fn rejection_detail_only_outside_production() {
        let err = SubmissionError::MissingCredential("EMAIL_PASS".into());

        let prod = MailSettings::default();
        let body = SubmissionResponse::rejected(&prod, &err).json().unwrap();
        assert!(body.get("error").is_none());

        let dev = MailSettings { production: false, ..MailSettings::default() };
        let body = SubmissionResponse::rejected(&dev, &err).json().unwrap();
        assert!(body["error"].as_str().unwrap().contains("EMAIL_PASS"));
    }
}
