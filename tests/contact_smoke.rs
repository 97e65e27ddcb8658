use std::cell::RefCell;

use folio_engine::domain::MailSettings;
use folio_engine::systems::contact::{
    handle_submission, DeliveryError, HttpCall, HttpExecutor, HttpMailTransport, HttpReply,
    MapCredentials, SubmissionRequest,
};

struct FakeApi {
    status: u16,
    calls: RefCell<Vec<HttpCall>>,
}

impl FakeApi {
    fn answering(status: u16) -> Self {
        Self { status, calls: RefCell::new(Vec::new()) }
    }
}

impl HttpExecutor for FakeApi {
    async fn execute(&self, call: &HttpCall) -> Result<HttpReply, DeliveryError> {
        self.calls.borrow_mut().push(call.clone());
        Ok(HttpReply { status: self.status, body: r#"{"id":"x"}"#.into() })
    }
}

fn env() -> MapCredentials {
    MapCredentials::new()
        .with("EMAIL_USER", "owner@folio.dev")
        .with("EMAIL_PASS", "re_secret")
}

const BODY: &str = r#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello there"}"#;

#[test]
fn contact_smoke_delivers_through_resend() {
    let settings = MailSettings::default();
    let transport = HttpMailTransport::new(FakeApi::answering(200));
    let request = SubmissionRequest::json(BODY);

    let response = pollster::block_on(handle_submission(&request, &settings, &env(), &transport));

    assert_eq!(response.status, 200);
    assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    let body = response.json().unwrap();
    assert_eq!(body["success"], true);

    let calls = transport.executor().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].url, "https://api.resend.com/emails");
    let sent: serde_json::Value = serde_json::from_str(&calls[0].body).unwrap();
    assert_eq!(sent["reply_to"], "ada@example.com");
    assert_eq!(sent["subject"], "Portfolio: Hi");
}

#[test]
fn contact_smoke_reports_provider_rejection() {
    let settings = MailSettings::from_json(r#"{"provider":"sendgrid","production":false}"#).unwrap();
    let transport = HttpMailTransport::new(FakeApi::answering(401));
    let request = SubmissionRequest::json(BODY);

    let response = pollster::block_on(handle_submission(&request, &settings, &env(), &transport));

    assert_eq!(response.status, 500);
    let calls = transport.executor().calls.borrow();
    assert_eq!(calls[0].url, "https://api.sendgrid.com/v3/mail/send");
    let body = response.json().unwrap();
    assert_eq!(body["success"], false);
    assert!(body.get("error").is_some());
}
