use crate::domain::MailSettings;

use super::compose::OutboundMail;
use super::credentials::MailAccount;
use super::error::DeliveryError;
use super::provider::{build_call, HttpCall, HttpReply};

/// Delivers one message. A single attempt: no retries.
///
/// `settings` are the ones the request was validated against, so the
/// credential keys and the provider call always agree.
#[allow(async_fn_in_trait)]
pub trait MailTransport {
    async fn deliver(
        &self,
        settings: &MailSettings,
        mail: &OutboundMail,
        account: &MailAccount,
    ) -> Result<(), DeliveryError>;
}

/// Performs a prepared HTTP call (browser `fetch`, a test double, ...).
#[allow(async_fn_in_trait)]
pub trait HttpExecutor {
    async fn execute(&self, call: &HttpCall) -> Result<HttpReply, DeliveryError>;
}

/// Sends mail through the hosted API named in the settings.
pub struct HttpMailTransport<E> {
    executor: E,
}

impl<E: HttpExecutor> HttpMailTransport<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }
}

impl<E: HttpExecutor> MailTransport for HttpMailTransport<E> {
    async fn deliver(
        &self,
        settings: &MailSettings,
        mail: &OutboundMail,
        account: &MailAccount,
    ) -> Result<(), DeliveryError> {
        let call = build_call(settings, account, mail);
        let reply = self.executor.execute(&call).await?;
        if reply.ok() {
            Ok(())
        } else {
            Err(DeliveryError::Rejected { status: reply.status, body: reply.body })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::ProviderKind;

    struct CannedExecutor {
        reply: Result<HttpReply, DeliveryError>,
        calls: RefCell<Vec<HttpCall>>,
    }

    impl HttpExecutor for CannedExecutor {
        async fn execute(&self, call: &HttpCall) -> Result<HttpReply, DeliveryError> {
            self.calls.borrow_mut().push(call.clone());
            self.reply.clone()
        }
    }

    fn mail() -> OutboundMail {
        OutboundMail {
            from: "owner@site.dev".into(),
            to: "owner@site.dev".into(),
            reply_to: "a@b.com".into(),
            subject: "Portfolio: S".into(),
            html: "<p>M</p>".into(),
            text: "M".into(),
        }
    }

    fn account() -> MailAccount {
        MailAccount { user: "owner@site.dev".into(), secret: "key".into() }
    }

    #[test]
    fn non_2xx_reply_is_a_rejection() {
        let transport = HttpMailTransport::new(CannedExecutor {
            reply: Ok(HttpReply { status: 422, body: "bad from".into() }),
            calls: RefCell::new(Vec::new()),
        });
        let err = pollster::block_on(transport.deliver(&MailSettings::default(), &mail(), &account())).unwrap_err();
        assert_eq!(err, DeliveryError::Rejected { status: 422, body: "bad from".into() });
        assert_eq!(transport.executor().calls.borrow().len(), 1);
    }

    #[test]
    fn success_makes_exactly_one_call() {
        let transport = HttpMailTransport::new(CannedExecutor {
            reply: Ok(HttpReply { status: 200, body: "{}".into() }),
            calls: RefCell::new(Vec::new()),
        });
        pollster::block_on(transport.deliver(&MailSettings::default(), &mail(), &account())).unwrap();
        let calls = transport.executor().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
    }

    #[test]
    fn provider_follows_the_settings_passed_in() {
        let transport = HttpMailTransport::new(CannedExecutor {
            reply: Ok(HttpReply { status: 202, body: String::new() }),
            calls: RefCell::new(Vec::new()),
        });
        let sendgrid = MailSettings { provider: ProviderKind::SendGrid, ..MailSettings::default() };
        pollster::block_on(transport.deliver(&MailSettings::default(), &mail(), &account())).unwrap();
        pollster::block_on(transport.deliver(&sendgrid, &mail(), &account())).unwrap();

        let calls = transport.executor().calls.borrow();
        assert_eq!(calls[0].url, "https://api.resend.com/emails");
        assert_eq!(calls[1].url, "https://api.sendgrid.com/v3/mail/send");
    }
}
