use crate::domain::{ContactMessage, MailSettings};

use super::credentials::MailAccount;

/// A fully addressed message, ready for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Address the submission to the operator's inbox, replying to the submitter.
pub fn compose(settings: &MailSettings, account: &MailAccount, message: &ContactMessage) -> OutboundMail {
    let to = settings
        .to
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| account.user.clone());

    let html = format!(
        "<h3>New Message</h3>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Subject:</strong> {}</p>\n\
         <p><strong>Message:</strong> {}</p>\n",
        escape_html(&message.name),
        escape_html(&message.email),
        escape_html(&message.subject),
        escape_html(&message.message).replace('\n', "<br>"),
    );
    let text = format!(
        "New Message\n\nName: {}\nEmail: {}\nSubject: {}\n\n{}\n",
        message.name, message.email, message.subject, message.message
    );

    OutboundMail {
        from: account.user.clone(),
        to,
        reply_to: message.email.clone(),
        subject: format!("{}{}", settings.subject_prefix, message.subject).replace(['\r', '\n'], " "),
        html,
        text,
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
