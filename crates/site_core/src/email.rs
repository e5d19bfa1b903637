use serde::{Deserialize, Serialize};

use crate::form::ContactSubmission;

pub const EMAIL_CHARSET: &str = "UTF-8";

/// Outbound identity of the site owner, resolved from deployment
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SenderIdentity {
    pub email: String,
    pub name: String,
    pub url: String,
}

/// The message handed to the mail-delivery collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    pub charset: String,
}

/// Build the contact notification. The message goes to the site owner, not
/// the submitter; replying reaches the submitter through `Reply-To`.
///
/// Submitter-controlled fields are interpolated unescaped, including the
/// subject header. See DESIGN.md.
pub fn compose_contact_email(
    submission: &ContactSubmission,
    sender: &SenderIdentity,
) -> EmailMessage {
    let owner = format!("{} <{}>", sender.name, sender.email);
    let reply_to = format!(
        "{} {} <{}>",
        submission.first_name, submission.last_name, submission.email
    );

    let text_body = format!(
        "{}\r\n\r\n{} {}\r\n{}\r\n\r\n\r\nYou can reply directly to this message. This message was sent via {}",
        submission.comment,
        submission.first_name,
        submission.last_name,
        submission.email,
        sender.url
    );

    // Only the first newline of the comment becomes a break tag; the rest
    // pass through verbatim.
    let comment_html = submission.comment.replacen('\n', "<br />", 1);
    let html_body = format!(
        "<html>\n  <head>\n    <title>{subject}</title>\n  </head>\n  <body>\n    <p>{comment}</p>\n    <p>\n      {first_name} {last_name}<br />\n      {email}\n    </p>\n    <p>&nbsp;</p>\n    <p style=\"color:#777;font-size:0.75em;\">You can reply directly to this message. This message was sent via <a href=\"{url}\">{url}</a></p>\n  </body>\n</html>\n",
        subject = submission.subject,
        comment = comment_html,
        first_name = submission.first_name,
        last_name = submission.last_name,
        email = submission.email,
        url = sender.url
    );

    EmailMessage {
        from: owner.clone(),
        to: owner,
        reply_to,
        subject: submission.subject.clone(),
        text_body,
        html_body,
        charset: EMAIL_CHARSET.to_string(),
    }
}
