use std::collections::BTreeMap;

use serde_json::json;

use site_core::contract::{SiteRequest, SiteResponse};
use site_core::email::{compose_contact_email, SenderIdentity};
use site_core::form::ContactSubmission;

use crate::adapters::mailer::Mailer;

pub const THANKS_REDIRECT: &str = "./thanks";

/// A failed send is fatal for the invocation; the binary propagates this to
/// the Lambda error channel. No retry, no partial success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactHandlerError {
    pub message: String,
}

/// Parse and validate the form body, compose the notification email, send it
/// through the mail-delivery collaborator, and redirect to the thanks page.
pub fn handle_contact_request(
    request: &SiteRequest,
    sender: &SenderIdentity,
    mailer: &dyn Mailer,
) -> Result<SiteResponse, ContactHandlerError> {
    let body = request.body.as_deref().unwrap_or("");
    let submission = match ContactSubmission::parse_form(body) {
        Ok(value) => value,
        Err(error) => return Ok(validation_error_response(error.message())),
    };

    let message = compose_contact_email(&submission, sender);
    match mailer.send(&message) {
        Ok(message_id) => {
            log_contact_info(
                "email_sent",
                json!({
                    "message_id": message_id,
                    "reply_to": message.reply_to.clone(),
                }),
            );
            Ok(SiteResponse::redirect(THANKS_REDIRECT))
        }
        Err(error) => {
            log_contact_error(
                "email_send_failed",
                json!({
                    "error": error.clone(),
                }),
            );
            Err(ContactHandlerError { message: error })
        }
    }
}

fn validation_error_response(message: &str) -> SiteResponse {
    let payload = json!({
        "error": "validation_error",
        "message": message,
    });
    SiteResponse {
        status_code: 400,
        headers: BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]),
        body: payload.to_string(),
        is_base64_encoded: false,
    }
}

fn log_contact_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "contact_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_contact_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "contact_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
