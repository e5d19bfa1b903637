use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Deployment-stage metadata carried inside the API Gateway event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestContext {
    #[serde(default)]
    pub stage: Option<String>,
}

/// The slice of an API-Gateway-proxy event the handlers consume. Every
/// other event field is ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteRequest {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, rename = "requestContext")]
    pub request_context: RequestContext,
}

impl SiteRequest {
    /// Deployment stage, or the empty string when the event carries none.
    pub fn stage(&self) -> &str {
        self.request_context.stage.as_deref().unwrap_or("")
    }
}

/// API-Gateway-proxy response tuple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
}

impl SiteResponse {
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            headers: BTreeMap::from([("Content-Type".to_string(), "text/html".to_string())]),
            body: body.into(),
            is_base64_encoded: false,
        }
    }

    /// Redirect-after-POST response with an empty body.
    pub fn redirect(location: &str) -> Self {
        Self {
            status_code: 303,
            headers: BTreeMap::from([("Location".to_string(), location.to_string())]),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}
