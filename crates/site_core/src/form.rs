use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::contract::ValidationError;

/// A validated contact-form submission. The form key for `comment` is
/// `comments`, matching the deployed page markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub subject: String,
    pub email: String,
    pub comment: String,
}

impl ContactSubmission {
    pub fn parse_form(body: &str) -> Result<Self, ValidationError> {
        let pairs = parse_form_pairs(body);
        Ok(Self {
            first_name: required_field(&pairs, "first_name")?,
            last_name: required_field(&pairs, "last_name")?,
            subject: required_field(&pairs, "subject")?,
            email: required_field(&pairs, "email")?,
            comment: required_field(&pairs, "comments")?,
        })
    }
}

/// Decode an `application/x-www-form-urlencoded` body into key/value pairs.
/// The last occurrence of a duplicated key wins.
pub fn parse_form_pairs(body: &str) -> BTreeMap<String, String> {
    let mut pairs = BTreeMap::new();
    for pair in body.split('&') {
        if pair.is_empty() {
            continue;
        }
        let mut parts = pair.splitn(2, '=');
        let key = decode_component(parts.next().unwrap_or(""));
        let value = decode_component(parts.next().unwrap_or(""));
        pairs.insert(key, value);
    }
    pairs
}

fn required_field(
    pairs: &BTreeMap<String, String>,
    key: &str,
) -> Result<String, ValidationError> {
    match pairs.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(ValidationError::new(format!(
            "Form field '{key}' is required"
        ))),
    }
}

/// Percent-decoding with `+` treated as a space. Malformed escape sequences
/// pass through verbatim.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'+' => {
                decoded.push(b' ');
                index += 1;
            }
            b'%' if index + 2 < bytes.len() => {
                match (hex_value(bytes[index + 1]), hex_value(bytes[index + 2])) {
                    (Some(high), Some(low)) => {
                        decoded.push(high * 16 + low);
                        index += 3;
                    }
                    _ => {
                        decoded.push(b'%');
                        index += 1;
                    }
                }
            }
            byte => {
                decoded.push(byte);
                index += 1;
            }
        }
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
