//! MIME selection for the asset responder.
//!
//! The table is deliberately closed: an extension outside it yields no
//! `Content-Type` header at all. See DESIGN.md.

/// Content-Type for a file extension, compared case-insensitively.
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "css" => Some("text/css"),
        "js" => Some("application/javascript"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// Extensions whose bodies must be base64-encoded in the response.
pub fn is_binary_extension(extension: &str) -> bool {
    extension.eq_ignore_ascii_case("png")
}

/// The segment after the last `.`, or the whole path when it has none.
pub fn path_extension(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
