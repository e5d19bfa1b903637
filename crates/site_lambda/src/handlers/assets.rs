use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use base64::engine::general_purpose;
use base64::Engine as _;
use serde_json::json;

use site_core::contract::{SiteRequest, SiteResponse};
use site_core::mime;

/// Serve a static file addressed by the request path, relative to the asset
/// root. A failed read surfaces as a 500 response with an empty body; the
/// invocation itself always succeeds.
pub fn handle_asset_request(request: &SiteRequest, asset_root: &Path) -> SiteResponse {
    let extension = mime::path_extension(&request.path);
    let content_type = mime::content_type_for_extension(extension);

    let Some(file_path) = resolve_asset_path(asset_root, &request.path) else {
        log_asset_error(
            "asset_path_rejected",
            &request.path,
            "path escapes the asset root",
        );
        return SiteResponse::empty(500);
    };

    match read_asset_body(&file_path, extension) {
        Ok((body, is_base64_encoded)) => {
            let mut headers = BTreeMap::new();
            if let Some(content_type) = content_type {
                headers.insert("Content-Type".to_string(), content_type.to_string());
            }
            SiteResponse {
                status_code: 200,
                headers,
                body,
                is_base64_encoded,
            }
        }
        Err(error) => {
            log_asset_error("asset_read_failed", &request.path, &error);
            SiteResponse::empty(500)
        }
    }
}

/// Join the request path onto the asset root, rejecting any non-normal
/// segment so `..` cannot escape it.
fn resolve_asset_path(asset_root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    if relative
        .components()
        .any(|component| !matches!(component, Component::Normal(_)))
    {
        return None;
    }
    Some(asset_root.join(relative))
}

fn read_asset_body(path: &Path, extension: &str) -> Result<(String, bool), String> {
    if mime::is_binary_extension(extension) {
        let bytes =
            fs::read(path).map_err(|error| format!("failed to read asset: {error}"))?;
        Ok((general_purpose::STANDARD.encode(bytes), true))
    } else {
        let text = fs::read_to_string(path)
            .map_err(|error| format!("failed to read asset: {error}"))?;
        Ok((text, false))
    }
}

fn log_asset_error(event: &str, path: &str, error: &str) {
    eprintln!(
        "{}",
        json!({
            "component": "asset_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": {
                "path": path,
                "error": error,
            },
        })
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_for(path: &str) -> SiteRequest {
        SiteRequest {
            path: path.to_string(),
            ..SiteRequest::default()
        }
    }

    fn site_root_with(relative: &str, contents: &[u8]) -> tempfile::TempDir {
        let root = tempfile::tempdir().expect("temp dir should be created");
        let path = root.path().join(relative);
        fs::create_dir_all(path.parent().expect("asset path should have a parent"))
            .expect("asset directory should be created");
        fs::write(path, contents).expect("asset should be written");
        root
    }

    #[test]
    fn css_is_served_as_utf8_text() {
        let root = site_root_with("assets/styles/index.min.css", b"body { margin: 0; }");
        let response =
            handle_asset_request(&request_for("/assets/styles/index.min.css"), root.path());

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/css")
        );
        assert_eq!(response.body, "body { margin: 0; }");
        assert!(!response.is_base64_encoded);
    }

    #[test]
    fn js_is_served_as_utf8_text() {
        let root = site_root_with("assets/app.js", b"console.log(1);");
        let response = handle_asset_request(&request_for("/assets/app.js"), root.path());

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/javascript")
        );
        assert!(!response.is_base64_encoded);
    }

    #[test]
    fn png_is_base64_encoded_with_the_binary_flag() {
        let bytes = [0x89u8, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        let root = site_root_with("assets/logo.png", &bytes);
        let response = handle_asset_request(&request_for("/assets/logo.png"), root.path());

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("image/png")
        );
        assert!(response.is_base64_encoded);
        assert_eq!(response.body, general_purpose::STANDARD.encode(bytes));
    }

    #[test]
    fn unknown_extension_gets_no_content_type_header() {
        let root = site_root_with("assets/data.txt", b"plain");
        let response = handle_asset_request(&request_for("/assets/data.txt"), root.path());

        assert_eq!(response.status_code, 200);
        assert!(!response.headers.contains_key("Content-Type"));
        assert_eq!(response.body, "plain");
    }

    #[test]
    fn missing_file_yields_500_with_empty_body() {
        let root = tempfile::tempdir().expect("temp dir should be created");
        let response = handle_asset_request(&request_for("/assets/missing.css"), root.path());

        assert_eq!(response.status_code, 500);
        assert!(response.body.is_empty());
        assert!(!response.is_base64_encoded);
    }

    #[test]
    fn traversal_outside_the_root_is_rejected() {
        let root = site_root_with("assets/app.js", b"console.log(1);");
        let response = handle_asset_request(&request_for("/../secrets.css"), root.path());

        assert_eq!(response.status_code, 500);
        assert!(response.body.is_empty());
    }
}
