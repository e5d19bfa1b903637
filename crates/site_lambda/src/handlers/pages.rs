use std::fs;
use std::path::Path;

use site_core::contract::{SiteRequest, SiteResponse};
use site_core::template::render_template;

use crate::runtime::config::CdnVars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTemplate {
    Home,
    Thanks,
}

impl PageTemplate {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Home => "index.htm",
            Self::Thanks => "thanks.htm",
        }
    }
}

/// A missing or unreadable template is fatal for the invocation; the binary
/// propagates this to the Lambda error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHandlerError {
    pub message: String,
}

/// Render a static HTML template with the stage's CDN hostname substituted
/// for every placeholder occurrence.
pub fn handle_page_request(
    request: &SiteRequest,
    template: PageTemplate,
    site_root: &Path,
    cdn: &CdnVars,
) -> Result<SiteResponse, PageHandlerError> {
    let template_path = site_root.join(template.file_name());
    let raw = fs::read_to_string(&template_path).map_err(|error| PageHandlerError {
        message: format!(
            "failed to read template {}: {error}",
            template.file_name()
        ),
    })?;

    let cdn_domain = cdn.domain_for_stage(request.stage());
    Ok(SiteResponse::html(render_template(&raw, cdn_domain)))
}

#[cfg(test)]
mod tests {
    use site_core::contract::RequestContext;

    use super::*;

    fn request_with_stage(stage: Option<&str>) -> SiteRequest {
        SiteRequest {
            path: "/".to_string(),
            body: None,
            request_context: RequestContext {
                stage: stage.map(str::to_string),
            },
        }
    }

    fn site_root_with_template(file_name: &str, contents: &str) -> tempfile::TempDir {
        let root = tempfile::tempdir().expect("temp dir should be created");
        fs::write(root.path().join(file_name), contents).expect("template should be written");
        root
    }

    fn prod_cdn() -> CdnVars {
        CdnVars::from_pairs([("CDN_PROD".to_string(), "cdn.example.com".to_string())])
    }

    #[test]
    fn home_template_renders_with_the_stage_cdn() {
        let root = site_root_with_template("index.htm", "Hello {{cdn-domain-name}}!");
        let response = handle_page_request(
            &request_with_stage(Some("prod")),
            PageTemplate::Home,
            root.path(),
            &prod_cdn(),
        )
        .expect("page should render");

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/html")
        );
        assert_eq!(response.body, "Hello cdn.example.com!");
    }

    #[test]
    fn thanks_template_uses_its_own_file() {
        let root = site_root_with_template("thanks.htm", "<p>Thanks, {{cdn-domain-name}}</p>");
        let response = handle_page_request(
            &request_with_stage(Some("prod")),
            PageTemplate::Thanks,
            root.path(),
            &prod_cdn(),
        )
        .expect("page should render");

        assert_eq!(response.body, "<p>Thanks, cdn.example.com</p>");
    }

    #[test]
    fn missing_stage_substitutes_the_empty_string() {
        let root = site_root_with_template("index.htm", "Hello {{cdn-domain-name}}!");
        let response = handle_page_request(
            &request_with_stage(None),
            PageTemplate::Home,
            root.path(),
            &prod_cdn(),
        )
        .expect("page should render");

        assert_eq!(response.body, "Hello !");
    }

    #[test]
    fn missing_template_is_a_handler_error() {
        let root = tempfile::tempdir().expect("temp dir should be created");
        let error = handle_page_request(
            &request_with_stage(Some("prod")),
            PageTemplate::Home,
            root.path(),
            &prod_cdn(),
        )
        .expect_err("page should fail");

        assert!(error.message.contains("index.htm"));
    }
}
