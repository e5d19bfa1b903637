/// Literal marker replaced with the per-stage CDN hostname before a template
/// is returned as a response body.
pub const CDN_PLACEHOLDER: &str = "{{cdn-domain-name}}";

/// Replace every occurrence of the placeholder. An unset CDN resolves to the
/// empty string upstream, which erases the marker.
pub fn render_template(template: &str, cdn_domain: &str) -> String {
    template.replace(CDN_PLACEHOLDER, cdn_domain)
}
