use std::collections::BTreeMap;
use std::path::PathBuf;

use site_core::email::SenderIdentity;

pub const DEFAULT_SITE_ROOT: &str = ".";

/// Snapshot of the `CDN_*` environment variables, captured once at process
/// start so handlers never touch the ambient environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CdnVars {
    domains: BTreeMap<String, String>,
}

impl CdnVars {
    pub fn from_env() -> Self {
        let domains = std::env::vars()
            .filter(|(key, _)| key.starts_with("CDN_"))
            .collect();
        Self { domains }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            domains: pairs.into_iter().collect(),
        }
    }

    /// Stage `prod` resolves through `CDN_PROD`; a stage with no configured
    /// variable resolves to the empty string.
    pub fn domain_for_stage(&self, stage: &str) -> &str {
        let key = format!("CDN_{stage}").to_uppercase();
        self.domains.get(&key).map(String::as_str).unwrap_or("")
    }
}

/// Directory the deployment package is unpacked into, holding the templates
/// and the asset tree.
pub fn site_root_from_env() -> PathBuf {
    std::env::var("SITE_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SITE_ROOT))
}

pub fn sender_identity_from_env() -> Result<SenderIdentity, String> {
    Ok(SenderIdentity {
        email: required_env("SENDER_EMAIL")?,
        name: required_env("SENDER_NAME")?,
        url: required_env("SENDER_URL")?,
    })
}

fn required_env(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("{key} must be configured"))
}
