//! Project configuration describing the active CDN provider and its parameters.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "cdn.config.json";

/// Discoverable project configuration for CDN URL generation.
///
/// Loaded once when a [`crate::CdnResolver`] is constructed and never
/// reloaded. Exactly one provider, named by `default_provider`, is active for
/// the lifetime of a resolver instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// Skip the provider entirely and return local URLs, for development.
    pub bypass: bool,
    /// Name of the provider backend to construct (`aws_s3` or `cloudfront`).
    pub default_provider: String,
    /// Origin prepended to bypass-mode URLs; empty yields root-relative URLs.
    pub local_url: String,
    /// Directory prefix applied to every cleaned path before URL generation.
    pub prefix: String,
    /// Provider-specific parameter blocks.
    pub providers: ProviderParams,
}

/// Parameter blocks for each supported provider backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderParams {
    /// Amazon S3 parameters.
    pub aws_s3: S3Params,
    /// CloudFront distribution parameters.
    pub cloudfront: CloudFrontParams,
}

/// Parameters for serving assets straight from an S3 bucket endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct S3Params {
    /// Endpoint origin, e.g. `https://s3.amazonaws.com`.
    pub url: String,
    /// Bucket name appended as the first path segment.
    pub bucket: String,
    /// Optional version tag inserted between the bucket and the asset path.
    pub version: String,
}

/// Parameters for serving assets through a CloudFront distribution.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CloudFrontParams {
    /// Distribution origin, e.g. `https://d111111abcdef8.cloudfront.net`.
    pub cdn_url: String,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            bypass: false,
            default_provider: "aws_s3".into(),
            local_url: String::new(),
            prefix: String::new(),
            providers: ProviderParams::default(),
        }
    }
}

impl Default for S3Params {
    fn default() -> Self {
        Self {
            url: "https://s3.amazonaws.com".into(),
            bucket: String::new(),
            version: String::new(),
        }
    }
}

impl CdnConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fallback
    /// to default values so downstream callers can continue operating with
    /// sensible assumptions.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults_for_missing_file() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = CdnConfig::discover(temp.path());

        assert!(!config.bypass);
        assert_eq!(config.default_provider, "aws_s3");
        assert_eq!(config.providers.aws_s3.url, "https://s3.amazonaws.com");
    }

    #[test]
    fn discover_reads_partial_configuration() {
        let temp = tempdir().expect("failed to create temp dir");
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{
                "bypass": true,
                "default_provider": "cloudfront",
                "providers": {
                    "cloudfront": { "cdn_url": "https://cdn.example.com" }
                }
            }"#,
        )
        .expect("failed to write config file");

        let config = CdnConfig::discover(temp.path());

        assert!(config.bypass);
        assert_eq!(config.default_provider, "cloudfront");
        assert_eq!(
            config.providers.cloudfront.cdn_url,
            "https://cdn.example.com"
        );
        // Untouched blocks keep their defaults.
        assert_eq!(config.providers.aws_s3.url, "https://s3.amazonaws.com");
    }
}
