//! Provider backends responsible for turning cleaned paths into public URLs.
//!
//! Each supported CDN vendor contributes one [`UrlGenerator`] implementation;
//! the factory constructs exactly one of them from the project configuration
//! when the resolver is built. The resolver treats the handle as opaque and
//! returns its output verbatim.

mod aws_s3;
mod cloudfront;

pub use aws_s3::S3UrlGenerator;
pub use cloudfront::CloudFrontUrlGenerator;

use crate::config::CdnConfig;
use crate::error::CdnError;

/// Capability exposed by every provider backend.
pub trait UrlGenerator: std::fmt::Debug {
    /// Produce a fully-qualified URL for a cleaned asset path.
    fn generate_url(&self, clean_path: &str) -> String;
}

/// Construct the provider backend named by `default_provider`.
///
/// Unknown provider names fail here, at resolver construction, so a
/// misconfigured deployment surfaces immediately rather than on the first
/// asset resolution.
pub fn create_provider(config: &CdnConfig) -> Result<Box<dyn UrlGenerator + Send + Sync>, CdnError> {
    match config.default_provider.as_str() {
        "aws_s3" => Ok(Box::new(S3UrlGenerator::new(&config.providers.aws_s3))),
        "cloudfront" => Ok(Box::new(CloudFrontUrlGenerator::new(
            &config.providers.cloudfront,
        ))),
        other => Err(CdnError::UnsupportedProvider {
            name: other.to_string(),
        }),
    }
}
