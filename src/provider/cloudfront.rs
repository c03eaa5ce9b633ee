use crate::config::CloudFrontParams;
use crate::provider::UrlGenerator;

/// URL generator serving assets through a CloudFront distribution.
#[derive(Debug, Clone)]
pub struct CloudFrontUrlGenerator {
    origin: String,
}

impl CloudFrontUrlGenerator {
    /// Build a generator from the CloudFront parameter block.
    pub fn new(params: &CloudFrontParams) -> Self {
        Self {
            origin: params.cdn_url.trim_end_matches('/').to_string(),
        }
    }
}

impl UrlGenerator for CloudFrontUrlGenerator {
    fn generate_url(&self, clean_path: &str) -> String {
        format!("{}/{}", self.origin, clean_path)
    }
}
