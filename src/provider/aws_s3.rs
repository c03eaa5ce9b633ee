use crate::config::S3Params;
use crate::provider::UrlGenerator;

/// URL generator serving assets straight from an S3 bucket endpoint.
///
/// URLs take the form `<url>/<bucket>/<version>/<path>`; the bucket and
/// version segments are skipped when empty so the same generator covers
/// bucket-in-hostname endpoints and unversioned deployments.
#[derive(Debug, Clone)]
pub struct S3UrlGenerator {
    origin: String,
    bucket: String,
    version: String,
}

impl S3UrlGenerator {
    /// Build a generator from the S3 parameter block.
    pub fn new(params: &S3Params) -> Self {
        Self {
            origin: params.url.trim_end_matches('/').to_string(),
            bucket: params.bucket.trim_matches('/').to_string(),
            version: params.version.trim_matches('/').to_string(),
        }
    }
}

impl UrlGenerator for S3UrlGenerator {
    fn generate_url(&self, clean_path: &str) -> String {
        let mut url = self.origin.clone();
        for segment in [&self.bucket, &self.version] {
            if !segment.is_empty() {
                url.push('/');
                url.push_str(segment);
            }
        }
        url.push('/');
        url.push_str(clean_path);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::S3UrlGenerator;
    use crate::config::S3Params;
    use crate::provider::UrlGenerator;

    #[test]
    fn joins_origin_bucket_and_path() {
        let generator = S3UrlGenerator::new(&S3Params {
            url: "https://s3.amazonaws.com/".into(),
            bucket: "my-bucket".into(),
            version: String::new(),
        });

        assert_eq!(
            generator.generate_url("css/app.css"),
            "https://s3.amazonaws.com/my-bucket/css/app.css"
        );
    }

    #[test]
    fn inserts_version_segment_when_configured() {
        let generator = S3UrlGenerator::new(&S3Params {
            url: "https://s3.amazonaws.com".into(),
            bucket: "my-bucket".into(),
            version: "v2".into(),
        });

        assert_eq!(
            generator.generate_url("js/app.js"),
            "https://s3.amazonaws.com/my-bucket/v2/js/app.js"
        );
    }

    #[test]
    fn skips_empty_bucket_for_hostname_endpoints() {
        let generator = S3UrlGenerator::new(&S3Params {
            url: "https://my-bucket.s3.eu-west-1.amazonaws.com".into(),
            bucket: String::new(),
            version: String::new(),
        });

        assert_eq!(
            generator.generate_url("img/logo.png"),
            "https://my-bucket.s3.eu-west-1.amazonaws.com/img/logo.png"
        );
    }
}
