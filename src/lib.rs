#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod manifest;
pub mod paths;
pub mod provider;
pub mod resolver;

pub use config::{CdnConfig, CloudFrontParams, ProviderParams, S3Params};
pub use error::CdnError;
pub use manifest::{FsManifestSource, ManifestCache, ManifestSource};
pub use provider::{UrlGenerator, create_provider};
pub use resolver::{CdnResolver, CdnUrl};
