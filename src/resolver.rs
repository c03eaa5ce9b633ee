//! The caller-facing facade that turns asset paths into CDN URLs.

use std::path::PathBuf;

use crate::config::CdnConfig;
use crate::error::CdnError;
use crate::manifest::ManifestCache;
use crate::paths::{apply_prefix, clean_path, is_remote_reference};
use crate::provider::{UrlGenerator, create_provider};

/// Manifest written by gulp-rev style pipelines, keyed by bare filenames.
const REV_MANIFEST: &str = "build/rev-manifest.json";
/// Directory prefix applied to rev-manifest rewrites.
const REV_BUILD_DIR: &str = "build";
/// Manifest written by webpack mix, keyed by slash-prefixed paths.
const MIX_MANIFEST: &str = "mix-manifest.json";

/// A resolved asset URL, ready to render.
///
/// The wrapper signals to template layers that the value is already a
/// well-formed URL and must not be HTML-escaped a second time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnUrl(String);

impl CdnUrl {
    /// View the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CdnUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CdnUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CdnUrl> for String {
    fn from(url: CdnUrl) -> Self {
        url.0
    }
}

/// Facade resolving logical asset paths into provider URLs.
///
/// Configuration is read once at construction: the provider handle is built
/// immediately (so misconfiguration fails fast) and reused for every call,
/// and the manifest cache lives as long as the resolver. Every entry point is
/// a pure function of its input for fixed configuration and manifests.
#[derive(Debug)]
pub struct CdnResolver {
    config: CdnConfig,
    public_dir: PathBuf,
    provider: Box<dyn UrlGenerator + Send + Sync>,
    manifests: ManifestCache,
}

impl CdnResolver {
    /// Build a resolver for the given configuration and public asset root.
    ///
    /// Fails with [`CdnError::UnsupportedProvider`] when the configuration
    /// names a provider with no registered backend.
    pub fn new(config: CdnConfig, public_dir: impl Into<PathBuf>) -> Result<Self, CdnError> {
        Self::with_manifest_cache(config, public_dir, ManifestCache::new())
    }

    /// Build a resolver that uses a caller-supplied manifest cache.
    pub fn with_manifest_cache(
        config: CdnConfig,
        public_dir: impl Into<PathBuf>,
        manifests: ManifestCache,
    ) -> Result<Self, CdnError> {
        let provider = create_provider(&config)?;
        Ok(Self {
            config,
            public_dir: public_dir.into(),
            provider,
            manifests,
        })
    }

    /// Resolve a plain asset path into a CDN URL.
    pub fn asset(&self, path: &str) -> Result<CdnUrl, CdnError> {
        self.generate(path)
    }

    /// Resolve a plain path into a CDN URL.
    ///
    /// Identical to [`CdnResolver::asset`]; both names are kept so templates
    /// read naturally whether they reference assets or arbitrary files.
    pub fn path(&self, path: &str) -> Result<CdnUrl, CdnError> {
        self.generate(path)
    }

    /// Resolve a cache-busted asset through `build/rev-manifest.json`.
    ///
    /// The manifest keys are bare logical filenames; on a hit the rewritten
    /// filename is served from the `build/` directory. A key absent from the
    /// manifest fails with [`CdnError::UnknownManifestEntry`].
    pub fn rev_asset(&self, path: &str) -> Result<CdnUrl, CdnError> {
        if path.is_empty() {
            return Err(CdnError::EmptyPath);
        }

        let manifest = self.public_dir.join(REV_MANIFEST);
        let rewritten = self.manifests.lookup(&manifest, path)?;
        self.generate(&format!("{REV_BUILD_DIR}/{rewritten}"))
    }

    /// Resolve a cache-busted asset through `mix-manifest.json`.
    ///
    /// The manifest keys carry a leading slash, so one is added to the input
    /// when absent. Unlike [`CdnResolver::rev_asset`] the rewritten path is
    /// used verbatim; mix already records the full output path. A missing
    /// manifest file fails with [`CdnError::ManifestMissing`], a missing key
    /// with [`CdnError::UnknownManifestEntry`].
    pub fn mix_asset(&self, path: &str) -> Result<CdnUrl, CdnError> {
        if path.is_empty() {
            return Err(CdnError::EmptyPath);
        }

        let key = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let manifest = self.public_dir.join(MIX_MANIFEST);
        let rewritten = self.manifests.lookup(&manifest, &key)?;
        self.generate(&rewritten)
    }

    /// Shared generation procedure behind every entry point.
    fn generate(&self, path: &str) -> Result<CdnUrl, CdnError> {
        if path.is_empty() {
            return Err(CdnError::EmptyPath);
        }

        // Already-reachable references are served as-is.
        if is_remote_reference(path) {
            return Ok(CdnUrl(path.to_string()));
        }

        // The development escape hatch: keep assets on the local server.
        if self.config.bypass {
            return Ok(CdnUrl(format!(
                "{}/{}",
                self.config.local_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )));
        }

        let cleaned = clean_path(path);
        let prefixed = apply_prefix(&self.config.prefix, &cleaned);
        Ok(CdnUrl(self.provider.generate_url(&prefixed)))
    }
}
