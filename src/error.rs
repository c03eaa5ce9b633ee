//! Error values surfaced by the resolution pipeline.

use std::path::PathBuf;

/// Errors that can occur while resolving an asset path to a CDN URL.
///
/// Every resolution entry point is fallible; callers are expected to handle or
/// report these at the template or request-handling layer. The resolver never
/// retries and never falls back silently.
#[derive(Debug)]
pub enum CdnError {
    /// The input path was empty.
    EmptyPath,
    /// A required build-tool manifest file does not exist on disk.
    ManifestMissing {
        /// Path that was expected to hold the manifest.
        path: PathBuf,
    },
    /// A manifest file exists but could not be read from disk.
    ManifestRead {
        /// Path of the offending manifest.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// A manifest file exists but could not be parsed as a JSON object.
    ManifestParse {
        /// Path of the offending manifest.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
    /// A manifest loaded successfully but lacks the requested key.
    UnknownManifestEntry {
        /// Manifest that was consulted.
        manifest: PathBuf,
        /// Key that was looked up.
        key: String,
    },
    /// Configuration names a provider with no registered backend.
    UnsupportedProvider {
        /// Provider name taken from the configuration.
        name: String,
    },
}

impl std::fmt::Display for CdnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "asset path is empty"),
            Self::ManifestMissing { path } => {
                write!(f, "manifest not found at {}", path.display())
            }
            Self::ManifestRead { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::ManifestParse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            Self::UnknownManifestEntry { manifest, key } => {
                write!(f, "{} is not defined in {}", key, manifest.display())
            }
            Self::UnsupportedProvider { name } => {
                write!(f, "no CDN provider registered for '{name}'")
            }
        }
    }
}

impl std::error::Error for CdnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ManifestRead { source, .. } => Some(source),
            Self::ManifestParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
