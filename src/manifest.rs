//! Loading and memoising build-tool asset manifests.
//!
//! A manifest is a JSON object mapping logical asset names to their
//! cache-busted physical filenames, written by tools such as gulp-rev or
//! webpack mix. Each distinct manifest file is read from disk at most once per
//! cache lifetime; there is no TTL and no file-change detection, matching the
//! expectation that manifests only change when the application is redeployed.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::CdnError;

/// Parsed contents of a single manifest file.
pub type ManifestEntries = BTreeMap<String, String>;

/// Trait describing how manifest files are read from durable storage.
///
/// The indirection exists so tests can observe how often the filesystem is
/// actually consulted.
pub trait ManifestSource: std::fmt::Debug {
    /// Read the raw manifest document at `path`.
    fn read_manifest(&self, path: &Path) -> io::Result<String>;
}

/// Default source reading manifests straight from the filesystem.
#[derive(Debug, Default)]
pub struct FsManifestSource;

impl ManifestSource for FsManifestSource {
    fn read_manifest(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Load-once, memoise-forever cache of manifest files keyed by their path.
///
/// Failed reads and parses insert nothing, so a later call retries instead of
/// serving a poisoned entry. Concurrent cold access may read the same file
/// more than once; whichever parse lands first is kept and every caller sees
/// a complete, well-formed map.
#[derive(Debug)]
pub struct ManifestCache {
    source: Box<dyn ManifestSource + Send + Sync>,
    loaded: Mutex<BTreeMap<PathBuf, Arc<ManifestEntries>>>,
}

impl ManifestCache {
    /// Create a cache backed by the filesystem.
    pub fn new() -> Self {
        Self::with_source(FsManifestSource)
    }

    /// Create a cache backed by a custom manifest source.
    pub fn with_source(source: impl ManifestSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            loaded: Mutex::new(BTreeMap::new()),
        }
    }

    /// Fetch the parsed entries for the manifest at `path`, loading it on
    /// first use.
    pub fn entries(&self, path: &Path) -> Result<Arc<ManifestEntries>, CdnError> {
        if let Some(entries) = self.cached(path) {
            return Ok(entries);
        }

        let content = match self.source.read_manifest(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(CdnError::ManifestMissing {
                    path: path.to_path_buf(),
                });
            }
            Err(err) => {
                return Err(CdnError::ManifestRead {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let entries: ManifestEntries =
            serde_json::from_str(&content).map_err(|err| CdnError::ManifestParse {
                path: path.to_path_buf(),
                source: err,
            })?;

        let mut loaded = self.loaded.lock().unwrap_or_else(|err| err.into_inner());
        let entries = loaded
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(entries));
        Ok(Arc::clone(entries))
    }

    /// Look `key` up in the manifest at `path`, loading the manifest on first
    /// use.
    pub fn lookup(&self, path: &Path, key: &str) -> Result<String, CdnError> {
        let entries = self.entries(path)?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| CdnError::UnknownManifestEntry {
                manifest: path.to_path_buf(),
                key: key.to_string(),
            })
    }

    fn cached(&self, path: &Path) -> Option<Arc<ManifestEntries>> {
        let loaded = self.loaded.lock().unwrap_or_else(|err| err.into_inner());
        loaded.get(path).cloned()
    }
}

impl Default for ManifestCache {
    fn default() -> Self {
        Self::new()
    }
}
