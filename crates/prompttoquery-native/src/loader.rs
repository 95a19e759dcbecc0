//! Locating and loading the native library.

use crate::artifact::ArtifactNames;
use crate::binding::NativeLibrary;
use crate::platform::PlatformDescriptor;
use crate::search_path::SearchPath;
use prompttoquery_core::{BridgeResult, QueryError};
use std::path::{Path, PathBuf};

/// Finds the artifact for a platform in a search path and loads it.
///
/// # Example
///
/// ```no_run
/// use prompttoquery_native::{LibraryLoader, SearchPath};
///
/// let library = LibraryLoader::new()
///     .with_search_path(SearchPath::from_dirs(["/opt/prompttoquery/lib"]))
///     .load()?;
/// # Ok::<(), prompttoquery_core::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LibraryLoader {
    platform: PlatformDescriptor,
    names: ArtifactNames,
    search_path: SearchPath,
}

impl Default for LibraryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryLoader {
    /// Loader for the running platform over the standard search path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platform: PlatformDescriptor::current(),
            names: ArtifactNames::default(),
            search_path: SearchPath::standard(),
        }
    }

    #[must_use]
    pub fn with_platform(mut self, platform: PlatformDescriptor) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_names(mut self, names: ArtifactNames) -> Self {
        self.names = names;
        self
    }

    #[must_use]
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    #[must_use]
    pub fn platform(&self) -> &PlatformDescriptor {
        &self.platform
    }

    /// Path of the library [`load`](Self::load) would open.
    ///
    /// Scans directories outer, names inner: first with the platform's
    /// candidate names, then with the remaining fallback names for its OS.
    /// The first file that exists wins; contents are not inspected.
    pub fn locate(&self) -> BridgeResult<PathBuf> {
        let primary = self.names.candidates(&self.platform)?;
        let fallback = self.names.fallbacks(&self.platform)?;
        let dirs = self.search_path.existing();

        if let Some(path) = scan(&dirs, primary.as_slice()) {
            return Ok(path);
        }

        let remaining: Vec<String> = fallback
            .into_vec()
            .into_iter()
            .filter(|name| !primary.contains(name))
            .collect();
        if let Some(path) = scan(&dirs, &remaining) {
            tracing::info!(
                path = %path.display(),
                platform = %self.platform,
                "using fallback artifact"
            );
            return Ok(path);
        }

        let mut names = primary.into_vec();
        names.extend(remaining);
        Err(QueryError::LibraryNotFound {
            searched: self.search_path.candidates(),
            names,
        })
    }

    /// Locate the library and bind its entry points.
    pub fn load(&self) -> BridgeResult<NativeLibrary> {
        let path = self.locate()?;
        NativeLibrary::open(path)
    }

    /// Load a library from an explicit path, skipping resolution.
    pub fn load_from_path(path: impl AsRef<Path>) -> BridgeResult<NativeLibrary> {
        NativeLibrary::open(path)
    }
}

fn scan(dirs: &[PathBuf], names: &[String]) -> Option<PathBuf> {
    for dir in dirs {
        for name in names {
            let candidate = dir.join(name);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "found native library");
                return Some(candidate);
            }
            tracing::trace!(path = %candidate.display(), "not found");
        }
    }
    None
}
