//! Directories scanned for the native library.

use std::path::{Path, PathBuf};

/// Development build output, relative to the workspace root.
const BUILD_DIR: &str = "core/build";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SearchRoot {
    /// `lib/` next to the running executable (installed layout).
    PackageLib,
    /// The native build output directory of a source checkout.
    DevelopmentBuild,
    /// The process working directory at lookup time.
    WorkingDirectory,
    Dir(PathBuf),
}

impl SearchRoot {
    fn resolve(&self) -> Option<PathBuf> {
        match self {
            SearchRoot::PackageLib => std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|dir| dir.join("lib"))),
            SearchRoot::DevelopmentBuild => Some(development_build_dir()),
            SearchRoot::WorkingDirectory => std::env::current_dir().ok(),
            SearchRoot::Dir(path) => Some(path.clone()),
        }
    }
}

fn development_build_dir() -> PathBuf {
    // crates/prompttoquery-native -> workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(BUILD_DIR)
}

/// Ordered list of directories to scan; earlier entries win.
///
/// Directories are resolved and checked for existence on every call to
/// [`existing`](Self::existing), never cached, since build output and the
/// working directory can change while the process runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    roots: Vec<SearchRoot>,
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::standard()
    }
}

impl SearchPath {
    /// Package `lib/` directory, then the development build directory, then
    /// the current working directory.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            roots: vec![
                SearchRoot::PackageLib,
                SearchRoot::DevelopmentBuild,
                SearchRoot::WorkingDirectory,
            ],
        }
    }

    /// An explicit list of directories, in priority order.
    pub fn from_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: dirs
                .into_iter()
                .map(|d| SearchRoot::Dir(d.into()))
                .collect(),
        }
    }

    /// Every directory in priority order, whether or not it exists.
    #[must_use]
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.roots.iter().filter_map(SearchRoot::resolve).collect()
    }

    /// The directories that exist right now, in priority order.
    #[must_use]
    pub fn existing(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = Vec::new();
        for dir in self.candidates() {
            if !dir.is_dir() {
                tracing::trace!(dir = %dir.display(), "search directory does not exist");
                continue;
            }
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }
}

#[cfg(test)]
#[path = "search_path/search_path_tests.rs"]
mod search_path_tests;
