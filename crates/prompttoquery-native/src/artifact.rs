//! Artifact file naming.
//!
//! Every naming rule lives in [`NAMING_TABLE`]; supporting another operating
//! system is a new row, not a new branch.

use crate::platform::{Arch, LibcVariant, Os, PlatformDescriptor};
use prompttoquery_core::{BridgeResult, QueryError};

/// Library base name the native build produces.
pub const DEFAULT_BASE_NAME: &str = "prompttoquery";

struct OsNaming {
    os: Os,
    /// OS component of qualified names.
    label: &'static str,
    prefix: &'static str,
    extension: &'static str,
    /// Whether artifacts exist in a `_musl` flavor.
    musl_variants: bool,
}

const NAMING_TABLE: &[OsNaming] = &[
    OsNaming {
        os: Os::Linux,
        label: "linux",
        prefix: "lib",
        extension: "so",
        musl_variants: true,
    },
    OsNaming {
        os: Os::Macos,
        label: "darwin",
        prefix: "lib",
        extension: "dylib",
        musl_variants: false,
    },
    OsNaming {
        os: Os::Windows,
        label: "windows",
        prefix: "",
        extension: "dll",
        musl_variants: false,
    },
];

/// Architectures artifacts are published for, in fallback order.
const PUBLISHED_ARCHES: &[Arch] = &[Arch::Amd64, Arch::Arm64];

/// Ordered, duplicate-free list of artifact file names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactCandidates(Vec<String>);

impl ArtifactCandidates {
    fn push(&mut self, name: String) {
        if !self.0.contains(&name) {
            self.0.push(name);
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Resolves platform descriptors to artifact file names.
///
/// Names follow `<prefix><base>_<os>_<arch>[_musl].<ext>`, for example
/// `libprompttoquery_linux_amd64_musl.so` or `prompttoquery_windows_arm64.dll`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    base_name: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_NAME)
    }
}

impl ArtifactNames {
    #[must_use]
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
        }
    }

    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Candidate names for `platform`, most specific first.
    ///
    /// The list ends with the unqualified generic name. A known OS on an
    /// unpublished architecture gets only the generic name.
    pub fn candidates(&self, platform: &PlatformDescriptor) -> BridgeResult<ArtifactCandidates> {
        let naming = naming_for(platform)?;
        let mut names = ArtifactCandidates::default();

        if PUBLISHED_ARCHES.contains(&platform.arch) {
            if naming.musl_variants && platform.libc == LibcVariant::Musl {
                names.push(self.qualified(naming, platform.arch, true));
            }
            names.push(self.qualified(naming, platform.arch, false));
        }
        names.push(self.generic(naming));

        Ok(names)
    }

    /// Every name the table can produce for the platform's OS.
    ///
    /// Covers binaries built for another architecture or libc than the one
    /// detected; the loader tries these after the primary candidates.
    pub fn fallbacks(&self, platform: &PlatformDescriptor) -> BridgeResult<ArtifactCandidates> {
        let naming = naming_for(platform)?;
        let mut names = ArtifactCandidates::default();

        for &arch in PUBLISHED_ARCHES {
            names.push(self.qualified(naming, arch, false));
            if naming.musl_variants {
                names.push(self.qualified(naming, arch, true));
            }
        }
        names.push(self.generic(naming));

        Ok(names)
    }

    fn qualified(&self, naming: &OsNaming, arch: Arch, musl: bool) -> String {
        format!(
            "{}{}_{}_{}{}.{}",
            naming.prefix,
            self.base_name,
            naming.label,
            arch.as_str(),
            if musl { "_musl" } else { "" },
            naming.extension
        )
    }

    fn generic(&self, naming: &OsNaming) -> String {
        format!("{}{}.{}", naming.prefix, self.base_name, naming.extension)
    }
}

fn naming_for(platform: &PlatformDescriptor) -> BridgeResult<&'static OsNaming> {
    NAMING_TABLE
        .iter()
        .find(|n| n.os == platform.os)
        .ok_or_else(|| QueryError::UnsupportedPlatform(platform.to_string()))
}
