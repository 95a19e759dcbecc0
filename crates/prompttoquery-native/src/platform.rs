//! Platform detection and identification.

use once_cell::sync::Lazy;
use std::fmt;
use std::process::Command;

static CURRENT: Lazy<PlatformDescriptor> = Lazy::new(PlatformDescriptor::detect);

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    Macos,
    Windows,
    Other,
}

impl Os {
    /// Map a `std::env::consts::OS` value.
    #[must_use]
    pub fn from_consts(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "macos" => Self::Macos,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }
}

/// CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Amd64,
    Arm64,
    Other,
}

impl Arch {
    /// Map a `std::env::consts::ARCH` value.
    #[must_use]
    pub fn from_consts(arch: &str) -> Self {
        match arch {
            "x86_64" => Self::Amd64,
            "aarch64" => Self::Arm64,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
            Self::Other => "other",
        }
    }
}

/// C runtime a linux artifact was built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibcVariant {
    Glibc,
    Musl,
    /// Not applicable (non-linux systems).
    Unknown,
}

impl LibcVariant {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Glibc => "glibc",
            Self::Musl => "musl",
            Self::Unknown => "unknown",
        }
    }
}

/// Canonical (os, arch, libc) triple of an execution environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformDescriptor {
    pub os: Os,
    pub arch: Arch,
    pub libc: LibcVariant,
}

impl PlatformDescriptor {
    #[must_use]
    pub fn new(os: Os, arch: Arch, libc: LibcVariant) -> Self {
        Self { os, arch, libc }
    }

    /// The descriptor of the running process, computed once.
    #[must_use]
    pub fn current() -> Self {
        *CURRENT
    }

    /// Detect the platform without consulting the per-process cache.
    ///
    /// On linux this runs the libc probe.
    #[must_use]
    pub fn detect() -> Self {
        let os = Os::from_consts(std::env::consts::OS);
        let arch = Arch::from_consts(std::env::consts::ARCH);
        let libc = match os {
            Os::Linux => probe_libc(),
            _ => LibcVariant::Unknown,
        };

        let descriptor = Self::new(os, arch, libc);
        tracing::debug!(platform = %descriptor, "detected platform");
        descriptor
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.os.as_str(),
            self.arch.as_str(),
            self.libc.as_str()
        )
    }
}

/// Ask the dynamic linker which C runtime it belongs to.
///
/// musl's `ldd --version` prints its banner to stderr and exits non-zero, so
/// both streams are read and the exit status is ignored.
fn probe_libc() -> LibcVariant {
    let output = match Command::new("ldd").arg("--version").output() {
        Ok(output) => {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            Some(text)
        }
        Err(e) => {
            tracing::warn!(error = %e, "libc probe unavailable, assuming glibc");
            None
        }
    };

    libc_from_probe_output(output.as_deref())
}

/// Interpret the output of the libc probe.
///
/// Anything other than a recognizable musl banner, including no output at
/// all, is treated as glibc.
#[must_use]
pub fn libc_from_probe_output(output: Option<&str>) -> LibcVariant {
    match output {
        Some(text) if text.to_ascii_lowercase().contains("musl") => LibcVariant::Musl,
        _ => LibcVariant::Glibc,
    }
}
