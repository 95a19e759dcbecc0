//! prompttoquery-native - Locating, loading, and binding the native library
//!
//! The pipeline runs leaf-first:
//! 1. [`PlatformDescriptor`] identifies os, architecture, and libc variant
//! 2. [`ArtifactNames`] turns it into ordered candidate file names
//! 3. [`SearchPath`] lists the directories to scan, in priority order
//! 4. [`LibraryLoader`] picks the first existing file and loads it
//! 5. [`NativeLibrary`] binds `InitSDK`, `GenerateQuery`, and `GetVersion`
//!
//! # Important Note
//!
//! [`binding`] is the only module that touches raw pointers. Strings returned
//! by the library are copied immediately and never freed on this side: the
//! library may use a different allocator, or return static memory.

mod artifact;
mod loader;
mod platform;
mod search_path;

pub mod binding;

pub use artifact::{ArtifactCandidates, ArtifactNames, DEFAULT_BASE_NAME};
pub use binding::NativeLibrary;
pub use loader::LibraryLoader;
pub use platform::{Arch, LibcVariant, Os, PlatformDescriptor, libc_from_probe_output};
pub use search_path::SearchPath;
