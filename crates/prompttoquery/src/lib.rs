//! # prompttoquery
//!
//! Generate MongoDB queries from natural-language prompts by calling the
//! prompttoquery native library through its C ABI.
//!
//! The bridge takes care of:
//! - Finding the right binary for the os, architecture, and libc variant
//! - Binding `InitSDK`, `GenerateQuery`, and `GetVersion`
//! - The JSON wire protocol, including double-encoded fields
//! - Mapping errors reported by the library to [`QueryError`] values
//!
//! ## Quick Start
//!
//! ```no_run
//! use prompttoquery::prelude::*;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "collections": {
//!         "users": {"fields": {"name": "string", "status": "string"}}
//!     }
//! });
//! let config = Configuration::new("openai", "sk-...", schema);
//!
//! let client = QueryClient::connect(&config)?;
//! let result = client.generate_query("Get all active users")?;
//!
//! println!("{} on {}", result.query.operation, result.query.collection);
//! println!("columns: {:?}", result.column_titles);
//! # Ok::<(), QueryError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`prompttoquery_core`] - Errors, configuration, results, lifecycle
//! - [`prompttoquery_transport`] - JSON wire protocol
//! - [`prompttoquery_native`] - Artifact resolution, loading, and binding

mod client;

pub use client::QueryClient;

pub use prompttoquery_core::{
    BridgeResult, ClientState, Configuration, EntryPoints, GeneratedQuery, Operation, QueryError,
    QueryResult,
};
pub use prompttoquery_native::{
    Arch, ArtifactNames, LibcVariant, LibraryLoader, NativeLibrary, Os, PlatformDescriptor,
    SearchPath,
};
pub use prompttoquery_transport::{BoundaryEnvelope, ProtocolCodec};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeResult, ClientState, Configuration, GeneratedQuery, Operation, QueryClient,
        QueryError, QueryResult,
    };
}
