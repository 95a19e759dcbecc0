//! prompttoquery-core - Core types, errors, and lifecycle
//!
//! This crate provides the types shared by every layer of the bridge:
//! - [`QueryError`] taxonomy for every failure the bridge can report
//! - [`Configuration`] passed to the native `InitSDK` entry point
//! - [`QueryResult`] and [`GeneratedQuery`] returned by query generation
//! - [`ClientState`] for the client lifecycle
//! - [`EntryPoints`] trait implemented by native bindings

mod config;
mod entry_points;
mod error;
mod lifecycle;
mod query;

pub use config::Configuration;
pub use entry_points::EntryPoints;
pub use error::{BridgeResult, QueryError};
pub use lifecycle::ClientState;
pub use query::{GeneratedQuery, Operation, QueryResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeResult, ClientState, Configuration, EntryPoints, GeneratedQuery, Operation,
        QueryError, QueryResult,
    };
}
