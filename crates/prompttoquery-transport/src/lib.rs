//! prompttoquery-transport - JSON wire protocol for the native boundary
//!
//! This crate provides:
//! - [`ProtocolCodec`] for encoding configuration and decoding responses
//! - [`BoundaryEnvelope`] for the top-level response shape of every call
//! - [`CallSite`] for tagging boundary-reported errors
//!
//! Every payload leaf crosses the boundary as text, so the schema inside the
//! configuration and the query inside a response are themselves JSON strings.

mod codec;
mod envelope;

pub use codec::{ProtocolCodec, WireConfiguration, to_boundary_string};
pub use envelope::{BoundaryEnvelope, CallSite};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BoundaryEnvelope, CallSite, ProtocolCodec, to_boundary_string};
}
