//! The three-function ABI seen from the host side

use crate::BridgeResult;
use std::ffi::CStr;
use std::sync::Arc;

/// The native component's entry points, with returned buffers already copied
///
/// Implementations own whatever keeps the entry points valid (a loaded
/// library for the real binding) and must return bytes that are fully owned
/// by the caller. Foreign buffers are never handed out or freed.
///
/// Callers may invoke these from several threads; implementations serialize
/// access when the underlying component is not reentrant.
pub trait EntryPoints: Send + Sync {
    /// `InitSDK(config_json) -> result_json`
    fn init_sdk(&self, config_json: &CStr) -> BridgeResult<Vec<u8>>;

    /// `GenerateQuery(prompt) -> result_json`
    fn generate_query(&self, prompt: &CStr) -> BridgeResult<Vec<u8>>;

    /// `GetVersion() -> version_text`
    fn version(&self) -> BridgeResult<String>;
}

macro_rules! forward_entry_points {
    ($($ptr:ident),*) => {$(
        impl<T: EntryPoints + ?Sized> EntryPoints for $ptr<T> {
            fn init_sdk(&self, config_json: &CStr) -> BridgeResult<Vec<u8>> {
                (**self).init_sdk(config_json)
            }

            fn generate_query(&self, prompt: &CStr) -> BridgeResult<Vec<u8>> {
                (**self).generate_query(prompt)
            }

            fn version(&self) -> BridgeResult<String> {
                (**self).version()
            }
        }
    )*};
}

// One bound library can back several clients.
forward_entry_points!(Box, Arc);
