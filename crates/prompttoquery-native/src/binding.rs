//! Binding of the three native entry points.
//!
//! All raw pointer handling of the crate lives here. The rules:
//! - Arguments are `CStr`s owned by the caller for the duration of the call.
//! - Returned pointers belong to the library. They are copied into owned
//!   buffers before the call lock is released and are never freed here; the
//!   library's allocator may differ from ours, or the memory may be static.

use libloading::{Library, Symbol};
use parking_lot::Mutex;
use prompttoquery_core::{BridgeResult, EntryPoints, QueryError};
use std::ffi::{CStr, c_char};
use std::mem::ManuallyDrop;
use std::path::{Path, PathBuf};

// Type signatures for the exported functions
pub(crate) type InitSdkFn = unsafe extern "C" fn(config_json: *const c_char) -> *const c_char;
pub(crate) type GenerateQueryFn = unsafe extern "C" fn(prompt: *const c_char) -> *const c_char;
pub(crate) type GetVersionFn = unsafe extern "C" fn() -> *const c_char;

const INIT_SDK: &[u8] = b"InitSDK\0";
const GENERATE_QUERY: &[u8] = b"GenerateQuery\0";
const GET_VERSION: &[u8] = b"GetVersion\0";

/// The loaded native library with its entry points bound.
///
/// Binding is all-or-nothing: if any entry point is missing, no
/// `NativeLibrary` is produced.
///
/// The library is never unloaded. Dropping a `NativeLibrary` leaves the
/// mapping in place for the rest of the process, because runtimes embedded in
/// such libraries (Go's, for one) do not survive `dlclose`. The platform
/// loader reference-counts mappings by path, so loading the same file again
/// yields the same mapping.
pub struct NativeLibrary {
    path: PathBuf,
    entry_points: BoundEntryPoints,
    _library: ManuallyDrop<Library>,
}

impl NativeLibrary {
    /// Load the library at `path` and bind its entry points.
    pub fn open(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();

        // SAFETY: Loading runs the library's initializers. The caller is
        // responsible for pointing at a trusted artifact.
        let library = unsafe { Library::new(path) }.map_err(|e| QueryError::LibraryLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let entry_points = BoundEntryPoints {
            init_sdk: bind::<InitSdkFn>(&library, INIT_SDK)?,
            generate_query: bind::<GenerateQueryFn>(&library, GENERATE_QUERY)?,
            get_version: bind::<GetVersionFn>(&library, GET_VERSION)?,
            lock: Mutex::new(()),
        };

        tracing::info!(path = %path.display(), "loaded native library");

        Ok(Self {
            path: path.to_path_buf(),
            entry_points,
            _library: ManuallyDrop::new(library),
        })
    }

    /// Path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl EntryPoints for NativeLibrary {
    fn init_sdk(&self, config_json: &CStr) -> BridgeResult<Vec<u8>> {
        self.entry_points.init_sdk(config_json)
    }

    fn generate_query(&self, prompt: &CStr) -> BridgeResult<Vec<u8>> {
        self.entry_points.generate_query(prompt)
    }

    fn version(&self) -> BridgeResult<String> {
        self.entry_points.version()
    }
}

fn bind<T: Copy>(library: &Library, name: &'static [u8]) -> BridgeResult<T> {
    // SAFETY: T is the signature the native component documents for `name`.
    // The returned pointer stays valid because the library is never unloaded.
    let symbol: Symbol<T> = unsafe { library.get(name) }.map_err(|e| QueryError::MissingSymbol {
        symbol: symbol_name(name).to_string(),
        reason: e.to_string(),
    })?;
    Ok(*symbol)
}

fn symbol_name(name: &'static [u8]) -> &'static str {
    let trimmed = name.strip_suffix(b"\0").unwrap_or(name);
    std::str::from_utf8(trimmed).unwrap_or("<non-utf8 symbol>")
}

/// Function pointers to the entry points plus the lock serializing them.
///
/// The native component is not assumed to be reentrant, and it may reuse a
/// single result buffer, so each call holds the lock until its result has
/// been copied.
pub(crate) struct BoundEntryPoints {
    pub(crate) init_sdk: InitSdkFn,
    pub(crate) generate_query: GenerateQueryFn,
    pub(crate) get_version: GetVersionFn,
    pub(crate) lock: Mutex<()>,
}

impl BoundEntryPoints {
    fn init_sdk(&self, config_json: &CStr) -> BridgeResult<Vec<u8>> {
        let _guard = self.lock.lock();
        // SAFETY: config_json is a valid C string that outlives the call, and
        // init_sdk was bound with its documented signature.
        let result = unsafe { (self.init_sdk)(config_json.as_ptr()) };
        // SAFETY: the result is null or a C string that stays valid at least
        // until the next call, which the held lock prevents.
        unsafe { copy_foreign_string(result, "InitSDK") }
    }

    fn generate_query(&self, prompt: &CStr) -> BridgeResult<Vec<u8>> {
        let _guard = self.lock.lock();
        // SAFETY: as for init_sdk.
        let result = unsafe { (self.generate_query)(prompt.as_ptr()) };
        // SAFETY: as for init_sdk.
        unsafe { copy_foreign_string(result, "GenerateQuery") }
    }

    fn version(&self) -> BridgeResult<String> {
        let _guard = self.lock.lock();
        // SAFETY: GetVersion takes no arguments.
        let result = unsafe { (self.get_version)() };
        // SAFETY: as for init_sdk.
        let bytes = unsafe { copy_foreign_string(result, "GetVersion") }?;
        String::from_utf8(bytes).map_err(|e| {
            QueryError::ProtocolError(format!("GetVersion returned invalid UTF-8: {e}"))
        })
    }
}

/// Copy a library-owned C string into an owned buffer.
///
/// The foreign buffer is left untouched; it is never freed from this side.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated buffer that stays valid
/// for the duration of this call.
pub(crate) unsafe fn copy_foreign_string(
    ptr: *const c_char,
    entry_point: &str,
) -> BridgeResult<Vec<u8>> {
    if ptr.is_null() {
        return Err(QueryError::ProtocolError(format!(
            "{entry_point} returned a null pointer"
        )));
    }
    // SAFETY: ptr is non-null and, per the caller's contract, NUL-terminated.
    let bytes = unsafe { CStr::from_ptr(ptr) }.to_bytes().to_vec();
    Ok(bytes)
}
