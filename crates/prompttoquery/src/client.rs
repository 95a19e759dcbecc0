//! Query client facade

use prompttoquery_core::{
    BridgeResult, ClientState, Configuration, EntryPoints, QueryError, QueryResult,
};
use prompttoquery_native::{LibraryLoader, NativeLibrary};
use prompttoquery_transport::{ProtocolCodec, to_boundary_string};
use std::path::Path;

/// Client for the native query generator
///
/// Lifecycle: constructing a client loads and binds the library (`Bound`),
/// [`initialize`](Self::initialize) configures it (`Ready`). Only a `Ready`
/// client generates queries. A client whose initialization failed stays
/// `Failed`; build a new one instead of retrying.
///
/// Calls block the calling thread until the native side returns. There is
/// no timeout. A single client can be shared between threads; calls into the
/// library are serialized by the binding.
pub struct QueryClient<E: EntryPoints = NativeLibrary> {
    entry_points: E,
    codec: ProtocolCodec,
    state: ClientState,
}

impl QueryClient<NativeLibrary> {
    /// Load the library for the running platform from the standard search path
    pub fn load() -> BridgeResult<Self> {
        Self::load_with(&LibraryLoader::new())
    }

    /// Load the library with a custom loader
    pub fn load_with(loader: &LibraryLoader) -> BridgeResult<Self> {
        Ok(Self::with_entry_points(loader.load()?))
    }

    /// Load the library from an explicit path
    pub fn from_library_path(path: impl AsRef<Path>) -> BridgeResult<Self> {
        Ok(Self::with_entry_points(LibraryLoader::load_from_path(path)?))
    }

    /// Load the library and initialize it in one step
    pub fn connect(config: &Configuration) -> BridgeResult<Self> {
        let mut client = Self::load()?;
        client.initialize(config)?;
        Ok(client)
    }

    /// Path the library was loaded from
    pub fn library_path(&self) -> &Path {
        self.entry_points.path()
    }
}

impl<E: EntryPoints> QueryClient<E> {
    /// Wrap already-bound entry points; the client starts out `Bound`
    pub fn with_entry_points(entry_points: E) -> Self {
        Self {
            entry_points,
            codec: ProtocolCodec::new(),
            state: ClientState::Bound,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ClientState {
        self.state
    }

    /// Configure the native component
    ///
    /// Any failure, whether reported by the library or a malformed response,
    /// leaves the client `Failed`.
    pub fn initialize(&mut self, config: &Configuration) -> BridgeResult<()> {
        if !self.state.can_transition_to(ClientState::Ready) {
            return Err(QueryError::InvalidState {
                expected: ClientState::Bound.to_string(),
                actual: self.state.to_string(),
            });
        }

        match self.call_initialize(config) {
            Ok(()) => {
                self.state = ClientState::Ready;
                tracing::info!(
                    provider = %config.llm_provider,
                    model = config.model.as_deref().unwrap_or("<default>"),
                    "query client ready"
                );
                Ok(())
            }
            Err(e) => {
                self.state = ClientState::Failed;
                tracing::warn!(error = %e, "query client initialization failed");
                Err(e)
            }
        }
    }

    fn call_initialize(&self, config: &Configuration) -> BridgeResult<()> {
        let payload = to_boundary_string(self.codec.encode_config(config)?)?;
        let response = self.entry_points.init_sdk(&payload)?;
        self.codec.decode_init_response(&response)
    }

    /// Generate a query from a natural-language prompt
    pub fn generate_query(&self, prompt: &str) -> BridgeResult<QueryResult> {
        self.ensure_ready()?;

        let prompt = to_boundary_string(prompt)?;
        tracing::debug!(prompt_len = prompt.as_bytes().len(), "generating query");

        let response = self.entry_points.generate_query(&prompt)?;
        let result = self.codec.decode_query_response(&response)?;

        tracing::debug!(
            operation = %result.query.operation,
            collection = %result.query.collection,
            columns = result.column_titles.len(),
            "query generated"
        );
        Ok(result)
    }

    /// Version string reported by the native library
    pub fn version(&self) -> BridgeResult<String> {
        self.ensure_ready()?;
        self.entry_points.version()
    }

    fn ensure_ready(&self) -> BridgeResult<()> {
        if self.state.can_handle_requests() {
            Ok(())
        } else {
            Err(QueryError::InvalidState {
                expected: ClientState::Ready.to_string(),
                actual: self.state.to_string(),
            })
        }
    }
}

impl<E: EntryPoints> std::fmt::Debug for QueryClient<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
