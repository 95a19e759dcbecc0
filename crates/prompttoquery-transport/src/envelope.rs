//! Response envelope and boundary error mapping

use prompttoquery_core::{BridgeResult, QueryError};
use serde::{Deserialize, Serialize};

/// The boundary call an envelope came back from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSite {
    /// `InitSDK`
    Initialize,
    /// `GenerateQuery`
    GenerateQuery,
}

impl CallSite {
    /// Build the typed error for a message reported at this call site
    pub fn error(self, message: impl Into<String>) -> QueryError {
        match self {
            CallSite::Initialize => QueryError::InitializationFailed(message.into()),
            CallSite::GenerateQuery => QueryError::QueryGenerationFailed(message.into()),
        }
    }
}

/// Top-level response returned by every boundary call
///
/// Either `error` is set (failure) or the success fields for the call are
/// present. `InitSDK` returns `{}` on success; `GenerateQuery` returns
/// `query` as a JSON-encoded string plus optional `columnTitles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryEnvelope {
    /// Error message reported by the native side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Query document, encoded as a JSON string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Column titles for the query's result set
    #[serde(
        rename = "columnTitles",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub column_titles: Option<Vec<String>>,
}

impl BoundaryEnvelope {
    /// Create an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Create a query response envelope from an already-encoded query string
    pub fn query(query_json: impl Into<String>, column_titles: Option<Vec<String>>) -> Self {
        Self {
            error: None,
            query: Some(query_json.into()),
            column_titles,
        }
    }

    /// The reported error message, if any
    ///
    /// An empty message counts as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|m| !m.is_empty())
    }

    /// Check if this envelope carries no boundary error
    pub fn is_success(&self) -> bool {
        self.error_message().is_none()
    }

    /// Convert a boundary-reported error into a typed error for `site`
    ///
    /// Success and failure are mutually exclusive: an envelope with an error
    /// is never passed through, whatever else it contains.
    pub fn into_result(self, site: CallSite) -> BridgeResult<Self> {
        match self.error_message() {
            Some(message) => Err(site.error(message)),
            None => Ok(self),
        }
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

#[cfg(test)]
#[path = "envelope/envelope_tests.rs"]
mod envelope_tests;
