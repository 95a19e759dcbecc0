//! Encoding of boundary payloads and decoding of responses

use crate::envelope::{BoundaryEnvelope, CallSite};
use prompttoquery_core::{BridgeResult, Configuration, GeneratedQuery, QueryError, QueryResult};
use serde::{Deserialize, Serialize};
use std::ffi::CString;

/// Configuration as it crosses the boundary
///
/// `db_schema` holds the schema document serialized to a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConfiguration {
    pub llm_provider: String,
    pub api_key: String,
    pub db_schema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl WireConfiguration {
    /// Convert from a [`Configuration`], encoding the schema as a string
    pub fn from_configuration(config: &Configuration) -> BridgeResult<Self> {
        Ok(Self {
            llm_provider: config.llm_provider.clone(),
            api_key: config.api_key.clone(),
            db_schema: serde_json::to_string(&config.db_schema)?,
            model: config.model.clone(),
        })
    }

    /// Convert back into a [`Configuration`], decoding the schema string
    pub fn into_configuration(self) -> BridgeResult<Configuration> {
        let db_schema = serde_json::from_str(&self.db_schema).map_err(|e| {
            QueryError::ProtocolError(format!("db_schema is not a JSON document: {e}"))
        })?;

        Ok(Configuration {
            llm_provider: self.llm_provider,
            api_key: self.api_key,
            db_schema,
            model: self.model,
        })
    }
}

/// Codec for the boundary's JSON protocol
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtocolCodec;

impl ProtocolCodec {
    /// Create a new codec
    pub fn new() -> Self {
        Self
    }

    /// Encode a configuration for `InitSDK`
    pub fn encode_config(&self, config: &Configuration) -> BridgeResult<Vec<u8>> {
        let wire = WireConfiguration::from_configuration(config)?;
        Ok(serde_json::to_vec(&wire)?)
    }

    /// Decode a configuration as produced by [`encode_config`](Self::encode_config)
    pub fn decode_config(&self, data: &[u8]) -> BridgeResult<Configuration> {
        let wire: WireConfiguration = serde_json::from_slice(data)?;
        wire.into_configuration()
    }

    /// Parse the top-level envelope of any boundary response
    pub fn decode_envelope(&self, data: &[u8]) -> BridgeResult<BoundaryEnvelope> {
        BoundaryEnvelope::from_bytes(data).map_err(malformed_envelope)
    }

    /// Parse a response from `site`, mapping a reported error first
    ///
    /// A non-empty string `error` wins over everything else in the response,
    /// so a failure is reported as such even if the success fields are
    /// malformed.
    pub fn decode_checked(&self, data: &[u8], site: CallSite) -> BridgeResult<BoundaryEnvelope> {
        let value: serde_json::Value = serde_json::from_slice(data).map_err(malformed_envelope)?;

        if let Some(message) = value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
        {
            return Err(site.error(message));
        }

        let envelope: BoundaryEnvelope =
            serde_json::from_value(value).map_err(malformed_envelope)?;
        envelope.into_result(site)
    }

    /// Decode an `InitSDK` response, mapping a reported error
    pub fn decode_init_response(&self, data: &[u8]) -> BridgeResult<()> {
        self.decode_checked(data, CallSite::Initialize).map(|_| ())
    }

    /// Decode a `GenerateQuery` response, mapping a reported error
    pub fn decode_query_response(&self, data: &[u8]) -> BridgeResult<QueryResult> {
        let envelope = self.decode_checked(data, CallSite::GenerateQuery)?;
        self.decode_query(envelope)
    }

    /// Decode the nested query document of a successful envelope
    ///
    /// A missing `columnTitles` is an empty list. Everything else that is
    /// missing or malformed is a protocol error.
    pub fn decode_query(&self, envelope: BoundaryEnvelope) -> BridgeResult<QueryResult> {
        let query_json = envelope.query.ok_or_else(|| {
            QueryError::ProtocolError("response has neither 'error' nor 'query'".to_string())
        })?;

        let query: GeneratedQuery = serde_json::from_str(&query_json).map_err(|e| {
            QueryError::ProtocolError(format!("malformed nested query document: {e}"))
        })?;

        let column_titles = match envelope.column_titles {
            Some(titles) => titles,
            None => {
                tracing::debug!("response has no columnTitles, using an empty list");
                Vec::new()
            }
        };

        Ok(QueryResult {
            query,
            column_titles,
        })
    }
}

fn malformed_envelope(e: serde_json::Error) -> QueryError {
    QueryError::ProtocolError(format!("malformed response envelope: {e}"))
}

/// Convert a payload into a NUL-terminated boundary string
///
/// Fails with [`QueryError::InvalidInput`] if the payload contains a NUL byte,
/// which the C side would read as the end of the string.
pub fn to_boundary_string(payload: impl Into<Vec<u8>>) -> BridgeResult<CString> {
    CString::new(payload).map_err(|e| {
        QueryError::InvalidInput(format!(
            "payload contains a NUL byte at position {}",
            e.nul_position()
        ))
    })
}
