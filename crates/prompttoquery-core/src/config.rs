//! Configuration passed to the native component on initialization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for the native query generator
///
/// Passed once to `InitSDK` and immutable afterwards. The API key is a
/// secret: it is redacted from `Debug` output and never recorded in logs.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// LLM provider name understood by the native component (e.g. "openai")
    pub llm_provider: String,

    /// API key for the provider
    pub api_key: String,

    /// Database schema document describing collections and fields
    pub db_schema: serde_json::Value,

    /// Specific model to use; the native component picks a default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Configuration {
    /// Create a configuration without an explicit model
    pub fn new(
        llm_provider: impl Into<String>,
        api_key: impl Into<String>,
        db_schema: serde_json::Value,
    ) -> Self {
        Self {
            llm_provider: llm_provider.into(),
            api_key: api_key.into(),
            db_schema,
            model: None,
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("llm_provider", &self.llm_provider)
            .field("api_key", &"<redacted>")
            .field("db_schema", &self.db_schema)
            .field("model", &self.model)
            .finish()
    }
}
