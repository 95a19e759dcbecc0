//! Query generation results

use serde::{Deserialize, Serialize};

/// MongoDB operation kind chosen by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Find,
    Aggregate,
    Count,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Find => write!(f, "find"),
            Operation::Aggregate => write!(f, "aggregate"),
            Operation::Count => write!(f, "count"),
        }
    }
}

/// A generated MongoDB query
///
/// Which optional fields are present depends on [`Operation`]: `filter` for
/// find and count, `pipeline` for aggregate, and the cursor modifiers for find.
/// Fields the bridge does not model are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedQuery {
    pub operation: Operation,

    pub collection: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<Vec<serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<serde_json::Value>,

    /// Kept as the generator wrote it; integral floats such as `10.0` included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<serde_json::Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<serde_json::Number>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GeneratedQuery {
    /// Create a query with only the required fields
    pub fn new(operation: Operation, collection: impl Into<String>) -> Self {
        Self {
            operation,
            collection: collection.into(),
            filter: None,
            pipeline: None,
            projection: None,
            sort: None,
            limit: None,
            skip: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Result of a successful `generate_query` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The decoded query document
    pub query: GeneratedQuery,

    /// Human-readable titles for the returned columns, in display order
    #[serde(rename = "columnTitles", default)]
    pub column_titles: Vec<String>,
}
