//! Rendered output
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Visible fields of one resource, keyed by name in declaration order
pub type Fields = Map<String, Value>;

/// Result of a render: the version it was rendered for and the payload.
///
/// `version` is the requested version, or `"none"` when none was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Representation<T> {
    pub version: String,
    pub resource: T,
}

impl<T> Representation<T> {
    pub fn new(version: impl Into<String>, resource: T) -> Self {
        Self {
            version: version.into(),
            resource,
        }
    }
}

impl<T: Serialize> Representation<T> {
    /// Convert to a JSON value for an external serializer
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
