//! Attribute definitions
//!
//! An attribute is one field a resource can show. It carries the window of
//! versions it appears in and, optionally, a custom extractor that replaces
//! the direct field read.

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, VersaError};
use crate::range::VersionRange;

/// Custom value computation for a field
pub type Extractor<R> = Arc<dyn Fn(&R) -> Value + Send + Sync>;

/// Direct, by-name field access on a resource.
///
/// Implemented explicitly by resource types. Return `None` for names the
/// type does not expose; fields that need computation should be declared
/// with an extractor instead.
pub trait HasField {
    /// Name reported in lookup errors
    fn resource_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn field(&self, name: &str) -> Option<Value>;
}

impl HasField for Map<String, Value> {
    fn resource_name(&self) -> &str {
        "object"
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl HasField for Value {
    fn resource_name(&self) -> &str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name)).cloned()
    }
}

/// Canonical identifier form of a declared field name. Names that are empty
/// once trimmed are rejected.
pub fn normalize_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(VersaError::Schema("field name is empty".to_string()));
    }
    Ok(name.to_string())
}

pub struct AttributeDefinition<R> {
    name: String,
    range: VersionRange,
    extractor: Option<Extractor<R>>,
}

impl<R> AttributeDefinition<R> {
    /// Field read directly off the resource
    pub fn new(name: &str, range: VersionRange) -> Result<Self> {
        Self::with_extractor(name, range, None)
    }

    /// Field computed by `extractor`
    pub fn computed<F>(name: &str, range: VersionRange, extractor: F) -> Result<Self>
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        let extractor: Extractor<R> = Arc::new(extractor);
        Self::with_extractor(name, range, Some(extractor))
    }

    pub fn with_extractor(
        name: &str,
        range: VersionRange,
        extractor: Option<Extractor<R>>,
    ) -> Result<Self> {
        Ok(Self {
            name: normalize_name(name)?,
            range,
            extractor,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> &VersionRange {
        &self.range
    }

    pub fn has_extractor(&self) -> bool {
        self.extractor.is_some()
    }

    pub fn is_displayable(&self, version: &str) -> bool {
        self.range.is_displayable(version)
    }
}

impl<R: HasField> AttributeDefinition<R> {
    /// Pull this field's value out of `resource`.
    pub fn extract_value(&self, resource: &R) -> Result<Value> {
        match &self.extractor {
            Some(extractor) => Ok(extractor(resource)),
            None => resource
                .field(&self.name)
                .ok_or_else(|| VersaError::lookup(resource.resource_name(), &self.name)),
        }
    }
}

impl<R> Clone for AttributeDefinition<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            range: self.range.clone(),
            extractor: self.extractor.clone(),
        }
    }
}

impl<R> fmt::Debug for AttributeDefinition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDefinition")
            .field("name", &self.name)
            .field("range", &self.range)
            .field("extractor", &self.extractor.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
