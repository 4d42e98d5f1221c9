//! Schema files
//!
//! Resource schemas can be described in YAML instead of code:
//!
//! ```yaml
//! version: "1.0"
//! resource: user
//! summary:
//!   - name: name
//!   - name: country
//!     from: "1.0.0"
//! detail:
//!   - name: nickname
//!     to: "1.0.0"
//! ```
//!
//! Fields declared this way are read directly off the resource through
//! `HasField`; computed fields still need to be declared in code.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use versa_core::{normalize_name, Result, VersaError, VersionRange};
use versa_registry::VersionRegistry;

use crate::schema::{ResourceSchema, View};

/// Top-level schema file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub version: Option<String>,
    pub resource: String,
    #[serde(default)]
    pub summary: Vec<FieldSpec>,
    #[serde(default)]
    pub detail: Vec<FieldSpec>,
}

/// One declared field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl FieldSpec {
    pub fn range(&self) -> VersionRange {
        VersionRange {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

impl SchemaFile {
    /// Load a schema from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| VersaError::Schema(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// Parse a schema from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: SchemaFile = serde_yaml::from_str(yaml)
            .map_err(|e| VersaError::Schema(format!("failed to parse schema YAML: {}", e)))?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<()> {
        if self.resource.trim().is_empty() {
            return Err(VersaError::Schema("resource name is empty".to_string()));
        }
        for (view, field) in self.fields() {
            normalize_name(&field.name).map_err(|_| {
                VersaError::Schema(format!("{}: {} field name is empty", self.resource, view))
            })?;
        }
        Ok(())
    }

    /// Every field with the view it belongs to, summary first
    pub fn fields(&self) -> impl Iterator<Item = (View, &FieldSpec)> + '_ {
        self.summary
            .iter()
            .map(|f| (View::Summary, f))
            .chain(self.detail.iter().map(|f| (View::Detail, f)))
    }

    /// Declare every field into a new schema sharing `registry`.
    pub fn into_schema<R>(&self, registry: Arc<VersionRegistry>) -> Result<ResourceSchema<R>> {
        let mut schema = ResourceSchema::new(self.resource.trim(), registry);
        for (view, field) in self.fields() {
            schema.declare(view, &field.name, field.range(), None)?;
        }
        tracing::debug!(
            resource = schema.name(),
            summary = schema.summary_attributes().len(),
            detail = schema.detail_attributes().len(),
            "loaded resource schema"
        );
        Ok(schema)
    }
}
