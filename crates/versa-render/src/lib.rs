//! Versa Render: versioned summary, detail and collection views
//!
//! A resource type declares, per view, which fields it shows and in which
//! window of API versions. Rendering a resource for a requested version
//! validates that version against the shared [`VersionRegistry`] and keeps
//! only the fields visible in it, in declaration order.
//!
//! ```text
//! declare(field, range) ──► AttributeSet ─────────────┐
//!          │                                           ▼
//!          └──► VersionRegistry ──► validate(v) ──► Renderer ──► Representation
//! ```
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use std::sync::Arc;
//! use versa_render::{ResourceSchema, VersionRange, VersionRegistry};
//!
//! let registry = Arc::new(VersionRegistry::new());
//! let users = ResourceSchema::new("user", registry)
//!     .detail("name", VersionRange::new())?
//!     .detail("country", VersionRange::starting("1.0.0"))?;
//!
//! let photek = json!({ "name": "photek", "country": "USA" });
//! let renderer = users.renderer();
//!
//! let old = renderer.detail(&photek, None)?;
//! assert_eq!(old.version, "none");
//! assert_eq!(old.resource.len(), 1);
//!
//! let current = renderer.detail(&photek, Some("1.0.0"))?;
//! assert_eq!(current.resource["country"], json!("USA"));
//!
//! assert!(renderer.detail(&photek, Some("3.0.0")).is_err());
//! # Ok::<(), versa_render::VersaError>(())
//! ```

pub mod attribute_set;
pub mod renderer;
pub mod representation;
pub mod schema;
pub mod schema_file;

pub use attribute_set::AttributeSet;
pub use renderer::{Representable, Renderer};
pub use representation::{Fields, Representation};
pub use schema::{ResourceSchema, View};
pub use schema_file::{FieldSpec, SchemaFile};

pub use versa_core::{
    compare_versions, AttributeDefinition, Extractor, HasField, Result, VersaError, VersionRange,
};
pub use versa_registry::VersionRegistry;
