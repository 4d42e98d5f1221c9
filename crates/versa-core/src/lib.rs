//! Versa Core: version ordering, visibility windows and attribute definitions
//!
//! Leaf types shared by the registry and the renderer. Nothing here holds
//! shared state; every operation is a pure function of its inputs.

pub mod attribute;
pub mod error;
pub mod range;
pub mod version;

pub use attribute::{normalize_name, AttributeDefinition, Extractor, HasField};
pub use error::{Result, VersaError};
pub use range::VersionRange;
pub use version::{compare_versions, BASELINE_VERSION, NO_VERSION};
