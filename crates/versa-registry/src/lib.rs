//! Versa Registry: the set of legitimate API versions
//!
//! Every `from`/`to` boundary declared on any field, across every resource
//! schema sharing the registry, becomes a known version. Rendering with an
//! explicit version outside this set fails instead of returning an empty or
//! ambiguous representation.
pub mod version_registry;

pub use version_registry::VersionRegistry;
