//! Version Registry
use parking_lot::RwLock;
use std::collections::HashSet;
use versa_core::{compare_versions, Result, VersaError, VersionRange};

/// Known API versions. Grows monotonically; shared between schemas via `Arc`.
#[derive(Debug, Default)]
pub struct VersionRegistry {
    versions: RwLock<HashSet<String>>,
}

impl VersionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the explicit boundaries given; absent values are ignored.
    /// Returns every registered version.
    pub fn register(&self, from: Option<&str>, to: Option<&str>) -> Vec<String> {
        self.insert_all(from.into_iter().chain(to));
        self.versions()
    }

    /// Record the explicit boundaries of a visibility window.
    pub fn register_range(&self, range: &VersionRange) -> Vec<String> {
        self.insert_all(range.boundaries());
        self.versions()
    }

    fn insert_all<'v>(&self, boundaries: impl IntoIterator<Item = &'v str>) {
        let mut versions = self.versions.write();
        for version in boundaries {
            if versions.insert(version.to_string()) {
                tracing::debug!(version, "registered API version");
            }
        }
    }

    pub fn is_registered(&self, version: &str) -> bool {
        self.versions.read().contains(version)
    }

    /// Fails with `NotRegistered` unless `version` is known.
    pub fn validate(&self, version: &str) -> Result<()> {
        if self.is_registered(version) {
            Ok(())
        } else {
            tracing::warn!(version, "rejected unregistered API version");
            Err(VersaError::not_registered(version))
        }
    }

    /// All registered versions, lowest first
    pub fn versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = self.versions.read().iter().cloned().collect();
        versions.sort_by(|a, b| compare_versions(a, b).then_with(|| a.cmp(b)));
        versions
    }

    pub fn len(&self) -> usize {
        self.versions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.read().is_empty()
    }

    /// Forget every version. Test harnesses only.
    #[doc(hidden)]
    pub fn reset(&self) {
        self.versions.write().clear();
    }
}
