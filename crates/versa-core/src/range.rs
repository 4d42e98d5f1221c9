//! Visibility windows
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::version::{compare_versions, BASELINE_VERSION};

/// Inclusive `[from, to]` window of versions in which a field appears.
///
/// An absent `from` means [`BASELINE_VERSION`]. An absent `to` resolves to the
/// queried version itself, so the upper side of the check always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl VersionRange {
    /// Window admitting every version
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting(from: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: None,
        }
    }

    pub fn until(to: impl Into<String>) -> Self {
        Self {
            from: None,
            to: Some(to.into()),
        }
    }

    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Effective lower bound
    pub fn lower(&self) -> &str {
        self.from.as_deref().unwrap_or(BASELINE_VERSION)
    }

    /// Effective upper bound for a query
    pub fn upper<'a>(&'a self, version: &'a str) -> &'a str {
        self.to.as_deref().unwrap_or(version)
    }

    /// Whether `version` falls inside the window. A window whose `from` is
    /// above its `to` never matches.
    pub fn is_displayable(&self, version: &str) -> bool {
        compare_versions(self.lower(), version) != Ordering::Greater
            && compare_versions(version, self.upper(version)) != Ordering::Greater
    }

    /// Explicit boundaries, in `from`, `to` order.
    pub fn boundaries(&self) -> impl Iterator<Item = &str> + '_ {
        self.from.as_deref().into_iter().chain(self.to.as_deref())
    }
}
