//! Resource schemas: the declaration step
//!
//! A schema owns the summary and detail attribute sets of one resource type.
//! Declaring a field is the only write path into those sets and into the
//! shared [`VersionRegistry`].

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use versa_core::{AttributeDefinition, Extractor, Result, VersionRange};
use versa_registry::VersionRegistry;

use crate::attribute_set::AttributeSet;
use crate::renderer::Renderer;

/// Which of the two canonical views a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Summary,
    Detail,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Detail => write!(f, "detail"),
        }
    }
}

pub struct ResourceSchema<R> {
    name: String,
    registry: Arc<VersionRegistry>,
    summary: AttributeSet<R>,
    detail: AttributeSet<R>,
}

impl<R> ResourceSchema<R> {
    /// Empty schema for the resource type `name`, registering its
    /// boundaries into `registry`.
    pub fn new(name: impl Into<String>, registry: Arc<VersionRegistry>) -> Self {
        Self {
            name: name.into(),
            registry,
            summary: AttributeSet::new(),
            detail: AttributeSet::new(),
        }
    }

    /// Declare a field on `view`. Redeclaring a name replaces the prior
    /// definition in place. Fails on an empty name, before anything is
    /// registered.
    pub fn declare(
        &mut self,
        view: View,
        name: &str,
        range: VersionRange,
        extractor: Option<Extractor<R>>,
    ) -> Result<&AttributeDefinition<R>> {
        let attribute = AttributeDefinition::with_extractor(name, range, extractor)?;
        self.registry.register_range(attribute.range());

        tracing::debug!(
            resource = %self.name,
            %view,
            field = attribute.name(),
            from = ?attribute.range().from,
            to = ?attribute.range().to,
            "declared field"
        );

        let (declared, replaced) = self.attributes_mut(view).upsert(attribute);
        if replaced {
            tracing::debug!(field = declared.name(), %view, "replaced earlier declaration");
        }
        Ok(declared)
    }

    pub fn declare_detail_field(
        &mut self,
        name: &str,
        range: VersionRange,
        extractor: Option<Extractor<R>>,
    ) -> Result<&AttributeDefinition<R>> {
        self.declare(View::Detail, name, range, extractor)
    }

    pub fn declare_summary_field(
        &mut self,
        name: &str,
        range: VersionRange,
        extractor: Option<Extractor<R>>,
    ) -> Result<&AttributeDefinition<R>> {
        self.declare(View::Summary, name, range, extractor)
    }

    /// Builder form of [`declare_detail_field`](Self::declare_detail_field)
    pub fn detail(mut self, name: &str, range: VersionRange) -> Result<Self> {
        self.declare(View::Detail, name, range, None)?;
        Ok(self)
    }

    pub fn detail_with<F>(mut self, name: &str, range: VersionRange, extractor: F) -> Result<Self>
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        let extractor: Extractor<R> = Arc::new(extractor);
        self.declare(View::Detail, name, range, Some(extractor))?;
        Ok(self)
    }

    /// Builder form of [`declare_summary_field`](Self::declare_summary_field)
    pub fn summary(mut self, name: &str, range: VersionRange) -> Result<Self> {
        self.declare(View::Summary, name, range, None)?;
        Ok(self)
    }

    pub fn summary_with<F>(mut self, name: &str, range: VersionRange, extractor: F) -> Result<Self>
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        let extractor: Extractor<R> = Arc::new(extractor);
        self.declare(View::Summary, name, range, Some(extractor))?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    pub fn attributes(&self, view: View) -> &AttributeSet<R> {
        match view {
            View::Summary => &self.summary,
            View::Detail => &self.detail,
        }
    }

    pub fn detail_attributes(&self) -> &AttributeSet<R> {
        &self.detail
    }

    pub fn summary_attributes(&self) -> &AttributeSet<R> {
        &self.summary
    }

    pub fn renderer(&self) -> Renderer<'_, R> {
        Renderer::new(self)
    }

    fn attributes_mut(&mut self, view: View) -> &mut AttributeSet<R> {
        match view {
            View::Summary => &mut self.summary,
            View::Detail => &mut self.detail,
        }
    }
}

impl<R> fmt::Debug for ResourceSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceSchema")
            .field("name", &self.name)
            .field("summary", &self.summary.names())
            .field("detail", &self.detail.names())
            .finish()
    }
}
