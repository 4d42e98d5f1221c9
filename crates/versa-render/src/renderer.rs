//! Rendering of summary, detail and collection views
//!
//! A render validates the requested version against the registry, then
//! walks the view's attributes in declaration order, keeping only those
//! whose window contains the effective version. Hidden fields are omitted,
//! not set to null.

use versa_core::{AttributeDefinition, HasField, Result, BASELINE_VERSION, NO_VERSION};

use crate::attribute_set::AttributeSet;
use crate::representation::{Fields, Representation};
use crate::schema::{ResourceSchema, View};

/// A requested version after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveVersion<'v> {
    /// Reported back in the representation
    display: &'v str,
    /// Compared against attribute windows
    comparison: &'v str,
}

/// Renders resources against one schema. Read-only; cheap to copy.
pub struct Renderer<'s, R> {
    schema: &'s ResourceSchema<R>,
}

impl<'s, R> Clone for Renderer<'s, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, R> Copy for Renderer<'s, R> {}

impl<'s, R> Renderer<'s, R> {
    pub fn new(schema: &'s ResourceSchema<R>) -> Self {
        Self { schema }
    }
}

impl<'s, R: HasField> Renderer<'s, R> {
    /// Detail view of a single resource
    pub fn detail(&self, resource: &R, version: Option<&str>) -> Result<Representation<Fields>> {
        self.render(View::Detail, resource, version)
    }

    /// Summary view of a single resource
    pub fn summary(&self, resource: &R, version: Option<&str>) -> Result<Representation<Fields>> {
        self.render(View::Summary, resource, version)
    }

    /// Single resource rendered with the attributes of `view`
    pub fn render(&self, view: View, resource: &R, version: Option<&str>) -> Result<Representation<Fields>> {
        let effective = self.resolve(version)?;
        let fields = self.single(self.schema.attributes(view), resource, effective.comparison)?;
        Ok(Representation::new(effective.display, fields))
    }

    /// Summary views of every resource, in input order
    pub fn collection<'r, I>(&self, resources: I, version: Option<&str>) -> Result<Representation<Vec<Fields>>>
    where
        I: IntoIterator<Item = &'r R>,
        R: 'r,
    {
        let effective = self.resolve(version)?;
        let attributes = self.schema.summary_attributes();
        let items = resources
            .into_iter()
            .map(|resource| self.single(attributes, resource, effective.comparison))
            .collect::<Result<Vec<_>>>()?;
        Ok(Representation::new(effective.display, items))
    }

    fn resolve<'v>(&self, version: Option<&'v str>) -> Result<EffectiveVersion<'v>> {
        match version {
            Some(version) => {
                self.schema.registry().validate(version)?;
                Ok(EffectiveVersion {
                    display: version,
                    comparison: version,
                })
            }
            None => Ok(EffectiveVersion {
                display: NO_VERSION,
                comparison: BASELINE_VERSION,
            }),
        }
    }

    fn single(&self, attributes: &AttributeSet<R>, resource: &R, version: &str) -> Result<Fields> {
        let mut fields = Fields::new();
        for attribute in attributes {
            if attribute.is_displayable(version) {
                fields.insert(attribute.name().to_string(), attribute.extract_value(resource)?);
            } else {
                self.skipped(attribute, version);
            }
        }
        Ok(fields)
    }

    fn skipped(&self, attribute: &AttributeDefinition<R>, version: &str) {
        tracing::trace!(
            resource = self.schema.name(),
            field = attribute.name(),
            version,
            "field hidden at version"
        );
    }
}

/// Capability of a resource type that owns a static schema.
///
/// ```
/// use once_cell::sync::Lazy;
/// use serde_json::{json, Value};
/// use std::sync::Arc;
/// use versa_render::{HasField, Representable, ResourceSchema, VersionRange, VersionRegistry};
///
/// struct User {
///     name: String,
///     country: String,
/// }
///
/// impl HasField for User {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(json!(self.name)),
///             "country" => Some(json!(self.country)),
///             _ => None,
///         }
///     }
/// }
///
/// static REGISTRY: Lazy<Arc<VersionRegistry>> = Lazy::new(|| Arc::new(VersionRegistry::new()));
/// static USER: Lazy<ResourceSchema<User>> = Lazy::new(|| user_schema().expect("valid user schema"));
///
/// fn user_schema() -> versa_render::Result<ResourceSchema<User>> {
///     ResourceSchema::new("user", REGISTRY.clone())
///         .detail("name", VersionRange::new())?
///         .detail("country", VersionRange::starting("1.0.0"))
/// }
///
/// impl Representable for User {
///     fn schema() -> &'static ResourceSchema<Self> {
///         &USER
///     }
/// }
///
/// let user = User { name: "photek".into(), country: "USA".into() };
/// let rendered = user.detail(Some("1.0.0")).unwrap();
/// assert_eq!(rendered.resource, *json!({ "name": "photek", "country": "USA" }).as_object().unwrap());
/// ```
pub trait Representable: HasField + Sized + 'static {
    fn schema() -> &'static ResourceSchema<Self>;

    fn detail(&self, version: Option<&str>) -> Result<Representation<Fields>> {
        Self::schema().renderer().detail(self, version)
    }

    fn summary(&self, version: Option<&str>) -> Result<Representation<Fields>> {
        Self::schema().renderer().summary(self, version)
    }

    fn collection<'r, I>(resources: I, version: Option<&str>) -> Result<Representation<Vec<Fields>>>
    where
        I: IntoIterator<Item = &'r Self>,
    {
        Self::schema().renderer().collection(resources, version)
    }
}
