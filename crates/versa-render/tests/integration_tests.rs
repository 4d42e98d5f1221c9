//! Integration tests for versa-render with real schema files.
//!
//! These tests declare resources the way a host application would, through
//! a shared registry, a static schema and the `Representable` capability.

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Arc;
use versa_render::{
    Fields, HasField, Representable, ResourceSchema, SchemaFile, VersaError, VersionRange,
    VersionRegistry,
};

/// Path to the schema file relative to the workspace root
const USER_SCHEMA_PATH: &str = "schemas/user-resource.yaml";

/// Get the absolute path to the schema file
fn user_schema_path() -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join(USER_SCHEMA_PATH).to_string_lossy().to_string()
}

fn fields(value: Value) -> Fields {
    value.as_object().cloned().unwrap()
}

// =============================================================================
// Representable resources
// =============================================================================

#[derive(Debug, Clone)]
struct Artist {
    name: String,
    country: String,
    label: Option<String>,
}

impl Artist {
    fn new(name: &str, country: &str) -> Self {
        Self {
            name: name.to_string(),
            country: country.to_string(),
            label: None,
        }
    }
}

impl HasField for Artist {
    fn resource_name(&self) -> &str {
        "artist"
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(json!(self.name)),
            "country" => Some(json!(self.country)),
            "label" => Some(json!(self.label)),
            _ => None,
        }
    }
}

static REGISTRY: Lazy<Arc<VersionRegistry>> = Lazy::new(|| Arc::new(VersionRegistry::new()));

static ARTIST: Lazy<ResourceSchema<Artist>> = Lazy::new(|| artist_schema().unwrap());

fn artist_schema() -> versa_render::Result<ResourceSchema<Artist>> {
    ResourceSchema::new("artist", REGISTRY.clone())
        .summary("name", VersionRange::new())?
        .summary("country", VersionRange::starting("1.0.0"))?
        .detail("name", VersionRange::new())?
        .detail("country", VersionRange::starting("1.0.0"))?
        .detail("label", VersionRange::between("1.1.0", "1.4.0"))?
        .detail_with("display_name", VersionRange::starting("1.5.0"), |artist: &Artist| {
            json!(format!("{} ({})", artist.name, artist.country))
        })
}

impl Representable for Artist {
    fn schema() -> &'static ResourceSchema<Self> {
        &ARTIST
    }
}

#[test]
fn test_detail_across_versions() {
    let photek = Artist::new("photek", "USA");

    let before = photek.detail(Some("1.0.0")).unwrap();
    assert_eq!(before.resource, fields(json!({ "name": "photek", "country": "USA" })));

    let labelled = photek.detail(Some("1.1.0")).unwrap();
    assert_eq!(
        labelled.resource,
        fields(json!({ "name": "photek", "country": "USA", "label": null }))
    );

    let computed = photek.detail(Some("1.5.0")).unwrap();
    assert_eq!(computed.version, "1.5.0");
    assert_eq!(computed.resource["display_name"], json!("photek (USA)"));
    assert!(!computed.resource.contains_key("label"));
}

#[test]
fn test_summary_without_version() {
    let calyx = Artist::new("calyx", "UK");
    let rendered = calyx.summary(None).unwrap();
    assert_eq!(rendered.version, "none");
    assert_eq!(rendered.resource, fields(json!({ "name": "calyx" })));
}

#[test]
fn test_collection_of_summaries() {
    let artists = vec![Artist::new("photek", "USA"), Artist::new("calyx", "UK")];

    let rendered = Artist::collection(&artists, Some("1.0.0")).unwrap();
    assert_eq!(
        rendered.resource,
        vec![
            fields(json!({ "name": "photek", "country": "USA" })),
            fields(json!({ "name": "calyx", "country": "UK" })),
        ]
    );
}

#[test]
fn test_unknown_version_is_rejected() {
    let photek = Artist::new("photek", "USA");
    let err = photek.detail(Some("2.1.0")).unwrap_err();
    assert!(matches!(err, VersaError::NotRegistered(ref version) if version == "2.1.0"));
    assert!(Artist::collection(&[photek], Some("2.1.0")).is_err());
}

#[test]
fn test_representation_serializes() {
    let photek = Artist::new("photek", "USA");
    let value = photek.summary(Some("1.0.0")).unwrap().to_value().unwrap();
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"version":"1.0.0","resource":{"name":"photek","country":"USA"}}"#
    );
}

// =============================================================================
// Schema files
// =============================================================================

fn user_schema() -> (Arc<VersionRegistry>, ResourceSchema<Value>) {
    let registry = Arc::new(VersionRegistry::new());
    let schema = SchemaFile::load(user_schema_path())
        .and_then(|file| file.into_schema(registry.clone()))
        .unwrap();
    (registry, schema)
}

fn user() -> Value {
    json!({
        "name": "photek",
        "country": "USA",
        "nickname": "rupert",
        "email": "photek@example.com",
        "legacy_id": 7
    })
}

#[test]
fn test_schema_file_registers_versions() {
    let (registry, _schema) = user_schema();
    assert_eq!(registry.versions(), vec!["0.9.0", "1.0.0", "1.5.0", "2.0.0"]);
}

#[test]
fn test_schema_file_detail_windows() {
    let (_registry, schema) = user_schema();
    let renderer = schema.renderer();
    let user = user();

    let cases = [
        ("0.9.0", vec!["name", "nickname", "legacy_id"]),
        ("1.0.0", vec!["name", "country", "nickname"]),
        ("1.5.0", vec!["name", "country", "email"]),
        ("2.0.0", vec!["name", "country", "email"]),
    ];

    for (version, expected) in cases {
        let rendered = renderer.detail(&user, Some(version)).unwrap();
        let keys: Vec<&str> = rendered.resource.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, expected, "wrong fields at {}", version);
    }
}

#[test]
fn test_schema_file_collection() {
    let (_registry, schema) = user_schema();
    let users = vec![user(), json!({ "name": "calyx", "country": "UK" })];

    let rendered = schema.renderer().collection(&users, Some("0.9.0")).unwrap();
    assert_eq!(
        rendered.resource,
        vec![fields(json!({ "name": "photek" })), fields(json!({ "name": "calyx" }))]
    );
}

#[test]
fn test_schema_file_missing_field_is_lookup_error() {
    let (_registry, schema) = user_schema();
    let sparse = json!({ "name": "calyx" });

    let err = schema.renderer().detail(&sparse, Some("1.0.0")).unwrap_err();
    assert_eq!(err, VersaError::lookup("object", "country"));
}

#[test]
fn test_schemas_share_one_registry() {
    let registry = Arc::new(VersionRegistry::new());
    let users: ResourceSchema<Value> = SchemaFile::load(user_schema_path())
        .and_then(|file| file.into_schema(registry.clone()))
        .unwrap();
    let teams = ResourceSchema::<Value>::new("team", registry.clone())
        .detail("members", VersionRange::starting("3.0.0"))
        .unwrap();

    // 3.0.0 came from the team schema, but is valid for users too.
    let rendered = users.renderer().detail(&user(), Some("3.0.0")).unwrap();
    assert!(rendered.resource.contains_key("country"));
    assert!(!rendered.resource.contains_key("email"));
    assert_eq!(teams.detail_attributes().len(), 1);
}
