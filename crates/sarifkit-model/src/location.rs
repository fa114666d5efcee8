//! Messages and the location family: where in an artifact a finding points.

use crate::JsonValue;
use crate::wire::{EntityKind, SarifEntity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Human-readable (optionally templated) text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Substitution arguments for `{0}`-style placeholders in `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
}

impl Message {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            markdown: None,
            id: None,
            arguments: None,
        }
    }
}

/// A file or resource, optionally relative to a named base (`uriBaseId`)
/// and/or identified by index into the run's artifact table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArtifactLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "uriBaseId", skip_serializing_if = "Option::is_none")]
    pub uri_base_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Message>,
}

impl ArtifactLocation {
    pub fn from_uri<S: Into<String>>(uri: S) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }
}

/// A sub-range of an artifact, by line/column and/or by char or byte offsets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Region {
    #[serde(rename = "startLine", skip_serializing_if = "Option::is_none")]
    pub start_line: Option<i64>,
    #[serde(rename = "startColumn", skip_serializing_if = "Option::is_none")]
    pub start_column: Option<i64>,
    #[serde(rename = "endLine", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    #[serde(rename = "endColumn", skip_serializing_if = "Option::is_none")]
    pub end_column: Option<i64>,
    #[serde(rename = "charOffset", skip_serializing_if = "Option::is_none")]
    pub char_offset: Option<i64>,
    #[serde(rename = "charLength", skip_serializing_if = "Option::is_none")]
    pub char_length: Option<i64>,
    #[serde(rename = "byteOffset", skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<i64>,
    #[serde(rename = "byteLength", skip_serializing_if = "Option::is_none")]
    pub byte_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PhysicalLocation {
    #[serde(rename = "artifactLocation", skip_serializing_if = "Option::is_none")]
    pub artifact_location: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(rename = "contextRegion", skip_serializing_if = "Option::is_none")]
    pub context_region: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<JsonValue>,
}

/// A named program construct (namespace, type, function, ...).
///
/// `parent_index` and `index` point into `Run::logical_locations`; they are
/// never dereferenced here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LogicalLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(rename = "decoratedName", skip_serializing_if = "Option::is_none")]
    pub decorated_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "parentIndex", skip_serializing_if = "Option::is_none")]
    pub parent_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "physicalLocation", skip_serializing_if = "Option::is_none")]
    pub physical_location: Option<PhysicalLocation>,
    #[serde(rename = "logicalLocations", skip_serializing_if = "Option::is_none")]
    pub logical_locations: Option<Vec<LogicalLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<JsonValue>>,
}

impl Location {
    /// Shorthand for the common `physicalLocation.artifactLocation.uri` shape.
    pub fn uri(&self) -> Option<&str> {
        self.physical_location
            .as_ref()?
            .artifact_location
            .as_ref()?
            .uri
            .as_deref()
    }
}

impl SarifEntity for Message {
    const KIND: EntityKind = EntityKind::Message;
}

impl SarifEntity for ArtifactLocation {
    const KIND: EntityKind = EntityKind::ArtifactLocation;
}

impl SarifEntity for Region {
    const KIND: EntityKind = EntityKind::Region;
}

impl SarifEntity for PhysicalLocation {
    const KIND: EntityKind = EntityKind::PhysicalLocation;
}

impl SarifEntity for LogicalLocation {
    const KIND: EntityKind = EntityKind::LogicalLocation;
}

impl SarifEntity for Location {
    const KIND: EntityKind = EntityKind::Location;
}
