//! Wire alias table.
//!
//! One static table per entity maps each internal (snake_case) field name to
//! its SARIF wire name and records what kind of value the field holds. The
//! serde attributes on the entity structs must agree with these tables; the
//! `wire_table` integration test enforces that.

use std::fmt;

use EntityKind as E;
use FieldKind::{Entity, EntityList};

/// Every entity in the document model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Message,
    ArtifactLocation,
    Region,
    Artifact,
    PhysicalLocation,
    LogicalLocation,
    Location,
    ReportingDescriptorReference,
    ToolComponentReference,
    ReportingConfiguration,
    ReportingDescriptor,
    ToolDriver,
    Tool,
    Result,
    Invocation,
    Run,
    SarifLog,
}

/// What a field holds, as far as path translation and error classification care.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar, string list, mapping or free-form JSON.
    Plain,
    /// Unique identifier text (UUID).
    Uuid,
    /// ISO 8601 timestamp text.
    Timestamp,
    /// `Level` enumeration literal.
    Level,
    /// A single nested entity.
    Entity(EntityKind),
    /// An ordered sequence of nested entities.
    EntityList(EntityKind),
}

impl FieldKind {
    /// The nested entity reached through this field, if any.
    pub fn entity(self) -> Option<EntityKind> {
        match self {
            FieldKind::Entity(kind) | FieldKind::EntityList(kind) => Some(kind),
            _ => None,
        }
    }
}

/// One row of an entity's alias table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WireField {
    /// Internal field identifier (snake_case).
    pub field: &'static str,
    /// Key used in SARIF JSON.
    pub wire: &'static str,
    pub kind: FieldKind,
}

impl WireField {
    const fn new(field: &'static str, wire: &'static str, kind: FieldKind) -> Self {
        Self { field, wire, kind }
    }

    /// Field whose wire name equals its internal name.
    const fn same(name: &'static str) -> Self {
        Self::new(name, name, FieldKind::Plain)
    }

    pub fn is_renamed(&self) -> bool {
        self.field != self.wire
    }
}

/// Implemented by every entity struct; ties the Rust type to its alias table.
pub trait SarifEntity {
    const KIND: EntityKind;

    fn wire_fields() -> &'static [WireField] {
        Self::KIND.fields()
    }
}

const MESSAGE: &[WireField] = &[
    WireField::same("text"),
    WireField::same("markdown"),
    WireField::same("id"),
    WireField::same("arguments"),
];

const ARTIFACT_LOCATION: &[WireField] = &[
    WireField::same("uri"),
    WireField::new("uri_base_id", "uriBaseId", FieldKind::Plain),
    WireField::same("index"),
    WireField::new("description", "description", Entity(E::Message)),
];

const REGION: &[WireField] = &[
    WireField::new("start_line", "startLine", FieldKind::Plain),
    WireField::new("start_column", "startColumn", FieldKind::Plain),
    WireField::new("end_line", "endLine", FieldKind::Plain),
    WireField::new("end_column", "endColumn", FieldKind::Plain),
    WireField::new("char_offset", "charOffset", FieldKind::Plain),
    WireField::new("char_length", "charLength", FieldKind::Plain),
    WireField::new("byte_offset", "byteOffset", FieldKind::Plain),
    WireField::new("byte_length", "byteLength", FieldKind::Plain),
    WireField::same("snippet"),
    WireField::new("message", "message", Entity(E::Message)),
];

const ARTIFACT: &[WireField] = &[
    WireField::new("location", "location", Entity(E::ArtifactLocation)),
    WireField::new("mime_type", "mimeType", FieldKind::Plain),
    WireField::same("encoding"),
    WireField::new("source_language", "sourceLanguage", FieldKind::Plain),
    WireField::same("roles"),
    WireField::same("contents"),
    WireField::new("parent_index", "parentIndex", FieldKind::Plain),
    WireField::same("offset"),
    WireField::same("length"),
    WireField::same("hashes"),
    WireField::new("last_modified", "lastModified", FieldKind::Timestamp),
    WireField::new("description", "description", Entity(E::Message)),
];

const PHYSICAL_LOCATION: &[WireField] = &[
    WireField::new(
        "artifact_location",
        "artifactLocation",
        Entity(E::ArtifactLocation),
    ),
    WireField::new("region", "region", Entity(E::Region)),
    WireField::new("context_region", "contextRegion", Entity(E::Region)),
    WireField::same("address"),
];

const LOGICAL_LOCATION: &[WireField] = &[
    WireField::same("name"),
    WireField::new("full_name", "fullName", FieldKind::Plain),
    WireField::new("decorated_name", "decoratedName", FieldKind::Plain),
    WireField::same("kind"),
    WireField::new("parent_index", "parentIndex", FieldKind::Plain),
    WireField::same("index"),
];

const LOCATION: &[WireField] = &[
    WireField::same("id"),
    WireField::new(
        "physical_location",
        "physicalLocation",
        Entity(E::PhysicalLocation),
    ),
    WireField::new(
        "logical_locations",
        "logicalLocations",
        EntityList(E::LogicalLocation),
    ),
    WireField::new("message", "message", Entity(E::Message)),
    WireField::same("annotations"),
    WireField::same("relationships"),
];

const REPORTING_DESCRIPTOR_REFERENCE: &[WireField] = &[
    WireField::same("id"),
    WireField::same("index"),
    WireField::new("guid", "guid", FieldKind::Uuid),
    WireField::new("tool_component", "toolComponent", FieldKind::Plain),
];

const TOOL_COMPONENT_REFERENCE: &[WireField] = &[
    WireField::same("name"),
    WireField::same("index"),
    WireField::new("guid", "guid", FieldKind::Uuid),
];

const REPORTING_CONFIGURATION: &[WireField] = &[
    WireField::same("enabled"),
    WireField::same("level"),
    WireField::same("rank"),
    WireField::same("parameters"),
];

const REPORTING_DESCRIPTOR: &[WireField] = &[
    WireField::same("id"),
    WireField::same("name"),
    WireField::new("short_description", "shortDescription", Entity(E::Message)),
    WireField::new("full_description", "fullDescription", Entity(E::Message)),
    WireField::new(
        "default_configuration",
        "defaultConfiguration",
        Entity(E::ReportingConfiguration),
    ),
    WireField::new("help_uri", "helpUri", FieldKind::Plain),
    WireField::new("help", "help", Entity(E::Message)),
    WireField::same("relationships"),
];

const TOOL_DRIVER: &[WireField] = &[
    WireField::same("name"),
    WireField::new("full_name", "fullName", FieldKind::Plain),
    WireField::same("version"),
    WireField::new("semantic_version", "semanticVersion", FieldKind::Plain),
    WireField::new("information_uri", "informationUri", FieldKind::Plain),
    WireField::new("rules", "rules", EntityList(E::ReportingDescriptor)),
    WireField::new(
        "notifications",
        "notifications",
        EntityList(E::ReportingDescriptor),
    ),
    WireField::new("taxa", "taxa", EntityList(E::ReportingDescriptor)),
    WireField::same("language"),
    WireField::same("contents"),
];

const TOOL: &[WireField] = &[
    WireField::new("driver", "driver", Entity(E::ToolDriver)),
    WireField::same("extensions"),
];

const RESULT: &[WireField] = &[
    WireField::new("rule_id", "ruleId", FieldKind::Plain),
    WireField::new("rule_index", "ruleIndex", FieldKind::Plain),
    WireField::new("rule", "rule", Entity(E::ReportingDescriptorReference)),
    WireField::same("kind"),
    WireField::new("level", "level", FieldKind::Level),
    WireField::new("message", "message", Entity(E::Message)),
    WireField::new("locations", "locations", EntityList(E::Location)),
    WireField::new(
        "analysis_target",
        "analysisTarget",
        Entity(E::ArtifactLocation),
    ),
    WireField::same("fixes"),
    WireField::same("occurrences"),
    WireField::same("stacks"),
    WireField::new("code_flows", "codeFlows", FieldKind::Plain),
    WireField::same("graphs"),
    WireField::new("graph_traversals", "graphTraversals", FieldKind::Plain),
    WireField::new(
        "related_locations",
        "relatedLocations",
        EntityList(E::Location),
    ),
    WireField::same("suppression"),
    WireField::same("rank"),
    WireField::same("attachments"),
    WireField::new("hosted_viewer_uri", "hostedViewerUri", FieldKind::Plain),
    WireField::new("work_item_uris", "workItemUris", FieldKind::Plain),
    WireField::same("properties"),
];

const INVOCATION: &[WireField] = &[
    WireField::new("command_line", "commandLine", FieldKind::Plain),
    WireField::same("arguments"),
    WireField::new("response_files", "responseFiles", FieldKind::Plain),
    WireField::new("start_time_utc", "startTimeUtc", FieldKind::Timestamp),
    WireField::new("end_time_utc", "endTimeUtc", FieldKind::Timestamp),
    WireField::new(
        "execution_successful",
        "executionSuccessful",
        FieldKind::Plain,
    ),
    WireField::same("machine"),
    WireField::same("account"),
    WireField::new("process_id", "processId", FieldKind::Plain),
    WireField::new(
        "executable_location",
        "executableLocation",
        Entity(E::ArtifactLocation),
    ),
    WireField::new(
        "working_directory",
        "workingDirectory",
        Entity(E::ArtifactLocation),
    ),
    WireField::new(
        "environment_variables",
        "environmentVariables",
        FieldKind::Plain,
    ),
    WireField::new("stdin", "stdin", Entity(E::ArtifactLocation)),
    WireField::new("stdout", "stdout", Entity(E::ArtifactLocation)),
    WireField::new("stderr", "stderr", Entity(E::ArtifactLocation)),
    WireField::new("stdout_stderr", "stdoutStderr", Entity(E::ArtifactLocation)),
    WireField::same("properties"),
];

const RUN: &[WireField] = &[
    WireField::new("tool", "tool", Entity(E::Tool)),
    WireField::new("invocations", "invocations", EntityList(E::Invocation)),
    WireField::same("conversion"),
    WireField::same("language"),
    WireField::new(
        "version_control_provenance",
        "versionControlProvenance",
        FieldKind::Plain,
    ),
    WireField::new(
        "original_uri_base_ids",
        "originalUriBaseIds",
        FieldKind::Plain,
    ),
    WireField::new("artifacts", "artifacts", EntityList(E::Artifact)),
    WireField::new(
        "logical_locations",
        "logicalLocations",
        EntityList(E::LogicalLocation),
    ),
    WireField::same("graphs"),
    WireField::new("results", "results", EntityList(E::Result)),
    WireField::new("automation_details", "automationDetails", FieldKind::Plain),
    WireField::new("baseline_guid", "baselineGuid", FieldKind::Uuid),
    WireField::new("redaction_tokens", "redactionTokens", FieldKind::Plain),
    WireField::new("default_encoding", "defaultEncoding", FieldKind::Plain),
    WireField::new(
        "default_source_language",
        "defaultSourceLanguage",
        FieldKind::Plain,
    ),
    WireField::new("newline_sequences", "newlineSequences", FieldKind::Plain),
    WireField::new("tool_extensions", "toolExtensions", FieldKind::Plain),
    WireField::same("notifications"),
    WireField::same("properties"),
];

const SARIF_LOG: &[WireField] = &[
    WireField::same("version"),
    WireField::new("schema_uri", "$schema", FieldKind::Plain),
    WireField::new("runs", "runs", EntityList(E::Run)),
    WireField::new(
        "inline_external_properties",
        "inlineExternalProperties",
        FieldKind::Plain,
    ),
    WireField::same("properties"),
];

impl EntityKind {
    pub const ALL: [EntityKind; 17] = [
        E::Message,
        E::ArtifactLocation,
        E::Region,
        E::Artifact,
        E::PhysicalLocation,
        E::LogicalLocation,
        E::Location,
        E::ReportingDescriptorReference,
        E::ToolComponentReference,
        E::ReportingConfiguration,
        E::ReportingDescriptor,
        E::ToolDriver,
        E::Tool,
        E::Result,
        E::Invocation,
        E::Run,
        E::SarifLog,
    ];

    pub fn name(self) -> &'static str {
        match self {
            E::Message => "Message",
            E::ArtifactLocation => "ArtifactLocation",
            E::Region => "Region",
            E::Artifact => "Artifact",
            E::PhysicalLocation => "PhysicalLocation",
            E::LogicalLocation => "LogicalLocation",
            E::Location => "Location",
            E::ReportingDescriptorReference => "ReportingDescriptorReference",
            E::ToolComponentReference => "ToolComponentReference",
            E::ReportingConfiguration => "ReportingConfiguration",
            E::ReportingDescriptor => "ReportingDescriptor",
            E::ToolDriver => "ToolDriver",
            E::Tool => "Tool",
            E::Result => "Result",
            E::Invocation => "Invocation",
            E::Run => "Run",
            E::SarifLog => "SarifLog",
        }
    }

    pub fn from_name(name: &str) -> Option<EntityKind> {
        EntityKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The alias table for this entity, in declaration order.
    pub fn fields(self) -> &'static [WireField] {
        match self {
            E::Message => MESSAGE,
            E::ArtifactLocation => ARTIFACT_LOCATION,
            E::Region => REGION,
            E::Artifact => ARTIFACT,
            E::PhysicalLocation => PHYSICAL_LOCATION,
            E::LogicalLocation => LOGICAL_LOCATION,
            E::Location => LOCATION,
            E::ReportingDescriptorReference => REPORTING_DESCRIPTOR_REFERENCE,
            E::ToolComponentReference => TOOL_COMPONENT_REFERENCE,
            E::ReportingConfiguration => REPORTING_CONFIGURATION,
            E::ReportingDescriptor => REPORTING_DESCRIPTOR,
            E::ToolDriver => TOOL_DRIVER,
            E::Tool => TOOL,
            E::Result => RESULT,
            E::Invocation => INVOCATION,
            E::Run => RUN,
            E::SarifLog => SARIF_LOG,
        }
    }

    pub fn field_by_wire(self, wire: &str) -> Option<&'static WireField> {
        self.fields().iter().find(|f| f.wire == wire)
    }

    pub fn field_by_name(self, field: &str) -> Option<&'static WireField> {
        self.fields().iter().find(|f| f.field == field)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the wire name of `field` on `entity`.
pub fn wire_name(entity: EntityKind, field: &str) -> Option<&'static str> {
    entity.field_by_name(field).map(|f| f.wire)
}

/// Look up the internal field name behind a wire key on `entity`.
pub fn field_name(entity: EntityKind, wire: &str) -> Option<&'static str> {
    entity.field_by_wire(wire).map(|f| f.field)
}
