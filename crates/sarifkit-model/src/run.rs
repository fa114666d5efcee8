use crate::artifact::Artifact;
use crate::location::{ArtifactLocation, LogicalLocation};
use crate::result::SarifResult;
use crate::tool::Tool;
use crate::wire::{EntityKind, SarifEntity};
use crate::{JsonValue, PropertyBag};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;
use uuid::Uuid;

/// How the tool was launched and whether it finished.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Invocation {
    #[serde(rename = "commandLine", skip_serializing_if = "Option::is_none")]
    pub command_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
    #[serde(rename = "responseFiles", skip_serializing_if = "Option::is_none")]
    pub response_files: Option<Vec<JsonValue>>,
    #[schemars(with = "Option<String>")]
    #[serde(
        rename = "startTimeUtc",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp"
    )]
    pub start_time_utc: Option<OffsetDateTime>,
    #[schemars(with = "Option<String>")]
    #[serde(
        rename = "endTimeUtc",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp"
    )]
    pub end_time_utc: Option<OffsetDateTime>,
    /// Required: SARIF gives this field no default.
    #[serde(rename = "executionSuccessful")]
    pub execution_successful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(rename = "processId", skip_serializing_if = "Option::is_none")]
    pub process_id: Option<i64>,
    #[serde(rename = "executableLocation", skip_serializing_if = "Option::is_none")]
    pub executable_location: Option<ArtifactLocation>,
    #[serde(rename = "workingDirectory", skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<ArtifactLocation>,
    #[serde(rename = "environmentVariables", skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<ArtifactLocation>,
    #[serde(rename = "stdoutStderr", skip_serializing_if = "Option::is_none")]
    pub stdout_stderr: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyBag>,
}

impl Invocation {
    pub fn new(execution_successful: bool) -> Self {
        Self {
            command_line: None,
            arguments: None,
            response_files: None,
            start_time_utc: None,
            end_time_utc: None,
            execution_successful,
            machine: None,
            account: None,
            process_id: None,
            executable_location: None,
            working_directory: None,
            environment_variables: None,
            stdin: None,
            stdout: None,
            stderr: None,
            stdout_stderr: None,
            properties: None,
        }
    }

    /// Wall-clock duration when both timestamps are present.
    pub fn duration(&self) -> Option<time::Duration> {
        Some(self.end_time_utc? - self.start_time_utc?)
    }
}

/// One execution of one analysis tool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Run {
    pub tool: Tool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocations: Option<Vec<Invocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(
        rename = "versionControlProvenance",
        skip_serializing_if = "Option::is_none"
    )]
    pub version_control_provenance: Option<Vec<JsonValue>>,
    #[serde(rename = "originalUriBaseIds", skip_serializing_if = "Option::is_none")]
    pub original_uri_base_ids: Option<PropertyBag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,
    #[serde(rename = "logicalLocations", skip_serializing_if = "Option::is_none")]
    pub logical_locations: Option<Vec<LogicalLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphs: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SarifResult>>,
    #[serde(rename = "automationDetails", skip_serializing_if = "Option::is_none")]
    pub automation_details: Option<JsonValue>,
    #[schemars(with = "Option<String>")]
    #[serde(rename = "baselineGuid", skip_serializing_if = "Option::is_none")]
    pub baseline_guid: Option<Uuid>,
    #[serde(rename = "redactionTokens", skip_serializing_if = "Option::is_none")]
    pub redaction_tokens: Option<Vec<String>>,
    #[serde(rename = "defaultEncoding", skip_serializing_if = "Option::is_none")]
    pub default_encoding: Option<String>,
    #[serde(
        rename = "defaultSourceLanguage",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_source_language: Option<String>,
    #[serde(rename = "newlineSequences", skip_serializing_if = "Option::is_none")]
    pub newline_sequences: Option<Vec<String>>,
    #[serde(rename = "toolExtensions", skip_serializing_if = "Option::is_none")]
    pub tool_extensions: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyBag>,
}

impl Run {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            invocations: None,
            conversion: None,
            language: None,
            version_control_provenance: None,
            original_uri_base_ids: None,
            artifacts: None,
            logical_locations: None,
            graphs: None,
            results: None,
            automation_details: None,
            baseline_guid: None,
            redaction_tokens: None,
            default_encoding: None,
            default_source_language: None,
            newline_sequences: None,
            tool_extensions: None,
            notifications: None,
            properties: None,
        }
    }

    /// Results in source order; empty when the run carries none.
    pub fn results(&self) -> &[SarifResult] {
        self.results.as_deref().unwrap_or_default()
    }
}

impl SarifEntity for Invocation {
    const KIND: EntityKind = EntityKind::Invocation;
}

impl SarifEntity for Run {
    const KIND: EntityKind = EntityKind::Run;
}
