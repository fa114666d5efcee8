use crate::descriptor::ReportingDescriptorReference;
use crate::level::Level;
use crate::location::{ArtifactLocation, Location, Message};
use crate::wire::{EntityKind, SarifEntity};
use crate::{JsonValue, PropertyBag};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One diagnostic finding produced by a run (the SARIF `result` object).
///
/// Named `SarifResult` so it does not shadow `std::result::Result`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SarifResult {
    #[serde(rename = "ruleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(rename = "ruleIndex", skip_serializing_if = "Option::is_none")]
    pub rule_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<ReportingDescriptorReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    pub message: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    #[serde(rename = "analysisTarget", skip_serializing_if = "Option::is_none")]
    pub analysis_target: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixes: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacks: Option<Vec<JsonValue>>,
    #[serde(rename = "codeFlows", skip_serializing_if = "Option::is_none")]
    pub code_flows: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphs: Option<Vec<JsonValue>>,
    #[serde(rename = "graphTraversals", skip_serializing_if = "Option::is_none")]
    pub graph_traversals: Option<Vec<JsonValue>>,
    #[serde(rename = "relatedLocations", skip_serializing_if = "Option::is_none")]
    pub related_locations: Option<Vec<Location>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppression: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<JsonValue>>,
    #[serde(rename = "hostedViewerUri", skip_serializing_if = "Option::is_none")]
    pub hosted_viewer_uri: Option<String>,
    #[serde(rename = "workItemUris", skip_serializing_if = "Option::is_none")]
    pub work_item_uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyBag>,
}

impl SarifResult {
    pub fn new(message: Message) -> Self {
        Self {
            rule_id: None,
            rule_index: None,
            rule: None,
            kind: None,
            level: None,
            message,
            locations: None,
            analysis_target: None,
            fixes: None,
            occurrences: None,
            stacks: None,
            code_flows: None,
            graphs: None,
            graph_traversals: None,
            related_locations: None,
            suppression: None,
            rank: None,
            attachments: None,
            hosted_viewer_uri: None,
            work_item_uris: None,
            properties: None,
        }
    }

    /// `ruleId` if present, otherwise the `id` of the `rule` reference.
    pub fn effective_rule_id(&self) -> Option<&str> {
        self.rule_id
            .as_deref()
            .or_else(|| self.rule.as_ref().and_then(|r| r.id.as_deref()))
    }
}

impl SarifEntity for SarifResult {
    const KIND: EntityKind = EntityKind::Result;
}
