use crate::result::SarifResult;
use crate::run::Run;
use crate::wire::{EntityKind, SarifEntity};
use crate::{JsonValue, PropertyBag};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// SARIF version assumed when a document omits `version`.
pub const SARIF_VERSION: &str = "2.1.0";

fn default_version() -> String {
    SARIF_VERSION.to_string()
}

/// Document root. Owns the whole entity tree by value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SarifLog {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema_uri: Option<String>,
    /// Required, may be empty.
    pub runs: Vec<Run>,
    #[serde(
        rename = "inlineExternalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_external_properties: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyBag>,
}

impl SarifLog {
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            version: default_version(),
            schema_uri: None,
            runs,
            inline_external_properties: None,
            properties: None,
        }
    }

    /// Every result of every run, in document order.
    pub fn results(&self) -> impl Iterator<Item = &SarifResult> {
        self.runs.iter().flat_map(|run| run.results().iter())
    }
}

impl SarifEntity for SarifLog {
    const KIND: EntityKind = EntityKind::SarifLog;
}
