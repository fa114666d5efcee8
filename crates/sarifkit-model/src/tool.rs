use crate::JsonValue;
use crate::descriptor::ReportingDescriptor;
use crate::wire::{EntityKind, SarifEntity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The analysis tool's primary component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolDriver {
    pub name: String,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "semanticVersion", skip_serializing_if = "Option::is_none")]
    pub semantic_version: Option<String>,
    #[serde(rename = "informationUri", skip_serializing_if = "Option::is_none")]
    pub information_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ReportingDescriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<ReportingDescriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxa: Option<Vec<ReportingDescriptor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<String>>,
}

impl ToolDriver {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            full_name: None,
            version: None,
            semantic_version: None,
            information_uri: None,
            rules: None,
            notifications: None,
            taxa: None,
            language: None,
            contents: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Tool {
    pub driver: ToolDriver,
    /// Extension components are carried as opaque JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<JsonValue>>,
}

impl Tool {
    pub fn new(driver: ToolDriver) -> Self {
        Self {
            driver,
            extensions: None,
        }
    }
}

impl SarifEntity for ToolDriver {
    const KIND: EntityKind = EntityKind::ToolDriver;
}

impl SarifEntity for Tool {
    const KIND: EntityKind = EntityKind::Tool;
}
