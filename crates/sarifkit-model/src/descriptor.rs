//! Rule / notification / taxon metadata and the lightweight references to it.

use crate::location::Message;
use crate::wire::{EntityKind, SarifEntity};
use crate::{JsonValue, PropertyBag};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Points at a reporting descriptor by `id`, `index` and/or `guid`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportingDescriptorReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[schemars(with = "Option<String>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<Uuid>,
    #[serde(rename = "toolComponent", skip_serializing_if = "Option::is_none")]
    pub tool_component: Option<JsonValue>,
}

/// Points at a tool component (driver or extension) by `name`, `index` and/or `guid`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolComponentReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[schemars(with = "Option<String>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<Uuid>,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportingConfiguration {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Kept as free text: the default level of a rule is not constrained to `Level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<PropertyBag>,
}

impl Default for ReportingConfiguration {
    fn default() -> Self {
        Self {
            enabled: enabled_by_default(),
            level: None,
            rank: None,
            parameters: None,
        }
    }
}

/// Metadata for a rule, notification or taxon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportingDescriptor {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<Message>,
    #[serde(rename = "fullDescription", skip_serializing_if = "Option::is_none")]
    pub full_description: Option<Message>,
    #[serde(rename = "defaultConfiguration", skip_serializing_if = "Option::is_none")]
    pub default_configuration: Option<ReportingConfiguration>,
    #[serde(rename = "helpUri", skip_serializing_if = "Option::is_none")]
    pub help_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<JsonValue>>,
}

impl ReportingDescriptor {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            name: None,
            short_description: None,
            full_description: None,
            default_configuration: None,
            help_uri: None,
            help: None,
            relationships: None,
        }
    }
}

impl SarifEntity for ReportingDescriptorReference {
    const KIND: EntityKind = EntityKind::ReportingDescriptorReference;
}

impl SarifEntity for ToolComponentReference {
    const KIND: EntityKind = EntityKind::ToolComponentReference;
}

impl SarifEntity for ReportingConfiguration {
    const KIND: EntityKind = EntityKind::ReportingConfiguration;
}

impl SarifEntity for ReportingDescriptor {
    const KIND: EntityKind = EntityKind::ReportingDescriptor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn configuration_enabled_defaults_to_true() {
        let cfg: ReportingConfiguration =
            serde_json::from_value(json!({ "level": "warning" })).expect("config");
        assert!(cfg.enabled);
        assert_eq!(cfg.level.as_deref(), Some("warning"));
        assert!(ReportingConfiguration::default().enabled);
    }

    #[test]
    fn configuration_explicit_disable_is_kept() {
        let cfg: ReportingConfiguration =
            serde_json::from_value(json!({ "enabled": false })).expect("config");
        assert!(!cfg.enabled);
    }

    #[test]
    fn configuration_level_is_free_text() {
        let cfg: ReportingConfiguration =
            serde_json::from_value(json!({ "level": "critical" })).expect("config");
        assert_eq!(cfg.level.as_deref(), Some("critical"));
    }

    #[test]
    fn descriptor_requires_id() {
        assert!(serde_json::from_value::<ReportingDescriptor>(json!({ "name": "x" })).is_err());
        let rule: ReportingDescriptor = serde_json::from_value(json!({
            "id": "no-unused",
            "shortDescription": { "text": "Unused variable" },
            "defaultConfiguration": { "rank": 12.5 }
        }))
        .expect("descriptor");
        assert_eq!(rule.id, "no-unused");
        assert_eq!(
            rule.short_description.map(|m| m.text).as_deref(),
            Some("Unused variable")
        );
        let cfg = rule.default_configuration.expect("default configuration");
        assert!(cfg.enabled);
        assert_eq!(cfg.rank, Some(12.5));
    }

    #[test]
    fn reference_guid_must_be_a_uuid() {
        let ok: ReportingDescriptorReference = serde_json::from_value(json!({
            "guid": "6f2b6a2e-8d9b-4c1e-9f7a-3e5d2c1b0a99"
        }))
        .expect("reference");
        assert_eq!(
            ok.guid.map(|g| g.to_string()).as_deref(),
            Some("6f2b6a2e-8d9b-4c1e-9f7a-3e5d2c1b0a99")
        );

        assert!(
            serde_json::from_value::<ToolComponentReference>(json!({ "guid": "not-a-guid" }))
                .is_err()
        );
    }
}
