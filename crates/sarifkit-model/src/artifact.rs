use crate::location::{ArtifactLocation, Message};
use crate::wire::{EntityKind, SarifEntity};
use crate::JsonValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// An entry in a run's artifact table (a file, a nested archive member, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Artifact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ArtifactLocation>,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(rename = "sourceLanguage", skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<JsonValue>,
    #[serde(rename = "parentIndex", skip_serializing_if = "Option::is_none")]
    pub parent_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    /// Digest by algorithm name, e.g. `sha-256`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<BTreeMap<String, String>>,
    #[schemars(with = "Option<String>")]
    #[serde(
        rename = "lastModified",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp"
    )]
    pub last_modified: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Message>,
}

impl SarifEntity for Artifact {
    const KIND: EntityKind = EntityKind::Artifact;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn parses_last_modified_as_rfc3339() {
        let artifact: Artifact = serde_json::from_value(json!({
            "location": { "uri": "src/lib.rs" },
            "lastModified": "2024-03-01T12:30:00Z",
            "hashes": { "sha-256": "abc123" }
        }))
        .expect("artifact");

        assert_eq!(artifact.last_modified, Some(datetime!(2024-03-01 12:30:00 UTC)));
        assert_eq!(
            artifact.hashes.as_ref().and_then(|h| h.get("sha-256")).map(String::as_str),
            Some("abc123")
        );
    }

    #[test]
    fn keeps_offset_timestamps() {
        let artifact: Artifact =
            serde_json::from_value(json!({ "lastModified": "2024-03-01T12:30:00.250+02:00" }))
                .expect("artifact");
        assert_eq!(
            artifact.last_modified,
            Some(datetime!(2024-03-01 12:30:00.25 +02:00))
        );
    }

    #[test]
    fn naive_last_modified_is_utc_and_written_back_with_offset() {
        let artifact: Artifact =
            serde_json::from_value(json!({ "lastModified": "2024-05-01T10:00:00" }))
                .expect("artifact");
        assert_eq!(artifact.last_modified, Some(datetime!(2024-05-01 10:00:00 UTC)));
        let out = serde_json::to_value(&artifact).expect("serialize");
        assert_eq!(out, json!({ "lastModified": "2024-05-01T10:00:00Z" }));
    }

    #[test]
    fn rejects_malformed_timestamp() {
        assert!(serde_json::from_value::<Artifact>(json!({ "lastModified": "yesterday" })).is_err());
    }

    #[test]
    fn rejects_non_string_digest() {
        assert!(serde_json::from_value::<Artifact>(json!({ "hashes": { "md5": 5 } })).is_err());
    }

    #[test]
    fn missing_timestamp_stays_absent_on_output() {
        let out = serde_json::to_value(Artifact::default()).expect("serialize");
        assert_eq!(out, json!({}));
    }
}
