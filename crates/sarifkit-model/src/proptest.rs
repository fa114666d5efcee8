//! Property-based tests for the document model.
//!
//! These tests use proptest to verify invariants around:
//! - JSON round-trip of arbitrary documents (wire aliases applied both ways)
//! - `Level` parsing and display symmetry
//! - absent optionals never serialising as `null`

use crate::{
    ArtifactLocation, Invocation, Level, Location, Message, PhysicalLocation, Region,
    ReportingConfiguration, ReportingDescriptor, Run, SarifLog, SarifResult, Tool, ToolDriver,
};
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use uuid::Uuid;

// ============================================================================
// Strategies
// ============================================================================

fn arb_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::None),
        Just(Level::Note),
        Just(Level::Warning),
        Just(Level::Error),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    "\\PC{0,24}"
}

fn arb_rank() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |rank| rank.is_finite())
}

fn arb_timestamp() -> impl Strategy<Value = OffsetDateTime> {
    (0i64..4_000_000_000).prop_map(|secs| {
        OffsetDateTime::from_unix_timestamp(secs).expect("timestamp within range")
    })
}

fn arb_message() -> impl Strategy<Value = Message> {
    (
        arb_text(),
        proptest::option::of(arb_text()),
        proptest::option::of(prop::collection::vec(arb_text(), 0..3)),
    )
        .prop_map(|(text, markdown, arguments)| Message {
            text,
            markdown,
            id: None,
            arguments,
        })
}

fn arb_region() -> impl Strategy<Value = Region> {
    (
        proptest::option::of(1i64..10_000),
        proptest::option::of(1i64..200),
        proptest::option::of(-1i64..10_000),
        proptest::option::of(arb_text()),
    )
        .prop_map(|(start_line, start_column, byte_offset, snippet)| Region {
            start_line,
            start_column,
            byte_offset,
            snippet: snippet.map(|text| json!({ "text": text })),
            ..Region::default()
        })
}

fn arb_location() -> impl Strategy<Value = Location> {
    (
        proptest::option::of(arb_text()),
        proptest::option::of(arb_text()),
        proptest::option::of(arb_region()),
    )
        .prop_map(|(uri, uri_base_id, region)| Location {
            physical_location: Some(PhysicalLocation {
                artifact_location: Some(ArtifactLocation {
                    uri,
                    uri_base_id,
                    ..ArtifactLocation::default()
                }),
                region,
                ..PhysicalLocation::default()
            }),
            ..Location::default()
        })
}

fn arb_result() -> impl Strategy<Value = SarifResult> {
    (
        arb_message(),
        proptest::option::of(arb_level()),
        proptest::option::of("[a-z][a-z0-9-]{0,15}"),
        proptest::option::of(prop::collection::vec(arb_location(), 0..3)),
        proptest::option::of(arb_rank()),
        proptest::option::of(prop::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..3)),
    )
        .prop_map(|(message, level, rule_id, locations, rank, props)| {
            let mut result = SarifResult::new(message);
            result.level = level;
            result.rule_id = rule_id;
            result.locations = locations;
            result.rank = rank;
            result.properties = props.map(|m| {
                m.into_iter()
                    .map(|(k, v)| (k, json!(v)))
                    .collect::<BTreeMap<_, _>>()
            });
            result
        })
}

fn arb_rule() -> impl Strategy<Value = ReportingDescriptor> {
    (
        "[a-z][a-z0-9-]{0,15}",
        proptest::option::of(any::<bool>()),
        proptest::option::of(arb_message()),
    )
        .prop_map(|(id, enabled, short)| {
            let mut rule = ReportingDescriptor::new(id);
            rule.short_description = short;
            rule.default_configuration = enabled.map(|enabled| ReportingConfiguration {
                enabled,
                ..ReportingConfiguration::default()
            });
            rule
        })
}

fn arb_invocation() -> impl Strategy<Value = Invocation> {
    (
        any::<bool>(),
        proptest::option::of(arb_timestamp()),
        proptest::option::of(arb_timestamp()),
        proptest::option::of(prop::collection::btree_map("[A-Z_]{1,8}", arb_text(), 0..3)),
    )
        .prop_map(|(ok, start, end, env)| {
            let mut inv = Invocation::new(ok);
            inv.start_time_utc = start;
            inv.end_time_utc = end;
            inv.environment_variables = env;
            inv
        })
}

fn arb_run() -> impl Strategy<Value = Run> {
    (
        arb_text(),
        proptest::option::of(prop::collection::vec(arb_rule(), 0..3)),
        proptest::option::of(prop::collection::vec(arb_result(), 0..4)),
        proptest::option::of(prop::collection::vec(arb_invocation(), 0..2)),
        proptest::option::of(any::<u128>()),
    )
        .prop_map(|(name, rules, results, invocations, guid)| {
            let mut driver = ToolDriver::new(name);
            driver.rules = rules;
            let mut run = Run::new(Tool::new(driver));
            run.results = results;
            run.invocations = invocations;
            run.baseline_guid = guid.map(Uuid::from_u128);
            run
        })
}

fn arb_log() -> impl Strategy<Value = SarifLog> {
    (
        prop::collection::vec(arb_run(), 0..3),
        proptest::option::of(Just(
            "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        )),
    )
        .prop_map(|(runs, schema_uri)| {
            let mut log = SarifLog::new(runs);
            log.schema_uri = schema_uri;
            log
        })
}

fn contains_null(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.iter().any(contains_null),
        serde_json::Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn log_round_trips_through_json(log in arb_log()) {
        let text = serde_json::to_string(&log).expect("serialize");
        let back: SarifLog = serde_json::from_str(&text).expect("deserialize");
        prop_assert_eq!(back, log);
    }

    #[test]
    fn serialized_logs_never_contain_null(log in arb_log()) {
        let value = serde_json::to_value(&log).expect("serialize");
        prop_assert!(!contains_null(&value));
    }

    #[test]
    fn level_display_parses_back(level in arb_level()) {
        prop_assert_eq!(level.to_string().parse::<Level>(), Ok(level));
    }

    #[test]
    fn non_literal_levels_are_rejected(s in "[a-zA-Z]{1,10}") {
        let known = Level::ALL.iter().any(|l| l.as_str() == s);
        prop_assert_eq!(s.parse::<Level>().is_ok(), known);
    }
}
