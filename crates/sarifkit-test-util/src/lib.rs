//! Shared fixture helpers for the sarifkit workspace.
//!
//! Lives in its own crate because `xtask conform` walks the same fixture
//! corpus at runtime, outside of `#[cfg(test)]`.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};

/// Separates the expected error tag from the description in invalid fixture names,
/// e.g. `missing_field--no-runs.sarif`.
pub const KIND_SEPARATOR: &str = "--";

/// `tests/fixtures` at the workspace root.
pub fn fixtures_dir() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures")
}

/// Every `*.sarif` file under `tests/fixtures/<group>`, sorted by name.
pub fn list_fixtures(group: &str) -> Vec<Utf8PathBuf> {
    list_fixtures_in(&fixtures_dir().join(group))
}

/// Every `*.sarif` file directly inside `dir`, sorted by name. Missing dirs yield nothing.
pub fn list_fixtures_in(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let Ok(entries) = dir.read_dir_utf8() else {
        return Vec::new();
    };
    let mut out: Vec<Utf8PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.into_path())
        .filter(|path| path.extension() == Some("sarif"))
        .collect();
    out.sort();
    out
}

/// Error tag encoded in an invalid fixture's file stem.
pub fn expected_kind(path: &Utf8Path) -> Option<&str> {
    path.file_stem()?
        .split_once(KIND_SEPARATOR)
        .map(|(kind, _)| kind)
}

pub fn read_fixture(rel: &str) -> String {
    let path = fixtures_dir().join(rel);
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("read fixture {path}: {err}"))
}

/// Drop `null` members from objects at any depth.
///
/// Serialized models never emit `null`, so inputs are pruned before being
/// compared with a re-serialized log.
pub fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                prune_nulls(v);
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                prune_nulls(v);
            }
        }
        _ => {}
    }
}

/// Smallest valid log with one run, one rule-less result and no locations.
pub fn minimal_log() -> Value {
    json!({
        "version": "2.1.0",
        "runs": [{
            "tool": { "driver": { "name": "demo" } },
            "results": [{ "message": { "text": "hello" } }]
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_kind_reads_stem_prefix() {
        let path = Utf8Path::new("invalid/missing_field--no-runs.sarif");
        assert_eq!(expected_kind(path), Some("missing_field"));
        assert_eq!(expected_kind(Utf8Path::new("valid/minimal.sarif")), None);
    }

    #[test]
    fn prune_nulls_recurses() {
        let mut value = json!({
            "a": null,
            "b": [{ "c": null, "d": 1 }],
            "e": { "f": null }
        });
        prune_nulls(&mut value);
        assert_eq!(value, json!({ "b": [{ "d": 1 }], "e": {} }));
    }

    #[test]
    fn fixture_groups_are_populated() {
        assert!(!list_fixtures("valid").is_empty());
        assert!(!list_fixtures("invalid").is_empty());
        assert!(list_fixtures("no-such-group").is_empty());
    }
}
