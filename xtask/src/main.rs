//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use sarifkit::SarifLog;
use sarifkit_test_util::{expected_kind, fixtures_dir, list_fixtures_in};
use schemars::schema_for;
use std::fs;

const SCHEMA_FILE: &str = "sarif-log.schema.json";

/// Workspace root (parent of the xtask directory).
fn project_root() -> Utf8PathBuf {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn schemas_dir() -> Utf8PathBuf {
    project_root().join("schemas")
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schema() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    let json = serialize_schema(&schema_for!(SarifLog))?;
    let path = dir.join(SCHEMA_FILE);
    fs::write(&path, &json).with_context(|| format!("Failed to write schema to {path}"))?;

    println!("Wrote {path}");
    Ok(())
}

/// Fail if `schemas/` differs from what `emit-schema` would write.
fn validate_schema() -> anyhow::Result<()> {
    let path = schemas_dir().join(SCHEMA_FILE);
    let expected = serialize_schema(&schema_for!(SarifLog))?;
    let actual = fs::read_to_string(&path).with_context(|| {
        format!("Failed to read {path}\n\nRun `cargo xtask emit-schema` to generate it.")
    })?;

    if expected != actual {
        bail!("{path} is out of date\n\nRun `cargo xtask emit-schema` to regenerate.");
    }
    println!("Schema is up to date.");
    Ok(())
}

/// Check the fixture corpus against the loader and the generated schema.
///
/// 1. every `valid/*.sarif` loads, and validates against the SarifLog schema
/// 2. every `invalid/*.sarif` fails with the error kind named by its stem prefix
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(schema_for!(SarifLog)).context("Failed to serialize schema")?;
    let compiled = jsonschema::draft202012::new(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let root = fixtures_dir();
    let valid = list_fixtures_in(&root.join("valid"));
    let invalid = list_fixtures_in(&root.join("invalid"));
    if valid.is_empty() || invalid.is_empty() {
        bail!("No fixtures found under {root}/{{valid,invalid}}");
    }

    let mut errors = Vec::new();

    for path in &valid {
        let name = path.file_name().unwrap_or_default();
        if let Err(err) = sarifkit::load_path(path) {
            errors.push(format!("{name}: expected to load, got {err}"));
            continue;
        }

        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        let value: serde_json::Value =
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {name}"))?;
        for err in compiled.iter_errors(&value) {
            errors.push(format!("{name}: schema validation: {err}"));
        }
        println!("  ✓ valid/{name}");
    }

    for path in &invalid {
        let name = path.file_name().unwrap_or_default();
        let Some(want) = expected_kind(path) else {
            errors.push(format!("{name}: file stem has no `<kind>--` prefix"));
            continue;
        };
        match sarifkit::load_path(path) {
            Ok(_) => errors.push(format!("{name}: expected {want}, but it loaded")),
            Err(err) if err.kind() != want => {
                errors.push(format!("{name}: expected {want}, got {}: {err}", err.kind()))
            }
            Err(_) => println!("  ✓ invalid/{name} ({want})"),
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance failed with {} errors", errors.len());
    }

    println!(
        "\n✓ All {} fixtures conform ({} valid, {} invalid)",
        valid.len() + invalid.len(),
        valid.len(),
        invalid.len()
    );
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help             Show this message");
    eprintln!("  emit-schema      Generate schemas/{SCHEMA_FILE} from the SarifLog model");
    eprintln!("  validate-schema  Check that schemas/ matches generated output (for CI)");
    eprintln!("  conform          Check tests/fixtures against the loader and the schema");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schema" => emit_schema(),
        "validate-schema" => validate_schema(),
        "conform" => conform(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
