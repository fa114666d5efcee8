//! Fuzz target for typed construction from structured JSON.
//!
//! Goal: `from_value` should **never panic**, and every error path it
//! reports must address a real location in the input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_from_value
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sarifkit_loader::{ValidationError, ValidationKind, from_value};
use sarifkit_model::{EntityKind, Invocation, Location, SarifLog, SarifResult};
use serde_json::{Map, Number, Value};

/// JSON tree whose object keys are biased towards real SARIF wire names,
/// so the fuzzer reaches nested entities quickly.
#[derive(Arbitrary, Debug)]
enum Json {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Json>),
    Object(Vec<(Key, Json)>),
}

#[derive(Arbitrary, Debug)]
enum Key {
    Wire(u16),
    Other(String),
}

fn wire_keys() -> Vec<&'static str> {
    EntityKind::ALL
        .iter()
        .flat_map(|kind| kind.fields().iter().map(|field| field.wire))
        .collect()
}

fn to_value(json: Json, keys: &[&'static str], depth: usize) -> Value {
    if depth > 12 {
        return Value::Null;
    }
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Int(i) => Value::Number(i.into()),
        Json::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        Json::Str(s) => Value::String(s),
        Json::Array(items) => Value::Array(
            items
                .into_iter()
                .take(16)
                .map(|item| to_value(item, keys, depth + 1))
                .collect(),
        ),
        Json::Object(members) => {
            let mut map = Map::new();
            for (key, value) in members.into_iter().take(16) {
                let key = match key {
                    Key::Wire(i) => keys[usize::from(i) % keys.len()].to_string(),
                    Key::Other(s) => s,
                };
                map.insert(key, to_value(value, keys, depth + 1));
            }
            Value::Object(map)
        }
    }
}

fn check_error(err: &ValidationError, input: &Value) {
    if err.kind() != ValidationKind::MissingField {
        assert!(
            err.path().lookup(input).is_some(),
            "error path {} does not exist in input",
            err.path()
        );
    }
    let _ = err.to_string();
}

fuzz_target!(|json: Json| {
    let keys = wire_keys();
    let value = to_value(json, &keys, 0);

    if let Err(err) = from_value::<SarifLog>(&value) {
        check_error(&err, &value);
    }
    if let Err(err) = from_value::<SarifResult>(&value) {
        check_error(&err, &value);
    }
    if let Err(err) = from_value::<Location>(&value) {
        check_error(&err, &value);
    }
    if let Err(err) = from_value::<Invocation>(&value) {
        check_error(&err, &value);
    }
});
