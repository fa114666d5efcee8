//! Object-shape check run before typed construction.
//!
//! Derived struct deserializers also accept a JSON array as a positional
//! encoding of the fields. SARIF entities are always JSON objects, so any
//! entity position holding an array is rejected up front.

use sarifkit_model::{EntityKind, FieldKind, JsonValue};

use crate::path::FieldPath;

/// First entity position (in alias-table order) whose value is an array.
pub(crate) fn find_array_entity(
    value: &JsonValue,
    kind: EntityKind,
) -> Option<(FieldPath, EntityKind)> {
    walk(value, kind, &FieldPath::root())
}

fn walk(value: &JsonValue, kind: EntityKind, path: &FieldPath) -> Option<(FieldPath, EntityKind)> {
    let map = match value {
        JsonValue::Array(_) => return Some((path.clone(), kind)),
        JsonValue::Object(map) => map,
        _ => return None,
    };

    for field in kind.fields() {
        let Some(child) = map.get(field.wire) else {
            continue;
        };
        match field.kind {
            FieldKind::Entity(nested) => {
                let child_path = path.clone().key(field.wire);
                if let Some(hit) = walk(child, nested, &child_path) {
                    return Some(hit);
                }
            }
            FieldKind::EntityList(nested) => {
                let JsonValue::Array(items) = child else {
                    continue;
                };
                for (index, item) in items.iter().enumerate() {
                    let child_path = path.clone().key(field.wire).index(index);
                    if let Some(hit) = walk(item, nested, &child_path) {
                        return Some(hit);
                    }
                }
            }
            _ => {}
        }
    }
    None
}
