use sarifkit_model::{JsonValue, SarifEntity};
use serde::de::DeserializeOwned;

use crate::error::ValidationError;
use crate::shape::find_array_entity;

/// Build any model entity from an already-parsed JSON value.
///
/// Failures carry the path of the first offending field, relative to `value`.
pub fn from_value<T>(value: &JsonValue) -> Result<T, ValidationError>
where
    T: SarifEntity + DeserializeOwned,
{
    if let Some((path, entity)) = find_array_entity(value, T::KIND) {
        return Err(ValidationError::array_for_entity(T::KIND, value, path, entity));
    }
    serde_path_to_error::deserialize(value)
        .map_err(|err| ValidationError::from_path_error(T::KIND, value, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationKind;
    use sarifkit_model::{EntityKind, Invocation, Level, Region, SarifResult};
    use serde_json::json;

    #[test]
    fn builds_nested_entity_directly() {
        let result: SarifResult = from_value(&json!({
            "message": {"text": "m"},
            "level": "note",
            "ruleId": "R1"
        }))
        .expect("result");
        assert_eq!(result.level, Some(Level::Note));
        assert_eq!(result.rule_id.as_deref(), Some("R1"));
    }

    #[test]
    fn paths_are_relative_to_the_given_value() {
        let err = from_value::<Invocation>(&json!({"commandLine": "x"})).expect_err("missing");
        assert_eq!(err.kind(), ValidationKind::MissingField);
        assert_eq!(err.path().to_string(), "executionSuccessful");
        assert_eq!(err.field_path().to_string(), "execution_successful");
        assert_eq!(err.entity(), Some(EntityKind::Invocation));
    }

    #[test]
    fn wrong_root_type_is_reported_at_root() {
        let err = from_value::<Region>(&json!([1, 2])).expect_err("not an object");
        assert!(err.path().is_root());
        assert_eq!(err.kind(), ValidationKind::InvalidType);
        assert_eq!(err.entity(), Some(EntityKind::Region));
        assert_eq!(err.received(), Some(&json!([1, 2])));
    }
}

