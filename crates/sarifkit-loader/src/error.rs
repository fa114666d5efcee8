//! Error taxonomy for loading.
//!
//! Every failure is exactly one of: unreadable input, oversized input,
//! malformed JSON, or a JSON document that does not describe a SARIF log.

use std::fmt;

use camino::Utf8PathBuf;
use sarifkit_model::{EntityKind, FieldKind, JsonValue, Level};
use thiserror::Error;

use crate::path::FieldPath;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is {size} bytes, above the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LoadError {
    /// Stable snake_case tag, used in machine-readable reports and fixture names.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "io",
            LoadError::TooLarge { .. } => "too_large",
            LoadError::Syntax(_) => "syntax",
            LoadError::Validation(err) => err.kind().as_str(),
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            LoadError::Validation(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            LoadError::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

/// The input is not well-formed JSON.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("malformed JSON at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl SyntaxError {
    pub(crate) fn from_json(err: &serde_json::Error) -> Self {
        // serde_json appends " at line L column C" to its own message.
        let full = err.to_string();
        let message = match full.rsplit_once(" at line ") {
            Some((head, _)) => head.to_string(),
            None => full,
        };
        Self {
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

/// Which textual identifier format failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierFormat {
    Uuid,
    Timestamp,
}

impl IdentifierFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierFormat::Uuid => "uuid",
            IdentifierFormat::Timestamp => "timestamp",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            IdentifierFormat::Uuid => "a UUID",
            IdentifierFormat::Timestamp => "an ISO 8601 timestamp",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// A required field is absent.
    MissingField,
    /// The JSON type is wrong (string where an integer belongs, and so on).
    InvalidType,
    /// Right JSON type, unacceptable value (negative index into `usize`, ...).
    InvalidValue,
    /// A `level` literal outside none/note/warning/error.
    UnknownEnumValue,
    /// A guid or timestamp string that does not parse.
    MalformedIdentifier(IdentifierFormat),
    Other,
}

impl ValidationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationKind::MissingField => "missing_field",
            ValidationKind::InvalidType => "invalid_type",
            ValidationKind::InvalidValue => "invalid_value",
            ValidationKind::UnknownEnumValue => "unknown_enum_value",
            ValidationKind::MalformedIdentifier(IdentifierFormat::Uuid) => "malformed_uuid",
            ValidationKind::MalformedIdentifier(IdentifierFormat::Timestamp) => {
                "malformed_timestamp"
            }
            ValidationKind::Other => "invalid",
        }
    }

    fn classify(message: &str, missing: bool, leaf: Option<FieldKind>) -> Self {
        if missing {
            return ValidationKind::MissingField;
        }
        if message.starts_with("invalid type:") {
            return ValidationKind::InvalidType;
        }
        match leaf {
            Some(FieldKind::Level) => ValidationKind::UnknownEnumValue,
            Some(FieldKind::Uuid) => ValidationKind::MalformedIdentifier(IdentifierFormat::Uuid),
            Some(FieldKind::Timestamp) => {
                ValidationKind::MalformedIdentifier(IdentifierFormat::Timestamp)
            }
            _ if message.starts_with("invalid value:")
                || message.starts_with("invalid length") =>
            {
                ValidationKind::InvalidValue
            }
            _ => ValidationKind::Other,
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The JSON is well-formed but does not describe a valid SARIF document.
///
/// Only the first failing field is reported.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    path: FieldPath,
    field_path: FieldPath,
    entity: Option<EntityKind>,
    kind: ValidationKind,
    expected: Option<String>,
    received: Option<JsonValue>,
    detail: String,
}

impl ValidationError {
    pub(crate) fn from_path_error(
        root: EntityKind,
        document: &JsonValue,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        let mut path = FieldPath::from_serde(err.path());
        let detail = err.into_inner().to_string();

        let missing = missing_field_name(&detail).map(str::to_string);
        if let Some(name) = &missing {
            path.push_key(name.as_str());
        }

        let kind = ValidationKind::classify(
            &detail,
            missing.is_some(),
            path.resolve(root).leaf.map(|field| field.kind),
        );
        Self::new(root, document, path, kind, detail)
    }

    /// An entity position holding a JSON array instead of an object.
    pub(crate) fn array_for_entity(
        root: EntityKind,
        document: &JsonValue,
        path: FieldPath,
        entity: EntityKind,
    ) -> Self {
        let detail = format!("invalid type: sequence, expected {entity} object");
        Self::new(root, document, path, ValidationKind::InvalidType, detail)
    }

    fn new(
        root: EntityKind,
        document: &JsonValue,
        path: FieldPath,
        kind: ValidationKind,
        detail: String,
    ) -> Self {
        let resolved = path.resolve(root);
        let received = match kind {
            ValidationKind::MissingField => None,
            _ => path.lookup(document).cloned(),
        };
        let entity = match resolved.owner {
            Some(owner) => Some(owner),
            None if path.is_root() => Some(root),
            None => None,
        };

        Self {
            expected: expected_for(kind, &detail),
            entity,
            field_path: resolved.field_path,
            path,
            kind,
            received,
            detail,
        }
    }

    /// Location of the failure, spelled with SARIF wire keys.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// The same location spelled with internal (snake_case) field names.
    pub fn field_path(&self) -> &FieldPath {
        &self.field_path
    }

    /// Entity that owns the failing field, when the path reaches a known field.
    pub fn entity(&self) -> Option<EntityKind> {
        self.entity
    }

    pub fn kind(&self) -> ValidationKind {
        self.kind
    }

    /// Short description of what was acceptable at the failing location.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// The offending JSON value. `None` when the field was absent.
    pub fn received(&self) -> Option<&JsonValue> {
        self.received.as_ref()
    }

    /// Raw message from the deserializer, kept for debugging.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            f.write_str("invalid SARIF at document root: ")?;
        } else {
            write!(f, "invalid SARIF at `{}`: ", self.path)?;
        }

        let received = self
            .received
            .as_ref()
            .map(|value| value.to_string())
            .unwrap_or_default();
        match self.kind {
            ValidationKind::MissingField => f.write_str("missing required field"),
            ValidationKind::UnknownEnumValue => write!(
                f,
                "expected one of {}, found {received}",
                Level::expected_values()
            ),
            ValidationKind::MalformedIdentifier(format) => {
                write!(f, "expected {}, found {received}", format.describe())
            }
            _ => f.write_str(&self.detail),
        }
    }
}

impl std::error::Error for ValidationError {}

fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
}

fn expected_for(kind: ValidationKind, detail: &str) -> Option<String> {
    match kind {
        ValidationKind::MissingField => Some("required field".to_string()),
        ValidationKind::UnknownEnumValue => Some(format!("one of {}", Level::expected_values())),
        ValidationKind::MalformedIdentifier(IdentifierFormat::Uuid) => Some("UUID".to_string()),
        ValidationKind::MalformedIdentifier(IdentifierFormat::Timestamp) => {
            Some("ISO 8601 timestamp".to_string())
        }
        _ => detail
            .split_once(", expected ")
            .map(|(_, expected)| expected.to_string()),
    }
}
