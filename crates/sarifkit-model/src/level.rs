use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a `Result`. The wire values are case-sensitive.
///
/// Only the bare string literal is accepted on input; serde's map form for
/// unit variants (`{"error": null}`) is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None,
    Note,
    Warning,
    Error,
}

const WIRE_VALUES: &[&str] = &["none", "note", "warning", "error"];

impl Level {
    pub const ALL: [Level; 4] = [Level::None, Level::Note, Level::Warning, Level::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Note => "note",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Human-readable list of accepted wire values, e.g. `none, note, warning, error`.
    pub fn expected_values() -> String {
        Level::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `Level::from_str` for anything outside the four wire literals.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown level `{0}`, expected one of {expected}", expected = Level::expected_values())]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|_| de::Error::unknown_variant(&text, WIRE_VALUES))
    }
}
