//! Validated loading of SARIF JSON into the typed document model.
//!
//! Loading is all-or-nothing and happens in two phases:
//! 1. parse the bytes as generic JSON (failure: [`LoadError::Syntax`])
//! 2. construct the `SarifLog` tree from that value, tracking the wire path
//!    of the first field that fails (failure: [`LoadError::Validation`])
//!
//! Only [`load_path`] touches the filesystem.

#![forbid(unsafe_code)]

mod construct;
mod error;
mod loader;
mod options;
mod path;
mod shape;

pub use construct::from_value;
pub use error::{IdentifierFormat, LoadError, SyntaxError, ValidationError, ValidationKind};
pub use loader::Loader;
pub use options::{DEFAULT_MAX_INPUT_BYTES, LoadOptions};
pub use path::{FieldPath, PathSegment};

use camino::Utf8Path;
use sarifkit_model::SarifLog;

/// Load a SARIF document from JSON text with default options.
pub fn load_str(text: &str) -> Result<SarifLog, LoadError> {
    Loader::default().load_str(text)
}

/// Load a SARIF document from raw bytes (UTF-8, optional BOM) with default options.
pub fn load_slice(bytes: &[u8]) -> Result<SarifLog, LoadError> {
    Loader::default().load_slice(bytes)
}

/// Read and load a SARIF file with default options.
pub fn load_path(path: impl AsRef<Utf8Path>) -> Result<SarifLog, LoadError> {
    Loader::default().load_path(path)
}

/// Convenience alias for [`load_path`].
pub fn load(path: impl AsRef<Utf8Path>) -> Result<SarifLog, LoadError> {
    load_path(path)
}
