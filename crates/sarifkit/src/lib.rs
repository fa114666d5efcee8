//! Typed SARIF 2.1.0 documents and a validating loader.
//!
//! ```no_run
//! let log = sarifkit::load("scan.sarif")?;
//! for result in log.results() {
//!     println!("{:?}: {}", result.level, result.message.text);
//! }
//! # Ok::<(), sarifkit::LoadError>(())
//! ```

#![forbid(unsafe_code)]

pub use sarifkit_loader::{
    DEFAULT_MAX_INPUT_BYTES, FieldPath, IdentifierFormat, LoadError, LoadOptions, Loader,
    PathSegment, SyntaxError, ValidationError, ValidationKind, from_value, load, load_path,
    load_slice, load_str,
};
pub use sarifkit_model::*;
