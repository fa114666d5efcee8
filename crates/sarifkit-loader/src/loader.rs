use camino::Utf8Path;
use sarifkit_model::{JsonValue, SarifLog};
use tracing::debug;

use crate::construct::from_value;
use crate::error::{LoadError, SyntaxError};
use crate::options::LoadOptions;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads SARIF documents under a fixed set of [`LoadOptions`].
#[derive(Clone, Debug, Default)]
pub struct Loader {
    options: LoadOptions,
}

impl Loader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn load_str(&self, text: &str) -> Result<SarifLog, LoadError> {
        self.load_slice(text.as_bytes())
    }

    /// Parse and validate raw bytes. A leading UTF-8 byte order mark is skipped.
    pub fn load_slice(&self, bytes: &[u8]) -> Result<SarifLog, LoadError> {
        self.check_size(bytes.len() as u64)?;
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        debug!(bytes = bytes.len(), "parsing SARIF JSON");
        let value: JsonValue =
            serde_json::from_slice(bytes).map_err(|err| SyntaxError::from_json(&err))?;

        let log: SarifLog = from_value(&value).inspect_err(|err| {
            debug!(path = %err.path(), kind = %err.kind(), "SARIF validation failed");
        })?;

        debug!(
            version = %log.version,
            runs = log.runs.len(),
            results = log.results().count(),
            "loaded SARIF log"
        );
        Ok(log)
    }

    /// Read a file and load it. The size limit is checked against file
    /// metadata before any bytes are read.
    pub fn load_path(&self, path: impl AsRef<Utf8Path>) -> Result<SarifLog, LoadError> {
        let path = path.as_ref();
        let io = |source: std::io::Error| LoadError::Io {
            path: path.to_owned(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io)?.len();
        self.check_size(size)?;

        debug!(%path, size, "reading SARIF file");
        let bytes = std::fs::read(path).map_err(io)?;
        self.load_slice(&bytes)
    }

    fn check_size(&self, size: u64) -> Result<(), LoadError> {
        let limit = self.options.max_input_bytes;
        if size > limit {
            return Err(LoadError::TooLarge { size, limit });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limit_is_inclusive() {
        let text = r#"{"runs":[]}"#;
        let exact = Loader::new(LoadOptions::default().with_max_input_bytes(text.len() as u64));
        assert!(exact.load_str(text).is_ok());

        let short = Loader::new(LoadOptions::default().with_max_input_bytes(text.len() as u64 - 1));
        assert!(matches!(
            short.load_str(text),
            Err(LoadError::TooLarge { size: 11, limit: 10 })
        ));
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(br#"{"runs":[]}"#);
        let log = Loader::default().load_slice(&bytes).expect("bom-prefixed log");
        assert!(log.runs.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Loader::default()
            .load_path("/definitely/not/here.sarif")
            .expect_err("missing file");
        assert_eq!(err.kind(), "io");
        assert!(err.to_string().contains("/definitely/not/here.sarif"));
    }
}
