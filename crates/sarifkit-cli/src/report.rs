//! Per-file validation reports, rendered as text lines or JSON objects.

use std::error::Error;

use camino::{Utf8Path, Utf8PathBuf};
use sarifkit::{JsonValue, LoadError, SarifLog};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: Utf8PathBuf,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl FileReport {
    pub fn new(path: &Utf8Path, outcome: &Result<SarifLog, LoadError>) -> Self {
        match outcome {
            Ok(log) => Self {
                path: path.to_owned(),
                ok: true,
                runs: Some(log.runs.len()),
                results: Some(log.results().count()),
                error: None,
            },
            Err(err) => Self {
                path: path.to_owned(),
                ok: false,
                runs: None,
                results: None,
                error: Some(ErrorReport::new(err)),
            },
        }
    }

    pub fn render_text(&self) -> String {
        match (&self.error, self.runs, self.results) {
            (Some(err), _, _) => format!("error {}: {}", self.path, err.message),
            (None, runs, results) => format!(
                "ok {}: {} run(s), {} result(s)",
                self.path,
                runs.unwrap_or_default(),
                results.unwrap_or_default()
            ),
        }
    }
}

impl ErrorReport {
    fn new(err: &LoadError) -> Self {
        let mut report = Self {
            kind: err.kind(),
            message: error_chain(err),
            path: None,
            field_path: None,
            expected: None,
            received: None,
            line: None,
            column: None,
        };
        match err {
            LoadError::Validation(v) => {
                report.path = Some(v.path().to_string());
                report.field_path = Some(v.field_path().to_string());
                report.expected = v.expected().map(str::to_string);
                report.received = v.received().cloned();
            }
            LoadError::Syntax(s) => {
                report.line = Some(s.line);
                report.column = Some(s.column);
            }
            LoadError::Io { .. } | LoadError::TooLarge { .. } => {}
        }
        report
    }
}

/// `outer: inner: root` rendering of an error and its sources.
fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_report_counts_runs_and_results() {
        let log = sarifkit::load_str(
            r#"{"runs":[{"tool":{"driver":{"name":"t"}},"results":[{"message":{"text":"a"}},{"message":{"text":"b"}}]}]}"#,
        );
        let report = FileReport::new(Utf8Path::new("a.sarif"), &log);
        assert_eq!(report.render_text(), "ok a.sarif: 1 run(s), 2 result(s)");

        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(
            json,
            serde_json::json!({"path": "a.sarif", "ok": true, "runs": 1, "results": 2})
        );
    }

    #[test]
    fn validation_report_carries_both_paths() {
        let outcome = sarifkit::load_str(r#"{"runs":[{"tool":{"driver":{}}}]}"#);
        let report = FileReport::new(Utf8Path::new("b.sarif"), &outcome);
        let err = report.error.as_ref().expect("error");
        assert_eq!(err.kind, "missing_field");
        assert_eq!(err.path.as_deref(), Some("runs[0].tool.driver.name"));
        assert_eq!(err.field_path.as_deref(), Some("runs[0].tool.driver.name"));
        assert_eq!(err.expected.as_deref(), Some("required field"));
        assert_eq!(
            report.render_text(),
            "error b.sarif: invalid SARIF at `runs[0].tool.driver.name`: missing required field"
        );
    }

    #[test]
    fn syntax_report_has_position() {
        let outcome = sarifkit::load_str("{\n  \"runs\": [,]\n}");
        let report = FileReport::new(Utf8Path::new("c.sarif"), &outcome);
        let err = report.error.as_ref().expect("error");
        assert_eq!(err.kind, "syntax");
        assert_eq!(err.line, Some(2));
        assert!(err.path.is_none());
    }

    #[test]
    fn io_errors_include_the_cause() {
        let outcome = sarifkit::load_path("/no/such/dir/x.sarif");
        let report = FileReport::new(Utf8Path::new("/no/such/dir/x.sarif"), &outcome);
        let err = report.error.as_ref().expect("error");
        assert_eq!(err.kind, "io");
        assert!(err.message.starts_with("failed to read /no/such/dir/x.sarif: "), "{}", err.message);
    }
}
