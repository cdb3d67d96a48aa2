/// JSON export — summary, files, and skipped files in one document.
use crate::error::ReportError;
use crate::row::ReportRow;
use chrono::{DateTime, Local};
use serde::Serialize;
use unmask_core::analysis::ScanSummary;
use unmask_core::model::FileError;
use unmask_core::probe::TIMESTAMP_FORMAT;
use unmask_core::ScanResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    summary: ScanSummary,
    files: Vec<ReportRow<'a>>,
    errors: &'a [FileError],
}

/// Render `result` as pretty-printed JSON.
pub fn render_json(result: &ScanResult, generated_at: DateTime<Local>) -> Result<String, ReportError> {
    let report = JsonReport {
        generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        summary: ScanSummary::from_result(result),
        files: result.iter().map(ReportRow::from).collect(),
        errors: &result.errors,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tests::sample_result;
    use serde_json::Value;

    #[test]
    fn document_carries_summary_and_rows() {
        let json = render_json(&sample_result(), Local::now()).unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(doc["summary"]["total"], 3);
        assert_eq!(doc["summary"]["masquerading"], 1);
        assert_eq!(doc["summary"]["unrecognized"], 1);
        assert_eq!(doc["summary"]["failed"], 1);

        let files = doc["files"].as_array().unwrap();
        assert_eq!(files.len(), 3);
        assert_eq!(files[1]["name"], "photo.jpg");
        assert_eq!(files[1]["detected_extension"], "png");
        assert_eq!(files[1]["status"], "Masquerading");
        assert_eq!(files[2]["declared_extension"], "none");
        assert_eq!(files[2]["media_type"], Value::Null);

        assert_eq!(doc["errors"][0]["message"], "permission denied");
    }
}
