/// CSV export — one row per file with every metadata field.
use crate::error::ReportError;
use crate::row::ReportRow;
use unmask_core::ScanResult;

/// Render `result` as CSV with a header row.
///
/// An empty result still produces the header.
pub fn render_csv(result: &ScanResult) -> Result<String, ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for verdict in result {
        writer.serialize(ReportRow::from(verdict))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Column names, in `ReportRow` field order.
const HEADER: [&str; 11] = [
    "name",
    "path",
    "declared_extension",
    "detected_extension",
    "media_type",
    "status",
    "size_bytes",
    "created_at",
    "modified_at",
    "hash_md5",
    "hash_sha256",
];
