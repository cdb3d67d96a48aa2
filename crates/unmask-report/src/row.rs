/// Flat per-file row, the shape shared by the CSV and JSON exporters.
///
/// Absent extensions are written as the `none` / `unknown` sentinels so the
/// columns are never empty.
use serde::Serialize;
use unmask_core::{FileVerdict, Status};

#[derive(Debug, Serialize)]
pub struct ReportRow<'a> {
    pub name: &'a str,
    pub path: String,
    pub declared_extension: &'a str,
    pub detected_extension: &'static str,
    pub media_type: Option<&'static str>,
    pub status: Status,
    pub size_bytes: u64,
    pub created_at: &'a str,
    pub modified_at: &'a str,
    pub hash_md5: &'a str,
    pub hash_sha256: &'a str,
}

impl<'a> From<&'a FileVerdict> for ReportRow<'a> {
    fn from(v: &'a FileVerdict) -> Self {
        Self {
            name: &v.name,
            path: v.path.to_string_lossy().into_owned(),
            declared_extension: v.declared_label(),
            detected_extension: v.detected_label(),
            media_type: v.detected_mime(),
            status: v.status,
            size_bytes: v.metadata.size_bytes,
            created_at: &v.metadata.created_at,
            modified_at: &v.metadata.modified_at,
            hash_md5: &v.metadata.hash_md5,
            hash_sha256: &v.metadata.hash_sha256,
        }
    }
}
