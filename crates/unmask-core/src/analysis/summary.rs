/// Post-scan totals for the report header.
use crate::model::{ScanResult, Status};
use serde::Serialize;

/// Per-status counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Files that produced a verdict.
    pub total: usize,
    pub normal: usize,
    pub masquerading: usize,
    pub unrecognized: usize,
    /// Files that could not be read and were skipped.
    pub failed: usize,
}

impl ScanSummary {
    /// Count verdicts by status in a single pass.
    pub fn from_result(result: &ScanResult) -> Self {
        let mut summary = Self {
            failed: result.errors.len(),
            ..Self::default()
        };
        for verdict in result {
            summary.total += 1;
            match verdict.status {
                Status::Normal => summary.normal += 1,
                Status::Masquerading => summary.masquerading += 1,
                Status::Unrecognized => summary.unrecognized += 1,
            }
        }
        summary
    }

    /// True when at least one file was flagged.
    pub fn has_findings(&self) -> bool {
        self.masquerading + self.unrecognized > 0
    }
}
