/// Terminal rendering of a scan report.
///
/// Layout, top to bottom: title, totals, a table with one row per file,
/// a metadata block for every flagged file, and a list of files that could
/// not be read (omitted when there are none).
use chrono::{DateTime, Local};
use std::fmt::Write;
use unmask_core::analysis::ScanSummary;
use unmask_core::model::size::format_size;
use unmask_core::probe::TIMESTAMP_FORMAT;
use unmask_core::{FileVerdict, ScanResult};

const TITLE: &str = "File Disguise Detection Report";
const COLUMNS: [&str; 4] = ["File name", "Declared", "Detected", "Status"];

/// Render `result` as plain text.
pub fn render_text(result: &ScanResult, generated_at: DateTime<Local>) -> String {
    let summary = ScanSummary::from_result(result);
    let mut out = String::with_capacity(256 + result.len() * 64);

    // `write!` into a String cannot fail.
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));
    let _ = writeln!(out, "Generated: {}", generated_at.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out);
    let _ = writeln!(out, "Total files examined: {}", summary.total);
    let _ = writeln!(out, "Masquerading files:   {}", summary.masquerading);
    let _ = writeln!(out, "Unrecognized files:   {}", summary.unrecognized);
    if summary.failed > 0 {
        let _ = writeln!(out, "Unreadable files:     {}", summary.failed);
    }
    let _ = writeln!(out);

    write_table(&mut out, result);

    if summary.has_findings() {
        let heading = "Details of masquerading / unrecognized files";
        let _ = writeln!(out);
        let _ = writeln!(out, "{heading}");
        let _ = writeln!(out, "{}", "-".repeat(heading.len()));
        for verdict in result.flagged() {
            write_details(&mut out, verdict);
        }
    }

    if !result.errors.is_empty() {
        let heading = "Files that could not be read";
        let _ = writeln!(out);
        let _ = writeln!(out, "{heading}");
        let _ = writeln!(out, "{}", "-".repeat(heading.len()));
        for err in &result.errors {
            let _ = writeln!(out, "{}: {}", err.path.display(), err.message);
        }
    }

    out
}

fn write_table(out: &mut String, result: &ScanResult) {
    let rows: Vec<[&str; 4]> = result
        .iter()
        .map(|v| [v.name.as_str(), v.declared_label(), v.detected_label(), v.status.label()])
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    write_row(out, &COLUMNS, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

fn write_details(out: &mut String, v: &FileVerdict) {
    let meta = &v.metadata;
    let _ = writeln!(out);
    let _ = writeln!(out, "{} [{}]", v.name, v.status);
    let _ = writeln!(out, "  Path:       {}", v.path.display());
    if let Some(mime) = v.detected_mime() {
        let _ = writeln!(out, "  Media type: {mime}");
    }
    let _ = writeln!(
        out,
        "  Size:       {} ({} bytes)",
        format_size(meta.size_bytes),
        meta.size_bytes
    );
    let _ = writeln!(out, "  Created:    {}", meta.created_at);
    let _ = writeln!(out, "  Modified:   {}", meta.modified_at);
    let _ = writeln!(out, "  MD5:        {}", meta.hash_md5);
    let _ = writeln!(out, "  SHA-256:    {}", meta.hash_sha256);
}
