/// Content sniffing — match a file's leading bytes against the signature table.
///
/// Only the first [`SNIFF_LEN`] bytes are read. That covers every fixed-offset
/// signature (the deepest is `tar` at offset 257) and leaves room for the
/// container markers searched by the refinement step.
use super::signatures::{FileKind, DOCX, MKV, PPTX, SIGNATURES, WEBM, XLSX, ZIP};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected per file.
pub const SNIFF_LEN: usize = 8192;

/// Detect the kind of `buf`, or `None` when nothing matches.
///
/// An empty buffer never matches.
pub fn sniff_bytes(buf: &[u8]) -> Option<FileKind> {
    let kind = SIGNATURES.iter().find(|sig| sig.matches(buf))?.kind;
    Some(refine(kind, buf))
}

/// Read the prefix of `path` and sniff it.
pub fn sniff_file(path: &Path) -> io::Result<Option<FileKind>> {
    let prefix = read_prefix(File::open(path)?)?;
    Ok(sniff_bytes(&prefix))
}

/// Read up to [`SNIFF_LEN`] bytes from `reader`. Shorter input is returned
/// as is.
pub fn read_prefix<R: Read>(reader: R) -> io::Result<Vec<u8>> {
    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    reader.take(SNIFF_LEN as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}

/// Generic containers carry the real format inside; look for it.
fn refine(kind: FileKind, buf: &[u8]) -> FileKind {
    if kind == ZIP {
        refine_zip(buf).unwrap_or(kind)
    } else if kind == MKV && contains(buf, b"webm") {
        WEBM
    } else {
        kind
    }
}

/// Office Open XML packages are plain ZIPs whose part names give them away.
fn refine_zip(buf: &[u8]) -> Option<FileKind> {
    if !contains(buf, b"[Content_Types].xml") && !contains(buf, b"_rels/.rels") {
        return None;
    }
    if contains(buf, b"word/") {
        Some(DOCX)
    } else if contains(buf, b"xl/") {
        Some(XLSX)
    } else if contains(buf, b"ppt/") {
        Some(PPTX)
    } else {
        None
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
