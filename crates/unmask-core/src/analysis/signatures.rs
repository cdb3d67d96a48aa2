/// Static magic-byte table.
///
/// Each [`Signature`] is a set of byte patterns at fixed offsets; every part
/// must match. The table is ordered and the first match wins, so the more
/// specific entries (e.g. `ftyp` brands, ZIP `mimetype` markers) come before
/// the generic ones they share a prefix with.
use serde::Serialize;

/// A detectable content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FileKind {
    /// Canonical extension, lowercase, no dot.
    pub extension: &'static str,
    /// IANA media type.
    pub mime: &'static str,
    /// Other extensions that legitimately carry this content. Only consulted
    /// when a scan opts into accepting aliases.
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

impl FileKind {
    const fn new(extension: &'static str, mime: &'static str) -> Self {
        Self {
            extension,
            mime,
            aliases: &[],
        }
    }

    const fn aka(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Case-insensitive check of `ext` against the canonical extension.
    pub fn matches_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case(self.extension)
    }

    /// Like [`matches_extension`](Self::matches_extension), but also accepts
    /// any alias.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.matches_extension(ext) || self.aliases.iter().any(|a| ext.eq_ignore_ascii_case(a))
    }
}

// ── Kinds ────────────────────────────────────────────────────────────────────

// Images
pub const PNG: FileKind = FileKind::new("png", "image/png");
pub const JPG: FileKind = FileKind::new("jpg", "image/jpeg").aka(&["jpeg", "jpe", "jfif"]);
pub const GIF: FileKind = FileKind::new("gif", "image/gif");
pub const WEBP: FileKind = FileKind::new("webp", "image/webp");
pub const TIF: FileKind = FileKind::new("tif", "image/tiff").aka(&["tiff"]);
pub const BMP: FileKind = FileKind::new("bmp", "image/bmp").aka(&["dib"]);
pub const ICO: FileKind = FileKind::new("ico", "image/x-icon");
pub const PSD: FileKind = FileKind::new("psd", "image/vnd.adobe.photoshop");
pub const HEIC: FileKind = FileKind::new("heic", "image/heic").aka(&["heif"]);

// Documents
pub const PDF: FileKind = FileKind::new("pdf", "application/pdf");
pub const RTF: FileKind = FileKind::new("rtf", "application/rtf");
pub const EPUB: FileKind = FileKind::new("epub", "application/epub+zip");
pub const ODT: FileKind = FileKind::new("odt", "application/vnd.oasis.opendocument.text");
pub const ODS: FileKind = FileKind::new("ods", "application/vnd.oasis.opendocument.spreadsheet");
pub const ODP: FileKind = FileKind::new("odp", "application/vnd.oasis.opendocument.presentation");
pub const DOCX: FileKind = FileKind::new(
    "docx",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
);
pub const XLSX: FileKind = FileKind::new(
    "xlsx",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
);
pub const PPTX: FileKind = FileKind::new(
    "pptx",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
);

// Archives
pub const ZIP: FileKind = FileKind::new("zip", "application/zip").aka(&["jar", "apk", "xpi"]);
pub const RAR: FileKind = FileKind::new("rar", "application/vnd.rar");
pub const SEVEN_Z: FileKind = FileKind::new("7z", "application/x-7z-compressed");
pub const GZ: FileKind = FileKind::new("gz", "application/gzip").aka(&["tgz"]);
pub const BZ2: FileKind = FileKind::new("bz2", "application/x-bzip2").aka(&["tbz2"]);
pub const XZ: FileKind = FileKind::new("xz", "application/x-xz").aka(&["txz"]);
pub const ZST: FileKind = FileKind::new("zst", "application/zstd");
pub const TAR: FileKind = FileKind::new("tar", "application/x-tar");

// Executables and binaries
pub const EXE: FileKind = FileKind::new("exe", "application/vnd.microsoft.portable-executable")
    .aka(&["dll", "sys", "scr"]);
pub const ELF: FileKind = FileKind::new("elf", "application/x-executable").aka(&["so", "o"]);
pub const WASM: FileKind = FileKind::new("wasm", "application/wasm");
pub const SQLITE: FileKind =
    FileKind::new("sqlite", "application/vnd.sqlite3").aka(&["db", "sqlite3", "db3"]);

// Audio / video
pub const MP3: FileKind = FileKind::new("mp3", "audio/mpeg");
pub const FLAC: FileKind = FileKind::new("flac", "audio/x-flac");
pub const OGG: FileKind = FileKind::new("ogg", "audio/ogg").aka(&["oga", "ogv", "opus"]);
pub const WAV: FileKind = FileKind::new("wav", "audio/x-wav");
pub const AVI: FileKind = FileKind::new("avi", "video/x-msvideo");
pub const M4A: FileKind = FileKind::new("m4a", "audio/mp4");
pub const MOV: FileKind = FileKind::new("mov", "video/quicktime");
pub const MP4: FileKind = FileKind::new("mp4", "video/mp4").aka(&["m4v"]);
pub const MKV: FileKind = FileKind::new("mkv", "video/x-matroska");
pub const WEBM: FileKind = FileKind::new("webm", "video/webm");

// Fonts
pub const WOFF: FileKind = FileKind::new("woff", "font/woff");
pub const WOFF2: FileKind = FileKind::new("woff2", "font/woff2");

/// Every kind the sniffer can return, including the ones produced only by
/// container refinement (OOXML, WebM).
pub static KINDS: &[FileKind] = &[
    PNG, JPG, GIF, WEBP, TIF, BMP, ICO, PSD, HEIC, PDF, RTF, EPUB, ODT, ODS, ODP, DOCX, XLSX,
    PPTX, ZIP, RAR, SEVEN_Z, GZ, BZ2, XZ, ZST, TAR, EXE, ELF, WASM, SQLITE, MP3, FLAC, OGG, WAV,
    AVI, M4A, MOV, MP4, MKV, WEBM, WOFF, WOFF2,
];

/// Look up a kind by its canonical extension.
pub fn kind_for_extension(ext: &str) -> Option<FileKind> {
    KINDS
        .iter()
        .find(|k| k.extension.eq_ignore_ascii_case(ext))
        .copied()
}

// ── Signatures ───────────────────────────────────────────────────────────────

/// One table entry: all `(offset, bytes)` parts must match.
#[derive(Debug)]
pub struct Signature {
    pub kind: FileKind,
    pub parts: &'static [(usize, &'static [u8])],
}

impl Signature {
    /// True when every part is present in `buf` at its offset.
    pub fn matches(&self, buf: &[u8]) -> bool {
        !self.parts.is_empty()
            && self
                .parts
                .iter()
                .all(|&(offset, magic)| buf.get(offset..offset + magic.len()) == Some(magic))
    }
}

const ZIP_LOCAL: &[u8] = b"PK\x03\x04";
const RIFF: &[u8] = b"RIFF";
const FTYP: &[u8] = b"ftyp";

macro_rules! sig {
    ($kind:expr, $( ($off:expr, $magic:expr) ),+ $(,)?) => {
        Signature { kind: $kind, parts: &[ $( ($off, $magic as &[u8]) ),+ ] }
    };
}

/// Ordered signature table. First match wins.
pub static SIGNATURES: &[Signature] = &[
    // Images
    sig!(PNG, (0, b"\x89PNG\r\n\x1a\n")),
    sig!(JPG, (0, b"\xFF\xD8\xFF")),
    sig!(GIF, (0, b"GIF87a")),
    sig!(GIF, (0, b"GIF89a")),
    sig!(WEBP, (0, RIFF), (8, b"WEBP")),
    sig!(TIF, (0, b"II*\x00")),
    sig!(TIF, (0, b"MM\x00*")),
    sig!(PSD, (0, b"8BPS")),
    sig!(HEIC, (4, FTYP), (8, b"heic")),
    sig!(HEIC, (4, FTYP), (8, b"heix")),
    sig!(HEIC, (4, FTYP), (8, b"mif1")),
    // Documents
    sig!(PDF, (0, b"%PDF")),
    sig!(RTF, (0, b"{\\rtf")),
    // ZIP containers that announce themselves with a stored `mimetype` entry
    sig!(EPUB, (0, ZIP_LOCAL), (30, b"mimetypeapplication/epub+zip")),
    sig!(ODT, (0, ZIP_LOCAL), (30, b"mimetypeapplication/vnd.oasis.opendocument.text")),
    sig!(ODS, (0, ZIP_LOCAL), (30, b"mimetypeapplication/vnd.oasis.opendocument.spreadsheet")),
    sig!(ODP, (0, ZIP_LOCAL), (30, b"mimetypeapplication/vnd.oasis.opendocument.presentation")),
    // Archives
    sig!(ZIP, (0, ZIP_LOCAL)),
    sig!(ZIP, (0, b"PK\x05\x06")),
    sig!(ZIP, (0, b"PK\x07\x08")),
    sig!(RAR, (0, b"Rar!\x1A\x07")),
    sig!(SEVEN_Z, (0, b"7z\xBC\xAF\x27\x1C")),
    sig!(GZ, (0, b"\x1F\x8B")),
    sig!(BZ2, (0, b"BZh")),
    sig!(XZ, (0, b"\xFD7zXZ\x00")),
    sig!(ZST, (0, b"\x28\xB5\x2F\xFD")),
    sig!(TAR, (257, b"ustar")),
    // Executables and binaries
    sig!(ELF, (0, b"\x7FELF")),
    sig!(WASM, (0, b"\x00asm")),
    sig!(SQLITE, (0, b"SQLite format 3\x00")),
    // Audio / video
    sig!(FLAC, (0, b"fLaC")),
    sig!(OGG, (0, b"OggS")),
    sig!(WAV, (0, RIFF), (8, b"WAVE")),
    sig!(AVI, (0, RIFF), (8, b"AVI ")),
    sig!(M4A, (4, FTYP), (8, b"M4A ")),
    sig!(MOV, (4, FTYP), (8, b"qt  ")),
    sig!(MP4, (4, FTYP)),
    sig!(MKV, (0, b"\x1A\x45\xDF\xA3")),
    sig!(MP3, (0, b"ID3")),
    sig!(MP3, (0, b"\xFF\xFB")),
    sig!(MP3, (0, b"\xFF\xF3")),
    sig!(MP3, (0, b"\xFF\xF2")),
    // Fonts
    sig!(WOFF, (0, b"wOFF")),
    sig!(WOFF2, (0, b"wOF2")),
    // Short magics last: two bytes collide easily with other formats.
    sig!(EXE, (0, b"MZ")),
    sig!(BMP, (0, b"BM")),
    sig!(ICO, (0, b"\x00\x00\x01\x00")),
];
