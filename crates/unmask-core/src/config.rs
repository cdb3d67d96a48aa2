//! Scan options.
//!
//! The core reads no configuration files and no environment variables; the
//! caller builds a `ScanOptions` (the CLI maps its flags onto one).

/// What to do when a single file cannot be classified mid-scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Record the file in [`ScanResult::errors`](crate::ScanResult) and keep going.
    #[default]
    Continue,
    /// Stop the walk and return the first per-file error.
    Abort,
}

/// Options for a corpus walk.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Follow symbolic links while descending. Off by default; when on,
    /// link cycles are reported as enumeration errors and not descended.
    pub follow_links: bool,
    /// Per-file failure handling.
    pub error_policy: ErrorPolicy,
    /// Treat a known alias (`jpeg` for `jpg`, `tiff` for `tif`) as a match.
    /// Off by default: only the canonical extension matches.
    pub accept_aliases: bool,
}

impl ScanOptions {
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn accept_aliases(mut self, yes: bool) -> Self {
        self.accept_aliases = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = ScanOptions::default();
        assert!(!opts.follow_links);
        assert!(!opts.accept_aliases);
        assert_eq!(opts.error_policy, ErrorPolicy::Continue);
    }

    #[test]
    fn builder_sets_fields() {
        let opts = ScanOptions::default()
            .follow_links(true)
            .accept_aliases(true)
            .error_policy(ErrorPolicy::Abort);
        assert!(opts.follow_links);
        assert!(opts.accept_aliases);
        assert_eq!(opts.error_policy, ErrorPolicy::Abort);
    }
}
