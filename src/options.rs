// third-party imports
use serde::Deserialize;

// ---

pub const MAX_LENGTH: usize = 65536;
pub const MAX_EXPANSIONS: usize = 4096;

/// Options controlling how patterns are compiled and matched.
///
/// Options are hashable so a pattern and its options can key the matcher cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Options {
    /// Let wildcards match path components starting with a dot.
    pub dot: bool,
    /// Match case-insensitively.
    pub nocase: bool,
    /// Keep brace sets literal instead of expanding them.
    pub nobrace: bool,
    /// Fail on patterns leaving a group or bracket expression open.
    pub strict_brackets: bool,
    /// Convert backslashes in candidates to forward slashes before matching.
    pub windows: bool,
    /// Bypass the process-wide matcher cache.
    pub nocache: bool,
    /// Text inserted after the leading anchor.
    pub prefix: Option<String>,
    /// Text inserted before the trailing anchor.
    pub suffix: Option<String>,
    /// Replacement for the fragment a single `*` compiles to.
    pub star: Option<String>,
    /// Maximum pattern length in characters.
    pub max_length: usize,
    /// Maximum number of patterns a brace expansion may produce.
    pub max_expansions: usize,
}

impl Options {
    /// Subset of options understood by the pattern compiler.
    pub fn scan_options(&self) -> globscan::Options {
        globscan::Options {
            dot: self.dot,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            star: self.star.clone(),
        }
    }

    pub fn with_dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    pub fn with_nocase(mut self, nocase: bool) -> Self {
        self.nocase = nocase;
        self
    }

    pub fn with_nobrace(mut self, nobrace: bool) -> Self {
        self.nobrace = nobrace;
        self
    }

    pub fn with_strict_brackets(mut self, strict: bool) -> Self {
        self.strict_brackets = strict;
        self
    }

    pub fn with_windows(mut self, windows: bool) -> Self {
        self.windows = windows;
        self
    }

    pub fn with_nocache(mut self, nocache: bool) -> Self {
        self.nocache = nocache;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_star(mut self, star: impl Into<String>) -> Self {
        self.star = Some(star.into());
        self
    }

    pub fn with_max_length(mut self, limit: usize) -> Self {
        self.max_length = limit;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = limit;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dot: false,
            nocase: false,
            nobrace: false,
            strict_brackets: false,
            windows: false,
            nocache: false,
            prefix: None,
            suffix: None,
            star: None,
            max_length: MAX_LENGTH,
            max_expansions: MAX_EXPANSIONS,
        }
    }
}
