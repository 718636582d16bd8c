/// Options controlling how a glob pattern is compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Allow wildcards to match path components beginning with a dot.
    pub dot: bool,
    /// Text inserted right after the leading `^` anchor.
    pub prefix: Option<String>,
    /// Text inserted right before the trailing `$` anchor.
    pub suffix: Option<String>,
    /// Replacement for the fragment a single `*` compiles to.
    pub star: Option<String>,
}

impl Options {
    pub fn with_dot(mut self, dot: bool) -> Self {
        self.dot = dot;
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
}
