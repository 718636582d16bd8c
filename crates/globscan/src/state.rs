// std imports
use std::fmt;

// local imports
use crate::stash::Segment;

// ---

pub const NEGATION_OPEN: &str = "(?!";
pub const NEGATION_CLOSE: &str = "$).*";

/// Compiled description of a glob pattern.
///
/// The regex source is assembled by concatenating [`State::prefix`], the negation
/// wrapper when [`State::negated`] is set, every segment text in order, and
/// [`State::suffix`]. See [`State::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The whole pattern is negated with a leading `!`.
    pub negated: bool,
    /// Leading anchor, `^` followed by the configured prefix.
    pub prefix: String,
    /// Trailing anchor, the configured suffix followed by `$`.
    pub suffix: String,
    /// At least one `**` was recognized.
    pub has_globstar: bool,
    pub segments: Vec<Segment>,
    /// Opening characters of constructs left open at the end of the input, outermost
    /// first. Empty for a well-formed pattern.
    pub unclosed: Vec<char>,
}

impl State {
    /// Concatenated segment texts without anchors or negation.
    pub fn body(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Complete regex source.
    pub fn source(&self) -> String {
        let mut result = String::with_capacity(
            self.prefix.len()
                + self.suffix.len()
                + self.segments.iter().map(|s| s.text.len()).sum::<usize>()
                + NEGATION_OPEN.len()
                + NEGATION_CLOSE.len(),
        );
        result.push_str(&self.prefix);
        if self.negated {
            result.push_str(NEGATION_OPEN);
        }
        for segment in &self.segments {
            result.push_str(&segment.text);
        }
        if self.negated {
            result.push_str(NEGATION_CLOSE);
        }
        result.push_str(&self.suffix);
        result
    }

    pub fn is_well_formed(&self) -> bool {
        self.unclosed.is_empty()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source())
    }
}
