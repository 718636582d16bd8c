// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::{options::Options, settings::Settings};

// ---

/// Filters paths through an extended shell glob pattern.
///
/// Candidates are taken from the command line or, when none are given, from standard input,
/// one per line. Matching candidates are printed in input order.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path.
    #[arg(long, env = "GLOBCRAFT_CONFIG", overrides_with = "config")]
    pub config: Option<PathBuf>,

    /// Let wildcards match path components starting with a dot.
    #[arg(long, env = "GLOBCRAFT_DOT", overrides_with = "dot")]
    pub dot: bool,

    /// Match case-insensitively.
    #[arg(short = 'i', long, env = "GLOBCRAFT_NOCASE", overrides_with = "nocase")]
    pub nocase: bool,

    /// Keep brace sets such as {a,b} literal.
    #[arg(long, overrides_with = "no_brace")]
    pub no_brace: bool,

    /// Fail on patterns leaving a group or bracket expression open.
    #[arg(long, env = "GLOBCRAFT_STRICT_BRACKETS", overrides_with = "strict_brackets")]
    pub strict_brackets: bool,

    /// Treat backslashes in candidates as path separators.
    #[arg(long, env = "GLOBCRAFT_WINDOWS", overrides_with = "windows")]
    pub windows: bool,

    /// Regular expression inserted after the leading anchor.
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Regular expression inserted before the trailing anchor.
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Regular expression used in place of a single `*`.
    #[arg(long, allow_hyphen_values = true)]
    pub star: Option<String>,

    /// Print the compiled regular expressions instead of filtering.
    #[arg(long)]
    pub source: bool,

    /// Print candidates that do not match.
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Glob pattern.
    #[arg(name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: String,

    /// Candidate paths.
    #[arg(name = "CANDIDATE")]
    pub candidates: Vec<String>,
}

impl Opt {
    /// Combines loaded settings with the flags given on the command line.
    pub fn options(&self, settings: &Settings) -> Options {
        let mut options = Options::from(settings);
        options.dot |= self.dot;
        options.nocase |= self.nocase;
        options.nobrace |= self.no_brace;
        options.strict_brackets |= self.strict_brackets;
        options.windows |= self.windows;
        options.prefix = self.prefix.clone();
        options.suffix = self.suffix.clone();
        options.star = self.star.clone();
        options
    }
}

#[cfg(test)]
mod tests;
