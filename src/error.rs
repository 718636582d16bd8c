// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] globscan::Error),
    #[error("missing closing: \"{0}\"")]
    MissingClosing(char),
    #[error("pattern is too long: {length} characters exceed the limit of {limit}")]
    PatternTooLong { length: usize, limit: usize },
    #[error("brace expansion produces more than {limit} patterns")]
    TooManyExpansions { limit: usize },
    #[error("wrong regular expression: {0}")]
    WrongRegularExpression(#[from] Box<fancy_regex::Error>),
}

impl Error {
    /// Writes the error to stderr, styled when stderr supports it.
    pub fn log(&self) {
        let mut stderr = anstream::stderr();
        if self.log_to(&mut stderr).is_err() {
            eprintln!("error: {}", self);
        }
    }

    pub fn log_to(&self, target: &mut impl Write) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)
    }
}

impl From<fancy_regex::Error> for Error {
    fn from(err: fancy_regex::Error) -> Self {
        Self::WrongRegularExpression(Box::new(err))
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
