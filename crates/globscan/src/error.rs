// third-party imports
use thiserror::Error;

/// Error is an error which may occur while compiling a glob pattern.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A closing character was found while no construct was open.
    /// Holds the opening character the closer expected.
    #[error("missing opening: \"{0}\"")]
    MissingOpening(char),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
