//! A single-pass compiler of extended shell glob patterns.
//!
//! This crate translates a glob pattern into the source of an anchored regular expression
//! without touching the filesystem. Compilation is pure: the same pattern and options
//! always produce the same [`State`].
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters within one path component
//! - `**` - Matches zero or more path components
//! - `?` - Matches exactly one character other than `/`
//! - `[...]`, `[!...]` - Bracket expressions, including POSIX classes such as `[:alpha:]`
//! - `!(...)`, `*(...)`, `+(...)`, `?(...)`, `@(...)` - Extended glob groups
//! - `!` at the start of the pattern - Negates the whole pattern
//! - `\` - Escapes the next character
//!
//! Groups of any kind do not nest: an opening `(`, `<`, `{` or `[` found inside an open
//! group is taken literally. Components starting with a dot are not matched by wildcards
//! unless the pattern spells the dot out or [`Options::dot`] is set.
//!
//! Quotes make the characters between them literal, but they do not shield group
//! characters: a closer such as `)` inside quotes still has to match an opener, so `"a)"`
//! fails with [`Error::MissingOpening`].
//!
//! Braces are kept literally. Expanding `{a,b}` is left to the caller.
//!
//! # Examples
//!
//! ```
//! use globscan::{compile, Options};
//!
//! let state = compile("src/*.rs", &Options::default()).unwrap();
//! assert_eq!(state.source(), r"^(?!\.)src\/[^/]*?\.rs$");
//! assert!(!state.has_globstar);
//!
//! let state = compile("!*.md", &Options::default()).unwrap();
//! assert!(state.negated);
//!
//! let err = compile("*)", &Options::default()).unwrap_err();
//! assert_eq!(err.to_string(), r#"missing opening: "(""#);
//!
//! let err = compile(r#""a)""#, &Options::default()).unwrap_err();
//! assert_eq!(err, globscan::Error::MissingOpening('('));
//! ```

mod compiler;
mod constructs;
mod cursor;
mod error;
mod extglob;
mod options;
mod stash;
mod state;

pub use compiler::compile;
pub use constructs::{ConstructKind, Frame};
pub use error::{Error, Result};
pub use extglob::Extglob;
pub use options::Options;
pub use stash::{Segment, SegmentKind};
pub use state::{NEGATION_CLOSE, NEGATION_OPEN, State};
