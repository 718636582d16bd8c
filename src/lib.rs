// public modules
pub mod braces;
pub mod cache;
pub mod cli;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod options;
pub mod settings;

// public uses
pub use cache::{clear_cache, is_match};
pub use error::{Error, Result};
pub use matcher::{Matcher, make_re, matches};
pub use options::Options;
pub use settings::Settings;

// re-exports
pub use globscan::{Segment, State};
