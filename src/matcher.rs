// third-party imports
use fancy_regex::Regex;
use globscan::{ConstructKind, State};
use itertools::Itertools;

// local imports
use crate::{
    braces,
    error::{Error, Result},
    normalize::{trim_trailing_separator, unixify},
    options::Options,
};

// ---

/// A compiled glob pattern.
///
/// Brace sets are expanded first, then every resulting pattern is compiled separately.
/// A candidate matches when any of them matches or, for a negated pattern such as
/// `!{a,b}`, when all of them match. A matcher built from several patterns matches
/// when any of the patterns does.
#[derive(Debug)]
pub struct Matcher {
    patterns: Vec<String>,
    windows: bool,
    states: Vec<State>,
    groups: Vec<Group>,
}

impl Matcher {
    pub fn new(pattern: &str, options: &Options) -> Result<Self> {
        Self::from_patterns([pattern], options)
    }

    /// Compiles a list of patterns into a single matcher that accepts a candidate when
    /// any of the patterns accepts it.
    pub fn from_patterns<I, S>(patterns: I, options: &Options) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = Self {
            patterns: Vec::new(),
            windows: options.windows,
            states: Vec::new(),
            groups: Vec::new(),
        };
        for pattern in patterns {
            result.add(pattern.as_ref(), options)?;
        }
        Ok(result)
    }

    fn add(&mut self, pattern: &str, options: &Options) -> Result<()> {
        check_length(pattern, options)?;

        let expanded = if options.nobrace {
            vec![pattern.to_owned()]
        } else {
            braces::expand(pattern, options.max_expansions)?
        };

        let mut states = Vec::with_capacity(expanded.len());
        let mut programs = Vec::with_capacity(expanded.len());
        for item in &expanded {
            let state = scan(item, options)?;
            programs.push(Program::new(item, &state, options)?);
            states.push(state);
        }

        let negated = !states.is_empty() && states.iter().all(|state| state.negated);
        log::debug!(
            "compiled {:?} into {}",
            pattern,
            states.iter().map(State::source).join(" | ")
        );

        self.patterns.push(pattern.to_owned());
        self.states.extend(states);
        self.groups.push(Group { negated, programs });
        Ok(())
    }

    /// Tests whether the candidate path matches the pattern.
    ///
    /// A regex engine failure, such as exceeding the backtracking limit, counts as a mismatch.
    pub fn is_match(&self, candidate: &str) -> bool {
        if !self.windows {
            return self.test(candidate);
        }

        let candidate = unixify(candidate);
        self.test(&candidate)
            || trim_trailing_separator(&candidate).is_some_and(|trimmed| self.test(trimmed))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Reports whether every pattern is negated.
    pub fn is_negated(&self) -> bool {
        !self.groups.is_empty() && self.groups.iter().all(|group| group.negated)
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Regex sources, one per pattern produced by brace expansion.
    pub fn sources(&self) -> Vec<String> {
        self.states.iter().map(State::source).collect()
    }

    fn test(&self, candidate: &str) -> bool {
        self.groups.iter().any(|group| group.is_match(candidate))
    }
}

// ---

/// Compiles a single pattern, without brace expansion, into a regular expression.
pub fn make_re(pattern: &str, options: &Options) -> Result<Regex> {
    check_length(pattern, options)?;
    let state = scan(pattern, options)?;
    regex(&state, options)
}

/// Returns the candidates matching the pattern, in input order.
pub fn matches<'a, I>(candidates: I, pattern: &str, options: &Options) -> Result<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = Matcher::new(pattern, options)?;
    Ok(candidates.into_iter().filter(|candidate| matcher.is_match(candidate)).collect())
}

// ---

#[derive(Debug)]
struct Group {
    negated: bool,
    programs: Vec<Program>,
}

impl Group {
    fn is_match(&self, candidate: &str) -> bool {
        let mut results = self.programs.iter().map(|program| program.is_match(candidate));
        if self.negated {
            results.all(|matched| matched)
        } else {
            results.any(|matched| matched)
        }
    }
}

#[derive(Debug)]
enum Program {
    Literal(String),
    Regex(Regex),
}

impl Program {
    fn new(pattern: &str, state: &State, options: &Options) -> Result<Self> {
        if is_literal(pattern, options) {
            let text = pattern.strip_prefix("./").unwrap_or(pattern);
            return Ok(Self::Literal(text.to_owned()));
        }
        Ok(Self::Regex(regex(state, options)?))
    }

    fn is_match(&self, candidate: &str) -> bool {
        match self {
            Self::Literal(text) => text == candidate,
            Self::Regex(re) => match re.is_match(candidate) {
                Ok(matched) => matched,
                Err(err) => {
                    log::warn!("failed to match {:?} against {}: {}", candidate, re.as_str(), err);
                    false
                }
            },
        }
    }
}

// ---

fn check_length(pattern: &str, options: &Options) -> Result<()> {
    let length = pattern.chars().count();
    if length > options.max_length {
        return Err(Error::PatternTooLong {
            length,
            limit: options.max_length,
        });
    }
    Ok(())
}

fn scan(pattern: &str, options: &Options) -> Result<State> {
    let state = globscan::compile(pattern, &options.scan_options())?;
    if options.strict_brackets {
        if let Some(&opener) = state.unclosed.first() {
            let closer = ConstructKind::from_opener(opener).map_or(opener, ConstructKind::closer);
            return Err(Error::MissingClosing(closer));
        }
    }
    Ok(state)
}

fn regex(state: &State, options: &Options) -> Result<Regex> {
    let source = state.source();
    let source = if options.nocase {
        format!("(?i){source}")
    } else {
        source
    };
    Ok(Regex::new(&source)?)
}

/// Reports whether the pattern compiles to an exact string comparison.
fn is_literal(pattern: &str, options: &Options) -> bool {
    !options.nocase
        && options.prefix.is_none()
        && options.suffix.is_none()
        && !pattern.chars().any(|ch| {
            matches!(
                ch,
                '*' | '?' | '[' | ']' | '{' | '}' | '(' | ')' | '<' | '>' | '!' | '@' | '+' | '\\' | '|'
                    | '"' | '\'' | '`' | '“' | '”' | ':'
            )
        })
}
