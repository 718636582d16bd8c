// std imports
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::{error::Result, matcher::Matcher, options::Options};

// ---

static GLOBAL: Lazy<Cache> = Lazy::new(Cache::new);

/// Returns the process-wide matcher cache.
pub fn global() -> &'static Cache {
    &GLOBAL
}

/// Drops every matcher held by the process-wide cache.
pub fn clear_cache() {
    GLOBAL.clear();
}

/// Tests whether the candidate matches the pattern, reusing a cached matcher.
///
/// The cache is bypassed when [`Options::nocache`] is set.
pub fn is_match(candidate: &str, pattern: &str, options: &Options) -> Result<bool> {
    if options.nocache {
        return Ok(Matcher::new(pattern, options)?.is_match(candidate));
    }
    Ok(GLOBAL.get(pattern, options)?.is_match(candidate))
}

// ---

type Key = (String, Options);

/// Compiled matchers keyed by pattern and options.
#[derive(Default)]
pub struct Cache {
    entries: Mutex<HashMap<Key, Arc<Matcher>>>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matcher for the pattern, compiling it on first use.
    pub fn get(&self, pattern: &str, options: &Options) -> Result<Arc<Matcher>> {
        let key = (pattern.to_owned(), options.clone());
        if let Some(matcher) = self.lock().get(&key) {
            return Ok(matcher.clone());
        }

        let matcher = Arc::new(Matcher::new(pattern, options)?);
        log::debug!("caching matcher for {:?}", pattern);
        Ok(self.lock().entry(key).or_insert(matcher).clone())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Key, Arc<Matcher>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
