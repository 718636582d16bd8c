use std::thread;

use assert_matches::assert_matches;

use super::*;
use crate::error::Error;

#[test]
fn test_reuse() {
    let cache = Cache::new();
    let options = Options::default();

    let first = cache.get("*.md", &options).unwrap();
    let second = cache.get("*.md", &options).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    let other = cache.get("*.md", &options.clone().with_dot(true)).unwrap();
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_clear() {
    let cache = Cache::new();
    let first = cache.get("a/**", &Options::default()).unwrap();
    cache.clear();
    assert!(cache.is_empty());

    let second = cache.get("a/**", &Options::default()).unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.sources(), second.sources());
}

#[test]
fn test_errors_are_not_cached() {
    let cache = Cache::new();
    assert_matches!(cache.get("a)", &Options::default()), Err(Error::Scan(_)));
    assert!(cache.is_empty());
}

#[test]
fn test_shared_between_threads() {
    let cache = Arc::new(Cache::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = cache.clone();
            thread::spawn(move || cache.get("**/*.rs", &Options::default()).unwrap().is_match("src/lib.rs"))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_global() {
    assert!(is_match("b.a", "*.a", &Options::default()).unwrap());
    assert!(!is_match(".a", "*.a", &Options::default()).unwrap());
    assert!(is_match("b.a", "*.a", &Options::default().with_nocache(true)).unwrap());
    clear_cache();
    assert!(is_match("b.a", "*.a", &Options::default()).unwrap());
    assert_matches!(is_match("a", "a]", &Options::default()), Err(Error::Scan(_)));
    assert!(global().get("*.a", &Options::default()).is_ok());
}
