use std::io::Write;

use assert_matches::assert_matches;

use super::*;
use crate::error::Error;

#[test]
fn test_default_settings() {
    let settings = Settings::defaults().unwrap();
    assert!(!settings.dot);
    assert!(!settings.nocase);
    assert!(settings.brace);
    assert!(!settings.strict_brackets);
    assert!(!settings.windows);
    assert_eq!(settings.max_length, 65536);
    assert_eq!(settings.max_expansions, 4096);

    assert_eq!(Options::from(&settings), Options::default());
}

#[test]
fn test_load_explicit() {
    let path = std::env::temp_dir().join(format!("globcraft-settings-{}.yaml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "dot: true\nbrace: false\nmax-expansions: 16").unwrap();
    drop(file);

    let settings = Settings::load(Some(&path));
    std::fs::remove_file(&path).unwrap();
    let settings = settings.unwrap();

    assert!(settings.dot);
    assert!(!settings.brace);
    assert_eq!(settings.max_expansions, 16);
    assert_eq!(settings.max_length, 65536);

    let options = Options::from(&settings);
    assert!(options.dot);
    assert!(options.nobrace);
    assert_eq!(options.max_expansions, 16);
}

#[test]
fn test_load_missing_explicit() {
    let path = std::env::temp_dir().join("globcraft-settings-missing.yaml");
    assert_matches!(Settings::load(Some(&path)), Err(Error::Config(_)));
}
