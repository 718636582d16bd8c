use super::*;

fn settings() -> Settings {
    Settings::defaults().unwrap()
}

#[test]
fn test_parse() {
    let opt = Opt::try_parse_from(["globcraft", "--dot", "-i", "*.md", "a.md", "b.txt"]).unwrap();
    assert!(opt.dot);
    assert!(opt.nocase);
    assert!(!opt.invert);
    assert_eq!(opt.pattern, "*.md");
    assert_eq!(opt.candidates, vec!["a.md", "b.txt"]);
}

#[test]
fn test_missing_pattern() {
    assert!(Opt::try_parse_from(["globcraft"]).is_err());
}

#[test]
fn test_options() {
    let opt = Opt::try_parse_from([
        "globcraft",
        "--no-brace",
        "--strict-brackets",
        "--prefix",
        r"(\.\/(?=.))?",
        "--star",
        ".*?",
        "-v",
        "!*.md",
    ])
    .unwrap();
    assert!(opt.invert);
    assert_eq!(opt.pattern, "!*.md");

    let options = opt.options(&settings());
    assert!(options.nobrace);
    assert!(options.strict_brackets);
    assert!(!options.dot);
    assert_eq!(options.prefix.as_deref(), Some(r"(\.\/(?=.))?"));
    assert_eq!(options.star.as_deref(), Some(".*?"));
    assert_eq!(options.suffix, None);
    assert_eq!(options.max_expansions, 4096);
}

#[test]
fn test_settings_are_honored() {
    let mut settings = settings();
    settings.dot = true;
    settings.brace = false;
    settings.max_length = 10;

    let opt = Opt::try_parse_from(["globcraft", "*"]).unwrap();
    let options = opt.options(&settings);
    assert!(options.dot);
    assert!(options.nobrace);
    assert_eq!(options.max_length, 10);
}
