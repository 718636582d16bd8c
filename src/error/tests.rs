use super::*;

#[test]
fn test_log() {
    let err = Error::Io(std::io::Error::other("test"));
    let mut buf = Vec::new();
    err.log_to(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\u{1b}[1m\u{1b}[91merror:\u{1b}[39m\u{1b}[0m test\n"
    );
}

#[test]
fn test_messages() {
    let err = Error::from(globscan::Error::MissingOpening('('));
    assert_eq!(err.to_string(), r#"missing opening: "(""#);

    let err = Error::MissingClosing(']');
    assert_eq!(err.to_string(), r#"missing closing: "]""#);

    let err = Error::PatternTooLong { length: 10, limit: 4 };
    assert_eq!(err.to_string(), "pattern is too long: 10 characters exceed the limit of 4");

    let err = Error::TooManyExpansions { limit: 3 };
    assert_eq!(err.to_string(), "brace expansion produces more than 3 patterns");
}

#[test]
fn test_regex_error() {
    let err: Error = fancy_regex::Regex::new("(").unwrap_err().into();
    assert!(err.to_string().starts_with("wrong regular expression: "));
}
