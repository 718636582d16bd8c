use rstest::rstest;

use super::*;

#[test]
fn test_advance() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.advance(), Some('a'));
    assert!(cursor.is_first());
    assert_eq!(cursor.last(), None);
    assert_eq!(cursor.advance(), Some('b'));
    assert!(!cursor.is_first());
    assert_eq!(cursor.last(), Some('a'));
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.advance(), None);
}

#[test]
fn test_peek_is_idempotent() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.peek(2), Some('b'));
    assert_eq!(cursor.peek(2), Some('b'));
    assert_eq!(cursor.peek(1), Some('a'));
    assert_eq!(cursor.peek(4), None);
    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!(cursor.peek(1), Some('b'));
    assert_eq!(cursor.advance(), Some('b'));
    assert_eq!(cursor.advance(), Some('c'));
    assert!(cursor.at_end());
}

#[test]
fn test_lookbehind() {
    let mut cursor = Cursor::new("(?:");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.last(), Some('?'));
    assert_eq!(cursor.before_last(), Some('('));
}

#[test]
fn test_rest_includes_queued() {
    let mut cursor = Cursor::new("*.md");
    cursor.advance();
    assert_eq!(cursor.peek(2), Some('m'));
    assert_eq!(cursor.rest().collect::<String>(), ".md");
    assert!(cursor.rest_starts_with('.'));
    assert!(cursor.next_is('.'));
}

#[rstest]
#[case("./a", "a")]
#[case("././a", "./a")]
#[case("a/./b", "a/./b")]
#[case(".a", ".a")]
#[case("./", "")]
fn test_leading_dot_slash(#[case] input: &str, #[case] expected: &str) {
    let cursor = Cursor::new(input);
    assert_eq!(cursor.rest().collect::<String>(), expected);
}
