use rstest::rstest;

use super::*;

const STAR: &str = "[^/]*?";

#[rstest]
#[case('!', Extglob::Negate)]
#[case('*', Extglob::ZeroOrMore)]
#[case('+', Extglob::OneOrMore)]
#[case('?', Extglob::ZeroOrOne)]
#[case('@', Extglob::ExactlyOne)]
fn test_sigil(#[case] ch: char, #[case] kind: Extglob) {
    assert_eq!(Extglob::from_sigil(ch), Some(kind));
    assert_eq!(kind.sigil(), ch);
}

#[test]
fn test_not_a_sigil() {
    assert_eq!(Extglob::from_sigil('('), None);
    assert_eq!(Extglob::from_sigil('a'), None);
}

#[rstest]
#[case(Extglob::Negate, "(?:(?!(?:")]
#[case(Extglob::ZeroOrMore, "(?:")]
#[case(Extglob::OneOrMore, "(?:")]
#[case(Extglob::ZeroOrOne, "(?:")]
#[case(Extglob::ExactlyOne, "(?:")]
fn test_opening(#[case] kind: Extglob, #[case] expected: &str) {
    assert_eq!(kind.opening(), expected);
}

#[rstest]
#[case(Extglob::Negate, true, ")$)[^/]*?)")]
#[case(Extglob::Negate, false, "))[^/]*?)")]
#[case(Extglob::ZeroOrMore, true, ")*")]
#[case(Extglob::OneOrMore, false, ")+")]
#[case(Extglob::ZeroOrOne, false, ")?")]
#[case(Extglob::ExactlyOne, true, ")")]
fn test_closing(#[case] kind: Extglob, #[case] at_end: bool, #[case] expected: &str) {
    assert_eq!(kind.closing(at_end, STAR), expected);
}

#[test]
fn test_capture() {
    assert!(Extglob::ExactlyOne.is_capture());
    assert!(!Extglob::Negate.is_capture());
    assert!(!Extglob::OneOrMore.is_capture());
}

#[test]
fn test_pending_stack() {
    let mut stack = Extglobs::default();
    assert_eq!(stack.last(), None);
    stack.push(Extglob::Negate);
    stack.push(Extglob::OneOrMore);
    assert_eq!(stack.last(), Some(Extglob::OneOrMore));
    assert_eq!(stack.pop(), Some(Extglob::OneOrMore));
    assert_eq!(stack.pop(), Some(Extglob::Negate));
    assert_eq!(stack.pop(), None);
}
