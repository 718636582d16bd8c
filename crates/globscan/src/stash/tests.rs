use super::*;

#[test]
fn test_new() {
    let stash = Stash::new();
    assert_eq!(stash.lookbehind(2), None);
    assert_eq!(stash.current(), &Segment::bos());
    assert_eq!(stash.current().kind, SegmentKind::Bos);
}

#[test]
fn test_append_goes_to_current() {
    let mut stash = Stash::new();
    stash.append("a");
    stash.begin(Segment::slash(false));
    stash.append("\\/");
    stash.append("b");

    let segments = stash.into_segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text, "a");
    assert_eq!(segments[1].text, "\\/b");
    assert_eq!(segments[1].kind, SegmentKind::Slash);
}

#[test]
fn test_lookbehind() {
    let mut stash = Stash::new();
    stash.current_mut().globstar = true;
    stash.begin(Segment::slash(true));
    stash.append("x");

    assert_eq!(stash.lookbehind(0), None);
    assert_eq!(stash.lookbehind(1).map(|s| s.text.as_str()), Some("x"));
    assert_eq!(stash.lookbehind(2).map(|s| s.globstar), Some(true));
    assert_eq!(stash.lookbehind(3), None);
}

#[test]
fn test_first_mut() {
    let mut stash = Stash::new();
    stash.first_mut().dot = true;
    stash.begin(Segment::slash(false));
    stash.first_mut().text.insert_str(0, "^");

    let segments = stash.into_segments();
    assert!(segments[0].dot);
    assert_eq!(segments[0].text, "^");
    assert!(!segments[1].dot);
}
