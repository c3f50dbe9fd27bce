//! Integration tests for simplelang-common crate.

use simplelang_common::{Position, Span};

#[test]
fn test_span_merge() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_len_and_range() {
    let span = Span::new(5, 15);
    assert_eq!(span.len(), 10);
    assert_eq!(span.range(), 5..15);
    assert!(Span::new(5, 5).is_empty());
}

#[test]
fn test_span_slice_and_debug() {
    let source = "dikhao(x);";
    let span = Span::new(0, 6);
    assert_eq!(span.slice(source), "dikhao");
    assert_eq!(format!("{:?}", span), "0..6");
    assert_eq!(span.offset(), 0);
}

#[test]
fn test_position_advance() {
    let mut pos = Position::START;
    for ch in "ab\ncd".chars() {
        pos = pos.advance(ch);
    }
    assert_eq!(pos, Position::new(2, 3));
}

#[test]
fn test_tab_is_one_column() {
    assert_eq!(Position::START.advance('\t'), Position::new(1, 2));
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(12, 4).to_string(), "12:4");
}
