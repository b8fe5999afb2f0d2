use super::*;
use crawl_lexer::lex;
use pretty_assertions::assert_eq;

fn cursor(lines: &[&str]) -> Cursor {
    Cursor::new(lex(lines).tokens)
}

#[test]
fn test_advance_stops_at_end() {
    let mut cursor = cursor(&["x"]);
    for _ in 0..10 {
        cursor.advance();
    }
    assert!(cursor.is_at_end());
}

#[test]
fn test_empty_stream_gets_end() {
    let cursor = Cursor::new(Vec::new());
    assert!(cursor.is_at_end());
}

#[test]
fn test_skip_line() {
    let mut cursor = cursor(&["a b c", "d"]);
    cursor.skip_line();
    assert!(cursor.at_line_start());
    assert_eq!(cursor.current_kind(), &TokenKind::Ident("d".to_string()));
}

#[test]
fn test_skip_block_is_nesting_aware() {
    let mut cursor = cursor(&["if a:", "    if b:", "        c()", "    d()", "e()"]);
    cursor.skip_line();
    assert!(cursor.check(&TokenKind::BlockStart));
    cursor.skip_block();
    assert_eq!(cursor.current_kind(), &TokenKind::Ident("e".to_string()));
}

#[test]
fn test_check_ignores_payload() {
    let cursor = cursor(&["42"]);
    assert!(cursor.check(&TokenKind::Int(0)));
    assert!(!cursor.check(&TokenKind::Double(0.0)));
}
