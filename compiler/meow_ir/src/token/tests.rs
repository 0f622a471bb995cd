use super::*;
use std::sync::Arc;

fn loc(line: u32, column: u32) -> SourceLocation {
    SourceLocation::new(Arc::from("meow.meow"), line, column)
}

#[test]
fn keyword_text_is_the_literal() {
    assert_eq!(Token::new(TokenKind::Keyword, loc(1, 1)).text(), "meow");
}

#[test]
fn string_and_unknown_carry_their_text() {
    let string = Token::new(TokenKind::StringLiteral("hi there".into()), loc(1, 1));
    let unknown = Token::new(TokenKind::Unknown("purr".into()), loc(1, 10));
    assert_eq!(string.text(), "hi there");
    assert_eq!(unknown.text(), "purr");
}

#[test]
fn end_of_stream_has_no_location() {
    let eos = Token::end_of_stream();
    assert!(eos.is_end());
    assert!(eos.location().is_none());
    assert_eq!(eos.text(), "");
}

#[test]
fn located_tokens_expose_location() {
    let tok = Token::new(TokenKind::Keyword, loc(2, 5));
    assert!(!tok.is_end());
    assert_eq!(tok.location(), Some(&loc(2, 5)));
}

#[test]
fn debug_shows_kind_and_location() {
    let tok = Token::new(TokenKind::Unknown("purr".into()), loc(1, 1));
    assert_eq!(format!("{tok:?}"), "Unknown(\"purr\") @ meow.meow:1:1");
    assert_eq!(format!("{:?}", Token::end_of_stream()), "EndOfStream");
}

#[test]
fn display_names() {
    assert_eq!(TokenKind::Keyword.display_name(), "keyword");
    assert_eq!(TokenKind::StringLiteral(String::new()).display_name(), "string literal");
    assert_eq!(TokenKind::Unknown(String::new()).display_name(), "unknown token");
    assert_eq!(TokenKind::EndOfStream.display_name(), "end of stream");
}
