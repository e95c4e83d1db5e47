use super::*;
use pretty_assertions::assert_eq;

fn cook_kinds(source: &str) -> Vec<TokenKind> {
    let table = PositionTable::build(source);
    match cook(source, &table) {
        Ok(cooked) => cooked.tokens.iter().map(|t| t.kind).collect(),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fn cook_err(source: &str) -> SyntaxError {
    let table = PositionTable::build(source);
    match cook(source, &table) {
        Ok(_) => panic!("expected a lexical error for {source:?}"),
        Err(err) => err,
    }
}

#[test]
fn keywords_are_resolved() {
    assert_eq!(
        cook_kinds("package main\nimport \"fmt\""),
        vec![
            TokenKind::Package,
            TokenKind::Ident,
            TokenKind::Import,
            TokenKind::String,
        ]
    );
}

#[test]
fn keyword_prefix_is_identifier() {
    assert_eq!(cook_kinds("imports packages"), vec![TokenKind::Ident, TokenKind::Ident]);
}

#[test]
fn comments_stay_in_stream_and_are_collected() {
    let source = "// a\nx /* b */";
    let table = PositionTable::build(source);
    let Ok(cooked) = cook(source, &table) else {
        panic!("cook failed");
    };
    assert_eq!(
        cooked.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Comment, TokenKind::Ident, TokenKind::Comment]
    );
    assert_eq!(cooked.comments.len(), 2);
    assert_eq!(cooked.comments[0].kind, CommentKind::Line);
    assert_eq!(cooked.comments[1].span, Span::new(7, 14));
}

#[test]
fn raw_strings_cook_to_string() {
    assert_eq!(cook_kinds("`a\nb`"), vec![TokenKind::String]);
}

#[test]
fn spans_are_absolute() {
    let source = "a  (b)";
    let table = PositionTable::build(source);
    let Ok(cooked) = cook(source, &table) else {
        panic!("cook failed");
    };
    assert_eq!(cooked.tokens[1].span, Span::new(3, 4));
    assert_eq!(cooked.tokens[3].span, Span::new(5, 6));
}

#[test]
fn unterminated_string_reports_position() {
    let err = cook_err("package p\nvar s = \"abc\n");
    assert_eq!(err.kind, SyntaxErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (2, 9));
    assert_eq!(err.to_string(), "2:9: string literal not terminated");
}

#[test]
fn unterminated_comment() {
    assert_eq!(cook_err("/* open").kind, SyntaxErrorKind::UnterminatedComment);
}

#[test]
fn nul_byte_is_rejected() {
    let err = cook_err("package p\0");
    assert_eq!(err.kind, SyntaxErrorKind::NulByte);
    assert_eq!(err.span, Span::new(9, 10));
}

#[test]
fn invalid_character_carries_text() {
    let err = cook_err("x @ y");
    assert_eq!(err.kind, SyntaxErrorKind::InvalidCharacter("@".to_string()));
}
