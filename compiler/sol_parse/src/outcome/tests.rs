use pretty_assertions::assert_eq;
use sol_ir::{Span, TokenKind};

use super::*;
use crate::{ErrorContext, Parser};

fn make_error() -> ParseError {
    ParseError::new("test error", Span::new(0, 1))
}

/// Match a single token of `kind`, failing softly otherwise.
fn token(p: &mut Parser<'_>, kind: TokenKind) -> ParseOutcome<&'static str> {
    if p.check(kind) {
        p.advance();
        ParseOutcome::consumed_ok("matched")
    } else {
        ParseOutcome::empty_err(TokenSet::single(kind), p.position())
    }
}

#[test]
fn success_predicates() {
    let consumed: ParseOutcome<i32> = ParseOutcome::consumed_ok(42);
    assert!(consumed.is_ok());
    assert!(!consumed.failed_without_progress());
    assert_eq!(consumed.ok(), Some(42));

    let empty: ParseOutcome<i32> = ParseOutcome::empty_ok(0);
    assert!(empty.is_ok());
    assert_eq!(empty.ok(), Some(0));
}

#[test]
fn failure_predicates() {
    let hard: ParseOutcome<i32> = ParseOutcome::consumed_err(make_error(), Span::new(0, 5));
    assert!(!hard.is_ok());
    assert!(!hard.failed_without_progress());

    let soft: ParseOutcome<i32> =
        ParseOutcome::empty_err(TokenSet::single(TokenKind::Semicolon), 3);
    assert!(soft.failed_without_progress());
    assert_eq!(soft.ok(), None);
}

#[test]
fn map_preserves_variant() {
    let doubled = ParseOutcome::consumed_ok(21).map(|v| v * 2);
    assert!(matches!(doubled, ParseOutcome::ConsumedOk { value: 42 }));

    let still_empty = ParseOutcome::<i32>::empty_err(TokenSet::new(), 7).map(|v| v + 1);
    assert!(matches!(
        still_empty,
        ParseOutcome::EmptyErr { position: 7, .. }
    ));
}

#[test]
fn error_context_only_touches_hard_errors() {
    let hard: ParseOutcome<()> = ParseOutcome::consumed_err(make_error(), Span::new(0, 1));
    match hard.with_error_context(ErrorContext::ForLoop) {
        ParseOutcome::ConsumedErr { error, .. } => {
            assert_eq!(error.context.as_deref(), Some("while parsing a for loop"));
        }
        other => panic!("expected ConsumedErr, got {other:?}"),
    }

    let soft: ParseOutcome<()> = ParseOutcome::empty_err(TokenSet::new(), 0);
    assert!(soft
        .with_error_context(ErrorContext::ForLoop)
        .failed_without_progress());
}

#[test]
fn one_of_takes_the_first_match() {
    let lexed = sol_lexer::lex(";");
    let mut p = Parser::new(&lexed.tokens, ";", false);
    let outcome = one_of!(
        p,
        token(&mut p, TokenKind::Comma),
        token(&mut p, TokenKind::Semicolon),
        token(&mut p, TokenKind::Eq),
    );
    assert_eq!(outcome.ok(), Some("matched"));
    assert_eq!(p.position(), 1);
}

#[test]
fn one_of_merges_expected_sets() {
    let lexed = sol_lexer::lex("x");
    let mut p = Parser::new(&lexed.tokens, "x", false);
    let outcome = one_of!(
        p,
        token(&mut p, TokenKind::Comma),
        token(&mut p, TokenKind::Semicolon),
    );
    let ParseOutcome::EmptyErr { expected, position } = outcome else {
        panic!("expected EmptyErr, got {outcome:?}");
    };
    assert_eq!(position, 0);
    assert!(expected.contains(TokenKind::Comma));
    assert!(expected.contains(TokenKind::Semicolon));
    assert_eq!(p.position(), 0);
}
