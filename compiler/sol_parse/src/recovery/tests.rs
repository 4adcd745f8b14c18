use pretty_assertions::assert_eq;
use sol_ir::TokenKind;

use super::*;

#[test]
fn empty_set() {
    let set = TokenSet::new();
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
    assert!(!set.contains(TokenKind::Semicolon));
}

#[test]
fn single_and_with() {
    let set = TokenSet::single(TokenKind::Semicolon).with(TokenKind::Comma);
    assert_eq!(set.count(), 2);
    assert!(set.contains(TokenKind::Semicolon));
    assert!(set.contains(TokenKind::Comma));
    assert!(!set.contains(TokenKind::Dot));
}

#[test]
fn union_is_commutative() {
    let a = TokenSet::single(TokenKind::LParen);
    let b = TokenSet::single(TokenKind::Ident);
    assert_eq!(a.union(b), b.union(a));

    let mut c = a;
    c.union_with(&b);
    assert_eq!(c, a.union(b));
}

#[test]
fn last_kind_fits_in_set() {
    let last = *TokenKind::ALL.last().unwrap();
    let set = TokenSet::single(last);
    assert!(set.contains(last));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![last]);
}

#[test]
fn iter_follows_discriminant_order() {
    let set = TokenSet::new()
        .with(TokenKind::Semicolon)
        .with(TokenKind::Ident)
        .with(TokenKind::Function);
    let kinds: Vec<_> = set.iter().collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::Function, TokenKind::Semicolon]
    );
}

#[test]
fn rule_set_membership() {
    let mut rules = RuleSet::new();
    assert!(rules.is_empty());
    rules.insert(Rule::Expression);
    rules.insert(Rule::Statement);
    assert!(rules.contains(Rule::Expression));
    assert!(!rules.contains(Rule::TypeName));
    assert_eq!(
        rules.iter().collect::<Vec<_>>(),
        vec![Rule::Statement, Rule::Expression]
    );
}

#[test]
fn member_boundary_excludes_statement_keywords() {
    for kind in [TokenKind::If, TokenKind::Return, TokenKind::Ident, TokenKind::LBrace] {
        assert!(!MEMBER_BOUNDARY.contains(kind), "{kind:?}");
    }
    assert!(MEMBER_BOUNDARY.contains(TokenKind::Function));
}
