//! Global furthest-failure tracking.
//!
//! Every terminal the parser tries at the current position, and every named
//! rule that fails there without consuming, is recorded here. Only the
//! furthest token position survives; a later position replaces the whole
//! record, an equal one merges into it. Snapshots never touch the tracker, so
//! failures found inside abandoned alternatives still count.

use crate::recovery::{Rule, RuleSet, TokenSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FurthestFailure {
    /// Token index of the furthest failure.
    position: usize,
    expected: TokenSet,
    rules: RuleSet,
}

impl FurthestFailure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that `kind` would have been accepted at `position`.
    #[inline]
    pub fn record_token(&mut self, position: usize, kind: sol_ir::TokenKind) {
        if self.advance_to(position) {
            self.expected.insert(kind);
        }
    }

    /// Note that `rule` failed at `position` without consuming.
    #[inline]
    pub fn record_rule(&mut self, position: usize, rule: Rule) {
        if self.advance_to(position) {
            self.rules.insert(rule);
        }
    }

    /// Replace everything recorded at `position` by `rule`.
    ///
    /// Used when a named rule fails without consuming: the terminals its
    /// alternatives tried at that position collapse into the rule's name.
    /// A rule that failed before recording anything still moves the record
    /// forward to `position`.
    pub fn collapse_into(&mut self, position: usize, before: FurthestFailure, rule: Rule) {
        if self.position > position {
            return;
        }
        if self.position < position {
            self.position = position;
            self.expected = TokenSet::new();
            self.rules = RuleSet::new();
        } else if before.position == position {
            self.expected = before.expected;
            self.rules = before.rules;
        } else {
            self.expected = TokenSet::new();
            self.rules = RuleSet::new();
        }
        self.rules.insert(rule);
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn expected(&self) -> &TokenSet {
        &self.expected
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty() && self.rules.is_empty()
    }

    /// Move the record forward to `position` if it is further. Returns
    /// whether `position` is now the recorded one.
    fn advance_to(&mut self, position: usize) -> bool {
        if position > self.position {
            self.position = position;
            self.expected = TokenSet::new();
            self.rules = RuleSet::new();
        }
        position == self.position
    }
}
