//! Expected-token sets and recovery boundaries.
//!
//! [`TokenSet`] is a `u128` bitset keyed by [`TokenKind::discriminant_index`],
//! so membership and union are single bitwise operations. [`RuleSet`] does the
//! same for named grammar rules, which stand in for the long token lists a
//! rule like "expression" would otherwise contribute to an error message.

use sol_ir::TokenKind;

/// A set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.discriminant_index())
    }

    /// Add a token kind (builder form for `const` sets).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub fn union_with(&mut self, other: &Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn insert(&mut self, kind: TokenKind) {
        self.0 |= 1u128 << kind.discriminant_index();
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Members in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.contains(*kind))
    }
}

/// Named grammar rules that appear in "Expected ..." messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Rule {
    SourceUnit,
    ContractMember,
    Statement,
    Expression,
    TypeName,
    Parameter,
}

impl Rule {
    const ALL: [Rule; 6] = [
        Rule::SourceUnit,
        Rule::ContractMember,
        Rule::Statement,
        Rule::Expression,
        Rule::TypeName,
        Rule::Parameter,
    ];

    pub const fn description(self) -> &'static str {
        match self {
            Rule::SourceUnit => "declaration",
            Rule::ContractMember => "contract member",
            Rule::Statement => "statement",
            Rule::Expression => "expression",
            Rule::TypeName => "type name",
            Rule::Parameter => "parameter",
        }
    }
}

/// A set of [`Rule`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RuleSet(u8);

impl RuleSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn insert(&mut self, rule: Rule) {
        self.0 |= 1 << rule as u8;
    }

    #[inline]
    pub const fn contains(&self, rule: Rule) -> bool {
        (self.0 & (1 << rule as u8)) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(move |rule| self.contains(*rule))
    }
}

/// Keywords that can only begin a contract member or a top-level unit.
///
/// Tolerant recovery never skips past one of these at brace depth zero.
pub const MEMBER_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Function)
    .with(TokenKind::Constructor)
    .with(TokenKind::Modifier)
    .with(TokenKind::Event)
    .with(TokenKind::Struct)
    .with(TokenKind::Enum)
    .with(TokenKind::Using)
    .with(TokenKind::Contract)
    .with(TokenKind::Interface)
    .with(TokenKind::Library)
    .with(TokenKind::Abstract)
    .with(TokenKind::Pragma)
    .with(TokenKind::Import);

/// Visibility, mutability and inheritance keywords on function-like members.
pub const FUNCTION_ATTRIBUTE: TokenSet = TokenSet::new()
    .with(TokenKind::Public)
    .with(TokenKind::Private)
    .with(TokenKind::Internal)
    .with(TokenKind::External)
    .with(TokenKind::Pure)
    .with(TokenKind::View)
    .with(TokenKind::Payable)
    .with(TokenKind::Constant)
    .with(TokenKind::Virtual)
    .with(TokenKind::Override);

pub(crate) fn describe_kind(kind: TokenKind) -> String {
    if kind.is_class() {
        kind.text().to_string()
    } else {
        format!("`{}`", kind.text())
    }
}

pub(crate) fn join_alternatives(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests;
