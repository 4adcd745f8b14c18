//! Parse outcomes that track whether input was consumed.
//!
//! A rule either succeeds or fails, and either moved past its first token or
//! did not. The two failure variants drive backtracking:
//!
//! - `EmptyErr`: the rule never started, so a caller may try another rule.
//! - `ConsumedErr`: the rule committed and then broke, so the failure is final.
//!
//! Rules that must back out of a partial match (a variable declaration that
//! turns out to be an expression) go through `Parser::attempt`, which rewinds
//! and turns any failure into `EmptyErr`.

use sol_ir::Span;

use crate::recovery::TokenSet;
use crate::ParseError;

#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// Succeeded after consuming at least one token.
    ConsumedOk { value: T },
    /// Succeeded without consuming anything (an absent optional part).
    EmptyOk { value: T },
    ConsumedErr {
        error: ParseError,
        /// From the start of the rule up to the failure.
        consumed_span: Span,
    },
    EmptyErr {
        /// Kinds that would have been accepted here.
        expected: TokenSet,
        /// Token index where matching stopped.
        position: usize,
    },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        Self::ConsumedOk { value }
    }

    #[inline]
    pub fn empty_ok(value: T) -> Self {
        Self::EmptyOk { value }
    }

    #[inline]
    pub fn consumed_err(error: ParseError, consumed_span: Span) -> Self {
        Self::ConsumedErr {
            error,
            consumed_span,
        }
    }

    #[inline]
    pub fn empty_err(expected: TokenSet, position: usize) -> Self {
        Self::EmptyErr { expected, position }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. } | Self::EmptyOk { .. })
    }

    #[inline]
    pub fn failed_without_progress(&self) -> bool {
        matches!(self, Self::EmptyErr { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        match self {
            Self::ConsumedOk { value } => ParseOutcome::consumed_ok(f(value)),
            Self::EmptyOk { value } => ParseOutcome::empty_ok(f(value)),
            Self::ConsumedErr {
                error,
                consumed_span,
            } => ParseOutcome::consumed_err(error, consumed_span),
            Self::EmptyErr { expected, position } => ParseOutcome::empty_err(expected, position),
        }
    }

    /// Tag a committed failure with the construct being parsed.
    #[must_use]
    pub fn with_error_context(self, context: crate::ErrorContext) -> Self {
        if let Self::ConsumedErr {
            error,
            consumed_span,
        } = self
        {
            return Self::consumed_err(error.with_context(context), consumed_span);
        }
        self
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::ConsumedOk { value } | Self::EmptyOk { value } => Some(value),
            Self::ConsumedErr { .. } | Self::EmptyErr { .. } => None,
        }
    }
}

/// Ordered choice over rules that share a starting point.
///
/// The first alternative that succeeds or commits wins. An `EmptyErr` rewinds
/// the parser and moves on; when every alternative bails out, their expected
/// sets are merged into one `EmptyErr` at the furthest position seen.
#[macro_export]
macro_rules! one_of {
    ($self:expr $(, $alt:expr)+ $(,)?) => {{
        let start = $self.snapshot();
        let mut expected = $crate::recovery::TokenSet::new();
        let mut furthest: usize = $self.position();
        'choice: {
            $(
                match $alt {
                    $crate::ParseOutcome::EmptyErr {
                        expected: missed,
                        position,
                    } => {
                        expected.union_with(&missed);
                        furthest = furthest.max(position);
                        $self.restore(start);
                    }
                    decided => break 'choice decided,
                }
            )+
            $crate::ParseOutcome::empty_err(expected, furthest)
        }
    }};
}

/// Unwrap a mandatory part. A soft miss becomes a committed error carrying
/// `$context`; committed errors pass through.
#[macro_export]
macro_rules! require {
    ($self:expr, $parser:expr, $context:expr) => {
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value } | $crate::ParseOutcome::EmptyOk { value } => {
                value
            }
            $crate::ParseOutcome::ConsumedErr {
                error,
                consumed_span,
            } => return $crate::ParseOutcome::consumed_err(error, consumed_span),
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                let error = $self
                    .expected_error(&expected, position)
                    .with_context($context);
                let span = error.span;
                return $crate::ParseOutcome::consumed_err(error, span);
            }
        }
    };
}

/// Unwrap a part, returning either failure to the caller as it is.
#[macro_export]
macro_rules! chain {
    ($self:expr, $parser:expr) => {
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value } | $crate::ParseOutcome::EmptyOk { value } => {
                value
            }
            $crate::ParseOutcome::ConsumedErr {
                error,
                consumed_span,
            } => return $crate::ParseOutcome::consumed_err(error, consumed_span),
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                return $crate::ParseOutcome::empty_err(expected, position)
            }
        }
    };
}

/// Unwrap a `Result` inside a rule that has already consumed its leading
/// token, so any error is a committed one.
#[macro_export]
macro_rules! committed {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(error) => {
                let span = error.span;
                return $crate::ParseOutcome::consumed_err(error, span);
            }
        }
    };
}

#[cfg(test)]
mod tests;
