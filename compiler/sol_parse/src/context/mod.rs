//! Parse context flags for context-sensitive parsing.

/// Context flags, combined with bitwise OR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u8);

impl ParseContext {
    pub const NONE: Self = Self(0);

    /// Inside the body of a function, constructor, modifier, `receive` or
    /// `fallback`. Tolerant recovery is only allowed here.
    pub const IN_FUNCTION_BODY: Self = Self(1 << 0);

    /// Inside `Parser::attempt`. Recovery is disabled so that speculation
    /// answers "does this parse" honestly.
    pub const SPECULATIVE: Self = Self(1 << 1);

    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    pub const fn in_function_body(self) -> bool {
        self.has(Self::IN_FUNCTION_BODY)
    }

    #[inline]
    pub const fn is_speculative(self) -> bool {
        self.has(Self::SPECULATIVE)
    }
}
