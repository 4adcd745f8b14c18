//! The closed set of token kinds.

use std::fmt;

macro_rules! token_kinds {
    (
        classes { $($class:ident => $class_name:literal,)* }
        keywords { $($kw:ident => $kw_text:literal,)* }
        symbols { $($sym:ident => $sym_text:literal,)* }
    ) => {
        /// Kind of a lexical token.
        ///
        /// Fieldless and `#[repr(u8)]`, so `kind as u8` doubles as a bit index
        /// for expected-token sets. There must never be more than 128 kinds.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[repr(u8)]
        pub enum TokenKind {
            $($class,)*
            $($kw,)*
            $($sym,)*
        }

        impl TokenKind {
            /// Every kind, in discriminant order.
            pub const ALL: &'static [TokenKind] = &[
                $(TokenKind::$class,)*
                $(TokenKind::$kw,)*
                $(TokenKind::$sym,)*
            ];

            /// Source text for keywords and symbols; a description for
            /// literal classes (`identifier`, `number`, ...).
            pub const fn text(self) -> &'static str {
                match self {
                    $(TokenKind::$class => $class_name,)*
                    $(TokenKind::$kw => $kw_text,)*
                    $(TokenKind::$sym => $sym_text,)*
                }
            }

            /// Is this a literal class rather than one fixed spelling?
            pub const fn is_class(self) -> bool {
                matches!(self, $(TokenKind::$class)|*)
            }

            /// Is this a reserved word?
            pub const fn is_keyword(self) -> bool {
                matches!(self, $(TokenKind::$kw)|*)
            }

            /// Look up a reserved word.
            pub fn from_keyword(text: &str) -> Option<TokenKind> {
                match text {
                    $($kw_text => Some(TokenKind::$kw),)*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    classes {
        Ident => "identifier",
        Number => "number",
        HexNumber => "hex number",
        String => "string",
        HexString => "hex string",
        UnicodeString => "unicode string",
        Error => "invalid token",
        Eof => "end of input",
    }
    keywords {
        Abstract => "abstract",
        As => "as",
        Assembly => "assembly",
        Break => "break",
        Calldata => "calldata",
        Catch => "catch",
        Constant => "constant",
        Constructor => "constructor",
        Continue => "continue",
        Contract => "contract",
        Delete => "delete",
        Do => "do",
        Else => "else",
        Emit => "emit",
        Enum => "enum",
        Event => "event",
        External => "external",
        False => "false",
        For => "for",
        Function => "function",
        If => "if",
        Immutable => "immutable",
        Import => "import",
        Indexed => "indexed",
        Interface => "interface",
        Internal => "internal",
        Is => "is",
        Library => "library",
        Mapping => "mapping",
        Memory => "memory",
        Modifier => "modifier",
        New => "new",
        Override => "override",
        Payable => "payable",
        Pragma => "pragma",
        Private => "private",
        Public => "public",
        Pure => "pure",
        Return => "return",
        Returns => "returns",
        Storage => "storage",
        Struct => "struct",
        Throw => "throw",
        True => "true",
        Try => "try",
        Type => "type",
        Unchecked => "unchecked",
        Using => "using",
        View => "view",
        Virtual => "virtual",
        While => "while",
    }
    symbols {
        LParen => "(",
        RParen => ")",
        LBracket => "[",
        RBracket => "]",
        LBrace => "{",
        RBrace => "}",
        Semicolon => ";",
        Comma => ",",
        Dot => ".",
        Question => "?",
        Colon => ":",
        FatArrow => "=>",
        Arrow => "->",
        ColonEq => ":=",
        Eq => "=",
        EqEq => "==",
        NotEq => "!=",
        Lt => "<",
        LtEq => "<=",
        Gt => ">",
        GtEq => ">=",
        Shl => "<<",
        Shr => ">>",
        Sar => ">>>",
        Plus => "+",
        Minus => "-",
        Star => "*",
        Slash => "/",
        Percent => "%",
        StarStar => "**",
        PlusPlus => "++",
        MinusMinus => "--",
        Bang => "!",
        Tilde => "~",
        Amp => "&",
        Pipe => "|",
        Caret => "^",
        AmpAmp => "&&",
        PipePipe => "||",
        PlusEq => "+=",
        MinusEq => "-=",
        StarEq => "*=",
        SlashEq => "/=",
        PercentEq => "%=",
        PipeEq => "|=",
        AmpEq => "&=",
        CaretEq => "^=",
        ShlEq => "<<=",
        ShrEq => ">>=",
        SarEq => ">>>=",
    }
}

impl TokenKind {
    /// Bit index for expected-token sets.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`TokenKind::discriminant_index`].
    #[inline]
    pub fn from_index(index: u8) -> Option<TokenKind> {
        TokenKind::ALL.get(usize::from(index)).copied()
    }

    /// Tokens that open a bracketed group.
    #[inline]
    pub const fn is_open_delim(self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace
        )
    }

    /// Tokens that close a bracketed group.
    #[inline]
    pub const fn is_close_delim(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }
}

/// Renders the way error messages name a token: literal classes as words,
/// fixed spellings in backticks.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_class() {
            f.write_str(self.text())
        } else {
            write!(f, "`{}`", self.text())
        }
    }
}
