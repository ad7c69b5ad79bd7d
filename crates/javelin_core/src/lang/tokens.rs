//! Define the token-kind vocabulary for the Javelin front-end.
//!
//! This module is the single source of truth for lexical categories: a closed enumeration
//! ([`TokenKind`]) with a fixed ordinal per member, the ordered member list ([`TokenKind::ALL`]),
//! and the display table ([`TOKENS`]) that records each kind's canonical spelling.
//!
//! ## Notes
//! - Ordinals are grouped by category and bracketed by unused sentinel ordinals (see
//!   [`crate::lang::registry`]). Category predicates are range tests on the ordinal.
//! - Control and literal kinds render as upper-case labels (`EOF`, `INTEGERLITERAL`); separators and
//!   operators render as their symbol; keywords render as their source spelling.
//! - This registry is **pure** (no IO, no side effects). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use javelin_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::render(TokenKind::UShrAssign), ">>>=");
//! assert_eq!(tokens::render_ordinal(3), "token(3)");
//! assert_eq!(tokens::from_spelling("&&"), Some(TokenKind::LAnd));
//! assert!(TokenKind::While.is_keyword());
//! ```

use std::borrow::Cow;
use std::fmt;

use super::registry::{self, ORDINAL_LIMIT, TokenCategory};

/// Stable identifier for every token kind the lexer can produce.
///
/// ## Notes
/// - The discriminant is the kind's ordinal. The first member of each category carries an explicit
///   value so the sentinel gaps stay fixed.
/// - Ordering follows the ordinal, so `TokenKind::Add < TokenKind::Abstract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Control
    Illegal = 0,
    Comment,
    Eof,

    // Literals
    IntLiteral = 4,
    FloatLiteral,
    BoolLiteral,
    CharLiteral,
    StringLiteral,
    NullLiteral,

    // Separators
    LParen = 12, // (
    LBrack,      // [
    LBrace,      // {
    Comma,       // ,
    Period,      // .
    RParen,      // )
    RBrack,      // ]
    RBrace,      // }
    Semicolon,   // ;

    // Operators
    Add = 23,   // +
    Sub,        // -
    Mul,        // *
    Quo,        // /
    Rem,        // %
    Colon,      // :
    Ternary,    // ?
    And,        // &
    Or,         // |
    Xor,        // ^
    Shl,        // <<
    Shr,        // >>
    UShr,       // >>>
    AddAssign,  // +=
    SubAssign,  // -=
    MulAssign,  // *=
    QuoAssign,  // /=
    RemAssign,  // %=
    AndAssign,  // &=
    OrAssign,   // |=
    XorAssign,  // ^=
    ShlAssign,  // <<=
    UShlAssign, // <<<=
    ShrAssign,  // >>=
    UShrAssign, // >>>=
    LAnd,       // &&
    LOr,        // ||
    Inc,        // ++
    Dec,        // --
    Eql,        // ==
    Lss,        // <
    Gtr,        // >
    Assign,     // =
    Not,        // !
    Neq,        // !=
    Leq,        // <=
    Geq,        // >=

    // Keywords
    Abstract = 62,
    Continue,
    For,
    New,
    Switch,
    Assert,
    Default,
    If,
    Package,
    Synchronized,
    Boolean,
    Do,
    Goto,
    Private,
    This,
    Break,
    Double,
    Implements,
    Protected,
    Throw,
    Byte,
    Else,
    Import,
    Public,
    Throws,
    Case,
    Enum,
    Instanceof,
    Return,
    Transient,
    Catch,
    Extends,
    Int,
    Short,
    Try,
    Char,
    Final,
    Interface,
    Static,
    Void,
    Class,
    Finally,
    Long,
    Strictfp,
    Volatile,
    Const,
    Float,
    Native,
    Super,
    While,
}

/// Number of named token kinds (sentinels excluded).
pub const KIND_COUNT: usize = 105;

impl TokenKind {
    /// Every token kind, in ascending ordinal order.
    pub const ALL: [TokenKind; KIND_COUNT] = [
        TokenKind::Illegal,
        TokenKind::Comment,
        TokenKind::Eof,
        TokenKind::IntLiteral,
        TokenKind::FloatLiteral,
        TokenKind::BoolLiteral,
        TokenKind::CharLiteral,
        TokenKind::StringLiteral,
        TokenKind::NullLiteral,
        TokenKind::LParen,
        TokenKind::LBrack,
        TokenKind::LBrace,
        TokenKind::Comma,
        TokenKind::Period,
        TokenKind::RParen,
        TokenKind::RBrack,
        TokenKind::RBrace,
        TokenKind::Semicolon,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Quo,
        TokenKind::Rem,
        TokenKind::Colon,
        TokenKind::Ternary,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::Shl,
        TokenKind::Shr,
        TokenKind::UShr,
        TokenKind::AddAssign,
        TokenKind::SubAssign,
        TokenKind::MulAssign,
        TokenKind::QuoAssign,
        TokenKind::RemAssign,
        TokenKind::AndAssign,
        TokenKind::OrAssign,
        TokenKind::XorAssign,
        TokenKind::ShlAssign,
        TokenKind::UShlAssign,
        TokenKind::ShrAssign,
        TokenKind::UShrAssign,
        TokenKind::LAnd,
        TokenKind::LOr,
        TokenKind::Inc,
        TokenKind::Dec,
        TokenKind::Eql,
        TokenKind::Lss,
        TokenKind::Gtr,
        TokenKind::Assign,
        TokenKind::Not,
        TokenKind::Neq,
        TokenKind::Leq,
        TokenKind::Geq,
        TokenKind::Abstract,
        TokenKind::Continue,
        TokenKind::For,
        TokenKind::New,
        TokenKind::Switch,
        TokenKind::Assert,
        TokenKind::Default,
        TokenKind::If,
        TokenKind::Package,
        TokenKind::Synchronized,
        TokenKind::Boolean,
        TokenKind::Do,
        TokenKind::Goto,
        TokenKind::Private,
        TokenKind::This,
        TokenKind::Break,
        TokenKind::Double,
        TokenKind::Implements,
        TokenKind::Protected,
        TokenKind::Throw,
        TokenKind::Byte,
        TokenKind::Else,
        TokenKind::Import,
        TokenKind::Public,
        TokenKind::Throws,
        TokenKind::Case,
        TokenKind::Enum,
        TokenKind::Instanceof,
        TokenKind::Return,
        TokenKind::Transient,
        TokenKind::Catch,
        TokenKind::Extends,
        TokenKind::Int,
        TokenKind::Short,
        TokenKind::Try,
        TokenKind::Char,
        TokenKind::Final,
        TokenKind::Interface,
        TokenKind::Static,
        TokenKind::Void,
        TokenKind::Class,
        TokenKind::Finally,
        TokenKind::Long,
        TokenKind::Strictfp,
        TokenKind::Volatile,
        TokenKind::Const,
        TokenKind::Float,
        TokenKind::Native,
        TokenKind::Super,
        TokenKind::While,
    ];

    /// The kind's ordinal.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Resolve an ordinal back to its kind.
    ///
    /// ## Returns
    /// - `None` for sentinel ordinals and ordinals past the last assigned kind.
    pub fn from_ordinal(ordinal: u32) -> Option<TokenKind> {
        KIND_BY_ORDINAL.get(ordinal as usize).copied().flatten()
    }

    /// Canonical spelling of this kind.
    ///
    /// The match is exhaustive, so a new kind cannot be added without a spelling.
    pub const fn spelling(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Comment => "COMMENT",
            TokenKind::Eof => "EOF",

            TokenKind::IntLiteral => "INTEGERLITERAL",
            TokenKind::FloatLiteral => "FLOATINGPOINTLITERAL",
            TokenKind::BoolLiteral => "BOOLEANLITERAL",
            TokenKind::CharLiteral => "CHARACTERLITERAL",
            TokenKind::StringLiteral => "STRINGLITERAL",
            TokenKind::NullLiteral => "NULLLITERAL",

            TokenKind::LParen => "(",
            TokenKind::LBrack => "[",
            TokenKind::LBrace => "{",
            TokenKind::Comma => ",",
            TokenKind::Period => ".",
            TokenKind::RParen => ")",
            TokenKind::RBrack => "]",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",

            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Quo => "/",
            TokenKind::Rem => "%",
            TokenKind::Colon => ":",
            TokenKind::Ternary => "?",
            TokenKind::And => "&",
            TokenKind::Or => "|",
            TokenKind::Xor => "^",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::UShr => ">>>",
            TokenKind::AddAssign => "+=",
            TokenKind::SubAssign => "-=",
            TokenKind::MulAssign => "*=",
            TokenKind::QuoAssign => "/=",
            TokenKind::RemAssign => "%=",
            TokenKind::AndAssign => "&=",
            TokenKind::OrAssign => "|=",
            TokenKind::XorAssign => "^=",
            TokenKind::ShlAssign => "<<=",
            TokenKind::UShlAssign => "<<<=",
            TokenKind::ShrAssign => ">>=",
            TokenKind::UShrAssign => ">>>=",
            TokenKind::LAnd => "&&",
            TokenKind::LOr => "||",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::Eql => "==",
            TokenKind::Lss => "<",
            TokenKind::Gtr => ">",
            TokenKind::Assign => "=",
            TokenKind::Not => "!",
            TokenKind::Neq => "!=",
            TokenKind::Leq => "<=",
            TokenKind::Geq => ">=",

            TokenKind::Abstract => "abstract",
            TokenKind::Continue => "continue",
            TokenKind::For => "for",
            TokenKind::New => "new",
            TokenKind::Switch => "switch",
            TokenKind::Assert => "assert",
            TokenKind::Default => "default",
            TokenKind::If => "if",
            TokenKind::Package => "package",
            TokenKind::Synchronized => "synchronized",
            TokenKind::Boolean => "boolean",
            TokenKind::Do => "do",
            TokenKind::Goto => "goto",
            TokenKind::Private => "private",
            TokenKind::This => "this",
            TokenKind::Break => "break",
            TokenKind::Double => "double",
            TokenKind::Implements => "implements",
            TokenKind::Protected => "protected",
            TokenKind::Throw => "throw",
            TokenKind::Byte => "byte",
            TokenKind::Else => "else",
            TokenKind::Import => "import",
            TokenKind::Public => "public",
            TokenKind::Throws => "throws",
            TokenKind::Case => "case",
            TokenKind::Enum => "enum",
            TokenKind::Instanceof => "instanceof",
            TokenKind::Return => "return",
            TokenKind::Transient => "transient",
            TokenKind::Catch => "catch",
            TokenKind::Extends => "extends",
            TokenKind::Int => "int",
            TokenKind::Short => "short",
            TokenKind::Try => "try",
            TokenKind::Char => "char",
            TokenKind::Final => "final",
            TokenKind::Interface => "interface",
            TokenKind::Static => "static",
            TokenKind::Void => "void",
            TokenKind::Class => "class",
            TokenKind::Finally => "finally",
            TokenKind::Long => "long",
            TokenKind::Strictfp => "strictfp",
            TokenKind::Volatile => "volatile",
            TokenKind::Const => "const",
            TokenKind::Float => "float",
            TokenKind::Native => "native",
            TokenKind::Super => "super",
            TokenKind::While => "while",
        }
    }

    /// Category this kind belongs to.
    pub const fn category(self) -> TokenCategory {
        match registry::category_of_ordinal(self.ordinal() as u32) {
            Some(category) => category,
            // Named kinds never sit on a sentinel; see the assertion at the bottom of this file.
            None => TokenCategory::Control,
        }
    }

    /// Return `true` for integer, floating-point, boolean, character, string, and null literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        registry::is_literal_ordinal(self.ordinal() as u32)
    }

    /// Return `true` for `( [ { , . ) ] } ;`.
    #[inline]
    pub const fn is_separator(self) -> bool {
        registry::is_separator_ordinal(self.ordinal() as u32)
    }

    /// Return `true` for arithmetic, bitwise, logical, relational, assignment, and ternary operators.
    #[inline]
    pub const fn is_operator(self) -> bool {
        registry::is_operator_ordinal(self.ordinal() as u32)
    }

    /// Return `true` for reserved words.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        registry::is_keyword_ordinal(self.ordinal() as u32)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// One row of the display table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInfo {
    pub kind: TokenKind,
    pub spelling: &'static str,
}

/// Display table: one row per kind, ascending by ordinal.
pub const TOKENS: [TokenInfo; KIND_COUNT] = {
    let mut rows = [TokenInfo {
        kind: TokenKind::Illegal,
        spelling: "",
    }; KIND_COUNT];
    let mut i = 0;
    while i < KIND_COUNT {
        let kind = TokenKind::ALL[i];
        rows[i] = TokenInfo {
            kind,
            spelling: kind.spelling(),
        };
        i += 1;
    }
    rows
};

/// Dense ordinal → kind table; `None` marks sentinels.
const KIND_BY_ORDINAL: [Option<TokenKind>; ORDINAL_LIMIT] = {
    let mut table = [None; ORDINAL_LIMIT];
    let mut i = 0;
    while i < KIND_COUNT {
        let kind = TokenKind::ALL[i];
        table[kind.ordinal() as usize] = Some(kind);
        i += 1;
    }
    table
};

/// Render a kind as its canonical spelling.
///
/// ## Examples
/// ```rust
/// use javelin_core::lang::tokens::{self, TokenKind};
///
/// assert_eq!(tokens::render(TokenKind::IntLiteral), "INTEGERLITERAL");
/// assert_eq!(tokens::render(TokenKind::AddAssign), "+=");
/// ```
#[inline]
pub const fn render(kind: TokenKind) -> &'static str {
    kind.spelling()
}

/// Render an arbitrary ordinal.
///
/// ## Returns
/// - The canonical spelling for assigned ordinals.
/// - `token(<ordinal>)` for sentinels and ordinals past the last assigned kind.
///
/// ## Notes
/// - The fallback format is stable; error reporting may match on it.
pub fn render_ordinal(ordinal: u32) -> Cow<'static, str> {
    match TokenKind::from_ordinal(ordinal) {
        Some(kind) => Cow::Borrowed(kind.spelling()),
        None => Cow::Owned(format!("token({ordinal})")),
    }
}

/// Resolve a separator or operator symbol to its kind.
///
/// ## Returns
/// - `Some(TokenKind)` if `symbol` is exactly the spelling of a separator or operator.
/// - `None` otherwise, including keyword spellings (use [`crate::lang::keywords::classify`]) and labels such
///   as `"EOF"`.
pub fn from_spelling(symbol: &str) -> Option<TokenKind> {
    TOKENS
        .iter()
        .find(|t| (t.kind.is_separator() || t.kind.is_operator()) && t.spelling == symbol)
        .map(|t| t.kind)
}

// --- build-time checks -------------------------------------------------------

const fn check_registry() {
    let mut i = 0;
    let mut prev: i32 = -1;
    while i < KIND_COUNT {
        let kind = TokenKind::ALL[i];
        let ordinal = kind.ordinal() as u32;
        assert!((ordinal as i32) > prev, "TokenKind::ALL must be strictly ascending");
        assert!(!registry::is_sentinel(ordinal), "a token kind sits on a sentinel ordinal");
        assert!((ordinal as usize) < ORDINAL_LIMIT, "a token kind lies past the keyword range");
        assert!(!kind.spelling().is_empty(), "every token kind needs a spelling");
        prev = ordinal as i32;
        i += 1;
    }

    // Every non-sentinel ordinal below the limit must be named.
    let mut ordinal = 0;
    let mut named = 0;
    while ordinal < ORDINAL_LIMIT as u32 {
        if !registry::is_sentinel(ordinal) {
            named += 1;
        }
        ordinal += 1;
    }
    assert!(named == KIND_COUNT, "TokenKind::ALL does not cover every assigned ordinal");
}

const _: () = check_registry();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_layout() {
        assert_eq!(TokenKind::Illegal.ordinal(), 0);
        assert_eq!(TokenKind::Eof.ordinal(), 2);
        assert_eq!(TokenKind::IntLiteral.ordinal(), 4);
        assert_eq!(TokenKind::Semicolon.ordinal(), 20);
        assert_eq!(TokenKind::Geq.ordinal(), 59);
        assert_eq!(TokenKind::Abstract.ordinal(), 62);
        assert_eq!(TokenKind::While.ordinal(), 111);
    }

    #[test]
    fn test_render_symbols_and_labels() {
        assert_eq!(render(TokenKind::UShr), ">>>");
        assert_eq!(render(TokenKind::UShlAssign), "<<<=");
        assert_eq!(render(TokenKind::StringLiteral), "STRINGLITERAL");
        assert_eq!(render(TokenKind::Instanceof), "instanceof");
        assert_eq!(TokenKind::Semicolon.to_string(), ";");
    }

    #[test]
    fn test_render_ordinal_fallback() {
        assert_eq!(render_ordinal(0), "ILLEGAL");
        for sentinel in [3, 10, 11, 21, 22, 60, 61, 112] {
            assert_eq!(render_ordinal(sentinel), format!("token({sentinel})"));
        }
        assert_eq!(render_ordinal(500), "token(500)");
        assert_eq!(render_ordinal(u32::MAX), format!("token({})", u32::MAX));
    }

    #[test]
    fn test_from_ordinal_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(TokenKind::from_ordinal(kind.ordinal() as u32), Some(kind));
        }
        assert_eq!(TokenKind::from_ordinal(10), None);
    }

    #[test]
    fn test_from_spelling_rejects_keywords_and_labels() {
        assert_eq!(from_spelling(">>>="), Some(TokenKind::UShrAssign));
        assert_eq!(from_spelling(";"), Some(TokenKind::Semicolon));
        assert_eq!(from_spelling("while"), None);
        assert_eq!(from_spelling("EOF"), None);
        assert_eq!(from_spelling(""), None);
    }

    #[test]
    fn test_category_of_kinds() {
        assert_eq!(TokenKind::Comment.category(), TokenCategory::Control);
        assert_eq!(TokenKind::NullLiteral.category(), TokenCategory::Literal);
        assert_eq!(TokenKind::Period.category(), TokenCategory::Separator);
        assert_eq!(TokenKind::Colon.category(), TokenCategory::Operator);
        assert_eq!(TokenKind::Strictfp.category(), TokenCategory::Keyword);
    }
}
