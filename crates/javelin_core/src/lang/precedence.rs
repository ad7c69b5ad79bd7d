//! Binary-operator precedence for a precedence-climbing expression parser.
//!
//! Higher values bind tighter. Kinds outside the table (including `:`, `!`, `++`, `--`, separators,
//! keywords other than `instanceof`, and literals) have [`LOWEST_PREC`], so a parser stops there.
//!
//! | Level | Operators | Associativity |
//! |---|---|---|
//! | 1 | `=` and every compound assignment | right |
//! | 2 | `?` | right |
//! | 3 | `\|\|` | left |
//! | 4 | `&&` | left |
//! | 5 | `\|` | left |
//! | 6 | `^` | left |
//! | 7 | `&` | left |
//! | 8 | `==` `!=` | left |
//! | 9 | `<` `>` `<=` `>=` `instanceof` | left |
//! | 10 | `<<` `>>` `>>>` | left |
//! | 11 | `+` `-` | left |
//! | 12 | `*` `/` `%` | left |
//!
//! Prefix and postfix forms are not infix operators; parsers consult [`UNARY_PREC`] and [`POSTFIX_PREC`]
//! directly when handling them.
//!
//! ## Examples
//! ```rust
//! use javelin_core::lang::precedence::{self, Associativity};
//! use javelin_core::lang::tokens::TokenKind;
//!
//! assert!(precedence::precedence(TokenKind::Mul) > precedence::precedence(TokenKind::Add));
//! assert_eq!(precedence::precedence(TokenKind::Semicolon), precedence::LOWEST_PREC);
//! assert_eq!(precedence::associativity(TokenKind::Assign), Associativity::Right);
//! ```

use super::tokens::TokenKind;

/// Binding strength of an operator.
pub type Precedence = u16;

/// Precedence of every non-operator.
pub const LOWEST_PREC: Precedence = 0;
/// Level for unary prefix operators (`-x`, `!x`, `++x`).
pub const UNARY_PREC: Precedence = 13;
/// Level for postfix operators (`x++`, `x--`).
pub const POSTFIX_PREC: Precedence = 14;
/// Upper sentinel: no operator binds this tightly.
pub const HIGHEST_PREC: Precedence = 999;

/// How chained operators of one level group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    /// Not a binary operator.
    None,
}

/// Binary precedence of `kind`; [`LOWEST_PREC`] for anything not in the table.
pub const fn precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Assign
        | TokenKind::AddAssign
        | TokenKind::SubAssign
        | TokenKind::MulAssign
        | TokenKind::QuoAssign
        | TokenKind::RemAssign
        | TokenKind::AndAssign
        | TokenKind::OrAssign
        | TokenKind::XorAssign
        | TokenKind::ShlAssign
        | TokenKind::UShlAssign
        | TokenKind::ShrAssign
        | TokenKind::UShrAssign => 1,
        TokenKind::Ternary => 2,
        TokenKind::LOr => 3,
        TokenKind::LAnd => 4,
        TokenKind::Or => 5,
        TokenKind::Xor => 6,
        TokenKind::And => 7,
        TokenKind::Eql | TokenKind::Neq => 8,
        TokenKind::Lss | TokenKind::Gtr | TokenKind::Leq | TokenKind::Geq | TokenKind::Instanceof => 9,
        TokenKind::Shl | TokenKind::Shr | TokenKind::UShr => 10,
        TokenKind::Add | TokenKind::Sub => 11,
        TokenKind::Mul | TokenKind::Quo | TokenKind::Rem => 12,
        _ => LOWEST_PREC,
    }
}

/// Associativity of `kind` as a binary operator.
pub const fn associativity(kind: TokenKind) -> Associativity {
    match precedence(kind) {
        LOWEST_PREC => Associativity::None,
        1 | 2 => Associativity::Right,
        _ => Associativity::Left,
    }
}

/// Return `true` if `kind` is a binary (infix) operator, i.e. has a precedence above [`LOWEST_PREC`].
#[inline]
pub const fn is_binary(kind: TokenKind) -> bool {
    precedence(kind) > LOWEST_PREC
}

/// Return `true` if `a` binds strictly tighter than `b`.
#[inline]
pub const fn binds_tighter(a: TokenKind, b: TokenKind) -> bool {
    precedence(a) > precedence(b)
}
