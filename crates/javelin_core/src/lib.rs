//! Token-kind vocabulary for the Javelin (Java-like) language front-end.
//!
//! This crate is intentionally small: it holds the shared enumeration of token kinds and the lookup tables a
//! scanner and parser depend on. There is no scanner, parser, or AST here.
//!
//! ## Notes
//!
//! - No IO. The only global state is the lazily built, read-only keyword index.
//! - Every query is total: unknown kinds render as `token(N)`, unknown identifiers classify as
//!   [`TokenKind::StringLiteral`], and non-operators have precedence [`LOWEST_PREC`].

pub mod errors;
pub mod lang;

pub use errors::RegistryError;
pub use lang::keywords::{classify, keyword};
pub use lang::precedence::{HIGHEST_PREC, LOWEST_PREC, POSTFIX_PREC, Precedence, UNARY_PREC, precedence};
pub use lang::registry::TokenCategory;
pub use lang::tokens::{TokenKind, render, render_ordinal};

/// Return `true` if `kind` is a literal kind.
#[inline]
pub const fn is_literal(kind: TokenKind) -> bool {
    kind.is_literal()
}

/// Return `true` if `kind` is an operator kind.
#[inline]
pub const fn is_operator(kind: TokenKind) -> bool {
    kind.is_operator()
}

/// Return `true` if `kind` is a keyword kind.
#[inline]
pub const fn is_keyword(kind: TokenKind) -> bool {
    kind.is_keyword()
}

/// Return `true` if `kind` is a separator kind.
#[inline]
pub const fn is_separator(kind: TokenKind) -> bool {
    kind.is_separator()
}
