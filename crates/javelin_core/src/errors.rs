//! Error types for the token registry.
//!
//! Queries (`render`, `classify`, `precedence`, the category predicates) are total and never fail.
//! The only failure mode is an inconsistent display table, reported by
//! [`crate::lang::registry::validate_table`].

use thiserror::Error;

use crate::lang::tokens::TokenKind;

/// An inconsistency in a token display table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("token table is out of order: {kind:?} follows {previous:?}")]
    OutOfOrder { kind: TokenKind, previous: TokenKind },

    #[error("token {kind:?} has an empty spelling")]
    EmptySpelling { kind: TokenKind },

    #[error("spelling {spelling:?} is used by both {first:?} and {second:?}")]
    DuplicateSpelling {
        spelling: &'static str,
        first: TokenKind,
        second: TokenKind,
    },

    /// A keyword without a row would be classified as a plain identifier.
    #[error("keyword {kind:?} has no entry in the token table")]
    MissingKeyword { kind: TokenKind },
}
