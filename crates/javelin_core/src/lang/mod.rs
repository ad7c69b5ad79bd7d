//! Javelin lexical vocabulary.
//!
//! This module is the "front door" for the token-kind registry and the services derived from it:
//!
//! - [`tokens`]: the [`tokens::TokenKind`] enumeration, category predicates, and the display table.
//! - [`registry`]: category ranges, ordinal-level predicates, and table validation.
//! - [`keywords`]: the keyword index and identifier classification.
//! - [`precedence`]: binary-operator precedence and associativity.
//! - [`reference`]: Markdown rendering of all of the above.
//!
//! ## Notes
//! - Everything here is pure. The keyword index is the only lazily built value, and it is immutable once built.
//!
//! ## Examples
//! ```rust
//! use javelin_core::lang::{keywords, precedence, tokens::TokenKind};
//!
//! assert_eq!(keywords::classify("for"), TokenKind::For);
//! assert_eq!(TokenKind::For.to_string(), "for");
//! assert_eq!(precedence::precedence(TokenKind::Rem), 12);
//! ```

pub mod keywords;
pub mod precedence;
pub mod reference;
pub mod registry;
pub mod tokens;
