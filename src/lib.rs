#![forbid(unsafe_code)]
//! Javelin token vocabulary tooling
//!
//! This crate wraps [`javelin_core`] in a small command-line tool for inspecting the token registry:
//! rendering kinds and ordinals, classifying identifiers, resolving operator symbols, checking the
//! registry, and generating the Markdown reference.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use javelin_core::lang;
pub use javelin_core::{TokenKind, classify, precedence, render, render_ordinal};
