//! Keyword index and identifier classification.
//!
//! The keyword index is the inverse of the keyword slice of the display table: spelling → [`TokenKind`].
//! It is built once, on first use, and shared read-only afterwards.
//!
//! ## Notes
//! - Matching is **case-sensitive** and byte-exact: `"While"` is not `while`.
//! - [`classify`] never fails. Text that is not a keyword classifies as [`TokenKind::StringLiteral`], the
//!   kind the scanner uses for user-defined names.
//!
//! ## Examples
//! ```rust
//! use javelin_core::lang::keywords;
//! use javelin_core::lang::tokens::TokenKind;
//!
//! assert_eq!(keywords::classify("while"), TokenKind::While);
//! assert_eq!(keywords::classify("While"), TokenKind::StringLiteral);
//! assert_eq!(keywords::keyword("counter"), None);
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use super::tokens::{TOKENS, TokenInfo, TokenKind};

/// Kind returned by [`classify`] for any text that is not a keyword.
pub const IDENTIFIER_FALLBACK: TokenKind = TokenKind::StringLiteral;

/// Read-only spelling → keyword lookup.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    by_spelling: HashMap<&'static str, TokenKind>,
}

impl KeywordIndex {
    /// Build an index from the keyword rows of a display table.
    ///
    /// Rows outside the keyword range are ignored, as are keyword rows with an empty spelling. Use
    /// [`crate::lang::registry::validate_table`] to reject such tables instead.
    #[tracing::instrument(skip_all, fields(rows = rows.len()))]
    pub fn from_table(rows: &[TokenInfo]) -> Self {
        let by_spelling: HashMap<&'static str, TokenKind> = rows
            .iter()
            .filter(|row| row.kind.is_keyword() && !row.spelling.is_empty())
            .map(|row| (row.spelling, row.kind))
            .collect();
        tracing::debug!(keywords = by_spelling.len(), "built keyword index");
        Self { by_spelling }
    }

    /// Look up a keyword by exact spelling.
    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.by_spelling.get(text).copied()
    }

    /// Number of indexed keywords.
    pub fn len(&self) -> usize {
        self.by_spelling.len()
    }

    /// Return `true` if the index holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.by_spelling.is_empty()
    }

    /// Iterate over `(spelling, kind)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.by_spelling.iter().map(|(s, k)| (*s, *k))
    }
}

static KEYWORD_INDEX: OnceLock<KeywordIndex> = OnceLock::new();

/// The process-wide keyword index over [`TOKENS`].
pub fn keyword_index() -> &'static KeywordIndex {
    KEYWORD_INDEX.get_or_init(|| KeywordIndex::from_table(&TOKENS))
}

/// Probe whether `text` is a keyword.
///
/// ## Returns
/// - `Some(TokenKind)` for an exact keyword spelling.
/// - `None` otherwise.
pub fn keyword(text: &str) -> Option<TokenKind> {
    keyword_index().get(text)
}

/// Classify identifier text as a keyword or a plain name.
///
/// ## Returns
/// - The keyword kind if `text` exactly matches a keyword spelling.
/// - [`IDENTIFIER_FALLBACK`] otherwise, including for `""`.
pub fn classify(text: &str) -> TokenKind {
    keyword(text).unwrap_or(IDENTIFIER_FALLBACK)
}
