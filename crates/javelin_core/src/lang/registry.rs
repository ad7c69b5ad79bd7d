//! Category layout and consistency checks for the token registry.
//!
//! Token kinds live in one flat ordinal space. Each category occupies a contiguous range bracketed by two
//! sentinel ordinals that no kind ever uses:
//!
//! | Range (exclusive) | Category |
//! |---|---|
//! | `3 .. 10` | literals |
//! | `11 .. 21` | separators |
//! | `22 .. 60` | operators |
//! | `61 .. 112` | keywords |
//!
//! Ordinals below the first sentinel are control kinds (`ILLEGAL`, `COMMENT`, `EOF`).
//!
//! ## Notes
//! - Every predicate here is total over `u32`; unassigned ordinals simply answer `false`/`None`.
//! - [`validate_table`] re-checks a display table at runtime and reports the first inconsistency as a
//!   [`RegistryError`]. The built-in table is also checked at compile time in [`crate::lang::tokens`].

use std::collections::HashMap;

use crate::errors::RegistryError;

use super::tokens::{TokenInfo, TokenKind};

const LITERALS_BEG: u32 = 3;
const LITERALS_END: u32 = 10;
const SEPARATORS_BEG: u32 = 11;
const SEPARATORS_END: u32 = 21;
const OPERATORS_BEG: u32 = 22;
const OPERATORS_END: u32 = 60;
const KEYWORDS_BEG: u32 = 61;
const KEYWORDS_END: u32 = 112;

/// One past the highest ordinal that could name a kind.
pub(crate) const ORDINAL_LIMIT: usize = KEYWORDS_END as usize;

/// Broad lexical grouping of a token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// `ILLEGAL`, `COMMENT`, `EOF`.
    Control,
    Literal,
    Separator,
    Operator,
    Keyword,
}

impl TokenCategory {
    /// Every category, in ordinal order.
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Control,
        TokenCategory::Literal,
        TokenCategory::Separator,
        TokenCategory::Operator,
        TokenCategory::Keyword,
    ];

    /// Human-readable plural label, for docs and CLI output.
    pub const fn label(self) -> &'static str {
        match self {
            TokenCategory::Control => "control",
            TokenCategory::Literal => "literals",
            TokenCategory::Separator => "separators",
            TokenCategory::Operator => "operators",
            TokenCategory::Keyword => "keywords",
        }
    }
}

#[inline]
pub(crate) const fn is_literal_ordinal(ordinal: u32) -> bool {
    LITERALS_BEG < ordinal && ordinal < LITERALS_END
}

#[inline]
pub(crate) const fn is_separator_ordinal(ordinal: u32) -> bool {
    SEPARATORS_BEG < ordinal && ordinal < SEPARATORS_END
}

#[inline]
pub(crate) const fn is_operator_ordinal(ordinal: u32) -> bool {
    OPERATORS_BEG < ordinal && ordinal < OPERATORS_END
}

#[inline]
pub(crate) const fn is_keyword_ordinal(ordinal: u32) -> bool {
    KEYWORDS_BEG < ordinal && ordinal < KEYWORDS_END
}

/// Return `true` if `ordinal` is one of the eight range markers.
pub const fn is_sentinel(ordinal: u32) -> bool {
    matches!(
        ordinal,
        LITERALS_BEG
            | LITERALS_END
            | SEPARATORS_BEG
            | SEPARATORS_END
            | OPERATORS_BEG
            | OPERATORS_END
            | KEYWORDS_BEG
            | KEYWORDS_END
    )
}

/// Classify a raw ordinal.
///
/// ## Returns
/// - `Some(TokenCategory)` for ordinals inside a category range (control: below the first sentinel).
/// - `None` for sentinels and for ordinals past the keyword range.
///
/// ## Examples
/// ```rust
/// use javelin_core::lang::registry::{self, TokenCategory};
///
/// assert_eq!(registry::category_of_ordinal(0), Some(TokenCategory::Control));
/// assert_eq!(registry::category_of_ordinal(25), Some(TokenCategory::Operator));
/// assert_eq!(registry::category_of_ordinal(60), None);
/// assert_eq!(registry::category_of_ordinal(9_000), None);
/// ```
pub const fn category_of_ordinal(ordinal: u32) -> Option<TokenCategory> {
    if ordinal < LITERALS_BEG {
        Some(TokenCategory::Control)
    } else if is_literal_ordinal(ordinal) {
        Some(TokenCategory::Literal)
    } else if is_separator_ordinal(ordinal) {
        Some(TokenCategory::Separator)
    } else if is_operator_ordinal(ordinal) {
        Some(TokenCategory::Operator)
    } else if is_keyword_ordinal(ordinal) {
        Some(TokenCategory::Keyword)
    } else {
        None
    }
}

/// Check a display table for consistency.
///
/// ## Parameters
/// - `rows`: candidate display table (normally [`crate::lang::tokens::TOKENS`]).
///
/// ## Returns
/// - `Ok(())` if rows are strictly ascending by ordinal, every spelling is non-empty and unique, and every keyword
///   kind has a row.
/// - The first [`RegistryError`] found otherwise.
///
/// ## Notes
/// - A keyword without a row would be silently missing from the keyword index and classified as a plain
///   identifier, which is why that case has its own error.
pub fn validate_table(rows: &[TokenInfo]) -> Result<(), RegistryError> {
    let mut previous: Option<TokenKind> = None;
    let mut seen: HashMap<&'static str, TokenKind> = HashMap::with_capacity(rows.len());

    for row in rows {
        if let Some(prev) = previous {
            if row.kind <= prev {
                return Err(RegistryError::OutOfOrder { kind: row.kind, previous: prev });
            }
        }
        previous = Some(row.kind);

        if row.spelling.is_empty() {
            return Err(RegistryError::EmptySpelling { kind: row.kind });
        }

        if let Some(first) = seen.insert(row.spelling, row.kind) {
            return Err(RegistryError::DuplicateSpelling {
                spelling: row.spelling,
                first,
                second: row.kind,
            });
        }
    }

    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_keyword()) {
        if !rows.iter().any(|row| row.kind == kind) {
            return Err(RegistryError::MissingKeyword { kind });
        }
    }

    Ok(())
}
