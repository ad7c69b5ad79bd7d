//! Render the token registry as a Markdown reference.
//!
//! The output is deterministic: sections follow ordinal order and every table is derived from
//! [`crate::lang::tokens::TOKENS`] and [`crate::lang::precedence`]. Do not edit generated copies by hand;
//! regenerate with `javelin reference --output <PATH>`.

use super::precedence::{self, Associativity};
use super::registry::TokenCategory;
use super::tokens::{TOKENS, TokenInfo};

/// Render the full reference document.
pub fn render_markdown() -> String {
    let mut out = String::new();
    out.push_str("# Javelin token reference\n\n");
    out.push_str("> Generated file. Regenerate with `javelin reference`.\n\n");

    out.push_str("## Contents\n\n");
    for category in TokenCategory::ALL {
        out.push_str(&format!("- [{}](#{})\n", heading(category), anchor(category)));
    }

    for category in TokenCategory::ALL {
        render_section(&mut out, category);
    }

    trim_trailing_newlines(&mut out);
    out.push('\n');
    out
}

fn render_section(out: &mut String, category: TokenCategory) {
    start_section(out, &format!("## {}", heading(category)));

    let rows = TOKENS.iter().filter(|t| t.kind.category() == category);
    match category {
        TokenCategory::Operator => {
            out.push_str("| Kind | Ordinal | Spelling | Precedence | Associativity |\n");
            out.push_str("|---|---|---|---|---|\n");
            for t in rows {
                let prec = precedence::precedence(t.kind);
                let prec = if prec == precedence::LOWEST_PREC {
                    String::new()
                } else {
                    prec.to_string()
                };
                let assoc = match precedence::associativity(t.kind) {
                    Associativity::Left => "left",
                    Associativity::Right => "right",
                    Associativity::None => "",
                };
                out.push_str(&format!(
                    "| {:?} | {} | {} | {} | {} |\n",
                    t.kind,
                    t.kind.ordinal(),
                    code(t),
                    prec,
                    assoc
                ));
            }
        }
        _ => {
            out.push_str("| Kind | Ordinal | Spelling |\n");
            out.push_str("|---|---|---|\n");
            for t in rows {
                out.push_str(&format!("| {:?} | {} | {} |\n", t.kind, t.kind.ordinal(), code(t)));
            }
        }
    }
}

fn heading(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Control => "Control",
        TokenCategory::Literal => "Literals",
        TokenCategory::Separator => "Separators",
        TokenCategory::Operator => "Operators",
        TokenCategory::Keyword => "Keywords",
    }
}

fn anchor(category: TokenCategory) -> &'static str {
    category.label()
}

/// Wrap a spelling in backticks, escaping `|` so it survives inside a table cell.
fn code(t: &TokenInfo) -> String {
    format!("`{}`", t.spelling.replace('|', "\\|"))
}

fn start_section(out: &mut String, heading: &str) {
    trim_trailing_newlines(out);
    out.push_str("\n\n");
    out.push_str(heading);
    out.push_str("\n\n");
}

fn trim_trailing_newlines(out: &mut String) {
    while out.ends_with('\n') {
        out.pop();
    }
}
