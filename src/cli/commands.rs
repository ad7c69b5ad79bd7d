//! CLI command implementations
//!
//! All command functions write to the given writer and return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::Write;
use std::path::Path;

use javelin_core::lang::precedence::{self, Associativity};
use javelin_core::lang::tokens::{self, TOKENS, TokenKind};
use javelin_core::lang::{keywords, reference, registry};

use super::{CliError, CliResult, ExitCode};

/// Print the spelling of an ordinal, or its `token(N)` fallback.
pub fn render(out: &mut dyn Write, ordinal: u32) -> CliResult<ExitCode> {
    writeln!(out, "{}", tokens::render_ordinal(ordinal))?;
    Ok(ExitCode::SUCCESS)
}

/// Print the kind identifier text classifies as.
pub fn classify(out: &mut dyn Write, text: &str) -> CliResult<ExitCode> {
    let kind = keywords::classify(text);
    writeln!(out, "{kind:?} {kind}")?;
    Ok(ExitCode::SUCCESS)
}

/// Print the kind of a separator or operator symbol.
pub fn lookup(out: &mut dyn Write, symbol: &str) -> CliResult<ExitCode> {
    let kind = tokens::from_spelling(symbol)
        .ok_or_else(|| CliError::failure(format!("Error: `{symbol}` is not a separator or operator")))?;
    writeln!(out, "{kind:?} ordinal={} category={}", kind.ordinal(), kind.category().label())?;
    Ok(ExitCode::SUCCESS)
}

/// Print precedence and associativity of an operator symbol (or `instanceof`).
pub fn precedence(out: &mut dyn Write, symbol: &str) -> CliResult<ExitCode> {
    let kind = resolve_operator(symbol)?;
    let assoc = match precedence::associativity(kind) {
        Associativity::Left => "left",
        Associativity::Right => "right",
        Associativity::None => "none",
    };
    writeln!(out, "{kind:?} precedence={} assoc={assoc}", precedence::precedence(kind))?;
    Ok(ExitCode::SUCCESS)
}

/// Validate the built-in token table.
pub fn check(out: &mut dyn Write) -> CliResult<ExitCode> {
    registry::validate_table(&TOKENS)?;
    let index = keywords::keyword_index();
    writeln!(out, "ok: {} kinds, {} keywords", TOKENS.len(), index.len())?;
    Ok(ExitCode::SUCCESS)
}

/// Write the Markdown reference to `output`, or to `out` when no path is given.
pub fn reference(out: &mut dyn Write, output: Option<&Path>) -> CliResult<ExitCode> {
    let md = reference::render_markdown();
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    CliError::failure(format!("Error creating {}: {e}", parent.display()))
                })?;
            }
            fs::write(path, md)
                .map_err(|e| CliError::failure(format!("Error writing {}: {e}", path.display())))?;
            tracing::info!(path = %path.display(), "wrote token reference");
            writeln!(out, "wrote {}", path.display())?;
        }
        None => out.write_all(md.as_bytes())?,
    }
    Ok(ExitCode::SUCCESS)
}

fn resolve_operator(symbol: &str) -> CliResult<TokenKind> {
    let kind = tokens::from_spelling(symbol).or_else(|| keywords::keyword(symbol));
    match kind {
        Some(kind) if kind.is_operator() || precedence::is_binary(kind) => Ok(kind),
        Some(kind) => Err(CliError::failure(format!("Error: `{symbol}` ({kind:?}) is not an operator"))),
        None => Err(CliError::failure(format!("Error: unknown operator `{symbol}`"))),
    }
}
