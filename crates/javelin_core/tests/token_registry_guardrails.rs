use std::collections::HashMap;

use javelin_core::lang::precedence::{self, Associativity};
use javelin_core::lang::registry::{self, TokenCategory};
use javelin_core::lang::keywords;
use javelin_core::lang::tokens::{self, TOKENS, TokenKind};
use javelin_core::{is_keyword, is_literal, is_operator, is_separator};
use proptest::prelude::*;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, TokenKind> = HashMap::new();

    for info in TOKENS.iter().filter(|t| t.kind.is_keyword()) {
        assert!(!info.spelling.is_empty(), "keyword {:?} has no spelling", info.kind);
        assert_eq!(
            keywords::classify(info.spelling),
            info.kind,
            "keyword spelling not resolvable: {}",
            info.spelling
        );
        assert_eq!(tokens::render(info.kind), info.spelling);

        if let Some(prev) = seen.insert(info.spelling, info.kind) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.kind
            );
        }
    }
    assert_eq!(seen.len(), keywords::keyword_index().len());
}

#[test]
fn symbols_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, TokenKind> = HashMap::new();

    for info in TOKENS.iter().filter(|t| t.kind.is_separator() || t.kind.is_operator()) {
        assert_eq!(
            tokens::from_spelling(info.spelling),
            Some(info.kind),
            "symbol not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.kind) {
            panic!("duplicate symbol spelling {:?}: {:?} and {:?}", info.spelling, prev, info.kind);
        }
    }
}

#[test]
fn every_kind_renders_non_empty_and_round_trips() {
    for kind in TokenKind::ALL {
        let text = tokens::render(kind);
        assert!(!text.is_empty(), "{kind:?} renders empty");
        assert_eq!(tokens::render_ordinal(kind.ordinal() as u32), text);
        if kind.is_keyword() {
            assert_eq!(keywords::classify(text), kind);
        } else {
            assert_eq!(keywords::keyword(text), None, "{kind:?} spelling collides with a keyword");
        }
    }
}

#[test]
fn category_predicates_are_disjoint() {
    let mut control = Vec::new();
    for kind in TokenKind::ALL {
        let hits = [is_literal(kind), is_separator(kind), is_operator(kind), is_keyword(kind)]
            .into_iter()
            .filter(|hit| *hit)
            .count();
        match hits {
            0 => control.push(kind),
            1 => {}
            _ => panic!("{kind:?} is in more than one category"),
        }
        assert_eq!(registry::category_of_ordinal(kind.ordinal() as u32), Some(kind.category()));
    }
    assert_eq!(control, vec![TokenKind::Illegal, TokenKind::Comment, TokenKind::Eof]);
}

#[test]
fn category_sizes_match_layout() {
    let count = |category: TokenCategory| TokenKind::ALL.iter().filter(|k| k.category() == category).count();
    assert_eq!(count(TokenCategory::Control), 3);
    assert_eq!(count(TokenCategory::Literal), 6);
    assert_eq!(count(TokenCategory::Separator), 9);
    assert_eq!(count(TokenCategory::Operator), 37);
    assert_eq!(count(TokenCategory::Keyword), 50);
}

#[test]
fn render_fallback_past_last_kind() {
    let last = TokenKind::While.ordinal() as u32;
    assert_eq!(tokens::render_ordinal(last + 1), format!("token({})", last + 1));
    assert_eq!(tokens::render_ordinal(last + 100), format!("token({})", last + 100));
}

#[test]
fn precedence_levels_are_strictly_ordered() {
    let levels: [&[TokenKind]; 12] = [
        &[
            TokenKind::Assign,
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
        ],
        &[TokenKind::Ternary],
        &[TokenKind::LOr],
        &[TokenKind::LAnd],
        &[TokenKind::Or],
        &[TokenKind::Xor],
        &[TokenKind::And],
        &[TokenKind::Eql, TokenKind::Neq],
        &[TokenKind::Lss, TokenKind::Gtr, TokenKind::Leq, TokenKind::Geq, TokenKind::Instanceof],
        &[TokenKind::Shl, TokenKind::Shr, TokenKind::UShr],
        &[TokenKind::Add, TokenKind::Sub],
        &[TokenKind::Mul, TokenKind::Quo, TokenKind::Rem],
    ];

    // Pairwise: same level ties, higher level always binds tighter.
    for (i, lower) in levels.iter().enumerate() {
        for a in lower.iter() {
            for b in lower.iter() {
                assert_eq!(precedence::precedence(*a), precedence::precedence(*b), "{a:?} vs {b:?}");
            }
            for higher in &levels[i + 1..] {
                for b in higher.iter() {
                    assert!(precedence::binds_tighter(*b, *a), "{b:?} should bind tighter than {a:?}");
                }
            }
        }
    }

    let tabled: usize = levels.iter().map(|l| l.len()).sum();
    let binary = TokenKind::ALL.iter().filter(|k| precedence::is_binary(**k)).count();
    assert_eq!(tabled, binary, "a kind has a precedence but is missing from this test's table");
}

/// Minimal precedence-climbing parser over kinds, rendering a fully parenthesized string.
fn parse_expr(kinds: &[TokenKind], pos: &mut usize, min_prec: precedence::Precedence) -> String {
    let mut lhs = match kinds[*pos] {
        TokenKind::StringLiteral => "x".to_string(),
        other => panic!("expected operand, found {other}"),
    };
    *pos += 1;

    while *pos < kinds.len() {
        let op = kinds[*pos];
        let prec = precedence::precedence(op);
        if prec == precedence::LOWEST_PREC || prec < min_prec {
            break;
        }
        *pos += 1;
        let next_min = match precedence::associativity(op) {
            Associativity::Right => prec,
            _ => prec + 1,
        };
        let rhs = parse_expr(kinds, pos, next_min);
        lhs = format!("({lhs} {op} {rhs})");
    }
    lhs
}

#[test]
fn precedence_drives_expression_grouping() {
    use TokenKind::*;
    let x = StringLiteral;

    // a = b = c + d * e
    let src = [x, Assign, x, Assign, x, Add, x, Mul, x];
    let mut pos = 0;
    assert_eq!(parse_expr(&src, &mut pos, 1), "(x = (x = (x + (x * x))))");

    // a - b - c << d
    let src = [x, Sub, x, Sub, x, Shl, x];
    let mut pos = 0;
    assert_eq!(parse_expr(&src, &mut pos, 1), "(((x - x) - x) << x)");

    // a || b && c | d ^ e & f == g ; stops at the separator
    let src = [x, LOr, x, LAnd, x, Or, x, Xor, x, And, x, Eql, x, Semicolon];
    let mut pos = 0;
    assert_eq!(
        parse_expr(&src, &mut pos, 1),
        "(x || (x && (x | (x ^ (x & (x == x))))))"
    );
    assert_eq!(src[pos], Semicolon);
}

proptest! {
    #[test]
    fn render_ordinal_is_total(ordinal in any::<u32>()) {
        let text = tokens::render_ordinal(ordinal);
        prop_assert!(!text.is_empty());
        match TokenKind::from_ordinal(ordinal) {
            Some(kind) => prop_assert_eq!(&*text, kind.spelling()),
            None => prop_assert_eq!(text.into_owned(), format!("token({ordinal})")),
        }
    }

    #[test]
    fn classify_is_total_and_exact(text in "\\PC{0,16}") {
        let kind = keywords::classify(&text);
        if kind == TokenKind::StringLiteral {
            prop_assert!(keywords::keyword(&text).is_none());
        } else {
            prop_assert!(kind.is_keyword());
            prop_assert_eq!(kind.spelling(), text.as_str());
        }
    }

    #[test]
    fn classify_rejects_case_variants(idx in 0usize..50) {
        let kind = TokenKind::ALL.iter().copied().filter(|k| k.is_keyword()).nth(idx).unwrap();
        let upper = kind.spelling().to_uppercase();
        prop_assert_eq!(keywords::classify(&upper), TokenKind::StringLiteral);
        let mut capitalized = kind.spelling().to_string();
        capitalized[..1].make_ascii_uppercase();
        prop_assert_eq!(keywords::classify(&capitalized), TokenKind::StringLiteral);
    }
}
