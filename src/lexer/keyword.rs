//! Reserved words of GYH
//!
//! The table is built once on first use and never changes afterwards.
//! Matching is exact and case-sensitive: `SE` is a keyword, `se` is an
//! ordinary identifier and `Se` is rejected by the scanner.

use std::collections::HashMap;

use super::token::TokenKind;

lazy_static::lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = [
        ("DECLARAR", TokenKind::Declare),
        ("PROGRAMA", TokenKind::Program),
        ("INTEGER", TokenKind::IntegerType),
        ("REAL", TokenKind::RealType),
        ("LER", TokenKind::Read),
        ("IMPRIMIR", TokenKind::Print),
        ("SE", TokenKind::If),
        ("ENTAO", TokenKind::Then),
        ("SENAO", TokenKind::Else),
        ("ENQTO", TokenKind::While),
        ("INICIO", TokenKind::Begin),
        ("FINAL", TokenKind::End),
        ("E", TokenKind::And),
        ("OU", TokenKind::Or),
    ]
    .into_iter()
    .collect();
}

/// Look up a reserved word
pub fn lookup(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Iterate over every reserved word and the kind it maps to
pub fn reserved_words() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().map(|(word, kind)| (*word, *kind))
}
