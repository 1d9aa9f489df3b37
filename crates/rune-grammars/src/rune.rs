//! The full rune grammar build: four external tokens, fault lines included.

use rune_scanner::{KindSet, LineClassifier, TokenKind};

/// External tokens in scanner-symbol order.
pub const EXTERNAL_TOKENS: [TokenKind; 4] = [
    TokenKind::TypeDescription,
    TokenKind::DtoDescription,
    TokenKind::GenericDescription,
    TokenKind::FaultLine,
];

/// The classifier this grammar build links against.
pub fn scanner() -> LineClassifier {
    LineClassifier::new(KindSet::of(&EXTERNAL_TOKENS))
}
