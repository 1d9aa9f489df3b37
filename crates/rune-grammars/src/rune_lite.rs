//! The restricted legacy grammar build: typed description lines only.
//!
//! Older rune documents predate fault lines and `[NON]` noun blocks, so
//! this build's vocabulary stops at the two typed description kinds.

use rune_scanner::{KindSet, LineClassifier, TokenKind};

/// External tokens in scanner-symbol order.
pub const EXTERNAL_TOKENS: [TokenKind; 2] =
    [TokenKind::TypeDescription, TokenKind::DtoDescription];

/// The classifier this grammar build links against.
pub fn scanner() -> LineClassifier {
    LineClassifier::new(KindSet::of(&EXTERNAL_TOKENS))
}
