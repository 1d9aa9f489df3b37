//! Grammar build configurations for the rune scanner.
//!
//! Two grammar builds consume the classifier: the full [`rune`] grammar
//! with all four external tokens, and the restricted legacy [`rune_lite`]
//! grammar that only knows the two typed description kinds. Both are the
//! same classifier with a different vocabulary; nothing else differs.
//!
//! [`state`] carries the opaque scanner-state surface the host's plugin
//! contract demands. The classifier is stateless, so all of it is inert.

pub mod rune;
pub mod rune_lite;
pub mod state;

pub use rune_scanner::{Cursor, KindSet, LineClassifier, TokenKind, TokenMatch};
pub use state::ScannerState;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    #[test]
    fn full_grammar_accepts_fault_lines() {
        let scanner = rune::scanner();
        let requested = KindSet::of(&rune::EXTERNAL_TOKENS);
        let m = scanner
            .classify(&Cursor::new("      not-found timed-out\n"), requested)
            .unwrap();
        assert_eq!(m.kind, TokenKind::FaultLine);
    }

    #[test]
    fn lite_grammar_never_reports_fault_lines() {
        let scanner = rune_lite::scanner();
        // Even a host bug that requests fault lines cannot produce one.
        let requested = KindSet::of(&[TokenKind::FaultLine]);
        let decision = scanner.classify(&Cursor::new("      not-found\n"), requested);
        assert_eq!(decision, None);
    }

    #[test]
    fn lite_grammar_still_classifies_descriptions() {
        let scanner = rune_lite::scanner();
        let requested = KindSet::of(&rune_lite::EXTERNAL_TOKENS);
        let m = scanner
            .classify(&Cursor::new("    a unique identifier\n"), requested)
            .unwrap();
        assert_eq!(m.kind, TokenKind::TypeDescription);
    }

    #[test]
    fn lite_grammar_ignores_generic_descriptions() {
        let scanner = rune_lite::scanner();
        let requested = KindSet::of(&[TokenKind::GenericDescription]);
        let decision = scanner.classify(&Cursor::new("    a storage system\n"), requested);
        assert_eq!(decision, None);
    }

    #[test]
    fn vocabularies_agree_on_shared_kinds() {
        let full = rune::scanner().vocabulary();
        let lite = rune_lite::scanner().vocabulary();
        assert_eq!(full.intersection(lite), lite);
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct GrammarConfig {
        externals: Vec<TokenKind>,
    }

    #[test]
    fn external_tokens_round_trip_through_toml() {
        let config = GrammarConfig {
            externals: rune::EXTERNAL_TOKENS.to_vec(),
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: GrammarConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
