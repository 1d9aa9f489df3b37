use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::classify::{LineClassifier, TokenMatch};
use crate::cursor::Cursor;
use crate::kinds::KindSet;

/// Decision for one physical line of a document sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDecision {
    /// Byte span of the line, terminator included.
    pub span: Range<usize>,
    /// The classifier's decision at the line start, if any.
    pub matched: Option<TokenMatch>,
}

/// Runs the classifier against the start of every line in `text`.
///
/// The host parser drives the classifier one speculative call at a time;
/// this sweep is the offline equivalent, useful for tooling and tests
/// that want to see every decision over a whole document at once.
pub fn classify_lines(
    text: &str,
    classifier: &LineClassifier,
    requested: KindSet,
) -> Vec<LineDecision> {
    let mut decisions = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let end = text[start..]
            .find('\n')
            .map(|p| start + p + 1)
            .unwrap_or(text.len());
        let cursor = Cursor { s: text, i: start };
        decisions.push(LineDecision {
            span: start..end,
            matched: classifier.classify(&cursor, requested),
        });
        start = end;
    }
    decisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::TokenKind;
    use pretty_assertions::assert_eq;

    fn full() -> (LineClassifier, KindSet) {
        let kinds = KindSet::of(&[
            TokenKind::TypeDescription,
            TokenKind::DtoDescription,
            TokenKind::GenericDescription,
            TokenKind::FaultLine,
        ]);
        (LineClassifier::new(kinds), kinds)
    }

    #[test]
    fn spans_cover_the_document() {
        let text = "[TYP] id: string\n    a unique identifier\n";
        let (scanner, kinds) = full();
        let decisions = classify_lines(text, &scanner, kinds);
        assert_eq!(decisions.len(), 2);
        assert_eq!(decisions[0].span, 0..17);
        assert_eq!(decisions[1].span, 17..text.len());
    }

    #[test]
    fn header_line_declines_description_matches() {
        let text = "[TYP] id: string\n    a unique identifier\n";
        let (scanner, kinds) = full();
        let decisions = classify_lines(text, &scanner, kinds);
        assert_eq!(decisions[0].matched, None);
        let m = decisions[1].matched.unwrap();
        assert_eq!(m.kind, TokenKind::TypeDescription);
        assert_eq!(m.len, 4 + "a unique identifier".len());
    }

    #[test]
    fn blank_lines_decline() {
        let text = "    reads the feed\n\n      not-found\n";
        let (scanner, kinds) = full();
        let decisions = classify_lines(text, &scanner, kinds);
        assert!(decisions[0].matched.is_some());
        assert_eq!(decisions[1].matched, None);
        assert_eq!(decisions[2].matched.unwrap().kind, TokenKind::FaultLine);
    }

    #[test]
    fn missing_trailing_newline_still_classifies() {
        let text = "    reads the feed";
        let (scanner, kinds) = full();
        let decisions = classify_lines(text, &scanner, kinds);
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].span, 0..text.len());
        assert!(decisions[0].matched.is_some());
    }

    #[test]
    fn empty_document_yields_no_decisions() {
        let (scanner, kinds) = full();
        assert_eq!(classify_lines("", &scanner, kinds), vec![]);
    }
}
