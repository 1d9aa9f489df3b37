use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::kinds::{KindSet, TokenKind};

/// Longest line prefix the scanner will judge; anything beyond this is
/// ignored when deciding, and a match never consumes past it.
pub const MAX_LINE_LEN: usize = 255;

/// A successful classification: which kind matched and how many bytes the
/// token spans (indentation plus content, newline excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMatch {
    pub kind: TokenKind,
    pub len: usize,
}

/// Classifies line shapes the host grammar cannot resolve on its own.
///
/// One classifier serves both grammar builds: the vocabulary passed at
/// construction caps which kinds it may ever report, and the per-call
/// requested set narrows that further to what is legal right now. The
/// restricted legacy build is simply a classifier whose vocabulary lacks
/// [`TokenKind::FaultLine`] and [`TokenKind::GenericDescription`].
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    vocabulary: KindSet,
}

impl LineClassifier {
    pub const fn new(vocabulary: KindSet) -> Self {
        Self { vocabulary }
    }

    pub const fn vocabulary(&self) -> KindSet {
        self.vocabulary
    }

    /// Classifies the line under the cursor without moving it.
    ///
    /// Returns `None` whenever the line is not one of the requested
    /// shapes; the host then falls back to its ordinary token rules. The
    /// decision depends only on the cursor position and the requested
    /// set, so speculative re-invocation always reproduces it.
    pub fn classify(&self, cursor: &Cursor<'_>, requested: KindSet) -> Option<TokenMatch> {
        let requested = requested.intersection(self.vocabulary);
        if requested.is_empty() {
            return None;
        }
        // This scanner only ever fires at physical line starts.
        if cursor.column() != 0 {
            return None;
        }

        let mut probe = cursor.clone();
        let mut indent = 0;
        while probe.peek() == Some(b' ') {
            probe.bump();
            indent += 1;
        }
        let body = line_body(probe.rest());

        // Six or more spaces of indentation is fault territory: when fault
        // lines are legal here the line either validates as one or the
        // scanner gives up, never retrying it as a description.
        if requested.contains(TokenKind::FaultLine) && indent >= 6 {
            if body.first().is_some_and(u8::is_ascii_lowercase) && is_fault_content(body) {
                return Some(TokenMatch {
                    kind: TokenKind::FaultLine,
                    len: indent + body.len(),
                });
            }
            return None;
        }

        // Descriptions sit at exactly four spaces and read as prose: a
        // lowercase start and none of the step-call shapes below.
        if indent != 4 {
            return None;
        }
        if !requested.any_description() {
            return None;
        }
        if !body.first().is_some_and(u8::is_ascii_lowercase) {
            return None;
        }
        if looks_like_code(body) {
            return None;
        }

        let kind = *TokenKind::DESCRIPTION_PRIORITY
            .iter()
            .find(|k| requested.contains(**k))?;
        Some(TokenMatch {
            kind,
            len: indent + body.len(),
        })
    }

    /// Classifies and, on a match, advances the cursor past the token.
    pub fn scan(&self, cursor: &mut Cursor<'_>, requested: KindSet) -> Option<TokenMatch> {
        let m = self.classify(cursor, requested)?;
        cursor.bump_n(m.len);
        Some(m)
    }
}

/// The remainder of the current line, capped at [`MAX_LINE_LEN`] bytes.
fn line_body(rest: &[u8]) -> &[u8] {
    let end = rest
        .iter()
        .take(MAX_LINE_LEN)
        .position(|&b| b == b'\n' || b == b'\r')
        .unwrap_or(rest.len().min(MAX_LINE_LEN));
    &rest[..end]
}

/// Detects step-call shapes that disqualify a line as prose.
///
/// Rune's boundary prefixes are two lowercase letters plus a colon
/// (`db:`, `fs:`, `mq:`, `ex:`, `os:`, `lg:`), so a colon at byte index 2
/// marks a boundary step call. `return(` is the built-in return step, and
/// `(` following a `.` is the `noun.verb(...)` method shape. A colon seen
/// before any dot is treated as a boundary prefix of some other width.
fn looks_like_code(body: &[u8]) -> bool {
    if body.get(2) == Some(&b':') {
        return true;
    }
    if body.starts_with(b"return(") {
        return true;
    }
    let mut seen_dot = false;
    for &b in body {
        match b {
            b'.' => seen_dot = true,
            b'(' if seen_dot => return true,
            b':' if !seen_dot => return true,
            _ => {}
        }
    }
    false
}

/// True if the bytes form fault content: only lowercase letters, digits,
/// hyphens and spaces, with at least one letter somewhere.
fn is_fault_content(body: &[u8]) -> bool {
    let mut has_word_char = false;
    for &b in body {
        match b {
            b'a'..=b'z' => has_word_char = true,
            b'0'..=b'9' | b'-' | b' ' => {}
            _ => return false,
        }
    }
    has_word_char
}
