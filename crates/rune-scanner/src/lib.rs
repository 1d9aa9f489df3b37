//! # rune-scanner
//!
//! Line-shape classifier for the rune specification language.
//!
//! Rune is a line-oriented format: `[REQ]`/`[DTO]`/`[TYP]`/`[NON]` headers,
//! indented step calls (`storage.save(id): bool`, `db:metadata.set(id)`),
//! prose description lines at exactly four spaces of indentation, and
//! fault-name lines (`not-found timed-out`) at six or more. Most of the
//! grammar is context-free, but telling a prose description apart from a
//! step call, or a fault line apart from anything else, needs a lexical
//! decision the grammar rules cannot make on their own. The host parser
//! delegates exactly that decision to this crate.
//!
//! The classifier is a pure function over a [`Cursor`] positioned at a
//! line start and a [`KindSet`] of token kinds the host currently
//! considers legal. It either declines (the host falls back to its own
//! token rules) or reports which [`TokenKind`] matched and how many bytes
//! the line occupies.
//!
//! ```
//! use rune_scanner::{Cursor, KindSet, LineClassifier, TokenKind};
//!
//! let requested = KindSet::of(&[TokenKind::TypeDescription]);
//! let scanner = LineClassifier::new(requested);
//!
//! let cursor = Cursor::new("    collects usage data\n");
//! let m = scanner.classify(&cursor, requested).unwrap();
//! assert_eq!(m.kind, TokenKind::TypeDescription);
//! assert_eq!(m.len, 23); // 4 spaces + 19 bytes of prose, newline excluded
//! ```
//!
//! Because the host may probe speculatively and discard the attempt,
//! [`LineClassifier::classify`] never moves the caller's cursor; the
//! committing variant [`LineClassifier::scan`] advances it only when a
//! match is reported.

pub mod classify;
pub mod cursor;
pub mod kinds;
pub mod lines;

pub use classify::{LineClassifier, MAX_LINE_LEN, TokenMatch};
pub use cursor::{Cursor, CursorError};
pub use kinds::{KindSet, TokenKind};
pub use lines::{LineDecision, classify_lines};
