use serde::{Deserialize, Serialize};

/// External token kinds the scanner can produce.
///
/// The order mirrors the host grammar's external token declarations; the
/// bit each kind occupies in a [`KindSet`] is its position here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Prose description under a `[TYP]` definition.
    TypeDescription,
    /// Prose description under a `[DTO]` definition.
    DtoDescription,
    /// Prose description under any other header (`[NON]` nouns).
    GenericDescription,
    /// Fault-name line (`not-found timed-out`) at 6+ spaces of indentation.
    FaultLine,
}

impl TokenKind {
    /// Tie-break order when several description kinds are legal at once.
    pub const DESCRIPTION_PRIORITY: [TokenKind; 3] = [
        TokenKind::TypeDescription,
        TokenKind::DtoDescription,
        TokenKind::GenericDescription,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of token kinds, mirroring the host's valid-symbol array.
///
/// The host hands the scanner the kinds it currently considers legal;
/// grammar builds use the same type for their external token vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSet(u8);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);

    /// Builds a set from a slice of kinds.
    pub const fn of(kinds: &[TokenKind]) -> KindSet {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        KindSet(bits)
    }

    /// Returns this set with `kind` added.
    pub const fn with(self, kind: TokenKind) -> KindSet {
        KindSet(self.0 | kind.bit())
    }

    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn intersection(self, other: KindSet) -> KindSet {
        KindSet(self.0 & other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if any of the three description kinds is present.
    pub const fn any_description(self) -> bool {
        !self
            .intersection(KindSet::of(&TokenKind::DESCRIPTION_PRIORITY))
            .is_empty()
    }
}
