//! Type-flag classification.
//!
//! Each domain declares a closed vocabulary of keywords, each mapped to a
//! boolean predicate over an entity. Bit *i* of a [`TypeFlags`] corresponds
//! to keyword *i* of the vocabulary table; a vocabulary holds at most 32
//! keywords.

/// Fixed-width bitmask of vocabulary keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeFlags(u32);

impl TypeFlags {
    /// No keywords requested or matched.
    pub const EMPTY: Self = Self(0);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sets the bit for vocabulary index `bit`.
    pub fn set(&mut self, bit: usize) {
        self.0 |= 1 << bit;
    }

    /// Whether the bit for vocabulary index `bit` is set.
    pub fn has(self, bit: usize) -> bool {
        self.0 & (1 << bit) != 0
    }

    /// AND semantics: every bit of `requested` is set here.
    pub fn contains(self, requested: Self) -> bool {
        self.0 & requested.0 == requested.0
    }

    /// OR semantics: at least one bit of `requested` is set here.
    pub fn intersects(self, requested: Self) -> bool {
        self.0 & requested.0 != 0
    }
}

/// Boolean predicate evaluated against one entity.
pub type Predicate<E> = fn(&E) -> bool;

/// A domain's closed keyword table.
///
/// Tables are `'static` and compile-time fixed; no two keywords share a bit
/// because the bit is the table index.
pub struct Vocabulary<E: 'static> {
    pub entries: &'static [(&'static str, Predicate<E>)],
}

impl<E> Vocabulary<E> {
    /// Evaluates every keyword predicate against an entity and returns the
    /// resulting bitmask.
    pub fn classify(&self, entity: &E) -> TypeFlags {
        let mut flags = TypeFlags::EMPTY;
        for (bit, (_, predicate)) in self.entries.iter().enumerate() {
            if predicate(entity) {
                flags.set(bit);
            }
        }
        flags
    }

    /// Resolves a token to its keyword bit, case-insensitively.
    pub fn keyword_bit(&self, token: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(keyword, _)| keyword.eq_ignore_ascii_case(token))
    }

    /// Keywords whose bits are set in `flags`, in table order.
    pub fn keywords_for(&self, flags: TypeFlags) -> Vec<&'static str> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(bit, _)| flags.has(*bit))
            .map(|(_, (keyword, _))| *keyword)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
