//! Sinset and word types
//!
//! A sinset is a concept node of the thesaurus: a set of synonymous words
//! sharing one id and a canonical display name. Words map surface lemmas
//! onto the sinsets they belong to.

use serde::{Deserialize, Serialize};

/// Stable integer id of a sinset (`sinset.id` in the database)
pub type SinsetId = i64;

/// A concept (synonym set) of the thesaurus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sinset {
    pub id: SinsetId,
    pub name: String,
}

impl Sinset {
    pub fn new(id: SinsetId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl std::fmt::Display for Sinset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>5} {}", self.id, self.name)
    }
}

/// A surface lemma and the sinset it belongs to.
///
/// The same lemma may appear in several sinsets (polysemy); each membership
/// is a separate `Word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Canonical (uppercase) lemma
    pub name: String,
    /// Owning sinset
    pub sinset_id: SinsetId,
}

impl Word {
    /// Create a word, canonicalizing the lemma to uppercase
    pub fn new(name: &str, sinset_id: SinsetId) -> Self {
        Self {
            name: normalize_lemma(name),
            sinset_id,
        }
    }
}

/// Canonical lookup form of a lemma.
///
/// Lookups are exact after uppercasing; whitespace is kept as given.
pub fn normalize_lemma(lemma: &str) -> String {
    lemma.to_uppercase()
}
