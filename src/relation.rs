//! Relation types - directed, labelled links between sinsets
//!
//! The thesaurus stores five relation labels:
//! - `Hyperonym` (`ВЫШЕ`): concept → more general concept
//! - `Hyponym` (`НИЖЕ`): concept → more specific concept
//! - `Holonym` (`ЦЕЛОЕ`): part → whole
//! - `Meronym` (`ЧАСТЬ`): whole → part
//! - `Association` (`АССОЦ`): loose, non-hierarchical link
//!
//! Each label is stored independently. A `ВЫШЕ` edge A → B does not imply
//! a `НИЖЕ` edge B → A, so inverse labels are always queried, never derived.

use crate::Error;
use crate::sinset::{Sinset, SinsetId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Known relation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Is-a parent (generalization)
    Hyperonym,
    /// Is-a child (specialization)
    Hyponym,
    /// Part-of: the target is the whole
    Holonym,
    /// Has-part: the target is a part
    Meronym,
    /// Free association
    Association,
}

impl RelationKind {
    /// Label as stored in `rel.name`
    pub fn label(&self) -> &'static str {
        match self {
            RelationKind::Hyperonym => "ВЫШЕ",
            RelationKind::Hyponym => "НИЖЕ",
            RelationKind::Holonym => "ЦЕЛОЕ",
            RelationKind::Meronym => "ЧАСТЬ",
            RelationKind::Association => "АССОЦ",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Hyperonym => "hyperonym",
            RelationKind::Hyponym => "hyponym",
            RelationKind::Holonym => "holonym",
            RelationKind::Meronym => "meronym",
            RelationKind::Association => "association",
        }
    }

    /// Get all relation kinds, in display order
    pub fn all() -> &'static [RelationKind] {
        &[
            RelationKind::Hyperonym,
            RelationKind::Hyponym,
            RelationKind::Holonym,
            RelationKind::Meronym,
            RelationKind::Association,
        ]
    }

    /// Map a stored label back to a kind
    pub fn from_label(label: &str) -> Option<RelationKind> {
        Self::all().iter().copied().find(|k| k.label() == label)
    }

    /// Whether the label forms a hierarchy worth a transitive closure
    pub fn is_hierarchical(&self) -> bool {
        !matches!(self, RelationKind::Association)
    }
}

impl FromStr for RelationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = Self::from_label(&s.trim().to_uppercase()) {
            return Ok(kind);
        }
        match s.trim().to_lowercase().as_str() {
            "hyperonym" | "hyperonyms" | "hypernym" | "parent" | "is-a-parent" | "up" => Ok(RelationKind::Hyperonym),
            "hyponym" | "hyponyms" | "child" | "is-a-child" | "down" => Ok(RelationKind::Hyponym),
            "holonym" | "holonyms" | "whole" | "part-of" => Ok(RelationKind::Holonym),
            "meronym" | "meronyms" | "part" | "has-part" => Ok(RelationKind::Meronym),
            "association" | "associations" | "assoc" => Ok(RelationKind::Association),
            _ => Err(Error::UnknownRelation(s.to_string())),
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An outgoing edge of a sinset, with the target already resolved.
///
/// `label` keeps the raw stored text: the database may contain labels
/// outside the known vocabulary, which are reported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub source: SinsetId,
    pub target: Sinset,
    pub label: String,
}

impl Relation {
    pub fn new(source: SinsetId, target: Sinset, label: impl Into<String>) -> Self {
        Self {
            source,
            target,
            label: label.into(),
        }
    }

    /// Known kind of this edge, if the label is part of the vocabulary
    pub fn kind(&self) -> Option<RelationKind> {
        RelationKind::from_label(&self.label)
    }
}
