//! # Rutez - query layer over the RuThes thesaurus
//!
//! Read-only access to a pre-populated thesaurus database.
//!
//! Rutez provides:
//! - Sinset (synonym set) lookup by lemma
//! - Synonym listing and direct semantic relations between sinsets
//! - Transitive closure over one relation label (hyperonym chains)
//! - A CLI that prints everything known about a lemma

pub mod sinset;
pub mod relation;
pub mod storage;
pub mod query;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use sinset::{Sinset, SinsetId, Word};
pub use relation::{Relation, RelationKind};
pub use storage::ThesaurusStore;
pub use query::{Closure, ClosureEngine, QueryEngine, TraversalMode};

use std::path::PathBuf;

/// Result type alias for Rutez operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Rutez operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open thesaurus {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown relation kind: {0}")]
    UnknownRelation(String),
}
