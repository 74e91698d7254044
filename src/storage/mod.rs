//! Storage Layer - SQLite-backed thesaurus access
//!
//! The thesaurus file holds three tables:
//! - sinset(id, name)
//! - word(id, name), where `id` is the owning sinset
//! - rel(id, link, name), a directed edge `id -> link` labelled `name`

pub mod schema;
pub mod sqlite;

pub use sqlite::{ThesaurusStore, DbStats};
