//! Database schema definitions
//!
//! The thesaurus file is produced by an external loader. These statements
//! only describe the layout this crate reads, and are executed solely by the
//! explicit fixture constructors of `ThesaurusStore`.

/// SQL to create the sinset table
pub const CREATE_SINSET_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS sinset (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
)
"#;

/// SQL to create the word table (`id` is the owning sinset)
pub const CREATE_WORD_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS word (
    id INTEGER NOT NULL,
    name TEXT NOT NULL
)
"#;

/// SQL to create the rel table: edge `id -> link` labelled `name`
pub const CREATE_REL_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS rel (
    id INTEGER NOT NULL,
    link INTEGER NOT NULL,
    name TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_word_name ON word(name)",
    "CREATE INDEX IF NOT EXISTS idx_word_id ON word(id)",
    "CREATE INDEX IF NOT EXISTS idx_rel_id_name ON rel(id, name)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_SINSET_TABLE, CREATE_WORD_TABLE, CREATE_REL_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
