//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use crate::{Error, Result};
use crate::relation::{Relation, RelationKind};
use crate::sinset::{Sinset, SinsetId, Word, normalize_lemma};
use super::schema;

/// Read access to a thesaurus database.
///
/// Holds a single connection for the lifetime of the value; dropping the
/// store releases it.
pub struct ThesaurusStore {
    conn: Connection,
}

impl ThesaurusStore {
    /// Open an existing thesaurus file read-only.
    ///
    /// A missing, locked or corrupt file is reported as `Error::Connection`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .and_then(|conn| {
                // Opening is lazy; touch the header so a corrupt file fails here.
                conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))?;
                Ok(conn)
            })
            .map_err(|source| {
                tracing::error!("Failed to open thesaurus {}: {}", path.display(), source);
                Error::Connection {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        tracing::debug!("Opened thesaurus {}", path.display());
        Ok(Self { conn })
    }

    /// Create (or extend) a writable thesaurus file with the expected schema.
    ///
    /// Used to build fixture databases; never called by the read paths.
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database with the expected schema (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Release the connection, reporting any error raised while closing
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))
    }

    // ========== Sinset Operations ==========

    /// Get a sinset by id
    pub fn sinset(&self, id: SinsetId) -> Result<Option<Sinset>> {
        self.conn
            .query_row(
                "SELECT id, name FROM sinset WHERE id = ?1",
                [id],
                row_to_sinset,
            )
            .optional()
            .map_err(Into::into)
    }

    /// All sinsets having `lemma` as a member word.
    ///
    /// The lemma is uppercased before comparison. An unknown lemma yields an
    /// empty list.
    pub fn concepts_by_lemma(&self, lemma: &str) -> Result<Vec<Sinset>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT sinset.id, sinset.name FROM word
             JOIN sinset ON sinset.id = word.id
             WHERE word.name = ?1
             ORDER BY word.rowid",
        )?;

        let sinsets = stmt
            .query_map([normalize_lemma(lemma)], row_to_sinset)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(sinsets)
    }

    /// Member words of a sinset, as stored
    pub fn synonyms(&self, id: SinsetId) -> Result<Vec<Word>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT name FROM word WHERE id = ?1 ORDER BY rowid",
        )?;

        let words = stmt
            .query_map([id], |row| {
                Ok(Word {
                    name: row.get(0)?,
                    sinset_id: id,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(words)
    }

    // ========== Relation Operations ==========

    /// Direct targets of `id` along edges labelled `kind`
    pub fn related(&self, id: SinsetId, kind: RelationKind) -> Result<Vec<Sinset>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT sinset.id, sinset.name FROM rel
             JOIN sinset ON sinset.id = rel.link
             WHERE rel.id = ?1 AND rel.name = ?2
             ORDER BY rel.rowid",
        )?;

        let targets = stmt
            .query_map(params![id, kind.label()], row_to_sinset)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(targets)
    }

    /// All outgoing edges of `id`, whatever their label
    pub fn relations(&self, id: SinsetId) -> Result<Vec<Relation>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT rel.link, sinset.name, rel.name FROM rel
             JOIN sinset ON sinset.id = rel.link
             WHERE rel.id = ?1
             ORDER BY rel.rowid",
        )?;

        let relations = stmt
            .query_map([id], |row| {
                Ok(Relation::new(id, Sinset::new(row.get(0)?, row.get::<_, String>(1)?), row.get::<_, String>(2)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(relations)
    }

    /// Every edge labelled `kind` as `(source, target)` pairs
    pub fn edges_of_kind(&self, kind: RelationKind) -> Result<Vec<(SinsetId, Sinset)>> {
        let mut stmt = self.conn.prepare(
            "SELECT rel.id, sinset.id, sinset.name FROM rel
             JOIN sinset ON sinset.id = rel.link
             WHERE rel.name = ?1
             ORDER BY rel.rowid",
        )?;

        let edges = stmt
            .query_map([kind.label()], |row| {
                Ok((row.get::<_, SinsetId>(0)?, Sinset::new(row.get(1)?, row.get::<_, String>(2)?)))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(edges)
    }

    // ========== Fixture Operations ==========

    /// Insert or replace a sinset
    pub fn insert_sinset(&self, sinset: &Sinset) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO sinset (id, name) VALUES (?1, ?2)",
            params![sinset.id, sinset.name],
        )?;
        Ok(())
    }

    /// Add a member word; its name is stored uppercased
    pub fn insert_word(&self, word: &Word) -> Result<()> {
        self.conn.execute(
            "INSERT INTO word (id, name) VALUES (?1, ?2)",
            params![word.sinset_id, normalize_lemma(&word.name)],
        )?;
        Ok(())
    }

    /// Add an edge `source -> target` labelled `label`
    pub fn insert_relation(&self, source: SinsetId, target: SinsetId, label: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO rel (id, link, name) VALUES (?1, ?2, ?3)",
            params![source, target, label],
        )?;
        Ok(())
    }

    // ========== Statistics ==========

    fn count(&self, table: &str) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        let mut stmt = self.conn.prepare(
            "SELECT name, COUNT(*) FROM rel GROUP BY name ORDER BY COUNT(*) DESC, name",
        )?;
        let by_label = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(DbStats {
            sinsets: self.count("sinset")?,
            words: self.count("word")?,
            relations: self.count("rel")?,
            by_label,
        })
    }
}

fn row_to_sinset(row: &rusqlite::Row) -> rusqlite::Result<Sinset> {
    Ok(Sinset {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DbStats {
    pub sinsets: usize,
    pub words: usize,
    pub relations: usize,
    /// Edge count per stored label, most frequent first
    pub by_label: Vec<(String, usize)>,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Thesaurus Statistics:")?;
        writeln!(f, "  Sinsets: {}", self.sinsets)?;
        writeln!(f, "  Words: {}", self.words)?;
        write!(f, "  Relations: {}", self.relations)?;
        for (label, count) in &self.by_label {
            write!(f, "\n    {}: {}", label, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ThesaurusStore {
        let store = ThesaurusStore::open_in_memory().unwrap();
        store.insert_sinset(&Sinset::new(1, "ЖИВОЕ")).unwrap();
        store.insert_sinset(&Sinset::new(2, "ЧЕЛОВЕК")).unwrap();
        store.insert_sinset(&Sinset::new(3, "РУКА")).unwrap();
        store.insert_word(&Word::new("ЧЕЛОВЕК", 2)).unwrap();
        store.insert_word(&Word::new("ЛИЧНОСТЬ", 2)).unwrap();
        store.insert_word(&Word::new("ЖИВОЕ", 1)).unwrap();
        store.insert_word(&Word::new("РУКА", 3)).unwrap();
        store.insert_relation(2, 1, "ВЫШЕ").unwrap();
        store.insert_relation(2, 3, "ЧАСТЬ").unwrap();
        store.insert_relation(3, 2, "ЦЕЛОЕ").unwrap();
        store
    }

    #[test]
    fn test_concepts_by_lemma() {
        let store = sample_store();

        let found = store.concepts_by_lemma("человек").unwrap();
        assert_eq!(found, vec![Sinset::new(2, "ЧЕЛОВЕК")]);

        assert_eq!(
            store.concepts_by_lemma("слово").unwrap(),
            store.concepts_by_lemma("СЛОВО").unwrap()
        );
        assert!(store.concepts_by_lemma("слово").unwrap().is_empty());
    }

    #[test]
    fn test_polysemous_lemma() {
        let store = sample_store();
        store.insert_sinset(&Sinset::new(10, "КОСА (ПРИЧЁСКА)")).unwrap();
        store.insert_sinset(&Sinset::new(11, "КОСА (ОРУДИЕ)")).unwrap();
        store.insert_word(&Word::new("коса", 10)).unwrap();
        store.insert_word(&Word::new("коса", 11)).unwrap();

        let ids: Vec<_> = store.concepts_by_lemma("Коса").unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_padded_lemma_is_exact_key() {
        let store = sample_store();
        store.insert_sinset(&Sinset::new(20, "ЧАЙ")).unwrap();
        store.conn.execute("INSERT INTO word (id, name) VALUES (20, 'ЧАЙ ')", []).unwrap();

        assert_eq!(store.concepts_by_lemma("чай ").unwrap(), vec![Sinset::new(20, "ЧАЙ")]);
        assert!(store.concepts_by_lemma("чай").unwrap().is_empty());
    }

    #[test]
    fn test_synonyms() {
        let store = sample_store();
        let words = store.synonyms(2).unwrap();
        let names: Vec<_> = words.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["ЧЕЛОВЕК", "ЛИЧНОСТЬ"]);
        assert!(words.iter().all(|w| w.sinset_id == 2));
        assert!(store.synonyms(99).unwrap().is_empty());
    }

    #[test]
    fn test_related_by_label() {
        let store = sample_store();

        assert_eq!(store.related(2, RelationKind::Hyperonym).unwrap(), vec![Sinset::new(1, "ЖИВОЕ")]);
        assert_eq!(store.related(2, RelationKind::Meronym).unwrap(), vec![Sinset::new(3, "РУКА")]);
        // Hyperonym 2 -> 1 is stored, the inverse hyponym edge is not.
        assert!(store.related(1, RelationKind::Hyponym).unwrap().is_empty());
    }

    #[test]
    fn test_related_skips_dangling_targets() {
        let store = sample_store();
        store.insert_relation(2, 404, "АССОЦ").unwrap();
        assert!(store.related(2, RelationKind::Association).unwrap().is_empty());
    }

    #[test]
    fn test_all_relations() {
        let store = sample_store();
        store.insert_relation(2, 3, "АСЦ1").unwrap();

        let relations = store.relations(2).unwrap();
        assert_eq!(relations.len(), 3);
        assert_eq!(relations[0].target, Sinset::new(1, "ЖИВОЕ"));
        assert_eq!(relations[0].kind(), Some(RelationKind::Hyperonym));
        assert_eq!(relations[2].label, "АСЦ1");
        assert_eq!(relations[2].kind(), None);
    }

    #[test]
    fn test_edges_of_kind() {
        let store = sample_store();
        let edges = store.edges_of_kind(RelationKind::Hyperonym).unwrap();
        assert_eq!(edges, vec![(2, Sinset::new(1, "ЖИВОЕ"))]);
    }

    #[test]
    fn test_sinset_lookup() {
        let store = sample_store();
        assert_eq!(store.sinset(1).unwrap(), Some(Sinset::new(1, "ЖИВОЕ")));
        assert_eq!(store.sinset(99).unwrap(), None);
    }

    #[test]
    fn test_stats() {
        let store = sample_store();
        let stats = store.stats().unwrap();
        assert_eq!(stats.sinsets, 3);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.relations, 3);
        assert_eq!(stats.by_label.len(), 3);
    }

    #[test]
    fn test_missing_table_is_storage_error() {
        let conn = Connection::open_in_memory().unwrap();
        let store = ThesaurusStore { conn };
        assert!(matches!(store.concepts_by_lemma("x"), Err(Error::Storage(_))));
    }
}
