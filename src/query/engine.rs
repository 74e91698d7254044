//! Query engine implementation
//!
//! Provides high-level query operations:
//! - Lemma resolution to sinsets
//! - Direct relations per label (hyperonyms, hyponyms, holonyms, ...)
//! - Transitive closure by id or by lemma
//! - Full lemma reports, as printed by `rutez show`

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::Result;
use crate::relation::{Relation, RelationKind};
use crate::sinset::{Sinset, SinsetId, Word, normalize_lemma};
use crate::storage::ThesaurusStore;
use super::closure::{Closure, ClosureEngine, RelationIndex};

/// How closures are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalMode {
    /// One shallow query per visited sinset
    #[default]
    Incremental,
    /// Load the label's edges once, then traverse in memory
    Bulk,
}

/// Everything known about one sinset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptReport {
    pub sinset: Sinset,
    pub synonyms: Vec<Word>,
    pub hyperonyms: Vec<Sinset>,
    pub all_hyperonyms: Closure,
    pub hyponyms: Vec<Sinset>,
    pub holonyms: Vec<Sinset>,
    pub meronyms: Vec<Sinset>,
    pub associations: Vec<Sinset>,
}

/// Report for a lemma: one entry per sinset it belongs to, plus the
/// hyperonym closure of all those sinsets taken together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmaReport {
    pub lemma: String,
    pub concepts: Vec<ConceptReport>,
    pub all_hyperonyms: Closure,
}

impl LemmaReport {
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

/// Query engine over a thesaurus store
pub struct QueryEngine<'a> {
    store: &'a ThesaurusStore,
    mode: TraversalMode,
    /// Bulk-loaded labels; the store is read-only, so one load per engine
    indexes: RefCell<HashMap<RelationKind, Rc<RelationIndex>>>,
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine using incremental traversal
    pub fn new(store: &'a ThesaurusStore) -> Self {
        Self {
            store,
            mode: TraversalMode::default(),
            indexes: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_mode(mut self, mode: TraversalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sinsets containing `lemma` as a member word
    pub fn concepts(&self, lemma: &str) -> Result<Vec<Sinset>> {
        self.store.concepts_by_lemma(lemma)
    }

    pub fn synonyms(&self, id: SinsetId) -> Result<Vec<Word>> {
        self.store.synonyms(id)
    }

    pub fn hyperonyms(&self, id: SinsetId) -> Result<Vec<Sinset>> {
        self.store.related(id, RelationKind::Hyperonym)
    }

    pub fn hyponyms(&self, id: SinsetId) -> Result<Vec<Sinset>> {
        self.store.related(id, RelationKind::Hyponym)
    }

    pub fn holonyms(&self, id: SinsetId) -> Result<Vec<Sinset>> {
        self.store.related(id, RelationKind::Holonym)
    }

    pub fn meronyms(&self, id: SinsetId) -> Result<Vec<Sinset>> {
        self.store.related(id, RelationKind::Meronym)
    }

    pub fn associations(&self, id: SinsetId) -> Result<Vec<Sinset>> {
        self.store.related(id, RelationKind::Association)
    }

    /// All outgoing edges regardless of label
    pub fn relations(&self, id: SinsetId) -> Result<Vec<Relation>> {
        self.store.relations(id)
    }

    /// Every hyperonym of `id`, transitively, `id` itself first.
    ///
    /// Empty when `id` is not a known sinset.
    pub fn all_hyperonyms_by_id(&self, id: SinsetId) -> Result<Closure> {
        self.closure_by_id(id, RelationKind::Hyperonym)
    }

    /// Hyperonym closure of every sinset `lemma` belongs to.
    pub fn all_hyperonyms_by_lemma(&self, lemma: &str) -> Result<Closure> {
        self.closure_by_lemma(lemma, RelationKind::Hyperonym)
    }

    pub fn closure_by_id(&self, id: SinsetId, kind: RelationKind) -> Result<Closure> {
        match self.store.sinset(id)? {
            Some(start) => self.closure_from(vec![start], kind),
            None => Ok(Closure::default()),
        }
    }

    pub fn closure_by_lemma(&self, lemma: &str, kind: RelationKind) -> Result<Closure> {
        let starts = self.store.concepts_by_lemma(lemma)?;
        self.closure_from(starts, kind)
    }

    fn closure_from(&self, starts: Vec<Sinset>, kind: RelationKind) -> Result<Closure> {
        if starts.is_empty() {
            return Ok(Closure::default());
        }
        match self.mode {
            TraversalMode::Incremental => ClosureEngine::new(self.store, kind).closure(starts),
            TraversalMode::Bulk => {
                let index = self.relation_index(kind)?;
                ClosureEngine::new(index.as_ref(), kind).closure(starts)
            }
        }
    }

    /// In-memory index for `kind`, loaded on first use
    fn relation_index(&self, kind: RelationKind) -> Result<Rc<RelationIndex>> {
        if let Some(index) = self.indexes.borrow().get(&kind) {
            return Ok(Rc::clone(index));
        }
        let index = Rc::new(RelationIndex::load(self.store, kind)?);
        self.indexes.borrow_mut().insert(kind, Rc::clone(&index));
        Ok(index)
    }

    /// Collect everything known about one sinset
    pub fn describe_sinset(&self, sinset: Sinset) -> Result<ConceptReport> {
        let id = sinset.id;
        Ok(ConceptReport {
            synonyms: self.synonyms(id)?,
            hyperonyms: self.hyperonyms(id)?,
            all_hyperonyms: self.closure_from(vec![sinset.clone()], RelationKind::Hyperonym)?,
            hyponyms: self.hyponyms(id)?,
            holonyms: self.holonyms(id)?,
            meronyms: self.meronyms(id)?,
            associations: self.associations(id)?,
            sinset,
        })
    }

    /// Resolve `lemma` and describe each of its sinsets independently
    pub fn describe(&self, lemma: &str) -> Result<LemmaReport> {
        let sinsets = self.concepts(lemma)?;
        tracing::debug!("Lemma {:?} resolved to {} sinset(s)", lemma, sinsets.len());

        let all_hyperonyms = self.closure_from(sinsets.clone(), RelationKind::Hyperonym)?;
        let concepts = sinsets
            .into_iter()
            .map(|sinset| self.describe_sinset(sinset))
            .collect::<Result<Vec<_>>>()?;

        Ok(LemmaReport {
            lemma: normalize_lemma(lemma),
            concepts,
            all_hyperonyms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ЖИВОЕ <- ЧЕЛОВЕК, with a few side relations
    fn sample_store() -> ThesaurusStore {
        let store = ThesaurusStore::open_in_memory().unwrap();
        store.insert_sinset(&Sinset::new(1, "ЖИВОЕ")).unwrap();
        store.insert_sinset(&Sinset::new(2, "ЧЕЛОВЕК")).unwrap();
        store.insert_sinset(&Sinset::new(3, "РУКА")).unwrap();
        store.insert_sinset(&Sinset::new(4, "ОБЩЕСТВО")).unwrap();
        store.insert_word(&Word::new("ЧЕЛОВЕК", 2)).unwrap();
        store.insert_word(&Word::new("ЖИВОЕ", 1)).unwrap();
        store.insert_relation(2, 1, "ВЫШЕ").unwrap();
        store.insert_relation(1, 2, "НИЖЕ").unwrap();
        store.insert_relation(2, 3, "ЧАСТЬ").unwrap();
        store.insert_relation(3, 2, "ЦЕЛОЕ").unwrap();
        store.insert_relation(2, 4, "АССОЦ").unwrap();
        store
    }

    #[test]
    fn test_human_scenario() {
        let store = sample_store();
        let engine = QueryEngine::new(&store);

        assert_eq!(engine.concepts("человек").unwrap(), vec![Sinset::new(2, "ЧЕЛОВЕК")]);
        assert_eq!(
            engine.all_hyperonyms_by_id(2).unwrap().members,
            vec![Sinset::new(2, "ЧЕЛОВЕК"), Sinset::new(1, "ЖИВОЕ")]
        );
        assert_eq!(
            engine.all_hyperonyms_by_id(1).unwrap().members,
            vec![Sinset::new(1, "ЖИВОЕ")]
        );
    }

    #[test]
    fn test_unknown_inputs_are_empty() {
        let store = sample_store();
        let engine = QueryEngine::new(&store);

        assert!(engine.all_hyperonyms_by_id(404).unwrap().is_empty());
        assert!(engine.all_hyperonyms_by_lemma("нечто").unwrap().is_empty());
        assert!(engine.describe("нечто").unwrap().is_empty());
    }

    #[test]
    fn test_idempotent_closure() {
        let store = sample_store();
        let engine = QueryEngine::new(&store);
        let first = engine.all_hyperonyms_by_lemma("человек").unwrap();
        let second = engine.all_hyperonyms_by_lemma("ЧЕЛОВЕК").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bulk_mode_matches() {
        let store = sample_store();
        let incremental = QueryEngine::new(&store).all_hyperonyms_by_lemma("человек").unwrap();
        let bulk = QueryEngine::new(&store)
            .with_mode(TraversalMode::Bulk)
            .all_hyperonyms_by_lemma("человек")
            .unwrap();
        assert_eq!(incremental, bulk);
    }

    #[test]
    fn test_bulk_index_loaded_once() {
        let store = sample_store();
        let engine = QueryEngine::new(&store).with_mode(TraversalMode::Bulk);
        engine.describe("человек").unwrap();

        let first = engine.relation_index(RelationKind::Hyperonym).unwrap();
        let second = engine.relation_index(RelationKind::Hyperonym).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(engine.indexes.borrow().len(), 1);
    }

    #[test]
    fn test_hyponym_closure() {
        let store = sample_store();
        let engine = QueryEngine::new(&store);
        let closure = engine.closure_by_id(1, RelationKind::Hyponym).unwrap();
        assert_eq!(closure.ids(), vec![1, 2]);
    }

    #[test]
    fn test_describe() {
        let store = sample_store();
        let report = QueryEngine::new(&store).describe("Человек").unwrap();

        assert_eq!(report.lemma, "ЧЕЛОВЕК");
        assert_eq!(report.concepts.len(), 1);
        let concept = &report.concepts[0];
        assert_eq!(concept.synonyms, vec![Word::new("ЧЕЛОВЕК", 2)]);
        assert_eq!(concept.hyperonyms, vec![Sinset::new(1, "ЖИВОЕ")]);
        assert_eq!(concept.all_hyperonyms.ids(), vec![2, 1]);
        assert!(concept.hyponyms.is_empty());
        assert_eq!(concept.meronyms, vec![Sinset::new(3, "РУКА")]);
        assert!(concept.holonyms.is_empty());
        assert_eq!(concept.associations, vec![Sinset::new(4, "ОБЩЕСТВО")]);
        assert_eq!(report.all_hyperonyms.ids(), vec![2, 1]);
    }
}
