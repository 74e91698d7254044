//! Transitive closure over one relation label
//!
//! Computes every sinset reachable from a set of starting sinsets by
//! repeatedly following edges of a single label (hyperonym chains being the
//! main use). The traversal runs in rounds: each round expands the current
//! frontier by one edge, and nodes already visited are never expanded again,
//! so cycles in the stored relation terminate and produce no duplicates.

use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use crate::Result;
use crate::relation::RelationKind;
use crate::sinset::{Sinset, SinsetId};
use crate::storage::ThesaurusStore;

/// Anything that can answer "direct targets of `id` along `kind`".
pub trait RelationSource {
    fn related(&self, id: SinsetId, kind: RelationKind) -> Result<Vec<Sinset>>;
}

impl RelationSource for ThesaurusStore {
    fn related(&self, id: SinsetId, kind: RelationKind) -> Result<Vec<Sinset>> {
        ThesaurusStore::related(self, id, kind)
    }
}

/// In-memory adjacency for a single relation label.
///
/// Built from one bulk query so the traversal issues no further queries.
#[derive(Debug, Default)]
pub struct RelationIndex {
    kind: Option<RelationKind>,
    edges: HashMap<SinsetId, Vec<Sinset>>,
}

impl RelationIndex {
    /// Load every edge labelled `kind` from the store
    pub fn load(store: &ThesaurusStore, kind: RelationKind) -> Result<Self> {
        let pairs = store.edges_of_kind(kind)?;
        tracing::debug!("Loaded {} {} edges into memory", pairs.len(), kind);
        Ok(Self::from_edges(kind, pairs))
    }

    pub fn from_edges(kind: RelationKind, pairs: impl IntoIterator<Item = (SinsetId, Sinset)>) -> Self {
        let mut edges: HashMap<SinsetId, Vec<Sinset>> = HashMap::new();
        for (source, target) in pairs {
            edges.entry(source).or_default().push(target);
        }
        Self {
            kind: Some(kind),
            edges,
        }
    }

    /// Number of edges held
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl RelationSource for RelationIndex {
    fn related(&self, id: SinsetId, kind: RelationKind) -> Result<Vec<Sinset>> {
        if self.kind != Some(kind) {
            return Ok(Vec::new());
        }
        Ok(self.edges.get(&id).cloned().unwrap_or_default())
    }
}

/// Result of a closure computation.
///
/// `members` lists each reachable sinset once, starting sinsets first, then
/// in the order they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Closure {
    pub members: Vec<Sinset>,
    /// Number of expansion rounds that discovered new sinsets
    pub rounds: usize,
}

impl Closure {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn ids(&self) -> Vec<SinsetId> {
        self.members.iter().map(|s| s.id).collect()
    }
}

/// Fixed-point traversal of one relation label over a `RelationSource`.
pub struct ClosureEngine<'a, S: RelationSource + ?Sized> {
    source: &'a S,
    kind: RelationKind,
}

impl<'a, S: RelationSource + ?Sized> ClosureEngine<'a, S> {
    pub fn new(source: &'a S, kind: RelationKind) -> Self {
        Self { source, kind }
    }

    /// Hyperonym (is-a parent) closure
    pub fn hyperonyms(source: &'a S) -> Self {
        Self::new(source, RelationKind::Hyperonym)
    }

    /// Compute the closure of `starts`, the starting sinsets included.
    pub fn closure(&self, starts: impl IntoIterator<Item = Sinset>) -> Result<Closure> {
        let mut visited: HashSet<SinsetId> = HashSet::new();
        let mut members = Vec::new();
        let mut frontier = Vec::new();

        for start in starts {
            if visited.insert(start.id) {
                frontier.push(start.id);
                members.push(start);
            }
        }

        let mut rounds = 0;
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for id in &frontier {
                for target in self.source.related(*id, self.kind)? {
                    if visited.insert(target.id) {
                        next.push(target.id);
                        members.push(target);
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            rounds += 1;
            tracing::debug!(
                "{} closure round {}: {} new, {} total",
                self.kind,
                rounds,
                next.len(),
                members.len()
            );
            frontier = next;
        }

        Ok(Closure { members, rounds })
    }
}
