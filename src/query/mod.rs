pub mod closure;
pub mod engine;

pub use closure::{Closure, ClosureEngine, RelationIndex, RelationSource};
pub use engine::{ConceptReport, LemmaReport, QueryEngine, TraversalMode};
