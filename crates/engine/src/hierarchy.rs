//! Hierarchy indexer: parent → ordered children index plus the cycle-safe
//! outline walk used for sidebar/tree display.

use crate::normalize::Corpus;
use coredoc_model::{Chunk, ChunkId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Hard ceiling on outline depth, enforced independently of cycle
/// detection to bound pathological but acyclic inputs.
pub const MAX_OUTLINE_DEPTH: usize = 20;

/// Parent → ordered children index over one document's chunk set.
///
/// Built in a single pass at load time; chunk input order is preserved
/// within each group. Parent data is taken as-is — cycles and dangling
/// parent ids survive into the index and are handled by the traversals.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    children: HashMap<ChunkId, Vec<ChunkId>>,
    roots: Vec<ChunkId>,
}

impl HierarchyIndex {
    /// Group chunks by their parent id. Chunks without a parent become
    /// root-level entries.
    #[must_use]
    pub fn build(chunks: &[Chunk]) -> Self {
        let mut children: HashMap<ChunkId, Vec<ChunkId>> = HashMap::new();
        let mut roots = Vec::new();

        for chunk in chunks {
            match chunk.parent_id() {
                Some(parent) => children
                    .entry(parent.to_string())
                    .or_default()
                    .push(chunk.id.clone()),
                None => roots.push(chunk.id.clone()),
            }
        }

        Self { children, roots }
    }

    /// Ordered children of a chunk; empty when it has none.
    #[must_use]
    pub fn children_of(&self, id: &str) -> &[ChunkId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// Chunks that declare no parent, in document order.
    #[must_use]
    pub fn roots(&self) -> &[ChunkId] {
        &self.roots
    }

    /// Depth-first outline of the hierarchy for display.
    ///
    /// Explicit work-stack walk, no recursion. Each branch carries a
    /// visited set of the ids on the current path: re-entering one of them
    /// means the parent data loops, and that branch is cut with a warning
    /// instead of recursing forever. [`MAX_OUTLINE_DEPTH`] truncates
    /// independently.
    #[must_use]
    pub fn outline(&self, corpus: &Corpus) -> Outline {
        enum Step {
            Enter(ChunkId, usize),
            Leave(ChunkId),
        }

        let mut rows = Vec::with_capacity(corpus.len());
        let mut warnings = Vec::new();
        let mut on_path: HashSet<ChunkId> = HashSet::new();

        let mut stack: Vec<Step> = self
            .roots
            .iter()
            .rev()
            .map(|id| Step::Enter(id.clone(), 0))
            .collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Leave(id) => {
                    on_path.remove(&id);
                }
                Step::Enter(id, depth) => {
                    if on_path.contains(&id) {
                        log::warn!("Cycle in chunk hierarchy at {id}; branch truncated");
                        warnings.push(OutlineWarning::Cycle { id });
                        continue;
                    }
                    if depth > MAX_OUTLINE_DEPTH {
                        log::warn!("Outline depth ceiling reached at {id}; branch truncated");
                        warnings.push(OutlineWarning::DepthCeiling { id });
                        continue;
                    }

                    rows.push(OutlineRow {
                        id: id.clone(),
                        depth,
                    });
                    on_path.insert(id.clone());
                    stack.push(Step::Leave(id.clone()));
                    for child in self.children_of(&id).iter().rev() {
                        stack.push(Step::Enter(child.clone(), depth + 1));
                    }
                }
            }
        }

        Outline { rows, warnings }
    }
}

/// One entry of the display outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRow {
    pub id: ChunkId,
    pub depth: usize,
}

/// Branch truncation encountered during the outline walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum OutlineWarning {
    /// The id was already on the current path
    Cycle { id: ChunkId },
    /// [`MAX_OUTLINE_DEPTH`] exceeded on an acyclic branch
    DepthCeiling { id: ChunkId },
}

/// Outline rows plus whatever truncation the walk ran into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outline {
    pub rows: Vec<OutlineRow>,
    pub warnings: Vec<OutlineWarning>,
}

impl Outline {
    /// Deepest row, as levels below the roots plus one; 0 for no rows.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.rows.iter().map(|r| r.depth + 1).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use coredoc_model::CoredocDocument;
    use pretty_assertions::assert_eq;

    fn corpus_from(chunks: serde_json::Value) -> Corpus {
        let raw: CoredocDocument = serde_json::from_value(serde_json::json!({
            "document": {"id": "d", "title": "Doc", "created_at": ""},
            "chunks": chunks
        }))
        .unwrap();
        normalize(&raw).unwrap()
    }

    fn chunk(id: &str, parent: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": id, "content": "",
            "relationships": {"parent": parent, "children": [], "prev": null, "next": null, "references": []}
        })
    }

    #[test]
    fn test_build_groups_by_parent_in_input_order() {
        let corpus = corpus_from(serde_json::json!([
            chunk("root", None),
            chunk("b", Some("root")),
            chunk("a", Some("root")),
            chunk("c", Some("b")),
        ]));
        let index = HierarchyIndex::build(corpus.chunks());

        assert_eq!(index.roots(), ["root".to_string()]);
        assert_eq!(
            index.children_of("root"),
            ["b".to_string(), "a".to_string()]
        );
        assert_eq!(index.children_of("c"), [] as [ChunkId; 0]);
    }

    #[test]
    fn test_outline_walks_depth_first() {
        let corpus = corpus_from(serde_json::json!([
            chunk("root", None),
            chunk("a", Some("root")),
            chunk("b", Some("root")),
            chunk("a1", Some("a")),
        ]));
        let outline = HierarchyIndex::build(corpus.chunks()).outline(&corpus);

        let ids: Vec<&str> = outline.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["root", "a", "a1", "b"]);
        let depths: Vec<usize> = outline.rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, [0, 1, 2, 1]);
        assert!(outline.warnings.is_empty());
        assert_eq!(outline.depth(), 3);
    }

    #[test]
    fn test_outline_terminates_on_detached_parent_cycle() {
        // a and b parent each other; neither is reachable from root, so
        // the walk covers root alone and terminates.
        let corpus = corpus_from(serde_json::json!([
            chunk("root", None),
            chunk("a", Some("b")),
            chunk("b", Some("a")),
        ]));
        let outline = HierarchyIndex::build(corpus.chunks()).outline(&corpus);
        let ids: Vec<&str> = outline.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["root"]);
    }

    #[test]
    fn test_outline_cuts_reachable_cycle_with_warning() {
        let corpus = corpus_from(serde_json::json!([
            chunk("root", None),
            chunk("a", Some("root")),
            chunk("b", Some("a")),
        ]));
        let mut index = HierarchyIndex::build(corpus.chunks());
        // Malformed input: b also claims root as a child, closing a loop
        index
            .children
            .entry("b".to_string())
            .or_default()
            .push("root".to_string());

        let outline = index.outline(&corpus);
        let ids: Vec<&str> = outline.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["root", "a", "b"]);
        assert!(matches!(
            outline.warnings[..],
            [OutlineWarning::Cycle { ref id }] if id == "root"
        ));
    }

    #[test]
    fn test_outline_depth_ceiling() {
        // A straight chain deeper than the ceiling
        let mut chunks = vec![chunk("n0", None)];
        for i in 1..=MAX_OUTLINE_DEPTH + 3 {
            chunks.push(chunk(&format!("n{i}"), Some(&format!("n{}", i - 1))));
        }
        let corpus = corpus_from(serde_json::Value::Array(chunks));
        let outline = HierarchyIndex::build(corpus.chunks()).outline(&corpus);

        assert_eq!(outline.rows.len(), MAX_OUTLINE_DEPTH + 1);
        assert_eq!(outline.warnings.len(), 1);
        assert!(matches!(
            outline.warnings[0],
            OutlineWarning::DepthCeiling { .. }
        ));
    }

    #[test]
    fn test_multiple_roots() {
        let corpus = corpus_from(serde_json::json!([
            chunk("r1", None),
            chunk("r2", None),
            chunk("c", Some("r2")),
        ]));
        let index = HierarchyIndex::build(corpus.chunks());
        assert_eq!(index.roots(), ["r1".to_string(), "r2".to_string()]);

        let outline = index.outline(&corpus);
        let ids: Vec<&str> = outline
            .rows
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["r1", "r2", "c"]);
    }
}
