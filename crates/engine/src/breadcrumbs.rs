//! Breadcrumb builder: reconstructs the root→current trail from parent
//! links, once per navigation event.

use crate::normalize::Corpus;
use coredoc_model::{Chunk, ChunkId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Hard ceiling on the upward parent walk.
pub const MAX_TRAIL_DEPTH: usize = 50;

/// One entry of the root→current trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub id: ChunkId,
    pub title: String,
    pub level: u32,
}

/// Why the upward walk stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PathTruncation {
    /// The parent chain revisited an id
    Cycle { id: ChunkId },
    /// [`MAX_TRAIL_DEPTH`] exceeded
    DepthCeiling,
}

/// Root-first trail plus whatever cut it short.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breadcrumbs {
    pub items: Vec<BreadcrumbItem>,
    pub truncation: Option<PathTruncation>,
}

impl Breadcrumbs {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }
}

/// Walk `relationships.parent` upward from `chunk`, collecting the trail
/// root-first. A revisited id (cycle) or the depth ceiling stops the walk
/// with a recorded truncation; an unresolvable parent simply ends it —
/// dangling parents are not an error, the chunk is treated as a root.
#[must_use]
pub fn build_breadcrumbs(chunk: &Chunk, corpus: &Corpus) -> Breadcrumbs {
    let mut items = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut truncation = None;

    let mut cursor = Some(chunk);
    while let Some(current) = cursor {
        if items.len() >= MAX_TRAIL_DEPTH {
            log::warn!("Breadcrumb depth ceiling reached at {}", current.id);
            truncation = Some(PathTruncation::DepthCeiling);
            break;
        }
        if !visited.insert(&current.id) {
            log::warn!("Cycle in parent chain at {}", current.id);
            truncation = Some(PathTruncation::Cycle {
                id: current.id.clone(),
            });
            break;
        }

        items.push(BreadcrumbItem {
            id: current.id.clone(),
            title: current.title.clone(),
            level: current.level,
        });
        cursor = current.parent_id().and_then(|pid| corpus.get(pid));
    }

    items.reverse();
    Breadcrumbs { items, truncation }
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

    fn chunk(id: &str, parent: Option<&str>, level: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id, "content": "", "title": id.to_uppercase(), "level": level,
            "relationships": {"parent": parent, "children": [], "prev": null, "next": null, "references": []}
        })
    }

    #[test]
    fn test_trail_is_root_first() {
        let corpus = corpus_from(serde_json::json!([
            chunk("root", None, 0),
            chunk("mid", Some("root"), 1),
            chunk("leaf", Some("mid"), 2),
        ]));
        let crumbs = build_breadcrumbs(corpus.get("leaf").unwrap(), &corpus);

        let ids: Vec<&str> = crumbs.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["root", "mid", "leaf"]);
        assert_eq!(crumbs.items[0].title, "ROOT");
        assert_eq!(crumbs.items[2].level, 2);
        assert!(!crumbs.is_truncated());
    }

    #[test]
    fn test_parent_cycle_terminates_with_finite_trail() {
        let corpus = corpus_from(serde_json::json!([
            chunk("a", Some("b"), 0),
            chunk("b", Some("a"), 0),
        ]));
        let crumbs = build_breadcrumbs(corpus.get("a").unwrap(), &corpus);

        assert!(crumbs.items.len() <= 2);
        assert!(matches!(
            crumbs.truncation,
            Some(PathTruncation::Cycle { ref id }) if id == "a"
        ));
        // The collected part of the trail is still root-first
        let ids: Vec<&str> = crumbs.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_dangling_parent_ends_walk_silently() {
        let corpus = corpus_from(serde_json::json!([chunk("only", Some("ghost"), 3)]));
        let crumbs = build_breadcrumbs(corpus.get("only").unwrap(), &corpus);

        assert_eq!(crumbs.items.len(), 1);
        assert_eq!(crumbs.items[0].id, "only");
        assert!(!crumbs.is_truncated());
    }

    #[test]
    fn test_depth_ceiling() {
        let mut chunks = vec![chunk("n0", None, 0)];
        for i in 1..=MAX_TRAIL_DEPTH + 5 {
            chunks.push(chunk(&format!("n{i}"), Some(&format!("n{}", i - 1)), i as u32));
        }
        let corpus = corpus_from(serde_json::Value::Array(chunks));
        let deepest = format!("n{}", MAX_TRAIL_DEPTH + 5);
        let crumbs = build_breadcrumbs(corpus.get(&deepest).unwrap(), &corpus);

        assert_eq!(crumbs.items.len(), MAX_TRAIL_DEPTH);
        assert_eq!(crumbs.truncation, Some(PathTruncation::DepthCeiling));
    }
}
