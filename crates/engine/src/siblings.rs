//! Sibling resolver: next/previous chunk within a level, with a
//! deterministic fallback for legacy documents that carry no explicit
//! prev/next pointers.

use crate::normalize::Corpus;
use coredoc_model::Chunk;

/// Neighbors of a chunk at its level. Either side may be absent.
#[derive(Debug, Clone, Copy)]
pub struct Siblings<'a> {
    pub prev: Option<&'a Chunk>,
    pub next: Option<&'a Chunk>,
}

impl Siblings<'_> {
    const NONE: Self = Self {
        prev: None,
        next: None,
    };
}

/// Resolve the chunk's neighbors.
///
/// Explicit `relationships.prev`/`next` pointers win when either is set;
/// dangling pointers resolve to `None`. Otherwise (legacy documents) the
/// group of same-parent chunks stands in: ordered by `position_in_parent`
/// when the whole group carries it, by chunk-array order otherwise — an
/// implementation-defined but deterministic convention.
#[must_use]
pub fn resolve_siblings<'a>(chunk: &Chunk, corpus: &'a Corpus) -> Siblings<'a> {
    let rel = &chunk.relationships;
    if rel.prev.is_some() || rel.next.is_some() {
        return Siblings {
            prev: rel.prev.as_deref().and_then(|id| corpus.get(id)),
            next: rel.next.as_deref().and_then(|id| corpus.get(id)),
        };
    }

    let Some(parent_id) = chunk.parent_id() else {
        return Siblings::NONE;
    };

    let mut group: Vec<&Chunk> = corpus
        .chunks()
        .iter()
        .filter(|c| c.parent_id() == Some(parent_id))
        .collect();
    if group.iter().all(|c| c.position_in_parent.is_some()) {
        // Stable: array order breaks position ties
        group.sort_by_key(|c| c.position_in_parent.unwrap_or(u32::MAX));
    }

    let Some(pos) = group.iter().position(|c| c.id == chunk.id) else {
        return Siblings::NONE;
    };

    Siblings {
        prev: pos.checked_sub(1).map(|i| group[i]),
        next: group.get(pos + 1).copied(),
    }
}
