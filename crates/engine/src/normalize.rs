//! Compatibility normalizer: the single place where the two wire schema
//! generations reconcile into the canonical corpus. Nothing downstream of
//! this module branches on schema generation.

use crate::error::{EngineError, Result};
use coredoc_model::wire::{CoredocDocument, WireChunk, WirePage, WireRelationships};
use coredoc_model::{Chunk, ChunkId, Document, Relationships};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const UNTITLED: &str = "Untitled";

/// Which schema generation the artifact arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaGeneration {
    /// Current "chunks" schema
    Chunks,
    /// Legacy "pages" schema
    Pages,
}

/// Which tier of the root fallback chain produced the effective root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootResolution {
    /// The declared root id resolved to a chunk
    Declared,
    /// Fell back to the first parentless level-0 chunk
    Parentless,
    /// Last resort: the first chunk in document order
    FirstChunk,
}

impl RootResolution {
    /// True when a fallback tier was used instead of the declared root.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        !matches!(self, Self::Declared)
    }
}

/// What happened during normalization. Observable by the caller for
/// logging/display; never blocks navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub schema: SchemaGeneration,

    pub root_resolution: RootResolution,

    /// Later occurrences of duplicated ids, dropped first-wins
    pub dropped_duplicates: Vec<ChunkId>,
}

/// The normalized, immutable chunk set of one loaded document.
#[derive(Debug, Clone)]
pub struct Corpus {
    document: Document,
    chunks: Vec<Chunk>,
    index: HashMap<ChunkId, usize>,
    root_id: ChunkId,
    report: LoadReport,
}

impl Corpus {
    /// All chunks, document order.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Look up a chunk by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Chunk> {
        self.index.get(id).map(|&i| &self.chunks[i])
    }

    /// Position of a chunk in document order.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// True when the id names a chunk in this corpus.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Effective navigational root id.
    #[must_use]
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Effective navigational root chunk.
    #[must_use]
    pub fn root(&self) -> &Chunk {
        &self.chunks[self.index[&self.root_id]]
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Reconcile a wire artifact into the canonical corpus.
///
/// Legacy pages map onto the chunk shape (`summary := title`,
/// `relationships.parent := parent_page_id`); children/prev/next are left
/// empty there — they are reconstructed structurally by the hierarchy
/// index and sibling resolver, not here. When both payloads are present
/// the current schema wins.
///
/// Fails only when the artifact carries no entries at all.
pub fn normalize(raw: &CoredocDocument) -> Result<Corpus> {
    let (mut chunks, schema) = match (&raw.chunks, &raw.pages) {
        (Some(chunks), _) if !chunks.is_empty() => {
            (chunks.iter().map(from_wire_chunk).collect::<Vec<_>>(), SchemaGeneration::Chunks)
        }
        (_, Some(pages)) if !pages.is_empty() => {
            (pages.iter().map(from_wire_page).collect::<Vec<_>>(), SchemaGeneration::Pages)
        }
        _ => return Err(EngineError::EmptyDocument),
    };

    // Duplicate ids: first occurrence wins, later ones are dropped so the
    // array and the id index agree.
    let mut index: HashMap<ChunkId, usize> = HashMap::with_capacity(chunks.len());
    let mut dropped_duplicates = Vec::new();
    let mut kept = Vec::with_capacity(chunks.len());
    for chunk in chunks.drain(..) {
        if index.contains_key(&chunk.id) {
            log::warn!("Duplicate chunk id dropped: {}", chunk.id);
            dropped_duplicates.push(chunk.id);
            continue;
        }
        index.insert(chunk.id.clone(), kept.len());
        kept.push(chunk);
    }
    let chunks = kept;

    let declared_root = raw
        .document
        .root_chunk_id
        .clone()
        .or_else(|| raw.document.root_page_id.clone());

    let (root_id, root_resolution) = resolve_root(declared_root.as_deref(), &chunks, &index);
    if root_resolution.is_fallback() {
        log::warn!(
            "Declared root {:?} did not resolve; using {} ({:?})",
            declared_root,
            root_id,
            root_resolution
        );
    }

    let document = Document {
        id: raw.document.id.clone(),
        title: raw.document.title.clone(),
        declared_root,
        total_chunks: raw
            .document
            .total_chunks
            .or(raw.document.total_pages)
            .unwrap_or(chunks.len()),
        created_at: raw.document.created_at.clone(),
        coverage_percentage: raw.document.coverage_percentage,
    };

    Ok(Corpus {
        document,
        chunks,
        index,
        root_id,
        report: LoadReport {
            schema,
            root_resolution,
            dropped_duplicates,
        },
    })
}

/// Root fallback chain: declared id, then first parentless level-0 chunk,
/// then the first chunk in document order. Never fails on a non-empty set.
fn resolve_root(
    declared: Option<&str>,
    chunks: &[Chunk],
    index: &HashMap<ChunkId, usize>,
) -> (ChunkId, RootResolution) {
    if let Some(id) = declared {
        if index.contains_key(id) {
            return (id.to_string(), RootResolution::Declared);
        }
    }

    if let Some(chunk) = chunks
        .iter()
        .find(|c| c.is_root_candidate() && c.level == 0)
    {
        return (chunk.id.clone(), RootResolution::Parentless);
    }

    (chunks[0].id.clone(), RootResolution::FirstChunk)
}

fn from_wire_chunk(wire: &WireChunk) -> Chunk {
    let relationships = match &wire.relationships {
        Some(rel) => from_wire_relationships(rel),
        // Some current-schema emitters still attach the flat parent pointer
        None => Relationships {
            parent: wire.parent_page_id.clone(),
            ..Relationships::default()
        },
    };

    let metadata = wire.metadata.as_ref();
    Chunk {
        id: wire.id.clone(),
        title: wire
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string()),
        summary: wire.summary.clone(),
        content: wire.content.clone(),
        character_count: wire
            .character_count
            .unwrap_or_else(|| wire.content.chars().count()),
        level: wire.level.unwrap_or(0),
        relationships,
        keywords: wire.keywords.clone(),
        embedded_links: wire.embedded_links.clone(),
        position_in_parent: None,
        structural_type: metadata.and_then(|m| m.structural_type.clone()),
        reading_time_seconds: metadata.and_then(|m| m.reading_time_seconds),
    }
}

fn from_wire_page(wire: &WirePage) -> Chunk {
    let title = if wire.title.is_empty() {
        UNTITLED.to_string()
    } else {
        wire.title.clone()
    };

    Chunk {
        id: wire.id.clone(),
        // Legacy pages have no summary; the title stands in
        summary: title.clone(),
        title,
        content: wire.content.clone(),
        character_count: wire
            .character_count
            .unwrap_or_else(|| wire.content.chars().count()),
        level: wire.level.unwrap_or(0),
        relationships: Relationships {
            parent: wire.parent_page_id.clone(),
            ..Relationships::default()
        },
        keywords: Vec::new(),
        embedded_links: wire.embedded_links.clone(),
        position_in_parent: wire.position_in_parent,
        structural_type: None,
        reading_time_seconds: None,
    }
}

fn from_wire_relationships(wire: &WireRelationships) -> Relationships {
    Relationships {
        parent: wire.parent.clone(),
        children: wire.children.clone(),
        prev: wire.prev.clone(),
        next: wire.next.clone(),
        references: wire.references.clone(),
    }
}
