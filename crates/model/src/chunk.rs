use crate::wire::{EmbeddedLink, Keyword};
use serde::{Deserialize, Serialize};

/// Chunk identifier, unique within one document.
pub type ChunkId = String;

/// The atomic navigable unit: a document fragment with content, metadata,
/// and structural links to other chunks.
///
/// This is the canonical shape every chunk takes after normalization,
/// regardless of which wire schema it arrived in. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Unique id within the document
    pub id: ChunkId,

    /// Display title; "Untitled" when the artifact carried none
    pub title: String,

    /// Short display summary (legacy pages reuse the title here)
    pub summary: String,

    /// Raw text content
    pub content: String,

    /// Informational character count
    pub character_count: usize,

    /// Depth hint; 0 when absent. Not authoritative — hierarchy is derived
    /// structurally from parent links
    pub level: u32,

    /// Structural links to other chunks
    pub relationships: Relationships,

    /// Extracted keywords, the fallback linking source
    #[serde(default)]
    pub keywords: Vec<Keyword>,

    /// Explicit keyword → target links, the primary linking source
    #[serde(default)]
    pub embedded_links: Vec<EmbeddedLink>,

    /// Ordering among same-parent siblings (legacy schema only)
    #[serde(default)]
    pub position_in_parent: Option<u32>,

    /// Processor-assigned structural category (heading, paragraph, ...)
    #[serde(default)]
    pub structural_type: Option<String>,

    /// Estimated reading time for this fragment
    #[serde(default)]
    pub reading_time_seconds: Option<u32>,
}

impl Chunk {
    /// Parent chunk id, if any. `None` marks a root candidate.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.relationships.parent.as_deref()
    }

    /// True when this chunk declares no parent.
    #[must_use]
    pub fn is_root_candidate(&self) -> bool {
        self.relationships.parent.is_none()
    }

    /// Number of linkable spans this chunk can contribute (embedded links,
    /// or keywords when no explicit links exist).
    #[must_use]
    pub fn link_count(&self) -> usize {
        if self.embedded_links.is_empty() {
            self.keywords.len()
        } else {
            self.embedded_links.len()
        }
    }
}

/// Structural links connecting chunks into a graph.
///
/// Any of these may dangle (name an id that does not exist in the
/// document); consumers treat unresolvable ids as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Relationships {
    /// Parent chunk; `None` marks a root candidate
    pub parent: Option<ChunkId>,

    /// Declared children, in display order
    pub children: Vec<ChunkId>,

    /// Previous sibling at the same level
    pub prev: Option<ChunkId>,

    /// Next sibling at the same level
    pub next: Option<ChunkId>,

    /// Non-structural cross-references
    pub references: Vec<ChunkId>,
}
