//! Navigation state machine: current chunk + history stack, with the
//! breadcrumb/sibling/link components wired in behind a single mutable
//! owner.

use crate::breadcrumbs::{build_breadcrumbs, BreadcrumbItem, Breadcrumbs};
use crate::error::{EngineError, Result};
use crate::hierarchy::{HierarchyIndex, Outline};
use crate::links::{annotate, AnnotatedContent};
use crate::normalize::{normalize, Corpus, LoadReport};
use crate::siblings::{resolve_siblings, Siblings};
use crate::stats::DocumentStats;
use coredoc_model::wire::CoredocDocument;
use coredoc_model::{Chunk, ChunkId, Document};
use serde::{Deserialize, Serialize};

/// One step of the back-navigation stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: ChunkId,
    pub title: String,
}

/// The navigation engine for one loaded document.
///
/// Owns the read-only corpus and hierarchy index plus the only mutable
/// navigation state (current chunk, history, cached breadcrumbs). All
/// operations are synchronous and complete within the call; a host that
/// shares a navigator across threads must serialize access itself.
///
/// Loading a new document means constructing a new `Navigator`; dropping
/// the old one discards its state.
#[derive(Debug, Clone)]
pub struct Navigator {
    corpus: Corpus,
    hierarchy: HierarchyIndex,
    current: usize,
    history: Vec<HistoryEntry>,
    breadcrumbs: Breadcrumbs,
}

impl Navigator {
    /// Normalize and index the artifact, entering at its root.
    ///
    /// Fails only for a chunk-less artifact; every other malformation is
    /// absorbed (see the [`LoadReport`]).
    pub fn load(raw: &CoredocDocument) -> Result<Self> {
        let corpus = normalize(raw)?;
        let hierarchy = HierarchyIndex::build(corpus.chunks());
        let current = corpus
            .index_of(corpus.root_id())
            .ok_or_else(|| EngineError::UnknownChunk(corpus.root_id().to_string()))?;
        let breadcrumbs = build_breadcrumbs(&corpus.chunks()[current], &corpus);

        log::debug!(
            "Loaded document {} ({} chunks, root {})",
            corpus.document().id,
            corpus.len(),
            corpus.root_id()
        );

        Ok(Self {
            corpus,
            hierarchy,
            current,
            history: Vec::new(),
            breadcrumbs,
        })
    }

    /// Jump to a chunk by id.
    ///
    /// Unknown ids error without touching state. Navigating to the current
    /// chunk is harmless and pushes nothing onto the history stack.
    pub fn navigate_to(&mut self, id: &str) -> Result<()> {
        let Some(target) = self.corpus.index_of(id) else {
            log::warn!("Navigation target not found: {id}");
            return Err(EngineError::UnknownChunk(id.to_string()));
        };

        if target != self.current {
            let from = self.current_chunk();
            let entry = HistoryEntry {
                id: from.id.clone(),
                title: from.title.clone(),
            };
            self.history.push(entry);
            self.current = target;
            self.refresh_breadcrumbs();
        }
        Ok(())
    }

    /// Pop one step back. Single-level undo: the popped entry is not
    /// re-pushed anywhere. Returns false on an empty history.
    pub fn navigate_back(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        let Some(target) = self.corpus.index_of(&entry.id) else {
            return false;
        };
        self.current = target;
        self.refresh_breadcrumbs();
        true
    }

    /// Return to the root, clearing the history stack.
    pub fn navigate_home(&mut self) {
        self.history.clear();
        if let Some(root) = self.corpus.index_of(self.corpus.root_id()) {
            self.current = root;
            self.refresh_breadcrumbs();
        }
    }

    /// Move to the next sibling of the current chunk, if there is one.
    pub fn sibling_next(&mut self) -> bool {
        let target = self.siblings().next.map(|c| c.id.clone());
        self.navigate_to_optional(target)
    }

    /// Move to the previous sibling of the current chunk, if there is one.
    pub fn sibling_prev(&mut self) -> bool {
        let target = self.siblings().prev.map(|c| c.id.clone());
        self.navigate_to_optional(target)
    }

    fn navigate_to_optional(&mut self, target: Option<ChunkId>) -> bool {
        match target {
            Some(id) => self.navigate_to(&id).is_ok(),
            None => false,
        }
    }

    fn refresh_breadcrumbs(&mut self) {
        self.breadcrumbs = build_breadcrumbs(&self.corpus.chunks()[self.current], &self.corpus);
    }

    // Read surface for the host UI.

    #[must_use]
    pub fn document(&self) -> &Document {
        self.corpus.document()
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub fn load_report(&self) -> &LoadReport {
        self.corpus.report()
    }

    #[must_use]
    pub fn current_chunk(&self) -> &Chunk {
        &self.corpus.chunks()[self.current]
    }

    #[must_use]
    pub fn breadcrumbs(&self) -> &[BreadcrumbItem] {
        &self.breadcrumbs.items
    }

    #[must_use]
    pub fn breadcrumb_trail(&self) -> &Breadcrumbs {
        &self.breadcrumbs
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Next/previous neighbors of the current chunk.
    #[must_use]
    pub fn siblings(&self) -> Siblings<'_> {
        resolve_siblings(self.current_chunk(), &self.corpus)
    }

    #[must_use]
    pub fn hierarchy(&self) -> &HierarchyIndex {
        &self.hierarchy
    }

    /// Display outline of the whole document.
    #[must_use]
    pub fn outline(&self) -> Outline {
        self.hierarchy.outline(&self.corpus)
    }

    /// Current chunk's content with keyword links resolved.
    #[must_use]
    pub fn annotate_current(&self) -> AnnotatedContent {
        annotate(self.current_chunk(), &self.corpus)
    }

    /// Any chunk's content with keyword links resolved.
    pub fn annotate(&self, id: &str) -> Result<AnnotatedContent> {
        let chunk = self
            .corpus
            .get(id)
            .ok_or_else(|| EngineError::UnknownChunk(id.to_string()))?;
        Ok(annotate(chunk, &self.corpus))
    }

    /// Corpus-wide statistics.
    #[must_use]
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.corpus, &self.hierarchy)
    }
}
