//! # Coredoc Engine
//!
//! Chunk-graph navigation over pre-computed Coredoc documents: resolve
//! keyword occurrences into cross-reference links and move through the
//! document by clicking them instead of scrolling.
//!
//! ## Features
//!
//! - **Schema normalization** - legacy "pages" and current "chunks"
//!   artifacts reconcile into one canonical corpus at the load boundary
//! - **Cycle-safe hierarchy** - parent→children index and outline walks
//!   that survive malformed or cyclic parent data
//! - **Breadcrumbs & siblings** - root→current trails and next/prev
//!   resolution with a deterministic legacy fallback
//! - **Keyword annotation** - longest-match-first substitution of keyword
//!   spans into navigable link segments
//! - **Navigation state machine** - current chunk + history stack with
//!   back/home/sibling moves
//!
//! ## Architecture
//!
//! ```text
//! CoredocDocument (wire)
//!     │
//!     ├──> Normalizer ──> Corpus (canonical chunks + id index + root)
//!     │
//!     ├──> HierarchyIndex (parent → ordered children, once per load)
//!     │
//!     └──> Navigator (current, history, breadcrumbs)
//!            ├─ navigate_to / back / home / sibling moves
//!            ├─ Breadcrumb Builder (per navigation event)
//!            ├─ Sibling Resolver
//!            └─ Link Resolver (annotates the displayed chunk)
//! ```
//!
//! Everything is synchronous and single-actor: the chunk set is read-only
//! after load, and only the [`Navigator`] mutates navigation state. No
//! malformed input is fatal — dangling references resolve to nothing,
//! cycles and pathological depth truncate with a recorded warning, and the
//! document stays navigable from its root.

mod breadcrumbs;
mod error;
mod hierarchy;
mod links;
mod navigator;
mod normalize;
mod siblings;
mod stats;

pub use breadcrumbs::{build_breadcrumbs, BreadcrumbItem, Breadcrumbs, PathTruncation, MAX_TRAIL_DEPTH};
pub use error::{EngineError, Result};
pub use hierarchy::{HierarchyIndex, Outline, OutlineRow, OutlineWarning, MAX_OUTLINE_DEPTH};
pub use links::{annotate, AnnotatedContent, Segment};
pub use navigator::{HistoryEntry, Navigator};
pub use normalize::{normalize, Corpus, LoadReport, RootResolution, SchemaGeneration};
pub use siblings::{resolve_siblings, Siblings};
pub use stats::DocumentStats;
