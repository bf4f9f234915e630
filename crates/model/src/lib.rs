//! # Coredoc Model
//!
//! Data model for graph-structured "Coredoc" documents: the wire format
//! produced by the external document processor, and the canonical in-memory
//! shape the navigation engine works with.
//!
//! ## Architecture
//!
//! ```text
//! JSON artifact
//!     │
//!     ├──> wire::CoredocDocument (serde)
//!     │      ├─ "chunks" array (current schema)
//!     │      └─ "pages" array  (legacy schema)
//!     │
//!     └──> canonical types (produced by the engine's normalizer)
//!            ├─ Document: load-time metadata
//!            └─ Chunk: content + Relationships + keywords + embedded links
//! ```
//!
//! Two incompatible schema generations exist in the wild: the legacy
//! "pages" shape and the current "chunks" shape. Both deserialize through
//! [`wire::CoredocDocument`]; everything downstream of normalization sees
//! only [`Chunk`] and [`Document`].

mod chunk;
mod document;
pub mod wire;

pub use chunk::{Chunk, ChunkId, Relationships};
pub use document::Document;
pub use wire::{CoredocDocument, EmbeddedLink, Keyword};
