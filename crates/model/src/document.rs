use crate::chunk::ChunkId;
use serde::{Deserialize, Serialize};

/// Load-time document metadata, reduced to what the engine reads.
/// Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: String,

    pub title: String,

    /// Root id as declared by the artifact, either schema generation.
    /// May dangle; the normalizer resolves the effective root separately.
    pub declared_root: Option<ChunkId>,

    /// Declared chunk/page count, falling back to the actual payload length
    pub total_chunks: usize,

    /// ISO-8601 creation timestamp, passed through verbatim
    pub created_at: String,

    pub coverage_percentage: Option<f64>,
}
