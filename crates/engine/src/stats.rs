//! Corpus-wide statistics. Informational only; nothing here feeds back
//! into navigation.

use crate::hierarchy::HierarchyIndex;
use crate::normalize::Corpus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregate figures for one loaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStats {
    pub total_chunks: usize,

    pub total_characters: usize,

    pub avg_chunk_size: usize,

    /// Levels in the display outline (cycle/ceiling truncation included)
    pub hierarchy_depth: usize,

    /// Summed chunk reading-time estimates, where present
    pub reading_time_seconds: u32,

    /// Keyword term → number of chunks carrying it
    pub keyword_distribution: HashMap<String, usize>,

    /// Processor structural category → chunk count, where present
    pub chunks_by_type: HashMap<String, usize>,

    pub coverage_percentage: Option<f64>,
}

impl DocumentStats {
    /// One pass over the corpus plus the outline depth.
    #[must_use]
    pub fn collect(corpus: &Corpus, hierarchy: &HierarchyIndex) -> Self {
        let mut total_characters = 0usize;
        let mut reading_time_seconds = 0u32;
        let mut keyword_distribution: HashMap<String, usize> = HashMap::new();
        let mut chunks_by_type: HashMap<String, usize> = HashMap::new();

        for chunk in corpus.chunks() {
            total_characters += chunk.character_count;
            reading_time_seconds += chunk.reading_time_seconds.unwrap_or(0);

            for keyword in &chunk.keywords {
                *keyword_distribution
                    .entry(keyword.term.clone())
                    .or_insert(0) += 1;
            }
            if let Some(kind) = &chunk.structural_type {
                *chunks_by_type.entry(kind.clone()).or_insert(0) += 1;
            }
        }

        let total_chunks = corpus.len();
        Self {
            total_chunks,
            total_characters,
            avg_chunk_size: if total_chunks == 0 {
                0
            } else {
                total_characters / total_chunks
            },
            hierarchy_depth: hierarchy.outline(corpus).depth(),
            reading_time_seconds,
            keyword_distribution,
            chunks_by_type,
            coverage_percentage: corpus.document().coverage_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use coredoc_model::CoredocDocument;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect() {
        let raw: CoredocDocument = serde_json::from_value(serde_json::json!({
            "document": {"id": "d", "title": "Doc", "created_at": "", "coverage_percentage": 87.5},
            "chunks": [
                {"id": "c0", "content": "aaaa", "character_count": 4,
                 "metadata": {"structural_type": "heading", "reading_time_seconds": 10},
                 "keywords": [{"term": "alpha", "importance_score": 0.9}]},
                {"id": "c1", "content": "bb", "character_count": 2,
                 "metadata": {"structural_type": "paragraph", "reading_time_seconds": 5},
                 "keywords": [{"term": "alpha", "importance_score": 0.4},
                              {"term": "beta", "importance_score": 0.8}],
                 "relationships": {"parent": "c0", "children": [], "prev": null, "next": null, "references": []}}
            ]
        }))
        .unwrap();
        let corpus = normalize(&raw).unwrap();
        let hierarchy = HierarchyIndex::build(corpus.chunks());
        let stats = DocumentStats::collect(&corpus, &hierarchy);

        assert_eq!(stats.total_chunks, 2);
        assert_eq!(stats.total_characters, 6);
        assert_eq!(stats.avg_chunk_size, 3);
        assert_eq!(stats.hierarchy_depth, 2);
        assert_eq!(stats.reading_time_seconds, 15);
        assert_eq!(stats.keyword_distribution["alpha"], 2);
        assert_eq!(stats.keyword_distribution["beta"], 1);
        assert_eq!(stats.chunks_by_type["heading"], 1);
        assert_eq!(stats.coverage_percentage, Some(87.5));
    }
}
