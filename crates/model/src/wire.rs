//! Wire format consumed from the external document processor.
//!
//! Field names mirror the JSON artifact exactly. A document carries either
//! a `chunks` array (current schema) or a `pages` array (legacy schema);
//! optional fields deserialize to defaults so partially populated artifacts
//! still load.

use serde::{Deserialize, Serialize};

/// Top-level document artifact, either schema generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoredocDocument {
    /// Document-level metadata
    pub document: DocumentMeta,

    /// Current schema payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<WireChunk>>,

    /// Legacy schema payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<WirePage>>,
}

impl CoredocDocument {
    /// True when neither payload array carries any entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.as_ref().is_none_or(|c| c.is_empty())
            && self.pages.as_ref().is_none_or(|p| p.is_empty())
    }
}

/// Document metadata; carries both generations' field variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Legacy count field
    #[serde(default)]
    pub total_pages: Option<usize>,

    /// Current count field
    #[serde(default)]
    pub total_chunks: Option<usize>,

    /// Legacy root pointer
    #[serde(default)]
    pub root_page_id: Option<String>,

    /// Current root pointer
    #[serde(default)]
    pub root_chunk_id: Option<String>,

    /// ISO-8601 creation timestamp, passed through verbatim
    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub max_depth: Option<usize>,

    #[serde(default)]
    pub original_char_count: Option<usize>,

    #[serde(default)]
    pub preserved_char_count: Option<usize>,

    #[serde(default)]
    pub coverage_percentage: Option<f64>,
}

/// Chunk entry in the current schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireChunk {
    pub id: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub context: String,

    #[serde(default)]
    pub metadata: Option<ProcessorMetadata>,

    #[serde(default)]
    pub relationships: Option<WireRelationships>,

    #[serde(default)]
    pub keywords: Vec<Keyword>,

    #[serde(default)]
    pub character_count: Option<usize>,

    /// Depth hint; derived structurally when absent
    #[serde(default)]
    pub level: Option<u32>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub embedded_links: Vec<EmbeddedLink>,

    /// Legacy compatibility: some current-schema emitters still attach the
    /// flat parent pointer instead of a relationships block
    #[serde(default)]
    pub parent_page_id: Option<String>,
}

/// Page entry in the legacy schema. No children/prev/next here; structure
/// is reconstructed from `parent_page_id` after normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WirePage {
    pub id: String,

    #[serde(default)]
    pub document_id: String,

    #[serde(default)]
    pub parent_page_id: Option<String>,

    #[serde(default)]
    pub level: Option<u32>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub embedded_links: Vec<EmbeddedLink>,

    #[serde(default)]
    pub character_count: Option<usize>,

    #[serde(default)]
    pub position_in_parent: Option<u32>,

    #[serde(default)]
    pub context: String,
}

/// Structural links between chunks as they appear on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireRelationships {
    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub children: Vec<String>,

    #[serde(default)]
    pub prev: Option<String>,

    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub references: Vec<String>,
}

/// Extracted keyword with its importance score.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Keyword {
    pub term: String,

    /// Character offsets in the source text; informational only
    #[serde(default)]
    pub positions: Vec<usize>,

    #[serde(default)]
    pub importance_score: f64,
}

/// Explicit keyword → target-chunk mapping, the primary linking source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedLink {
    pub keyword: String,

    pub target_page_id: String,

    #[serde(default)]
    pub context_hint: Option<String>,
}

/// Processor-side chunk metadata; carried for statistics, never required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessorMetadata {
    #[serde(default)]
    pub original_position: Option<usize>,

    #[serde(default)]
    pub original_length: Option<usize>,

    #[serde(default)]
    pub structural_type: Option<String>,

    #[serde(default)]
    pub heading_hierarchy: Vec<String>,

    #[serde(default)]
    pub reading_time_seconds: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_current_schema() {
        let raw = serde_json::json!({
            "document": {
                "id": "doc-1",
                "title": "Doc",
                "total_chunks": 2,
                "root_chunk_id": "c0",
                "created_at": "2024-01-01T00:00:00Z",
                "coverage_percentage": 98.5
            },
            "chunks": [
                {
                    "id": "c0",
                    "content": "hello",
                    "summary": "s",
                    "context": "",
                    "character_count": 5,
                    "relationships": {
                        "parent": null,
                        "children": ["c1"],
                        "prev": null,
                        "next": "c1",
                        "references": []
                    },
                    "keywords": [{"term": "hello", "importance_score": 0.9}],
                    "embedded_links": [
                        {"keyword": "hello", "target_page_id": "c1", "context_hint": "hi"}
                    ],
                    "level": 0,
                    "title": "Root"
                },
                {"id": "c1", "content": "world"}
            ]
        });

        let doc: CoredocDocument = serde_json::from_value(raw).unwrap();
        assert!(!doc.is_empty());
        assert_eq!(doc.document.root_chunk_id.as_deref(), Some("c0"));

        let chunks = doc.chunks.unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].embedded_links[0].target_page_id, "c1");
        assert_eq!(
            chunks[0].relationships.as_ref().unwrap().next.as_deref(),
            Some("c1")
        );
        // Sparse entries fill with defaults
        assert_eq!(chunks[1].title, None);
        assert!(chunks[1].keywords.is_empty());
    }

    #[test]
    fn test_parse_legacy_schema() {
        let raw = serde_json::json!({
            "document": {
                "id": "doc-2",
                "title": "Legacy",
                "total_pages": 2,
                "root_page_id": "p0",
                "created_at": "2023-06-01T00:00:00Z"
            },
            "pages": [
                {
                    "id": "p0",
                    "document_id": "doc-2",
                    "parent_page_id": null,
                    "level": 0,
                    "title": "Root",
                    "content": "root text",
                    "embedded_links": [],
                    "character_count": 9,
                    "position_in_parent": 0,
                    "context": ""
                },
                {
                    "id": "p1",
                    "document_id": "doc-2",
                    "parent_page_id": "p0",
                    "level": 1,
                    "title": "Child",
                    "content": "child text",
                    "embedded_links": [],
                    "character_count": 10,
                    "position_in_parent": 0,
                    "context": ""
                }
            ]
        });

        let doc: CoredocDocument = serde_json::from_value(raw).unwrap();
        assert!(doc.chunks.is_none());
        let pages = doc.pages.unwrap();
        assert_eq!(pages[1].parent_page_id.as_deref(), Some("p0"));
        assert_eq!(pages[1].position_in_parent, Some(0));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let raw = serde_json::json!({
            "document": {"id": "d", "title": "t", "created_at": "", "extra": true},
            "chunks": [{"id": "c", "content": "x", "unexpected": [1, 2, 3]}]
        });
        let doc: CoredocDocument = serde_json::from_value(raw).unwrap();
        assert_eq!(doc.chunks.unwrap()[0].id, "c");
    }

    #[test]
    fn test_empty_document() {
        let raw = serde_json::json!({
            "document": {"id": "d", "title": "t", "created_at": ""}
        });
        let doc: CoredocDocument = serde_json::from_value(raw).unwrap();
        assert!(doc.is_empty());
    }
}
