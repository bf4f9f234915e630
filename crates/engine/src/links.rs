//! Keyword link resolver: rewrites chunk content into a sequence of plain
//! and linkable segments. Representation-agnostic — a renderer decides
//! what a link segment looks like.

use crate::normalize::Corpus;
use coredoc_model::{Chunk, ChunkId, EmbeddedLink};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// One span of annotated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Segment {
    /// Plain text, rendered as-is
    Text { text: String },

    /// A keyword occurrence substituted into a cross-reference
    Link {
        /// The matched text, original casing preserved
        text: String,
        /// The keyword that produced the match
        keyword: String,
        /// Chunk the link navigates to
        target: ChunkId,
        /// Hover/preview hint
        hint: String,
    },
}

/// Content of one chunk with keyword occurrences resolved into links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedContent {
    pub chunk_id: ChunkId,
    pub segments: Vec<Segment>,
}

impl AnnotatedContent {
    /// Reassemble the original content text.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Text { text } | Segment::Link { text, .. } => text.as_str(),
            })
            .collect()
    }

    /// Link segments only, in content order.
    pub fn links(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Link { .. }))
    }
}

/// Annotate a chunk's content.
///
/// Primary mode substitutes the chunk's embedded links, longest keyword
/// first so a short keyword ("machine") cannot corrupt the span of a
/// longer one that contains it ("machine learning"). Fallback mode (no
/// embedded links) links each extracted keyword to the first *other*
/// chunk whose title contains the term; terms without a title match stay
/// plain text.
///
/// Substitution is one-pass: a match landing inside an already substituted
/// span is not re-matched, keeping the result independent of replacement
/// content.
#[must_use]
pub fn annotate(chunk: &Chunk, corpus: &Corpus) -> AnnotatedContent {
    let mut segments = vec![Segment::Text {
        text: chunk.content.clone(),
    }];

    if chunk.embedded_links.is_empty() {
        for keyword in &chunk.keywords {
            let term = keyword.term.trim();
            if term.is_empty() {
                continue;
            }
            if let Some(target) = title_match(term, chunk, corpus) {
                let hint = default_hint(term);
                segments = substitute(segments, term, &target, &hint);
            }
        }
    } else {
        let mut links: Vec<&EmbeddedLink> = chunk.embedded_links.iter().collect();
        links.sort_by(|a, b| b.keyword.len().cmp(&a.keyword.len()));

        for link in links {
            if link.keyword.is_empty() {
                continue;
            }
            let hint = link
                .context_hint
                .clone()
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| default_hint(&link.keyword));
            segments = substitute(segments, &link.keyword, &link.target_page_id, &hint);
        }
    }

    AnnotatedContent {
        chunk_id: chunk.id.clone(),
        segments,
    }
}

fn default_hint(keyword: &str) -> String {
    format!("Click to explore {keyword}")
}

/// First other chunk whose title contains the term, case-insensitive.
fn title_match(term: &str, current: &Chunk, corpus: &Corpus) -> Option<ChunkId> {
    let needle = term.to_lowercase();
    corpus
        .chunks()
        .iter()
        .find(|c| c.id != current.id && c.title.to_lowercase().contains(&needle))
        .map(|c| c.id.clone())
}

/// Replace every whole-word, case-insensitive occurrence of `keyword`
/// inside the Text segments. Link segments pass through untouched — that
/// is the one-pass guard.
fn substitute(segments: Vec<Segment>, keyword: &str, target: &str, hint: &str) -> Vec<Segment> {
    let pattern = match RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(err) => {
            log::warn!("Unusable keyword pattern {keyword:?}: {err}");
            return segments;
        }
    };

    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let Segment::Text { text } = segment else {
            out.push(segment);
            continue;
        };

        let mut last = 0;
        for found in pattern.find_iter(&text) {
            if found.start() > last {
                out.push(Segment::Text {
                    text: text[last..found.start()].to_string(),
                });
            }
            out.push(Segment::Link {
                text: found.as_str().to_string(),
                keyword: keyword.to_string(),
                target: target.to_string(),
                hint: hint.to_string(),
            });
            last = found.end();
        }

        if last == 0 {
            out.push(Segment::Text { text });
        } else if last < text.len() {
            out.push(Segment::Text {
                text: text[last..].to_string(),
            });
        }
    }
    out
}
