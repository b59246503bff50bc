//! Core types for the card ingestion pipeline.

use serde::{Deserialize, Serialize};

use crate::sections::{derive_parsed, normalize_newlines};

/// Classified kind of one back-text section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Definition,
    Collocation,
    Example,
    WordFamily,
    Other,
}

/// One classified block of a card's back content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    /// Tag text as it appeared in the source; empty for untagged text.
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(kind: SectionKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Parsed view over a card's back text.
///
/// Derived purely from `(back_original, front)`. Section order follows
/// the order tags appeared in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBack {
    pub parts_of_speech: Vec<String>,
    pub sections: Vec<Section>,
}

/// One vocabulary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Order-derived id, unique within one ingestion run.
    pub id: i64,
    /// Free-text grouping label; empty means uncategorized.
    pub category: String,
    /// Display word or phrase, optionally suffixed with a parenthetical
    /// part-of-speech marker.
    pub front: String,
    /// Raw back text, newline-normalized, kept as a fallback rendering
    /// source.
    pub back_original: String,
    pub parsed: ParsedBack,
}

impl Card {
    /// Create a card from normalized row values.
    ///
    /// `category` and `front` are trimmed; `parsed` is derived from the
    /// back text so the card starts out consistent.
    pub fn new(
        id: i64,
        category: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        let front = front.into().trim().to_string();
        let back_original = normalize_newlines(&back.into());
        let parsed = derive_parsed(&back_original, &front);
        Self {
            id,
            category: category.into().trim().to_string(),
            front,
            back_original,
            parsed,
        }
    }

    /// Append a continuation line to the back text and re-derive the
    /// parsed view. This is the only mutation a card sees, and only
    /// while its ingestion run is still going.
    pub fn append_back(&mut self, line: &str) {
        self.back_original.push('\n');
        self.back_original.push_str(line);
        self.parsed = derive_parsed(&self.back_original, &self.front);
    }
}
