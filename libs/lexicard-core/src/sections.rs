//! Back-text section parsing and part-of-speech extraction.
//!
//! Back text uses bracketed tags to mark what each block is:
//!
//! ```text
//! 【中文】貓
//! 【例句】I have a cat.
//! ```
//!
//! Text before the first tag (or text with no tags at all) is treated
//! as a plain definition.

use crate::types::{ParsedBack, Section, SectionKind};

const TAG_OPEN: char = '【';
const TAG_CLOSE: char = '】';

/// Fixed tag vocabulary. Any other bracketed tag is accepted but
/// classified as `Other`.
const TAG_KINDS: &[(&str, SectionKind)] = &[
    ("中文", SectionKind::Definition),
    ("搭配詞", SectionKind::Collocation),
    ("例句", SectionKind::Example),
    ("詞性變化", SectionKind::WordFamily),
];

/// Recognized part-of-speech words and abbreviations, lowercase.
const POS_WORDS: &[&str] = &[
    "noun", "verb", "adjective", "adverb", "preposition", "conjunction",
    "interjection", "pronoun", "n", "v", "vt", "vi", "adj", "adv", "prep",
    "conj", "interj", "pron",
];

/// Replace CRLF and lone CR sequences with LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Derive the parsed view of a card's back text.
///
/// Pure: identical `(back, front)` inputs always produce the same
/// result. The row normalizer relies on this when it re-derives after a
/// continuation merge.
pub fn derive_parsed(back: &str, front: &str) -> ParsedBack {
    let text = normalize_newlines(back);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedBack::default();
    }

    let mut parsed = ParsedBack::default();
    if let Some(pos) = pos_suffix(front) {
        parsed.parts_of_speech.push(pos);
    }

    if !trimmed.contains(TAG_OPEN) {
        parsed.sections.push(Section::new(
            SectionKind::Definition,
            "",
            trimmed,
        ));
        return parsed;
    }

    for segment in split_segments(trimmed) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        parsed.sections.push(parse_segment(segment));
    }
    parsed
}

/// Split text at every occurrence of a recognized bracketed tag. Text
/// before the first tag becomes a leading segment.
fn split_segments(text: &str) -> Vec<&str> {
    let mut cuts: Vec<usize> = Vec::new();
    for (tag, _) in TAG_KINDS {
        let marker = format!("{TAG_OPEN}{tag}{TAG_CLOSE}");
        let mut from = 0;
        while let Some(pos) = text[from..].find(&marker) {
            cuts.push(from + pos);
            from += pos + marker.len();
        }
    }
    cuts.sort_unstable();

    let mut segments = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        if cut > start {
            segments.push(&text[start..cut]);
        }
        start = cut;
    }
    segments.push(&text[start..]);
    segments
}

/// Parse one segment, either `【tag】content` or plain leading text.
fn parse_segment(segment: &str) -> Section {
    if let Some(rest) = segment.strip_prefix(TAG_OPEN) {
        if let Some(close) = rest.find(TAG_CLOSE) {
            let title = &rest[..close];
            let content = rest[close + TAG_CLOSE.len_utf8()..].trim();
            let kind = TAG_KINDS
                .iter()
                .find(|(tag, _)| *tag == title)
                .map(|(_, kind)| *kind)
                .unwrap_or(SectionKind::Other);
            return Section::new(kind, title, content);
        }
    }
    Section::new(SectionKind::Definition, "", segment)
}

/// Extract a trailing parenthetical part-of-speech marker from the
/// front text, e.g. `run (v.)` yields `(v.)`. Every word inside the
/// parentheses must be in the part-of-speech vocabulary.
fn pos_suffix(front: &str) -> Option<String> {
    let front = front.trim_end();
    if !front.ends_with(')') {
        return None;
    }
    let open = front.rfind('(')?;
    let inner = &front[open + 1..front.len() - 1];
    let mut words = inner.split_whitespace().peekable();
    words.peek()?;
    if words.all(|word| POS_WORDS.contains(&word.trim_end_matches('.').to_lowercase().as_str())) {
        Some(front[open..].to_string())
    } else {
        None
    }
}
