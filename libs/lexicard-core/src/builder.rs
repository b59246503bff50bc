//! Ingestion orchestration: rows in, ordered cards out.

use crate::rows::{classify_row, RowShape};
use crate::tokenizer::split_delimited;
use crate::types::Card;

/// Result of one ingestion run.
///
/// Distinguishes an input with no rows at all from one whose rows were
/// all skipped, so callers can report "no valid cards found" precisely.
#[derive(Debug, Clone, Default)]
pub struct Ingestion {
    /// Cards in input order.
    pub cards: Vec<Card>,
    /// Number of input rows examined, including skipped ones.
    pub rows_seen: usize,
}

impl Ingestion {
    /// True when the input had no rows at all.
    pub fn is_empty_input(&self) -> bool {
        self.rows_seen == 0
    }

    /// True when no cards came out of the run.
    pub fn no_cards_found(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Build cards from already-tokenized rows.
///
/// Rows are processed strictly in order: continuation rows merge into
/// the most recently emitted card, so reordering the input changes the
/// output. Each new card's id is `id_offset` plus the row ordinal,
/// unique within the run.
pub fn build_cards<I>(rows: I, id_offset: i64) -> Ingestion
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut run = Ingestion::default();
    for (ordinal, fields) in rows.into_iter().enumerate() {
        run.rows_seen += 1;
        match classify_row(&fields, ordinal, !run.cards.is_empty()) {
            RowShape::Skip => {}
            RowShape::ContinueLast(text) => {
                if let Some(last) = run.cards.last_mut() {
                    last.append_back(&text);
                }
            }
            RowShape::NewCard {
                category,
                front,
                back,
            } => {
                run.cards
                    .push(Card::new(id_offset + ordinal as i64, category, front, back));
            }
        }
    }
    run
}

/// Build cards from delimited text, one logical row per line.
pub fn build_cards_from_text(text: &str, delimiter: char, id_offset: i64) -> Ingestion {
    build_cards(
        text.lines().map(|line| split_delimited(line, delimiter)),
        id_offset,
    )
}
