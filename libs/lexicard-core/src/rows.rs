//! Row classification: decides what each input row contributes.

/// What a single input row contributes to the ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowShape {
    /// Header, blank, or otherwise contentless row.
    Skip,
    /// Single-field row extending the previous card's back text.
    ContinueLast(String),
    /// A complete new card record.
    NewCard {
        category: String,
        front: String,
        back: String,
    },
}

/// Classify one row of fields.
///
/// `ordinal` is the zero-based position of the row in the input and
/// `has_last_card` says whether a previous card exists to receive a
/// continuation.
pub fn classify_row(fields: &[String], ordinal: usize, has_last_card: bool) -> RowShape {
    if ordinal == 0 && is_header_row(fields) {
        return RowShape::Skip;
    }

    if fields.iter().all(|f| f.trim().is_empty()) {
        return RowShape::Skip;
    }

    if fields.len() == 1 && has_last_card {
        let text = fields[0].trim();
        if is_continuation_text(text) {
            return RowShape::ContinueLast(text.to_string());
        }
        // Single-field row after a card, but no recognized continuation
        // prefix: drop it rather than guess.
        tracing::debug!(row = ordinal, "dropping single-field row with no continuation prefix");
        return RowShape::Skip;
    }

    let row = match fields.len() {
        0 => return RowShape::Skip,
        1 => RowShape::NewCard {
            category: String::new(),
            front: fields[0].clone(),
            back: String::new(),
        },
        2 => RowShape::NewCard {
            category: String::new(),
            front: fields[0].clone(),
            back: fields[1].clone(),
        },
        _ => RowShape::NewCard {
            category: fields[0].clone(),
            front: fields[1].clone(),
            back: fields[2..].join(", "),
        },
    };

    // A card needs a front; rows without one are dropped.
    match &row {
        RowShape::NewCard { front, .. } if front.trim().is_empty() => RowShape::Skip,
        _ => row,
    }
}

/// True for a first row that reads like an exported header, so a
/// re-imported export does not gain a bogus card.
fn is_header_row(fields: &[String]) -> bool {
    let joined = fields.join(" ").to_lowercase();
    (joined.contains("class") || joined.contains("category"))
        && (joined.contains("word") || joined.contains("front"))
}

/// True when a lone field reads as a continuation of the previous
/// card's back text.
fn is_continuation_text(text: &str) -> bool {
    text.starts_with('【')
        || text.starts_with('-')
        || text.starts_with('(')
        || text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}
