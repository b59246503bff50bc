//! End-to-end pipeline tests: delimited text in, cards out.

use lexicard_core::{
    build_cards, build_cards_from_text, derive_parsed, SectionKind,
};
use pretty_assertions::assert_eq;

#[test]
fn full_file_with_header_continuations_and_blanks() {
    let input = "\
Category,Word,Definition
Animals,cat (n.),【中文】貓
\"【例句】I have a cat.\"

Animals,dog,a loyal canine
Verbs,run (v.),to move fast,on foot";

    let run = build_cards_from_text(input, ',', 0);

    assert_eq!(run.rows_seen, 6);
    assert_eq!(run.cards.len(), 3);

    let cat = &run.cards[0];
    assert_eq!(cat.id, 1);
    assert_eq!(cat.category, "Animals");
    assert_eq!(cat.front, "cat (n.)");
    assert_eq!(cat.back_original, "【中文】貓\n【例句】I have a cat.");
    assert_eq!(cat.parsed.parts_of_speech, vec!["(n.)"]);
    let kinds: Vec<SectionKind> = cat.parsed.sections.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![SectionKind::Definition, SectionKind::Example]);

    let dog = &run.cards[1];
    assert_eq!(dog.id, 4);
    assert_eq!(dog.parsed.sections.len(), 1);
    assert_eq!(dog.parsed.sections[0].kind, SectionKind::Definition);
    assert_eq!(dog.parsed.sections[0].title, "");
    assert_eq!(dog.parsed.sections[0].content, "a loyal canine");

    // Fourth and later columns fold into the back text.
    let run_card = &run.cards[2];
    assert_eq!(run_card.back_original, "to move fast, on foot");
}

#[test]
fn every_card_parse_is_rederivable() {
    let input = "\
Animals,cat,【中文】貓
\"【搭配詞】stray cat\"
Animals,dog,a canine";

    let run = build_cards_from_text(input, ',', 0);
    for card in &run.cards {
        assert_eq!(card.parsed, derive_parsed(&card.back_original, &card.front));
    }
}

#[test]
fn continuation_order_matters() {
    let forward = build_cards_from_text(
        "A,animal,a creature\n\"【例句】I saw an animal.\"",
        ',',
        0,
    );
    assert_eq!(forward.cards.len(), 1);
    assert_eq!(
        forward.cards[0].back_original,
        "a creature\n【例句】I saw an animal."
    );

    // Reordered input produces a different result: the continuation row
    // comes first, finds no card to extend, and becomes a front-only
    // card of its own.
    let reordered = build_cards_from_text(
        "\"【例句】I saw an animal.\"\nA,animal,a creature",
        ',',
        0,
    );
    assert_eq!(reordered.cards.len(), 2);
    assert_eq!(reordered.cards[0].front, "【例句】I saw an animal.");
    assert_eq!(reordered.cards[1].back_original, "a creature");
}

#[test]
fn spreadsheet_rows_and_text_rows_agree() {
    let text_run = build_cards_from_text("Animals,cat,a feline", ',', 0);
    let grid_run = build_cards(
        vec![vec![
            "Animals".to_string(),
            "cat".to_string(),
            "a feline".to_string(),
        ]],
        0,
    );
    assert_eq!(text_run.cards, grid_run.cards);
}

#[test]
fn all_skipped_input_reports_no_cards_without_failing() {
    let run = build_cards_from_text("Category,Word,Definition\n\n , ,", ',', 0);
    assert!(!run.is_empty_input());
    assert!(run.no_cards_found());
}

#[test]
fn cards_serialize_with_snake_case_kinds() {
    let run = build_cards_from_text("Animals,cat,【詞性變化】cats", ',', 0);
    let json = serde_json::to_string(&run.cards[0]).unwrap();
    assert!(json.contains("\"word_family\""));
    assert!(json.contains("\"back_original\""));
}
