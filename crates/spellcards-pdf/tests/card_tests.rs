use spellcards_layout::*;
use spellcards_pdf::*;

fn fireball() -> Spell {
    Spell {
        name: "Fireball".to_string(),
        class_level: Some("Sorcerer/Wizard 3".to_string()),
        school_text: Some("Evocation [Fire]".to_string()),
        school_key: Some("evocation".to_string()),
        cast: Some("1 standard action".to_string()),
        range: Some("Long (400 ft. + 40 ft./level)".to_string()),
        target_or_area: Some("20-ft.-radius spread".to_string()),
        duration: Some("Instantaneous".to_string()),
        save: Some("Reflex half".to_string()),
        sr: Some("Yes".to_string()),
        components: Some("V, S, M".to_string()),
        tags: Some("Fire, Area".to_string()),
        description: "A fireball spell generates a searing explosion of flame that detonates with a low roar and deals 1d6 points of fire damage per caster level. ".repeat(10),
        notes: Some("Core Rulebook".to_string()),
        ..Default::default()
    }
}

fn texts(marks: &[Mark]) -> Vec<&str> {
    marks
        .iter()
        .filter_map(|mark| match mark {
            Mark::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_split_cards_stay_inside_the_card() {
    let paginator: Paginator = Paginator::default();
    let measurer = paginator.measurer();
    let geometry = *measurer.geometry();
    let painter = CardPainter::new(measurer);

    let cards = paginator.split_if_needed(&fireball()).unwrap();
    assert!(cards.len() > 1);

    for card in &cards {
        for mark in painter.paint(card) {
            if let Mark::Text {
                text, metric, x, baseline, ..
            } = mark
            {
                let width = measurer.oracle().glyphs().text_width(&text, &metric);
                assert!(x + width <= geometry.width - geometry.outer_padding + 0.01);
                assert!(baseline <= geometry.height_budget());
            }
        }
    }
}

#[test]
fn test_part_label_is_drawn_only_for_split_cards() {
    let paginator: Paginator = Paginator::default();
    let painter = CardPainter::new(paginator.measurer());

    let cards = paginator.split_if_needed(&fireball()).unwrap();
    let count = cards.len();
    let first = painter.paint(&cards[0]);
    assert!(texts(&first).contains(&format!("(1/{})", count).as_str()));

    let single = Spell::new("Light", "The object shines like a torch.");
    let marks = painter.paint(&single);
    assert!(!texts(&marks).iter().any(|t| t.starts_with('(')));
    assert_eq!(texts(&marks), vec!["Light", "The object shines like a torch."]);
}

#[test]
fn test_metadata_and_separator() {
    let paginator: Paginator = Paginator::default();
    let painter = CardPainter::new(paginator.measurer());
    let cards = paginator.split_if_needed(&fireball()).unwrap();
    let marks = painter.paint(&cards[0]);

    let lines = texts(&marks);
    assert!(lines.contains(&"Sorcerer/Wizard 3"));
    assert!(lines.iter().any(|l| l.starts_with("Cast:")));
    assert!(lines.contains(&"Fire, Area"));
    assert!(lines.contains(&"Core Rulebook"));

    let rules = marks
        .iter()
        .filter(|m| matches!(m, Mark::Rule { .. }))
        .count();
    assert_eq!(rules, 1);

    // No metadata or tags means no rule
    let bare = painter.paint(&Spell::new("Light", "Glows."));
    assert!(!bare.iter().any(|m| matches!(m, Mark::Rule { .. })));
}

#[test]
fn test_tags_use_school_colour() {
    let paginator: Paginator = Paginator::default();
    let painter = CardPainter::new(paginator.measurer());
    let cards = paginator.split_if_needed(&fireball()).unwrap();

    let tag_color = painter.paint(&cards[0]).into_iter().find_map(|mark| match mark {
        Mark::Text { text, color, .. } if text == "Fire, Area" => Some(color),
        _ => None,
    });
    assert_eq!(tag_color, Some(school_color(Some("evocation"))));
}

#[test]
fn test_blocks_follow_measured_heights() {
    let paginator: Paginator = Paginator::default();
    let painter = CardPainter::new(paginator.measurer());
    let cards = paginator.split_if_needed(&fireball()).unwrap();

    for card in &cards {
        let blocks = painter.blocks(card);
        assert!(blocks.total <= paginator.measurer().geometry().height_budget());
    }
}

#[test]
fn test_trailing_full_stop_is_painted_after_a_character_split() {
    let base: Paginator = Paginator::default();
    let empty = Spell::new("Dot", "");
    let chrome = base.measurer().card_height(&empty, "", true);
    let line = base.measurer().card_height(&empty, "x", true) - chrome;

    // Room for exactly one description line beside a part label
    let mut geometry = *base.measurer().geometry();
    geometry.height = chrome + line * 1.5 - geometry.tolerance;
    let paginator = Paginator::new(
        geometry,
        TextStyle::default(),
        WrappingOracle::new(FontTables::standard()),
    );
    let painter = CardPainter::new(paginator.measurer());

    for length in 1..200 {
        let text = "x".repeat(length) + ".";
        let cards = paginator.split_if_needed(&Spell::new("Dot", text.clone())).unwrap();

        let rejoined: String = cards.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(rejoined, text);

        let last = match cards.last() {
            Some(card) => painter.paint(card),
            None => panic!("No cards for {} characters", length),
        };
        assert!(
            texts(&last).concat().ends_with("x."),
            "Full stop lost after {} characters",
            length
        );
    }
}
