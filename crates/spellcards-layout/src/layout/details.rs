use crate::types::{Spell, present};

/// Values that mean "nothing to show" in save and spell resistance fields
const EMPTY_MARKERS: [&str; 2] = ["014", "-"];

/// The two large metadata lines at the top of the card (class/level, school)
pub fn metadata_headline(spell: &Spell) -> Vec<&str> {
    [present(&spell.class_level), present(&spell.school_text)]
        .into_iter()
        .flatten()
        .collect()
}

/// The smaller metadata lines laid out in two columns, in display order
pub fn metadata_details(spell: &Spell) -> Vec<String> {
    let mut details = Vec::new();

    if let Some(cast) = present(&spell.cast) {
        details.push(format!("Cast: {}", cast));
    }
    if let Some(range) = present(&spell.range) {
        details.push(format!("Range: {}", range));
    }
    if let Some(target) = present(&spell.target_or_area) {
        details.push(target.to_string());
    }
    if let Some(duration) = present(&spell.duration) {
        details.push(format!("Duration: {}", duration));
    }
    if let Some(save) = marked_value(&spell.save) {
        details.push(format!("Save: {}", save));
    }
    if let Some(sr) = marked_value(&spell.sr) {
        details.push(format!("SR: {}", sr));
    }
    if let Some(components) = present(&spell.components) {
        details.push(format!("Components: {}", components));
    }

    details
}

/// Split detail lines into left and right columns, left taking the extra line
pub fn split_columns<T>(lines: &[T]) -> (&[T], &[T]) {
    lines.split_at(lines.len().div_ceil(2))
}

fn marked_value(value: &Option<String>) -> Option<&str> {
    present(value).filter(|v| !EMPTY_MARKERS.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fireball() -> Spell {
        Spell {
            name: "Fireball".to_string(),
            class_level: Some("Sorcerer/Wizard 3".to_string()),
            school_text: Some("Evocation [Fire]".to_string()),
            cast: Some("1 standard action".to_string()),
            range: Some("Long (400 ft. + 40 ft./level)".to_string()),
            target_or_area: Some("Area: 20-ft.-radius spread".to_string()),
            duration: Some("Instantaneous".to_string()),
            save: Some("Reflex half".to_string()),
            sr: Some("Yes".to_string()),
            components: Some("V S M".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn details_are_labelled_in_order() {
        let details = metadata_details(&fireball());
        assert_eq!(
            details,
            vec![
                "Cast: 1 standard action",
                "Range: Long (400 ft. + 40 ft./level)",
                "Area: 20-ft.-radius spread",
                "Duration: Instantaneous",
                "Save: Reflex half",
                "SR: Yes",
                "Components: V S M",
            ]
        );
    }

    #[test]
    fn placeholder_save_and_sr_are_hidden() {
        let mut spell = fireball();
        spell.save = Some("-".to_string());
        spell.sr = Some(" 014 ".to_string());
        let details = metadata_details(&spell);
        assert!(!details.iter().any(|d| d.starts_with("Save") || d.starts_with("SR")));
    }

    #[test]
    fn blank_fields_are_absent() {
        let mut spell = fireball();
        spell.duration = Some("   ".to_string());
        spell.class_level = None;
        assert_eq!(metadata_headline(&spell), vec!["Evocation [Fire]"]);
        assert!(!metadata_details(&spell).iter().any(|d| d.starts_with("Duration")));
    }

    #[test]
    fn columns_split_with_left_taking_extra() {
        let lines = [1, 2, 3, 4, 5];
        let (left, right) = split_columns(&lines);
        assert_eq!(left, &[1, 2, 3]);
        assert_eq!(right, &[4, 5]);

        let single = [1];
        let (left, right) = split_columns(&single);
        assert_eq!(left, &[1]);
        assert!(right.is_empty());
    }
}
