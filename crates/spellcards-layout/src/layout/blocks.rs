//! Card height aggregation
//!
//! A card is a vertical stack of independent blocks. Each block is measured on
//! its own, empty blocks are dropped, and the rest are joined with the section
//! spacing. Nothing is drawn.

use super::details::{metadata_details, metadata_headline, split_columns};
use crate::constants::PLACEHOLDER_PART_LABEL;
use crate::geometry::CardGeometry;
use crate::measure::TextOracle;
use crate::style::{TextMetric, TextStyle};
use crate::types::{Spell, present};

/// Heights of the blocks making up one card, in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlockHeights {
    pub header: f32,
    pub metadata: f32,
    pub tags: f32,
    /// Rule between metadata/tags and the description, 0 when omitted
    pub separator: f32,
    pub description: f32,
    pub notes: f32,
    /// Everything above plus the outer padding
    pub total: f32,
}

impl BlockHeights {
    /// Height of everything except the description
    pub fn chrome(&self) -> f32 {
        self.total - self.description
    }
}

/// Sum of the non-zero heights with `spacing` between consecutive ones
pub fn sum_with_spacing(heights: &[f32], spacing: f32) -> f32 {
    let mut total = 0.0;
    let mut count = 0;
    for height in heights.iter().filter(|h| **h > 0.0) {
        total += height;
        count += 1;
    }
    if count > 1 {
        total += (count - 1) as f32 * spacing;
    }
    total
}

/// Measures cards for a fixed geometry and style.
#[derive(Debug, Clone)]
pub struct CardMeasurer<O> {
    geometry: CardGeometry,
    style: TextStyle,
    oracle: O,
}

impl<O: TextOracle> CardMeasurer<O> {
    pub fn new(geometry: CardGeometry, style: TextStyle, oracle: O) -> Self {
        Self {
            geometry,
            style,
            oracle,
        }
    }

    pub fn geometry(&self) -> &CardGeometry {
        &self.geometry
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Whether `spell` with `description` in place of its own fits on one card.
    ///
    /// With `force_part_label` the header reserves a part line even when the
    /// spell has no part yet. The line is always measured as the widest
    /// placeholder label, whatever part the spell currently carries.
    pub fn fits(&self, spell: &Spell, description: &str, force_part_label: bool) -> bool {
        self.card_height(spell, description, force_part_label) <= self.geometry.height_budget()
    }

    /// Total card height for `spell` carrying `description`
    pub fn card_height(&self, spell: &Spell, description: &str, force_part_label: bool) -> f32 {
        self.measure_blocks(spell, description, force_part_label).total
    }

    /// Per-block breakdown of the card height
    pub fn measure_blocks(
        &self,
        spell: &Spell,
        description: &str,
        force_part_label: bool,
    ) -> BlockHeights {
        let header = self.measure_header(spell, force_part_label);
        let metadata = self.measure_metadata(spell);
        let tags = self.measure_tags(spell);
        let description = self.measure_text(description, &self.style.description);
        let separator = if description > 0.0 && (metadata > 0.0 || tags > 0.0) {
            self.geometry.separator_thickness + self.geometry.separator_padding
        } else {
            0.0
        };
        let notes = self.measure_notes(spell);

        let content = sum_with_spacing(
            &[header, metadata, tags, separator, description, notes],
            self.geometry.section_spacing,
        );

        BlockHeights {
            header,
            metadata,
            tags,
            separator,
            description,
            notes,
            total: self.geometry.vertical_padding() + content,
        }
    }

    /// Title plus the optional part line, never shorter than the icon
    pub fn measure_header(&self, spell: &Spell, force_part_label: bool) -> f32 {
        let width = self.geometry.header_text_width();
        let mut text_height = self
            .oracle
            .wrapped_height(&spell.name, &self.style.title, width);

        // The label line is sized for the placeholder, never the current
        // part: the final "i/n" is not known until the split is complete.
        if force_part_label || spell.has_part() {
            text_height += self.oracle.wrapped_height(
                PLACEHOLDER_PART_LABEL,
                &self.style.part_label,
                width,
            );
        }

        text_height.max(self.geometry.icon_size)
    }

    /// Class/school lines stacked above the two detail columns
    pub fn measure_metadata(&self, spell: &Spell) -> f32 {
        let spacing = self.geometry.metadata_line_spacing;
        let headline: Vec<f32> = metadata_headline(spell)
            .into_iter()
            .map(|line| self.measure_text(line, &self.style.metadata_large))
            .collect();
        let top = sum_with_spacing(&headline, spacing);
        let columns = self.measure_detail_columns(&metadata_details(spell));

        if top > 0.0 && columns > 0.0 {
            top + spacing + columns
        } else {
            top.max(columns)
        }
    }

    fn measure_detail_columns(&self, lines: &[String]) -> f32 {
        match lines.len() {
            0 => 0.0,
            1 => self.measure_column(lines, self.geometry.content_width()),
            _ => {
                let (left, right) = split_columns(lines);
                let width = self.geometry.metadata_column_width();
                self.measure_column(left, width)
                    .max(self.measure_column(right, width))
            }
        }
    }

    fn measure_column(&self, lines: &[String], width: f32) -> f32 {
        let heights: Vec<f32> = lines
            .iter()
            .map(|line| self.oracle.wrapped_height(line, &self.style.metadata, width))
            .collect();
        sum_with_spacing(&heights, self.geometry.metadata_inner_spacing)
    }

    pub fn measure_tags(&self, spell: &Spell) -> f32 {
        match present(&spell.tags) {
            Some(tags) => {
                let height = self.measure_text(tags, &self.style.tags);
                if height > 0.0 {
                    height + self.geometry.tag_padding
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }

    pub fn measure_notes(&self, spell: &Spell) -> f32 {
        match present(&spell.notes) {
            Some(notes) => {
                let height = self.measure_text(notes, &self.style.notes);
                if height > 0.0 {
                    self.geometry.notes_padding_top + height
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }

    fn measure_text(&self, text: &str, metric: &TextMetric) -> f32 {
        self.oracle
            .wrapped_height(text, metric, self.geometry.content_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{FontTables, WrappingOracle};

    /// One line of 10pt per 20 characters, whatever the font or width
    struct CharBlocks;

    impl TextOracle for CharBlocks {
        fn wrapped_height(&self, text: &str, _metric: &TextMetric, _width: f32) -> f32 {
            let chars = text.trim().chars().count();
            chars.div_ceil(20) as f32 * 10.0
        }
    }

    struct OneCharPerLine;

    impl TextOracle for OneCharPerLine {
        fn wrapped_height(&self, text: &str, _metric: &TextMetric, _width: f32) -> f32 {
            text.trim().chars().count() as f32 * 10.0
        }
    }

    fn bare_geometry() -> CardGeometry {
        CardGeometry {
            width: 200.0,
            height: 60.0,
            outer_padding: 0.0,
            stripe_width: 0.0,
            content_padding_left: 0.0,
            section_spacing: 0.0,
            metadata_line_spacing: 0.0,
            metadata_inner_spacing: 0.0,
            metadata_column_gap: 0.0,
            icon_size: 0.0,
            tag_padding: 0.0,
            notes_padding_top: 0.0,
            separator_thickness: 0.0,
            separator_padding: 0.0,
            tolerance: 0.0,
        }
    }

    #[test]
    fn spacing_only_between_non_zero_blocks() {
        assert_eq!(sum_with_spacing(&[], 2.0), 0.0);
        assert_eq!(sum_with_spacing(&[0.0, 5.0, 0.0], 2.0), 5.0);
        assert_eq!(sum_with_spacing(&[5.0, 0.0, 7.0, 0.0], 2.0), 14.0);
        assert_eq!(sum_with_spacing(&[1.0, 1.0, 1.0], 0.5), 4.0);
    }

    #[test]
    fn header_reserves_placeholder_when_forced() {
        let measurer = CardMeasurer::new(bare_geometry(), TextStyle::default(), CharBlocks);
        let spell = Spell::new("Light", "");
        assert_eq!(measurer.measure_header(&spell, false), 10.0);
        assert_eq!(measurer.measure_header(&spell, true), 20.0);
    }

    #[test]
    fn header_uses_existing_part() {
        let measurer = CardMeasurer::new(bare_geometry(), TextStyle::default(), CharBlocks);
        let mut spell = Spell::new("Light", "");
        spell.part = "1/2".to_string();
        assert_eq!(measurer.measure_header(&spell, false), 20.0);
    }

    #[test]
    fn short_existing_part_is_measured_as_placeholder() {
        let measurer = CardMeasurer::new(bare_geometry(), TextStyle::default(), OneCharPerLine);
        let mut spell = Spell::new("L", "");
        spell.part = "x".to_string();
        // "(x)" would be three lines, the placeholder "(99/99)" is seven
        assert_eq!(measurer.measure_header(&spell, false), 80.0);
        assert_eq!(measurer.measure_header(&spell, true), 80.0);
        assert_eq!(
            measurer.measure_header(&spell, true),
            measurer.measure_header(&Spell::new("L", ""), true)
        );
    }

    #[test]
    fn header_never_shorter_than_icon() {
        let geometry = CardGeometry {
            icon_size: 14.0,
            ..bare_geometry()
        };
        let measurer = CardMeasurer::new(geometry, TextStyle::default(), CharBlocks);
        assert_eq!(measurer.measure_header(&Spell::new("Light", ""), false), 14.0);
    }

    #[test]
    fn empty_description_has_no_block() {
        let measurer = CardMeasurer::new(bare_geometry(), TextStyle::default(), CharBlocks);
        let spell = Spell {
            tags: Some("Fire".to_string()),
            ..Spell::new("Light", "")
        };
        let blocks = measurer.measure_blocks(&spell, "", false);
        assert_eq!(blocks.description, 0.0);
        assert_eq!(blocks.separator, 0.0);
        assert_eq!(blocks.total, 20.0);
    }

    #[test]
    fn separator_needs_metadata_or_tags() {
        let geometry = CardGeometry {
            separator_thickness: 1.0,
            separator_padding: 2.0,
            ..bare_geometry()
        };
        let measurer = CardMeasurer::new(geometry, TextStyle::default(), CharBlocks);

        let plain = Spell::new("Light", "Glows.");
        assert_eq!(measurer.measure_blocks(&plain, &plain.description, false).separator, 0.0);

        let tagged = Spell {
            tags: Some("Light".to_string()),
            ..plain
        };
        let blocks = measurer.measure_blocks(&tagged, &tagged.description, false);
        assert_eq!(blocks.separator, 3.0);
        assert_eq!(blocks.total, 10.0 + 10.0 + 3.0 + 10.0);
    }

    #[test]
    fn metadata_columns_take_taller_side() {
        let measurer = CardMeasurer::new(bare_geometry(), TextStyle::default(), CharBlocks);
        let spell = Spell {
            class_level: Some("Wizard 1".to_string()),
            cast: Some("1 action".to_string()),
            range: Some("Touch".to_string()),
            duration: Some("1 hour/level".to_string()),
            ..Spell::new("Light", "")
        };
        // headline 10; columns: left [Cast 10, Range 10] = 20, right [Duration 20] = 20
        assert_eq!(measurer.measure_metadata(&spell), 30.0);
    }

    #[test]
    fn single_detail_line_spans_full_width() {
        let measurer = CardMeasurer::new(bare_geometry(), TextStyle::default(), CharBlocks);
        let spell = Spell {
            range: Some("Touch".to_string()),
            ..Spell::new("Light", "")
        };
        assert_eq!(measurer.measure_metadata(&spell), 10.0);
    }

    #[test]
    fn notes_and_tags_include_padding() {
        let geometry = CardGeometry {
            tag_padding: 4.0,
            notes_padding_top: 2.0,
            ..bare_geometry()
        };
        let measurer = CardMeasurer::new(geometry, TextStyle::default(), CharBlocks);
        let spell = Spell {
            tags: Some("Fire".to_string()),
            notes: Some("Core rulebook".to_string()),
            ..Spell::new("Light", "")
        };
        assert_eq!(measurer.measure_tags(&spell), 14.0);
        assert_eq!(measurer.measure_notes(&spell), 12.0);
    }

    #[test]
    fn fits_respects_tolerance() {
        let geometry = CardGeometry {
            height: 29.0,
            tolerance: 1.0,
            ..bare_geometry()
        };
        let measurer = CardMeasurer::new(geometry, TextStyle::default(), CharBlocks);
        let spell = Spell::new("Light", "");
        // header 10 + description 20 = 30 <= 29 + 1
        assert!(measurer.fits(&spell, &"x".repeat(40), false));
        assert!(!measurer.fits(&spell, &"x".repeat(41), false));
    }

    #[test]
    fn default_card_fits_a_short_spell() {
        let measurer = CardMeasurer::new(
            CardGeometry::default(),
            TextStyle::default(),
            WrappingOracle::new(FontTables::standard()),
        );
        let spell = Spell::new("Light", "This spell causes a touched object to glow like a torch.");
        let blocks = measurer.measure_blocks(&spell, &spell.description, false);
        assert!(blocks.description > 0.0);
        assert!(measurer.fits(&spell, &spell.description, false));
        assert!(blocks.chrome() > blocks.header);
    }
}
