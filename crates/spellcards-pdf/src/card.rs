//! Card drawing plan
//!
//! A card is turned into a flat list of [`Mark`]s positioned in points from the
//! card's top-left corner. Text is wrapped with the same oracle the paginator
//! measured with, and every block advances the cursor by its measured height,
//! so what is drawn is what was fitted.

use crate::theme::{RgbColor, school_color};
use spellcards_layout::layout::{metadata_details, metadata_headline, split_columns};
use spellcards_layout::{
    BlockHeights, CardGeometry, CardMeasurer, GlyphMeasure, Spell, TextMetric, TextStyle,
    WrappingOracle, normalize_description,
};

/// Baseline position inside a line box, as a fraction of the font size
const ASCENT: f32 = 0.8;

/// Card border stroke width
pub(crate) const BORDER_WIDTH: f32 = 1.0;

/// One drawing primitive, in points from the card's top-left corner
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Text {
        text: String,
        metric: TextMetric,
        x: f32,
        /// Distance from the card top to the baseline
        baseline: f32,
        color: RgbColor,
    },
    /// Horizontal rule centred on `y`
    Rule {
        x: f32,
        y: f32,
        width: f32,
        thickness: f32,
        color: RgbColor,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: RgbColor,
        filled: bool,
    },
}

/// Lays out card contents for drawing
pub struct CardPainter<'a, G> {
    measurer: &'a CardMeasurer<WrappingOracle<G>>,
}

impl<'a, G: GlyphMeasure> CardPainter<'a, G> {
    pub fn new(measurer: &'a CardMeasurer<WrappingOracle<G>>) -> Self {
        Self { measurer }
    }

    fn geometry(&self) -> &CardGeometry {
        self.measurer.geometry()
    }

    fn style(&self) -> &TextStyle {
        self.measurer.style()
    }

    /// Full-width text column right of the stripe
    fn content(&self) -> Column {
        let g = self.geometry();
        Column {
            x: g.outer_padding + g.stripe_width + g.content_padding_left,
            width: g.content_width(),
        }
    }

    /// All marks for one card
    pub fn paint(&self, spell: &Spell) -> Vec<Mark> {
        let g = *self.geometry();
        let color = school_color(spell.school_key.as_deref());
        let description = normalize_description(&spell.description);
        let blocks = self.measurer.measure_blocks(spell, &description, false);

        let mut marks = vec![
            Mark::Rect {
                x: 0.0,
                y: 0.0,
                width: g.width,
                height: g.height,
                color: RgbColor::BLACK,
                filled: false,
            },
            Mark::Rect {
                x: g.outer_padding,
                y: g.outer_padding,
                width: g.stripe_width,
                height: g.height - g.vertical_padding(),
                color,
                filled: true,
            },
        ];

        let style = *self.style();
        let content = self.content();
        let mut cursor = Cursor::new(g.outer_padding, g.section_spacing);

        if let Some(top) = cursor.block(blocks.header) {
            self.paint_header(spell, top, color, &mut marks);
        }
        if let Some(top) = cursor.block(blocks.metadata) {
            self.paint_metadata(spell, top, &mut marks);
        }
        if let (Some(top), Some(tags)) = (cursor.block(blocks.tags), present(&spell.tags)) {
            let top = top + g.tag_padding / 2.0;
            self.paint_lines(tags, &style.tags, content, top, color, &mut marks);
        }
        if let Some(top) = cursor.block(blocks.separator) {
            marks.push(Mark::Rule {
                x: content.x,
                y: top + blocks.separator / 2.0,
                width: content.width,
                thickness: g.separator_thickness,
                color: RgbColor::RULE,
            });
        }
        if let Some(top) = cursor.block(blocks.description) {
            let metric = style.description;
            self.paint_lines(&description, &metric, content, top, RgbColor::BLACK, &mut marks);
        }
        if let (Some(top), Some(notes)) = (cursor.block(blocks.notes), present(&spell.notes)) {
            let top = top + g.notes_padding_top;
            self.paint_lines(notes, &style.notes, content, top, RgbColor::BLACK, &mut marks);
        }

        marks
    }

    /// Measured block heights for the card as painted
    pub fn blocks(&self, spell: &Spell) -> BlockHeights {
        let description = normalize_description(&spell.description);
        self.measurer.measure_blocks(spell, &description, false)
    }

    fn paint_header(&self, spell: &Spell, top: f32, color: RgbColor, marks: &mut Vec<Mark>) {
        let g = *self.geometry();
        let style = *self.style();
        let content = self.content();

        // Icon slot
        if g.icon_size > 0.0 {
            marks.push(Mark::Rect {
                x: content.x,
                y: top,
                width: g.icon_size,
                height: g.icon_size,
                color,
                filled: false,
            });
        }

        let title = Column {
            x: content.x + g.icon_size,
            width: g.header_text_width(),
        };
        let below = self.paint_lines(&spell.name, &style.title, title, top, RgbColor::BLACK, marks);

        if spell.has_part() {
            let label = format!("({})", spell.part.trim());
            self.paint_lines(&label, &style.part_label, title, below, RgbColor::BLACK, marks);
        }
    }

    fn paint_metadata(&self, spell: &Spell, top: f32, marks: &mut Vec<Mark>) {
        let g = *self.geometry();
        let style = *self.style();
        let content = self.content();

        let mut y = top;
        let mut first = true;
        for line in metadata_headline(spell) {
            if !first {
                y += g.metadata_line_spacing;
            }
            y = self.paint_lines(line, &style.metadata_large, content, y, RgbColor::BLACK, marks);
            first = false;
        }

        let details = metadata_details(spell);
        if details.is_empty() {
            return;
        }
        if !first {
            y += g.metadata_line_spacing;
        }

        if details.len() == 1 {
            self.paint_details(&details, content, y, marks);
        } else {
            let (left, right) = split_columns(&details);
            let width = g.metadata_column_width();
            let left_column = Column {
                x: content.x,
                width,
            };
            let right_column = Column {
                x: content.x + width + g.metadata_column_gap,
                width,
            };
            self.paint_details(left, left_column, y, marks);
            self.paint_details(right, right_column, y, marks);
        }
    }

    fn paint_details(&self, lines: &[String], column: Column, top: f32, marks: &mut Vec<Mark>) {
        let metric = self.style().metadata;
        let mut y = top;
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                y += self.geometry().metadata_inner_spacing;
            }
            y = self.paint_lines(line, &metric, column, y, RgbColor::BLACK, marks);
        }
    }

    /// Wrap `text` into `column` starting at `top`; returns the y below the
    /// last line.
    fn paint_lines(
        &self,
        text: &str,
        metric: &TextMetric,
        column: Column,
        top: f32,
        color: RgbColor,
        marks: &mut Vec<Mark>,
    ) -> f32 {
        let advance = metric.line_advance();
        let mut y = top;
        for line in self.measurer.oracle().wrap_lines(text, metric, column.width) {
            marks.push(Mark::Text {
                text: line,
                metric: *metric,
                x: column.x,
                baseline: y + metric.size * ASCENT,
                color,
            });
            y += advance;
        }
        y
    }
}

#[derive(Debug, Clone, Copy)]
struct Column {
    x: f32,
    width: f32,
}

/// Stacks non-empty blocks with spacing between them
struct Cursor {
    y: f32,
    spacing: f32,
    placed: bool,
}

impl Cursor {
    fn new(top: f32, spacing: f32) -> Self {
        Self {
            y: top,
            spacing,
            placed: false,
        }
    }

    /// Top of the next block, or `None` when the block is empty
    fn block(&mut self, height: f32) -> Option<f32> {
        if height <= 0.0 {
            return None;
        }
        if self.placed {
            self.y += self.spacing;
        }
        let top = self.y;
        self.y += height;
        self.placed = true;
        Some(top)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
