//! Card placement on printed sheets
//!
//! Cards fill a `columns x rows` grid left to right, top to bottom, in the
//! order the paginator produced them. The grid is centred inside the page
//! margins. Positions here are in millimetres with the origin at the bottom
//! left of the page, as PDF expects.

use crate::options::SheetOptions;
use crate::types::Result;

/// Resolved grid for one paper size and card size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGrid {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub card_width_mm: f32,
    pub card_height_mm: f32,
    pub rows: usize,
    pub columns: usize,
    pub gap_mm: f32,
    /// Left edge of the first column
    pub left_mm: f32,
    /// Top edge of the first row
    pub top_mm: f32,
}

impl SheetGrid {
    pub fn new(options: &SheetOptions, card_width_mm: f32, card_height_mm: f32) -> Result<Self> {
        options.validate(card_width_mm, card_height_mm)?;

        let (page_width_mm, page_height_mm) = options.paper.dimensions_mm();
        let (grid_width, grid_height) = options.grid_size_mm(card_width_mm, card_height_mm);

        let usable_width = page_width_mm - 2.0 * options.margin_mm;
        let usable_height = page_height_mm - 2.0 * options.margin_mm;

        Ok(Self {
            page_width_mm,
            page_height_mm,
            card_width_mm,
            card_height_mm,
            rows: options.rows,
            columns: options.columns,
            gap_mm: options.gap_mm,
            left_mm: options.margin_mm + (usable_width - grid_width).max(0.0) / 2.0,
            top_mm: page_height_mm - options.margin_mm - (usable_height - grid_height).max(0.0) / 2.0,
        })
    }

    pub fn cards_per_sheet(&self) -> usize {
        self.rows * self.columns
    }

    /// Bottom-left corner of the card in `slot` (row-major)
    pub fn cell_origin(&self, slot: usize) -> (f32, f32) {
        let row = slot / self.columns;
        let col = slot % self.columns;

        let x = self.left_mm + col as f32 * (self.card_width_mm + self.gap_mm);
        let y = self.top_mm
            - (row + 1) as f32 * self.card_height_mm
            - row as f32 * self.gap_mm;
        (x, y)
    }
}

/// Sheet usage for a run of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetStats {
    pub cards: usize,
    pub sheets: usize,
    pub cards_per_sheet: usize,
    /// Unused slots on the last sheet
    pub empty_slots: usize,
}

pub fn sheet_stats(card_count: usize, options: &SheetOptions) -> SheetStats {
    let cards_per_sheet = options.cards_per_sheet();
    if cards_per_sheet == 0 {
        return SheetStats {
            cards: card_count,
            ..Default::default()
        };
    }

    let sheets = card_count.div_ceil(cards_per_sheet);
    SheetStats {
        cards: card_count,
        sheets,
        cards_per_sheet,
        empty_slots: sheets * cards_per_sheet - card_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_centred_on_a4() {
        let grid = SheetGrid::new(&SheetOptions::default(), 63.0, 88.0).unwrap();
        // 189 x 264 grid inside 200 x 287
        assert!((grid.left_mm - 10.5).abs() < 0.001);
        assert!((grid.top_mm - 280.5).abs() < 0.001);
    }

    #[test]
    fn slots_fill_rows_first() {
        let grid = SheetGrid::new(&SheetOptions::default(), 63.0, 88.0).unwrap();
        let (x0, y0) = grid.cell_origin(0);
        let (x1, y1) = grid.cell_origin(1);
        let (x3, y3) = grid.cell_origin(3);

        assert!((x1 - x0 - 63.0).abs() < 0.001);
        assert_eq!(y1, y0);
        assert_eq!(x3, x0);
        assert!((y0 - y3 - 88.0).abs() < 0.001);
        assert!((y0 - (280.5 - 88.0)).abs() < 0.001);
    }

    #[test]
    fn gap_separates_cells() {
        let options = SheetOptions {
            rows: 2,
            columns: 2,
            gap_mm: 4.0,
            ..Default::default()
        };
        let grid = SheetGrid::new(&options, 63.0, 88.0).unwrap();
        let (x0, _) = grid.cell_origin(0);
        let (x1, _) = grid.cell_origin(1);
        assert!((x1 - x0 - 67.0).abs() < 0.001);
    }

    #[test]
    fn stats_count_empty_slots() {
        let options = SheetOptions::default();
        assert_eq!(
            sheet_stats(10, &options),
            SheetStats {
                cards: 10,
                sheets: 2,
                cards_per_sheet: 9,
                empty_slots: 8,
            }
        );
        assert_eq!(sheet_stats(9, &options).empty_slots, 0);
        assert_eq!(sheet_stats(0, &options).sheets, 0);
    }
}
