use crate::types::*;
use serde::{Deserialize, Serialize};

/// Output paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Portrait dimensions (width, height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Custom { .. } => "Custom",
        }
    }
}

/// How cards are arranged on printed sheets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetOptions {
    pub paper: PaperSize,
    pub rows: usize,
    pub columns: usize,
    /// Page margin on every side
    pub margin_mm: f32,
    /// Gap between neighbouring cards
    pub gap_mm: f32,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            rows: 3,
            columns: 3,
            margin_mm: 5.0,
            gap_mm: 0.0,
        }
    }
}

impl SheetOptions {
    pub fn cards_per_sheet(&self) -> usize {
        self.rows * self.columns
    }

    /// Width and height of the card grid
    pub fn grid_size_mm(&self, card_width_mm: f32, card_height_mm: f32) -> (f32, f32) {
        let gaps = |count: usize| count.saturating_sub(1) as f32 * self.gap_mm;
        (
            self.columns as f32 * card_width_mm + gaps(self.columns),
            self.rows as f32 * card_height_mm + gaps(self.rows),
        )
    }

    /// Validate the options for cards of the given size
    pub fn validate(&self, card_width_mm: f32, card_height_mm: f32) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(RenderError::Config(
                "Rows and columns must be at least 1".to_string(),
            ));
        }

        if self.margin_mm < 0.0 || self.gap_mm < 0.0 {
            return Err(RenderError::Config(
                "Margin and gap must not be negative".to_string(),
            ));
        }

        let (page_width, page_height) = self.paper.dimensions_mm();
        if page_width <= 0.0 || page_height <= 0.0 {
            return Err(RenderError::Config(format!(
                "Paper dimensions must be positive (got {} x {} mm)",
                page_width, page_height
            )));
        }

        let (grid_width, grid_height) = self.grid_size_mm(card_width_mm, card_height_mm);
        let usable_width = page_width - 2.0 * self.margin_mm;
        let usable_height = page_height - 2.0 * self.margin_mm;

        // Allow for rounding in the mm/pt round trip
        if grid_width > usable_width + 0.01 || grid_height > usable_height + 0.01 {
            return Err(RenderError::Config(format!(
                "{}x{} grid of {:.1} x {:.1} mm cards needs {:.1} x {:.1} mm, but {} paper leaves {:.1} x {:.1} mm",
                self.columns,
                self.rows,
                card_width_mm,
                card_height_mm,
                grid_width,
                grid_height,
                self.paper.name(),
                usable_width,
                usable_height
            )));
        }

        Ok(())
    }
}
