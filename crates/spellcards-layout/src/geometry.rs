use crate::constants::*;
use crate::types::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Physical card size and chrome spacing, all in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardGeometry {
    pub width: f32,
    pub height: f32,
    /// Padding on every side of the card
    pub outer_padding: f32,
    pub stripe_width: f32,
    pub content_padding_left: f32,
    /// Gap between consecutive non-empty blocks
    pub section_spacing: f32,
    pub metadata_line_spacing: f32,
    pub metadata_inner_spacing: f32,
    pub metadata_column_gap: f32,
    pub icon_size: f32,
    pub tag_padding: f32,
    pub notes_padding_top: f32,
    pub separator_thickness: f32,
    pub separator_padding: f32,
    /// Slack on height comparisons
    pub tolerance: f32,
}

impl Default for CardGeometry {
    fn default() -> Self {
        Self::from_mm(DEFAULT_CARD_WIDTH_MM, DEFAULT_CARD_HEIGHT_MM)
    }
}

impl CardGeometry {
    /// Card of the given size with the standard chrome
    pub fn from_mm(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width: mm_to_pt(width_mm),
            height: mm_to_pt(height_mm),
            outer_padding: OUTER_PADDING,
            stripe_width: STRIPE_WIDTH,
            content_padding_left: CONTENT_PADDING_LEFT,
            section_spacing: SECTION_SPACING,
            metadata_line_spacing: METADATA_LINE_SPACING,
            metadata_inner_spacing: METADATA_INNER_SPACING,
            metadata_column_gap: METADATA_COLUMN_GAP,
            icon_size: ICON_SIZE,
            tag_padding: TAG_PADDING,
            notes_padding_top: NOTES_PADDING_TOP,
            separator_thickness: SEPARATOR_THICKNESS,
            separator_padding: SEPARATOR_PADDING,
            tolerance: MEASUREMENT_TOLERANCE,
        }
    }

    /// Card dimensions in millimeters (width, height)
    pub fn dimensions_mm(&self) -> (f32, f32) {
        (pt_to_mm(self.width), pt_to_mm(self.height))
    }

    /// Width of the text column right of the stripe
    pub fn content_width(&self) -> f32 {
        self.width - self.outer_padding * 2.0 - self.stripe_width - self.content_padding_left
    }

    /// Width available to the title beside the icon
    pub fn header_text_width(&self) -> f32 {
        self.content_width() - self.icon_size
    }

    /// Width of one metadata column
    pub fn metadata_column_width(&self) -> f32 {
        (self.content_width() - self.metadata_column_gap) / 2.0
    }

    /// Top plus bottom padding
    pub fn vertical_padding(&self) -> f32 {
        self.outer_padding * 2.0
    }

    /// Largest card height that still passes the fit check
    pub fn height_budget(&self) -> f32 {
        self.height + self.tolerance
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::Config(format!(
                "Card dimensions must be positive (got {} x {} pt)",
                self.width, self.height
            )));
        }

        let spacings = [
            self.outer_padding,
            self.stripe_width,
            self.content_padding_left,
            self.section_spacing,
            self.metadata_line_spacing,
            self.metadata_inner_spacing,
            self.metadata_column_gap,
            self.icon_size,
            self.tag_padding,
            self.notes_padding_top,
            self.separator_thickness,
            self.separator_padding,
            self.tolerance,
        ];
        if spacings.iter().any(|value| *value < 0.0 || !value.is_finite()) {
            return Err(LayoutError::Config(
                "Card padding and spacing values must be finite and non-negative".to_string(),
            ));
        }

        if self.content_width() <= 0.0 {
            return Err(LayoutError::Config(format!(
                "Padding leaves no content width on a {} pt wide card",
                self.width
            )));
        }

        if self.vertical_padding() >= self.height {
            return Err(LayoutError::Config(format!(
                "Padding leaves no content height on a {} pt tall card",
                self.height
            )));
        }

        Ok(())
    }
}
