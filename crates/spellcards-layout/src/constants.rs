//! Shared constants for card layout
//!
//! This module centralizes the physical card size, the chrome measurements
//! and the typographic defaults used when fitting text onto a card.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Card Dimensions
// =============================================================================

/// Default card width in millimeters (standard trading card)
pub const DEFAULT_CARD_WIDTH_MM: f32 = 63.0;

/// Default card height in millimeters
pub const DEFAULT_CARD_HEIGHT_MM: f32 = 88.0;

// =============================================================================
// Card Chrome (points)
// =============================================================================

/// Padding applied on every side of the card
pub const OUTER_PADDING: f32 = 6.0;

/// School stripe on the left edge of the content area
pub const STRIPE_WIDTH: f32 = 3.0;

/// Gap between the stripe and the text column
pub const CONTENT_PADDING_LEFT: f32 = 6.0;

/// Gap between major blocks (header, metadata, tags, ...)
pub const SECTION_SPACING: f32 = 1.5;

/// Gap between the stacked metadata lines
pub const METADATA_LINE_SPACING: f32 = 1.5;

/// Gap between lines inside a metadata column
pub const METADATA_INNER_SPACING: f32 = 1.0;

/// Gap between the two metadata columns
pub const METADATA_COLUMN_GAP: f32 = 3.0;

/// Square reserved for the school icon in the header
pub const ICON_SIZE: f32 = 14.0;

/// Vertical padding around the tag line (top + bottom)
pub const TAG_PADDING: f32 = 4.0;

/// Padding above the notes line
pub const NOTES_PADDING_TOP: f32 = 2.0;

/// Thickness of the rule above the description
pub const SEPARATOR_THICKNESS: f32 = 0.6;

/// Padding around the rule above the description
pub const SEPARATOR_PADDING: f32 = 2.0;

/// Slack allowed on height comparisons to absorb font metric rounding
pub const MEASUREMENT_TOLERANCE: f32 = 1.5;

// =============================================================================
// Part Labels
// =============================================================================

/// Widest label a split card can carry. Measured in place of the real label
/// while splitting, since the final part count is not known yet.
pub const PLACEHOLDER_PART_LABEL: &str = "(99/99)";

// =============================================================================
// Font Tables
// =============================================================================

/// Glyph widths in the standard font tables are expressed per this many units
pub const FONT_UNITS_PER_EM: f32 = 1000.0;

/// First character covered by a width table (space)
pub const FIRST_TABLE_CHAR: u32 = 0x20;

/// Number of characters in a width table (0x20..=0x7E)
pub const TABLE_CHAR_COUNT: usize = 95;
