//! Static advance-width tables for the PDF standard fonts.
//!
//! Widths are in 1/1000 em and cover ASCII 0x20..=0x7E (95 printable
//! characters), index = (char as usize) - 32. Anything outside that range
//! falls back to the face's average width.

use super::GlyphMeasure;
use crate::constants::{FIRST_TABLE_CHAR, FONT_UNITS_PER_EM, TABLE_CHAR_COUNT};
use crate::style::{TextMetric, Typeface};
use crate::types::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[rustfmt::skip]
const HELVETICA: [u16; TABLE_CHAR_COUNT] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; TABLE_CHAR_COUNT] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; TABLE_CHAR_COUNT] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; TABLE_CHAR_COUNT] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

/// Advance widths for one typeface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceWidths {
    /// Exactly 95 entries, one per printable ASCII character
    pub widths: Vec<u16>,
    /// Used for characters outside the table
    pub fallback: u16,
}

impl FaceWidths {
    fn from_table(table: &[u16; TABLE_CHAR_COUNT]) -> Self {
        let sum: u32 = table.iter().map(|w| u32::from(*w)).sum();
        Self {
            widths: table.to_vec(),
            fallback: (sum / TABLE_CHAR_COUNT as u32) as u16,
        }
    }

    fn char_units(&self, ch: char) -> u16 {
        let code = ch as u32;
        code.checked_sub(FIRST_TABLE_CHAR)
            .and_then(|index| self.widths.get(index as usize))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Width of `text` in font units
    pub fn text_units(&self, text: &str) -> u32 {
        text.chars().map(|ch| u32::from(self.char_units(ch))).sum()
    }
}

/// Width tables for every [`Typeface`].
///
/// Built from the standard fonts, or loaded from a JSON file so cards can be
/// measured against other faces with known advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontTables {
    faces: BTreeMap<Typeface, FaceWidths>,
}

impl Default for FontTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl FontTables {
    /// Tables for the PDF standard fonts
    pub fn standard() -> Self {
        let mut faces = BTreeMap::new();
        faces.insert(Typeface::Helvetica, FaceWidths::from_table(&HELVETICA));
        faces.insert(Typeface::HelveticaBold, FaceWidths::from_table(&HELVETICA_BOLD));
        faces.insert(Typeface::TimesRoman, FaceWidths::from_table(&TIMES_ROMAN));
        faces.insert(Typeface::TimesBold, FaceWidths::from_table(&TIMES_BOLD));
        Self { faces }
    }

    /// Build tables from explicit faces, checking every typeface is covered
    pub fn from_faces(faces: BTreeMap<Typeface, FaceWidths>) -> Result<Self> {
        let tables = Self { faces };
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a JSON file.
    ///
    /// Any failure here means the layout cannot be measured at all, so it is
    /// reported as [`LayoutError::MeasurementUnavailable`].
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            LayoutError::MeasurementUnavailable(format!(
                "Failed to read font tables '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let tables: Self = serde_json::from_slice(bytes).map_err(|e| {
            LayoutError::MeasurementUnavailable(format!("Failed to parse font tables: {}", e))
        })?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<()> {
        for typeface in Typeface::ALL {
            let face = self.faces.get(&typeface).ok_or_else(|| {
                LayoutError::MeasurementUnavailable(format!(
                    "No width table for {}",
                    typeface.name()
                ))
            })?;
            if face.widths.len() != TABLE_CHAR_COUNT {
                return Err(LayoutError::MeasurementUnavailable(format!(
                    "Width table for {} has {} entries, expected {}",
                    typeface.name(),
                    face.widths.len(),
                    TABLE_CHAR_COUNT
                )));
            }
        }
        Ok(())
    }

    pub fn face(&self, typeface: Typeface) -> Option<&FaceWidths> {
        self.faces.get(&typeface)
    }
}

impl GlyphMeasure for FontTables {
    fn text_width(&self, text: &str, metric: &TextMetric) -> f32 {
        let units = match self.face(metric.typeface) {
            Some(face) => face.text_units(text),
            None => 0,
        };
        units as f32 / FONT_UNITS_PER_EM * metric.size
    }
}
