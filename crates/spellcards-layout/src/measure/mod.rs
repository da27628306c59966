//! Text measurement
//!
//! Layout decisions never draw anything. They ask a [`TextOracle`] how tall a
//! string would be once wrapped to a column width:
//! - [`GlyphMeasure`] is the low-level primitive (single-line advance width)
//! - [`WrappingOracle`] turns any glyph measure into wrapped heights
//! - [`FontTables`] supplies advance widths for the PDF standard fonts

mod fonts;
mod wrap;

pub use fonts::*;
pub use wrap::*;

use crate::style::TextMetric;

/// Single-line advance width of a string.
///
/// Implementations must be deterministic and hold no mutable state across
/// calls, since pagination may run on several threads at once.
pub trait GlyphMeasure: Send + Sync {
    /// Width in points of `text` set on one line with `metric`
    fn text_width(&self, text: &str, metric: &TextMetric) -> f32;
}

/// Wrapped height of a string inside a column.
pub trait TextOracle: Send + Sync {
    /// Height in points `text` occupies when wrapped to `width`.
    ///
    /// Empty or whitespace-only text, or a non-positive width, is 0.
    fn wrapped_height(&self, text: &str, metric: &TextMetric, width: f32) -> f32;
}

impl<T: TextOracle + ?Sized> TextOracle for &T {
    fn wrapped_height(&self, text: &str, metric: &TextMetric, width: f32) -> f32 {
        (**self).wrapped_height(text, metric, width)
    }
}

impl<T: TextOracle + ?Sized> TextOracle for std::sync::Arc<T> {
    fn wrapped_height(&self, text: &str, metric: &TextMetric, width: f32) -> f32 {
        (**self).wrapped_height(text, metric, width)
    }
}
