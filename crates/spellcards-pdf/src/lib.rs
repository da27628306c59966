mod card;
mod options;
mod pdf;
mod sheet;
mod theme;
mod types;

pub use card::{CardPainter, Mark};
pub use options::*;
pub use pdf::{generate_pdf, generate_pdf_bytes};
pub use sheet::{SheetGrid, SheetStats, sheet_stats};
pub use theme::{RgbColor, school_color};
pub use types::*;
