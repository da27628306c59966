pub mod constants;
mod geometry;
mod io;
pub mod layout;
pub mod measure;
mod options;
mod paginate;
pub mod split;
mod style;
mod types;

pub use geometry::CardGeometry;
pub use io::{load_spells, parse_csv, parse_json, save_spells};
pub use layout::{BlockHeights, CardMeasurer};
pub use measure::{FontTables, GlyphMeasure, TextOracle, WrappingOracle};
pub use options::*;
pub use paginate::{PaginationStats, Paginator, paginate_parallel};
pub use split::{Fragment, SplitMode, normalize_description};
pub use style::*;
pub use types::*;
