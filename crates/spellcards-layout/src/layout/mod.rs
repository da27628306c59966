//! Card height calculation
//!
//! This module answers "how tall would this card be" without drawing:
//! - Metadata line selection and column split (shared with renderers)
//! - Per-block heights and the fit predicate

mod blocks;
mod details;

pub use blocks::*;
pub use details::*;
