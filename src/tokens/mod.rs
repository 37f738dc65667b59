//! Design token tables and the token resolver.
//!
//! This module provides:
//!
//! - [`TokenTable`]: A fixed mapping from symbolic token names to CSS values
//! - The five built-in tables: [`SPACING`], [`BORDER_WIDTH`], [`BORDER_RADIUS`],
//!   [`SHADOW`] and [`GAP`]
//!
//! Lookups never fail. A name that is not in the table is treated as a literal
//! CSS value the caller supplied directly, so `"12px"` resolves to `"12px"`.

mod scales;
mod table;

pub use scales::{BORDER_RADIUS, BORDER_WIDTH, GAP, SHADOW, SPACING};
pub use table::TokenTable;

/// Returns all built-in tables, in a stable order.
pub fn all_tables() -> [&'static TokenTable; 5] {
    [&SPACING, &BORDER_WIDTH, &BORDER_RADIUS, &SHADOW, &GAP]
}
