//! COMPACT wire format
//!
//! RETS COMPACT responses transmit tabular data as delimiter-bounded strings
//! rather than per-field XML elements. The delimiter byte is itself declared
//! hex-encoded inside the document and is scoped to the one response that
//! declared it.
//!
//! # Overview
//!
//! - [`resolve_delimiter`] turns the hex attribute into the separator byte
//! - [`split_compact_row`] turns one bounded row string into its fields
//! - [`CompactTable`] owns the decoded columns/rows with an indexed lookup

mod delimiter;
mod row;
mod table;

pub use delimiter::{delimiter_from_start, resolve_delimiter, DEFAULT_DELIMITER};
pub use row::split_compact_row;
pub use table::{ColumnIndex, CompactTable};

#[cfg(test)]
mod tests;
