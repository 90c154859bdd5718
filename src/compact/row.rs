//! Compact row splitting
//!
//! A row with fields `f1,f2,f3` is transmitted as
//! `<delim>f1<delim>f2<delim>f3<delim>`: every row is wrapped in leading and
//! trailing delimiter bytes, so splitting on the delimiter produces empty
//! first and last segments that carry no data.

/// Split one delimiter-bounded row string into its field values.
///
/// The first and last split segments (produced by the bounding delimiters)
/// are dropped unconditionally. A row that is missing its leading or
/// trailing delimiter therefore loses a genuine field silently — the caller
/// cannot distinguish that malformation here, and upstream consumers have
/// historically relied on the unconditional drop. Shape validation happens
/// later, against the header, in [`super::CompactTable::new`].
///
/// A row consisting only of the two bounding delimiters carries no fields
/// and yields an empty list.
pub fn split_compact_row(row: &str, delimiter: char) -> Vec<String> {
    let split: Vec<&str> = row.split(delimiter).collect();
    match split.len() {
        // no interior segments to keep
        0 | 1 | 2 => Vec::new(),
        // "<delim><delim>": three empty segments, zero fields
        3 if split[1].is_empty() => Vec::new(),
        n => split[1..n - 1].iter().map(|s| (*s).to_string()).collect(),
    }
}
