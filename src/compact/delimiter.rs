//! Delimiter resolution
//!
//! The field separator for a COMPACT response is declared as a 1-2 hex digit
//! attribute on a `DELIMITER` element. The decoded byte, not its hex text,
//! separates every field in that response.

use crate::error::{Error, Result};
use quick_xml::events::BytesStart;

/// Delimiter used when a response declares none: the tab byte
pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Decode a hex-encoded delimiter attribute value into the separator byte.
///
/// A single hex digit is left-padded with `'0'` before decoding. Values
/// longer than two characters decode their first two characters only,
/// matching the pad-then-decode shape of the wire format.
pub fn resolve_delimiter(value: &str) -> Result<u8> {
    let padded = match value.len() {
        0 => return Err(Error::delimiter(value)),
        1 => format!("0{value}"),
        _ => value
            .get(..2)
            .map(str::to_string)
            .ok_or_else(|| Error::delimiter(value))?,
    };

    let decoded = hex::decode(&padded).map_err(|_| Error::delimiter(value))?;
    // two hex digits always decode to one byte
    Ok(decoded[0])
}

/// Resolve the delimiter from a `DELIMITER` element's start tag.
///
/// The element carries a single hex-valued attribute.
pub fn delimiter_from_start(start: &BytesStart<'_>) -> Result<u8> {
    let attr = start
        .attributes()
        .next()
        .ok_or_else(|| Error::delimiter(""))??;
    let value = attr.unescape_value()?;
    resolve_delimiter(&value)
}
