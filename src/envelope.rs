//! RETS response envelope
//!
//! Every RETS response wraps its payload in a `RETS` root element carrying
//! the overall reply status. The scanner here walks a forward-only
//! [`quick_xml::Reader`] token-by-token until it sees that element, without
//! ever buffering the whole document.
//!
//! If the stream ends (or errors) before a `RETS` element appears, the
//! underlying stream error is propagated as-is — there is no synthesized
//! "envelope not found" error. See the note on `error::Error`.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::io::BufRead;

/// Element name of the response envelope. Case-sensitive.
pub const ENVELOPE_ELEMENT: &[u8] = b"RETS";

/// Reply status extracted from the envelope element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyStatus {
    /// Numeric reply code; 0 means success. Parsed base-10 into 16 bits,
    /// matching the width historically accepted by RETS clients.
    pub code: i16,
    /// Human-readable reply text; empty when the attribute is absent
    pub text: String,
}

impl ReplyStatus {
    /// True when the reply code indicates success
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Advance the reader to the `RETS` start element and extract its status.
///
/// The reader is left positioned just past the envelope's start tag, so the
/// caller can continue scanning the payload with the same cursor.
pub fn read_reply_status<R: BufRead>(reader: &mut Reader<R>) -> Result<ReplyStatus> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == ENVELOPE_ELEMENT => {
                return reply_status_from_start(&e);
            }
            // End-of-input before the envelope: surface the stream's own
            // error, not a domain-specific one
            Event::Eof => return Err(Error::Io(std::io::ErrorKind::UnexpectedEof.into())),
            _ => {}
        }
        buf.clear();
    }
}

/// Extract the reply status from an already-located envelope start tag.
///
/// Attribute names are matched case-insensitively: each name is lower-cased
/// once, then compared against `replycode` / `replytext`.
pub fn reply_status_from_start(start: &BytesStart<'_>) -> Result<ReplyStatus> {
    let mut code = None;
    let mut text = String::new();

    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).to_ascii_lowercase();
        match key.as_str() {
            "replycode" => code = Some(attr.unescape_value()?.into_owned()),
            "replytext" => text = attr.unescape_value()?.into_owned(),
            _ => {}
        }
    }

    let raw = code.ok_or_else(|| Error::reply_code(""))?;
    let code = raw
        .trim()
        .parse::<i16>()
        .map_err(|_| Error::reply_code(raw))?;

    Ok(ReplyStatus { code, text })
}

/// Parse the record count from a `COUNT` element.
///
/// The count arrives as the element's sole attribute, base-10 encoded.
pub fn count_from_start(start: &BytesStart<'_>) -> Result<u64> {
    let attr = start
        .attributes()
        .next()
        .ok_or_else(|| Error::CountFormat {
            value: String::new(),
        })??;
    let value = attr.unescape_value()?.into_owned();
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::CountFormat { value })
}
