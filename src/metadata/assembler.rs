//! Metadata response decoding
//!
//! Walks the response token stream once, forward-only: envelope status
//! first, then the declared delimiter, then the per-kind metadata element.
//! The stream is never buffered whole and nothing decoded here keeps a
//! reference to it.

use crate::compact::{delimiter_from_start, CompactTable, DEFAULT_DELIMITER};
use crate::envelope::read_reply_status;
use crate::error::{Error, Result};
use crate::metadata::types::{MetadataKind, MetadataPayload, MetadataResponse, SystemMetadata};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use tracing::debug;

/// Decode one metadata response of the given kind from a byte stream.
///
/// The source may be dropped as soon as this returns; decoded values carry
/// no reference to it.
pub fn decode_metadata<R: BufRead>(kind: MetadataKind, source: R) -> Result<MetadataResponse> {
    let mut reader = Reader::from_reader(source);
    let status = read_reply_status(&mut reader)?;
    debug!(code = status.code, %kind, "decoding metadata response");

    let payload = match kind {
        MetadataKind::System => Some(MetadataPayload::System(decode_system(&mut reader)?)),
        _ => decode_tabular(kind, &mut reader)?.map(MetadataPayload::Table),
    };

    Ok(MetadataResponse { status, payload })
}

/// Decode one metadata response from an in-memory body
pub fn decode_metadata_str(kind: MetadataKind, body: &str) -> Result<MetadataResponse> {
    decode_metadata(kind, body.as_bytes())
}

// ============================================================================
// Tabular Kinds
// ============================================================================

/// Attributes of a tabular metadata element
#[derive(Debug, Default)]
struct ElementAttrs {
    resource: String,
    class: String,
    lookup: String,
    version: String,
    date: String,
}

impl ElementAttrs {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let mut attrs = Self::default();
        for attr in start.attributes() {
            let attr = attr?;
            let value = || -> Result<String> { Ok(attr.unescape_value()?.into_owned()) };
            match attr.key.as_ref() {
                b"Resource" => attrs.resource = value()?,
                b"Class" => attrs.class = value()?,
                b"Lookup" => attrs.lookup = value()?,
                b"Version" => attrs.version = value()?,
                b"Date" => attrs.date = value()?,
                _ => {}
            }
        }
        Ok(attrs)
    }

    /// Canonical record identifier.
    ///
    /// `Lookup` is checked after `Class`, so when an element carries both,
    /// `Lookup` wins.
    fn identifier(&self) -> String {
        let mut id = self.resource.clone();
        if !self.class.is_empty() {
            id = format!("{}:{}", self.resource, self.class);
        }
        if !self.lookup.is_empty() {
            id = format!("{}:{}", self.resource, self.lookup);
        }
        id
    }
}

/// Scan for the kind's wrapping element and assemble its table.
///
/// Returns `Ok(None)` when the element is absent or its COLUMNS is empty.
fn decode_tabular<R: BufRead>(
    kind: MetadataKind,
    reader: &mut Reader<R>,
) -> Result<Option<CompactTable>> {
    let element = kind.element_name().as_bytes();
    let mut delimiter = DEFAULT_DELIMITER;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"DELIMITER" => {
                delimiter = delimiter_from_start(&e)?;
            }
            Event::Start(e) if e.name().as_ref() == element => {
                let attrs = ElementAttrs::from_start(&e)?;
                return assemble_element(reader, element, attrs, delimiter);
            }
            // stream exhausted without the element: an empty metadata
            // section, not an error
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}

/// Consume the element's COLUMNS/DATA children and build the record
fn assemble_element<R: BufRead>(
    reader: &mut Reader<R>,
    element: &[u8],
    attrs: ElementAttrs,
    delimiter: u8,
) -> Result<Option<CompactTable>> {
    let mut columns = String::new();
    let mut data = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(child) => match child.name().as_ref() {
                b"COLUMNS" => columns = read_element_text(reader, b"COLUMNS")?,
                b"DATA" => data.push(read_element_text(reader, b"DATA")?),
                _ => {}
            },
            Event::End(end) if end.name().as_ref() == element => break,
            Event::Eof => return Err(Error::Io(std::io::ErrorKind::UnexpectedEof.into())),
            _ => {}
        }
        buf.clear();
    }

    if columns.is_empty() {
        return Ok(None);
    }

    let mut table = CompactTable::from_compact(&columns, &data, char::from(delimiter))?;
    table.id = attrs.identifier();
    table.version = attrs.version;
    table.date = attrs.date;
    Ok(Some(table))
}

// ============================================================================
// System Kind
// ============================================================================

/// Decode the non-tabular `METADATA-SYSTEM` payload
fn decode_system<R: BufRead>(reader: &mut Reader<R>) -> Result<SystemMetadata> {
    let mut system = SystemMetadata::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"METADATA-SYSTEM" => apply_stamp_attrs(&e, &mut system)?,
                b"SYSTEM" => apply_system_attrs(&e, &mut system)?,
                b"COMMENTS" => {
                    let text = read_element_text(reader, b"COMMENTS")?;
                    system.comments = text.trim().to_string();
                }
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"METADATA-SYSTEM" => apply_stamp_attrs(&e, &mut system)?,
                b"SYSTEM" => apply_system_attrs(&e, &mut system)?,
                _ => {}
            },
            Event::Eof => return Ok(system),
            _ => {}
        }
        buf.clear();
    }
}

fn apply_stamp_attrs(start: &BytesStart<'_>, system: &mut SystemMetadata) -> Result<()> {
    for attr in start.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"Version" => system.version = attr.unescape_value()?.into_owned(),
            b"Date" => system.date = attr.unescape_value()?.into_owned(),
            _ => {}
        }
    }
    Ok(())
}

fn apply_system_attrs(start: &BytesStart<'_>, system: &mut SystemMetadata) -> Result<()> {
    for attr in start.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"SystemID" => system.system_id = attr.unescape_value()?.into_owned(),
            b"SystemDescription" => system.description = attr.unescape_value()?.into_owned(),
            _ => {}
        }
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Collect the text content of the current element until its end tag
fn read_element_text<R: BufRead>(reader: &mut Reader<R>, name: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    let mut text = String::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::End(e) if e.name().as_ref() == name => return Ok(text),
            Event::Eof => return Err(Error::Io(std::io::ErrorKind::UnexpectedEof.into())),
            _ => {}
        }
        buf.clear();
    }
}
