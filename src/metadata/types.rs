//! Metadata types
//!
//! Shared type definitions for metadata requests and decoded payloads.

use crate::compact::CompactTable;
use crate::envelope::ReplyStatus;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Metadata Kind
// ============================================================================

/// Category of structural metadata a request asks for.
///
/// The kind determines the wrapping element name in the response and which
/// type-specific attributes participate in the record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKind {
    /// System-level metadata (non-tabular)
    #[default]
    System,
    /// Resource definitions
    Resource,
    /// Class definitions within a resource
    Class,
    /// Field (table) definitions within a class
    Table,
    /// Lookup definitions within a resource
    Lookup,
    /// Value sets for a lookup
    LookupType,
}

impl MetadataKind {
    /// Name of the response element wrapping this kind's payload; also the
    /// `Type` query parameter value on requests
    pub fn element_name(&self) -> &'static str {
        match self {
            MetadataKind::System => "METADATA-SYSTEM",
            MetadataKind::Resource => "METADATA-RESOURCE",
            MetadataKind::Class => "METADATA-CLASS",
            MetadataKind::Table => "METADATA-TABLE",
            MetadataKind::Lookup => "METADATA-LOOKUP",
            MetadataKind::LookupType => "METADATA-LOOKUP_TYPE",
        }
    }

    /// All kinds, in the order the standard lists them
    pub fn all() -> [MetadataKind; 6] {
        [
            MetadataKind::System,
            MetadataKind::Resource,
            MetadataKind::Class,
            MetadataKind::Table,
            MetadataKind::Lookup,
            MetadataKind::LookupType,
        ]
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

impl FromStr for MetadataKind {
    type Err = Error;

    /// Accepts the full element name (`METADATA-RESOURCE`) or the bare kind
    /// (`resource`), case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let bare = normalized.strip_prefix("METADATA-").unwrap_or(&normalized);
        match bare {
            "SYSTEM" => Ok(MetadataKind::System),
            "RESOURCE" => Ok(MetadataKind::Resource),
            "CLASS" => Ok(MetadataKind::Class),
            "TABLE" => Ok(MetadataKind::Table),
            "LOOKUP" => Ok(MetadataKind::Lookup),
            "LOOKUP_TYPE" | "LOOKUP-TYPE" => Ok(MetadataKind::LookupType),
            _ => Err(Error::Other(format!("unknown metadata type: {s}"))),
        }
    }
}

// ============================================================================
// Metadata Format
// ============================================================================

/// Wire format requested from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetadataFormat {
    /// Delimiter-bounded rows, raw lookup values
    #[default]
    Compact,
    /// Delimiter-bounded rows, lookup values resolved to display text
    CompactDecoded,
}

impl MetadataFormat {
    /// `Format` query parameter value on requests
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataFormat::Compact => "COMPACT",
            MetadataFormat::CompactDecoded => "COMPACT-DECODED",
        }
    }
}

impl fmt::Display for MetadataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COMPACT" => Ok(MetadataFormat::Compact),
            "COMPACT-DECODED" => Ok(MetadataFormat::CompactDecoded),
            _ => Err(Error::Other(format!("unknown metadata format: {s}"))),
        }
    }
}

// ============================================================================
// Decoded Payloads
// ============================================================================

/// System-level metadata; unlike the tabular kinds it is a single record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemMetadata {
    /// System identifier from the `SYSTEM` element
    pub system_id: String,
    /// System description from the `SYSTEM` element
    pub description: String,
    /// Free-text comments, whitespace-trimmed
    pub comments: String,
    /// Metadata version
    pub version: String,
    /// Metadata date
    pub date: String,
}

/// Decoded payload of one metadata response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataPayload {
    /// System metadata
    System(SystemMetadata),
    /// One tabular metadata record
    Table(CompactTable),
}

/// One fully decoded metadata response: envelope status plus payload.
///
/// `payload` is `None` when the response carried an empty metadata section
/// (empty or absent COLUMNS) — a valid, common outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataResponse {
    /// Envelope reply status
    pub status: ReplyStatus,
    /// Decoded payload, absent when the section was empty
    pub payload: Option<MetadataPayload>,
}

impl MetadataResponse {
    /// The tabular record, if this response decoded one
    pub fn table(&self) -> Option<&CompactTable> {
        match &self.payload {
            Some(MetadataPayload::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// The system metadata, if this response decoded it
    pub fn system(&self) -> Option<&SystemMetadata> {
        match &self.payload {
            Some(MetadataPayload::System(system)) => Some(system),
            _ => None,
        }
    }
}
