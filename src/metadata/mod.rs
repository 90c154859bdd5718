//! RETS metadata decoding
//!
//! One data-driven decoder handles every tabular metadata kind (resource,
//! class, table, lookup, lookup type); the kind selects the wrapping element
//! name and which attributes feed the record identifier. System metadata has
//! its own non-tabular shape and its own decoder.

mod assembler;
mod types;

pub use assembler::{decode_metadata, decode_metadata_str};
pub use types::{MetadataFormat, MetadataKind, MetadataPayload, MetadataResponse, SystemMetadata};
