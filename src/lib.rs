// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # rets-compact
//!
//! Decoder and thin client for RETS (Real Estate Transaction Standard)
//! metadata responses in COMPACT format: tabular metadata embedded in an XML
//! envelope, with fields separated by a delimiter whose value is itself
//! transmitted hex-encoded inside the document.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rets_compact::{MetadataKind, MetadataRequest, Session, SessionConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let session = Session::new(SessionConfig::new("https://mls.example.com/getMetadata"))?;
//!
//!     let request = MetadataRequest::all(MetadataKind::Resource);
//!     let response = session.get_metadata(&request).await?;
//!
//!     if let Some(table) = response.table() {
//!         for row in 0..table.len() {
//!             println!("{}", table.lookup("ResourceID", row)?);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Session                            │
//! │   get_metadata(request) → MetadataResponse                  │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴──────────────┬────────────────┐
//! │   Envelope   │           Compact           │    Metadata    │
//! ├──────────────┼─────────────────────────────┼────────────────┤
//! │ RETS element │ Delimiter resolve (hex)     │ Kind → element │
//! │ ReplyCode    │ Row split (bounded fields)  │ Identifier     │
//! │ ReplyText    │ CompactTable + ColumnIndex  │ System decode  │
//! └──────────────┴─────────────────────────────┴────────────────┘
//! ```
//!
//! Decoding is single-threaded and synchronous over a forward-only token
//! stream; decoded values are immutable and keep no reference to the source.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document the error enum variants before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// RETS response envelope scanning
pub mod envelope;

/// COMPACT wire format: delimiter, row splitting, tabular model
pub mod compact;

/// Metadata kinds and response decoding
pub mod metadata;

/// Thin HTTP session
pub mod client;

/// Configuration files
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{MetadataRequest, Session, SessionConfig};
pub use compact::{ColumnIndex, CompactTable};
pub use envelope::ReplyStatus;
pub use error::{Error, Result};
pub use metadata::{
    decode_metadata, decode_metadata_str, MetadataFormat, MetadataKind, MetadataPayload,
    MetadataResponse, SystemMetadata,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
