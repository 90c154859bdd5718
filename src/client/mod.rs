//! Thin transport glue
//!
//! One GET per metadata request against a capability URL; the response body
//! is handed straight to the decoder. Authentication, retries, and
//! connection management are deliberately out of scope — callers that need
//! them wrap the session themselves.

mod session;

pub use session::{MetadataRequest, Session, SessionConfig};
