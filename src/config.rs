//! Configuration types
//!
//! Connection settings and metadata request options, loadable from JSON
//! files or assembled from CLI flags.

use crate::client::{MetadataRequest, SessionConfig};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Connection Settings
// ============================================================================

/// Connection settings for one RETS server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// GetMetadata capability URL
    pub url: String,

    /// User agent string
    #[serde(default, rename = "user-agent")]
    pub user_agent: Option<String>,

    /// RETS protocol version advertised to the server
    #[serde(default, rename = "rets-version")]
    pub rets_version: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds", rename = "timeout-seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl ConnectionConfig {
    /// Load connection settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        if config.url.is_empty() {
            return Err(Error::missing_field("url"));
        }
        Ok(config)
    }

    /// Convert into session settings, applying defaults for absent fields
    pub fn session_config(&self) -> SessionConfig {
        let defaults = SessionConfig::default();
        SessionConfig {
            url: self.url.clone(),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            rets_version: self.rets_version.clone().unwrap_or(defaults.rets_version),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

// ============================================================================
// Metadata Options
// ============================================================================

/// User-chosen metadata request options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataOptions {
    /// Metadata type requested
    #[serde(default = "default_mtype", rename = "metadata-type")]
    pub mtype: String,

    /// Wire format requested
    #[serde(default = "default_format")]
    pub format: String,

    /// Metadata identifier
    #[serde(default = "default_id")]
    pub id: String,
}

fn default_mtype() -> String {
    "METADATA-SYSTEM".to_string()
}

fn default_format() -> String {
    "COMPACT".to_string()
}

fn default_id() -> String {
    "*".to_string()
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self {
            mtype: default_mtype(),
            format: default_format(),
            id: default_id(),
        }
    }
}

impl MetadataOptions {
    /// Load options from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Convert into a request, validating the type and format strings
    pub fn request(&self) -> Result<MetadataRequest> {
        Ok(MetadataRequest {
            kind: self.mtype.parse()?,
            format: self.format.parse()?,
            id: self.id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{MetadataFormat, MetadataKind};
    use std::io::Write;

    #[test]
    fn test_connection_config_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"url": "http://example.com/getMetadata", "rets-version": "RETS/1.5"}}"#
        )
        .unwrap();

        let config = ConnectionConfig::load_from(file.path()).unwrap();
        assert_eq!(config.url, "http://example.com/getMetadata");
        assert_eq!(config.rets_version.as_deref(), Some("RETS/1.5"));
        assert_eq!(config.timeout_seconds, 30);

        let session = config.session_config();
        assert_eq!(session.rets_version, "RETS/1.5");
        assert_eq!(session.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_connection_config_missing_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"url": ""}}"#).unwrap();

        let err = ConnectionConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_connection_config_missing_file() {
        let err = ConnectionConfig::load_from("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_metadata_options_defaults() {
        let options = MetadataOptions::default();
        let request = options.request().unwrap();
        assert_eq!(request.kind, MetadataKind::System);
        assert_eq!(request.format, MetadataFormat::Compact);
        assert_eq!(request.id, "*");
    }

    #[test]
    fn test_metadata_options_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"metadata-type": "METADATA-TABLE", "id": "Property:RES"}}"#
        )
        .unwrap();

        let options = MetadataOptions::load_from(file.path()).unwrap();
        let request = options.request().unwrap();
        assert_eq!(request.kind, MetadataKind::Table);
        assert_eq!(request.format, MetadataFormat::Compact);
        assert_eq!(request.id, "Property:RES");
    }

    #[test]
    fn test_metadata_options_bad_type() {
        let options = MetadataOptions {
            mtype: "METADATA-BOGUS".to_string(),
            ..Default::default()
        };
        assert!(options.request().is_err());
    }
}
