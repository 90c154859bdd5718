//! Metadata session
//!
//! Builds the `Format`/`Type`/`ID` request against the server's GetMetadata
//! capability URL and decodes the reply. The response body is read to
//! completion and released before decoding returns.

use crate::error::{Error, Result};
use crate::metadata::{decode_metadata_str, MetadataFormat, MetadataKind, MetadataResponse};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// RETS version header sent with every request
const RETS_VERSION_HEADER: &str = "RETS-Version";

/// Connection settings for a metadata session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// GetMetadata capability URL
    pub url: String,
    /// User agent string
    pub user_agent: String,
    /// RETS protocol version advertised to the server
    pub rets_version: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            user_agent: format!("rets-compact/{}", env!("CARGO_PKG_VERSION")),
            rets_version: "RETS/1.7.2".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl SessionConfig {
    /// Create a config for the given capability URL with defaults elsewhere
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Parameters of one metadata request
#[derive(Debug, Clone)]
pub struct MetadataRequest {
    /// Metadata kind; becomes the `Type` query parameter
    pub kind: MetadataKind,
    /// Wire format; becomes the `Format` query parameter
    pub format: MetadataFormat,
    /// Metadata identifier; `*` selects everything of the kind
    pub id: String,
}

impl Default for MetadataRequest {
    fn default() -> Self {
        Self {
            kind: MetadataKind::System,
            format: MetadataFormat::Compact,
            id: "*".to_string(),
        }
    }
}

impl MetadataRequest {
    /// Request all records of one kind
    pub fn all(kind: MetadataKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Request one identifier of one kind
    pub fn with_id(kind: MetadataKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            ..Default::default()
        }
    }
}

/// One metadata session against a single capability URL
#[derive(Debug)]
pub struct Session {
    client: Client,
    config: SessionConfig,
}

impl Session {
    /// Create a session from connection settings
    pub fn new(config: SessionConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(Error::missing_field("url"));
        }
        // validate the capability URL up front
        Url::parse(&config.url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            RETS_VERSION_HEADER,
            HeaderValue::from_str(&config.rets_version)
                .map_err(|_| Error::config("rets_version is not a valid header value"))?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch and decode one metadata response
    pub async fn get_metadata(&self, request: &MetadataRequest) -> Result<MetadataResponse> {
        let body = self.get_metadata_raw(request).await?;
        decode_metadata_str(request.kind, &body)
    }

    /// Fetch the raw XML body of one metadata response
    pub async fn get_metadata_raw(&self, request: &MetadataRequest) -> Result<String> {
        debug!(
            kind = %request.kind,
            format = %request.format,
            id = %request.id,
            "requesting metadata"
        );

        let response = self
            .client
            .get(&self.config.url)
            .query(&[
                ("Format", request.format.as_str()),
                ("Type", request.kind.element_name()),
                ("ID", request.id.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        Ok(response.text().await?)
    }
}
