//! CLI command execution

use crate::cli::{Cli, Commands};
use crate::client::{MetadataRequest, Session, SessionConfig};
use crate::config::{ConnectionConfig, MetadataOptions};
use crate::error::{Error, Result};
use crate::metadata::{decode_metadata_str, MetadataResponse};
use std::path::Path;
use tracing::info;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for a parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch {
                url,
                mtype,
                format,
                id,
                output,
                raw,
            } => {
                self.fetch(url.as_deref(), mtype, format, id, output.as_deref(), *raw)
                    .await
            }
            Commands::Decode {
                file,
                mtype,
                output,
            } => self.decode(file, mtype, output.as_deref()),
        }
    }

    async fn fetch(
        &self,
        url: Option<&str>,
        mtype: &str,
        format: &str,
        id: &str,
        output: Option<&Path>,
        raw: bool,
    ) -> Result<()> {
        let session_config = self.session_config(url)?;
        let request = self.metadata_request(mtype, format, id)?;

        info!(url = %session_config.url, kind = %request.kind, "fetching metadata");
        let session = Session::new(session_config)?;

        if raw {
            let body = session.get_metadata_raw(&request).await?;
            return write_output(output, &body);
        }

        let response = session.get_metadata(&request).await?;
        write_response(output, &response)
    }

    fn decode(&self, file: &Path, mtype: &str, output: Option<&Path>) -> Result<()> {
        let options = self.metadata_options()?;
        let kind = match options {
            Some(options) => options.request()?.kind,
            None => mtype.parse()?,
        };

        let body = std::fs::read_to_string(file)
            .map_err(|e| Error::config(format!("cannot read {}: {e}", file.display())))?;
        let response = decode_metadata_str(kind, &body)?;
        write_response(output, &response)
    }

    /// Connection settings: the config file wins over the --url flag
    fn session_config(&self, url: Option<&str>) -> Result<SessionConfig> {
        if let Some(path) = &self.cli.config {
            return Ok(ConnectionConfig::load_from(path)?.session_config());
        }
        match url {
            Some(url) => Ok(SessionConfig::new(url)),
            None => Err(Error::config("either --config or --url is required")),
        }
    }

    /// Request options: the options file wins over the individual flags
    fn metadata_request(&self, mtype: &str, format: &str, id: &str) -> Result<MetadataRequest> {
        if let Some(options) = self.metadata_options()? {
            return options.request();
        }
        Ok(MetadataRequest {
            kind: mtype.parse()?,
            format: format.parse()?,
            id: id.to_string(),
        })
    }

    fn metadata_options(&self) -> Result<Option<MetadataOptions>> {
        self.cli
            .metadata_options
            .as_ref()
            .map(MetadataOptions::load_from)
            .transpose()
    }
}

fn write_response(output: Option<&Path>, response: &MetadataResponse) -> Result<()> {
    let json = serde_json::to_string_pretty(response)?;
    write_output(output, &json)
}

fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
            info!(path = %path.display(), "wrote output");
            Ok(())
        }
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}
