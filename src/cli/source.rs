use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

use crate::{
    api::{Client, Directory, ReportSource},
    prelude::*,
};

#[derive(Parser)]
pub struct SourceArgs {
    /// Admin API base URL. For example: `https://admin.example.com/api`.
    #[clap(long = "api-base-url", env = "CHARGEBOARD_API_BASE_URL", conflicts_with = "fixtures")]
    base_url: Option<Url>,

    /// Admin API bearer token.
    #[clap(long = "api-token", env = "CHARGEBOARD_API_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// API request timeout.
    #[clap(long = "api-timeout", env = "CHARGEBOARD_API_TIMEOUT", default_value = "15s")]
    timeout: humantime::Duration,

    /// Read the saved reports from the directory instead of calling the API.
    #[clap(long, env = "CHARGEBOARD_FIXTURES")]
    fixtures: Option<PathBuf>,
}

impl SourceArgs {
    pub fn connect(self) -> Result<Box<dyn ReportSource>> {
        match (self.fixtures, self.base_url) {
            (Some(path), _) => {
                info!(path = %path.display(), "reading the saved reports");
                Ok(Box::new(Directory(path)))
            }
            (None, Some(base_url)) => {
                info!(%base_url, "using the admin API");
                Ok(Box::new(Client::new(
                    base_url,
                    self.access_token.as_deref(),
                    self.timeout.into(),
                )?))
            }
            (None, None) => bail!("either `--api-base-url` or `--fixtures` is required"),
        }
    }
}
