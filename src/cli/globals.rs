use crate::{
    api::ApiClient,
    cli::commands::{ARG_API_KEY, ARG_BASE_URL, ARG_STORAGE},
    config::AppConfig,
    notify::{ConsoleNotifier, Notifier},
    storage::{FileStore, Session},
};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Options shared by every subcommand.
#[derive(Clone, Debug)]
pub struct GlobalArgs {
    pub config: AppConfig,
}

impl GlobalArgs {
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let config = AppConfig::new(
            matches.get_one::<String>(ARG_BASE_URL).map(String::as_str),
            matches.get_one::<String>(ARG_API_KEY).map(String::as_str),
            matches.get_one::<String>(ARG_STORAGE).map(String::as_str),
        )
        .context("invalid USERDESK_BASE_URL")?;

        Ok(Self { config })
    }

    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(Arc::new(FileStore::new(self.config.storage_path.clone())))
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn api(&self) -> Result<ApiClient> {
        ApiClient::new(&self.config).context("failed to build HTTP client")
    }

    #[must_use]
    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::new(ConsoleNotifier)
    }
}
