use std::sync::Arc;

use anyhow::{Context, Result};

use super::session::SessionRegistry;
use crate::config::AppConfig;
use crate::translation::TranslationClient;

/// Shared by every request handler. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Arc<TranslationClient>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = TranslationClient::new(&config.endpoint)
            .context("Failed to initialise translation client")?;

        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
            sessions: Arc::new(SessionRegistry::new()),
        })
    }
}
