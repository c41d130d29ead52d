use std::path::PathBuf;
use std::sync::Arc;

use crate::client::StoreClient;
use crate::config::SyncConfig;
use crate::error::SyncResult;

/// Central context for a sync run, owning the validated configuration and
/// the store client.
pub struct SyncContext {
    config: SyncConfig,
    client: Option<Arc<StoreClient>>,
}

impl SyncContext {
    pub fn new(config: SyncConfig) -> Self {
        Self { config, client: None }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Get or create the store client
    pub fn client(&mut self) -> SyncResult<Arc<StoreClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(StoreClient::from_config(&self.config)?);
        self.client = Some(client.clone());
        Ok(client)
    }
}

/// Builder applying command-line overrides on top of the environment.
#[derive(Default)]
pub struct SyncContextBuilder {
    config: Option<SyncConfig>,
    input_path: Option<PathBuf>,
    table: Option<String>,
    dry_run: bool,
}

impl SyncContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn build(self) -> SyncResult<SyncContext> {
        let mut config = match self.config {
            Some(config) => config,
            None => SyncConfig::from_env()?,
        };

        if let Some(path) = self.input_path {
            config.input_path = path;
        }
        if let Some(table) = self.table {
            config.table = table;
        }
        config.dry_run = self.dry_run;

        Ok(SyncContext::new(config))
    }
}
