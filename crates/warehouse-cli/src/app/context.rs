//! Application context for the Warehouse CLI.
//!
//! Combines CLI arguments with lazily-loaded configuration and owns the
//! load/save cycle around each command.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use warehouse_core::{store, InventoryLedger};

use crate::cli::Cli;
use crate::config::{load_config, resolve_config_path, LoggingSection, UiSection, WarehouseConfig};
use crate::ui::{UiContext, UiFlags};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<WarehouseConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&WarehouseConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path()?))
    }

    /// Logging settings, or defaults if the config cannot be read.
    ///
    /// A broken config is reported by the command that needs it.
    pub fn logging_settings(&self) -> LoggingSection {
        self.config()
            .map(|config| config.logging.clone())
            .unwrap_or_default()
    }

    /// Save file path: `--file`/`WAREHOUSE_FILE`, then config, then default.
    pub fn save_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.file.as_ref() {
            return Ok(PathBuf::from(path));
        }
        Ok(PathBuf::from(&self.config()?.storage.path))
    }

    /// Build the UI context for a command.
    ///
    /// An unreadable config falls back to the default `[ui]` section here;
    /// the command reports the config error itself when it needs the file.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let flags = UiFlags {
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
        };
        match self.config() {
            Ok(config) => UiContext::new(&config.ui, flags, json, format),
            Err(_) => UiContext::new(&UiSection::default(), flags, json, format),
        }
    }

    /// Load the ledger, starting empty when no save file exists.
    pub fn load_ledger(&self) -> anyhow::Result<InventoryLedger> {
        let path = self.save_path()?;
        Ok(store::load_or_default(&path)?)
    }

    /// Persist the ledger to the save file.
    pub fn save_ledger(&self, ledger: &InventoryLedger) -> anyhow::Result<()> {
        let path = self.save_path()?;
        store::save(&path, ledger)?;
        Ok(())
    }
}
