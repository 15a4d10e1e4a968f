use crate::args::OutputFormat;
use anyhow::{Context, Result};
use langcat_runtime::{CatalogLoader, Config, resolve_data_path};
use langcat_types::Catalog;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

pub struct ExecutionContext {
    data_arg: Option<String>,
    config_arg: Option<String>,
    config: OnceCell<Config>,
    catalog: OnceCell<Catalog>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(data_arg: Option<String>, config_arg: Option<String>, format: OutputFormat) -> Self {
        Self {
            data_arg,
            config_arg,
            config: OnceCell::new(),
            catalog: OnceCell::new(),
            format,
        }
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            Config::load(self.config_arg.as_deref()).context("failed to load configuration")
        })
    }

    pub fn data_path(&self) -> Result<PathBuf> {
        let config = self.config()?;
        Ok(resolve_data_path(self.data_arg.as_deref(), config))
    }

    /// Loader for the interactive viewer, with the configured post-load delay
    pub fn loader(&self) -> Result<CatalogLoader> {
        let config = self.config()?;
        Ok(CatalogLoader::new(self.data_path()?).with_delay(config.load_delay()))
    }

    /// Catalog for the non-interactive commands, read once on first use
    pub fn catalog(&self) -> Result<&Catalog> {
        self.catalog.get_or_try_init(|| {
            let path = self.data_path()?;
            CatalogLoader::new(&path)
                .load_blocking()
                .with_context(|| format!("failed to load catalog from {}", path.display()))
        })
    }
}
