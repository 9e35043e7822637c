//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use snapbuy_catalog::{CatalogProvider, InMemoryCatalog};
use snapbuy_commerce::storefront::Storefront;
use tracing::debug;

use crate::config::SnapbuyConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["snapbuy.toml", ".snapbuy.toml", "snapbuy.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: SnapbuyConfig,
    /// Output handler.
    pub output: Output,
    /// Product source.
    pub catalog: Box<dyn CatalogProvider>,
}

impl Context {
    /// Load config and the catalog it points at.
    pub async fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_file = match config_path {
            Some(path) => Some(resolve_path(&cwd, Path::new(path))),
            None => find_config(&cwd),
        };
        let (config, base_dir) = match config_file {
            Some(file) => {
                debug!(path = %file.display(), "using config file");
                let config = SnapbuyConfig::load(&file)?;
                let base_dir = file.parent().map(Path::to_path_buf).unwrap_or(cwd);
                (config, base_dir)
            }
            None => (SnapbuyConfig::default(), cwd),
        };

        let fixture = resolve_path(&base_dir, &config.catalog.fixture);
        output.debug(&format!("Loading catalog from {}", fixture.display()));
        let catalog = InMemoryCatalog::load(&fixture, &config.catalog.conversion)
            .await
            .with_context(|| format!("Failed to load catalog: {}", fixture.display()))?;

        Ok(Self {
            config,
            output,
            catalog: Box::new(catalog),
        })
    }

    /// A fresh storefront session using the configured settings and coupons.
    pub fn storefront(&self) -> Storefront {
        Storefront::new(self.config.store).with_coupons(self.config.coupon_book())
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

/// Resolve a path relative to `base`.
fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
