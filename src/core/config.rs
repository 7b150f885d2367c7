use crate::core::currency::RateEdge;
use crate::store::RateStore;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Pre-populate the store with the default USD/CAD/GBP/EUR chain.
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
    /// Rates applied in order after seeding; later entries win.
    #[serde(default)]
    pub rates: Vec<RateEdge>,
}

fn default_seed() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            seed_defaults: true,
            rates: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to the
    /// built-in defaults when no file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fxpath", "fxpath")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Rejects non-positive or non-finite rates.
    pub fn validate(&self) -> Result<()> {
        for edge in &self.rates {
            edge.validate()?;
        }
        Ok(())
    }

    /// Builds the rate store described by this config.
    pub fn build_store(&self) -> RateStore {
        let store = if self.seed_defaults {
            RateStore::with_default_rates()
        } else {
            RateStore::new()
        };
        store.update_rates(self.rates.iter().cloned());
        debug!(
            edges = store.edge_count(),
            currencies = store.currency_count(),
            "Built rate store from config"
        );
        store
    }
}
