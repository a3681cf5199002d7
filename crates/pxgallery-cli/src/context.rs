use anyhow::{Result, anyhow};
use pxgallery_runtime::Config;
use std::path::{Path, PathBuf};

/// Command-line overrides layered on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub threshold: Option<u32>,
}

pub struct ExecutionContext {
    config_path: PathBuf,
}

impl ExecutionContext {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config file and apply overrides. Override paths are taken
    /// relative to the working directory, not to the config file.
    pub fn config(&self, overrides: &ConfigOverrides) -> Result<Config> {
        let mut config = Config::load_from(&self.config_path)
            .map_err(|e| anyhow!("{} (in {})", e, self.config_path.display()))?;

        let cwd = std::env::current_dir()?;
        if let Some(source) = &overrides.source {
            config.source_dir = cwd.join(source);
        }
        if let Some(output) = &overrides.output {
            config.output_file = cwd.join(output);
        }
        if let Some(threshold) = overrides.threshold {
            config.session_threshold_minutes = threshold;
        }

        Ok(config)
    }
}
