use crate::Result;
use pxgallery_engine::{ClusterConfig, DEFAULT_THRESHOLD_MINUTES, NamingConvention};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "pxgallery.toml";

/// Text shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    /// Free text; `**bold**` spans are rendered as `<strong>`.
    pub introduction: String,
    pub sale_terms: String,
    pub contact_email: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Collection Gallery".to_string(),
            introduction: String::new(),
            sale_terms: String::new(),
            contact_email: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
    pub thumbnail_dir: PathBuf,
    pub placeholder_dir: PathBuf,
    pub session_threshold_minutes: u32,
    pub prefix: String,
    pub extensions: Vec<String>,
    /// Longest edge of generated thumbnails, in pixels.
    pub thumbnail_size: u32,
    /// Longest edge of inline placeholders, in pixels.
    pub placeholder_size: u32,
    pub page: PageConfig,
}

impl Default for Config {
    fn default() -> Self {
        let naming = NamingConvention::default();
        Self {
            source_dir: PathBuf::from("photos"),
            output_file: PathBuf::from("collection_gallery.html"),
            thumbnail_dir: PathBuf::from("thumbnails"),
            placeholder_dir: PathBuf::from("placeholders"),
            session_threshold_minutes: DEFAULT_THRESHOLD_MINUTES,
            prefix: naming.prefix,
            extensions: naming.extensions,
            thumbnail_size: 400,
            placeholder_size: 16,
            page: PageConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a file; a missing file yields the defaults.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory so builds behave the same from any working directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        if !path.exists() {
            return Ok(Self::default().resolve_paths(base));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config.resolve_paths(base))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for path in [
            &mut self.source_dir,
            &mut self.output_file,
            &mut self.thumbnail_dir,
            &mut self.placeholder_dir,
        ] {
            if path.is_relative() && !base.as_os_str().is_empty() {
                *path = base.join(&*path);
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() || self.prefix.contains('_') {
            return Err(crate::Error::Config(format!(
                "prefix must be non-empty and contain no underscore, got '{}'",
                self.prefix
            )));
        }
        if self.extensions.is_empty() {
            return Err(crate::Error::Config(
                "at least one image extension is required".to_string(),
            ));
        }
        if self.thumbnail_size == 0 || self.placeholder_size == 0 {
            return Err(crate::Error::Config(
                "thumbnail_size and placeholder_size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn naming(&self) -> NamingConvention {
        NamingConvention::new(self.prefix.clone(), self.extensions.clone())
    }

    pub fn cluster_config(&self) -> ClusterConfig {
        ClusterConfig::from_minutes(self.session_threshold_minutes)
    }
}
