use crate::{Error, Result};
use pxgallery_engine::NamingConvention;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regular files found directly inside the photos directory.
#[derive(Debug, Clone)]
pub struct SourceListing {
    pub dir: PathBuf,
    /// File names, sorted for stable output. Non-UTF-8 names are dropped.
    pub files: Vec<String>,
}

impl SourceListing {
    /// Read the top level of `dir`. Subdirectories are not descended into.
    pub fn read(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::SourceNotFound(dir.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => files.push(name.to_string()),
                None => tracing::warn!(path = %entry.path().display(), "skipping non-UTF-8 file name"),
            }
        }
        files.sort();

        tracing::info!(dir = %dir.display(), files = files.len(), "listed photos directory");

        Ok(Self {
            dir: dir.to_path_buf(),
            files,
        })
    }

    /// Files with an accepted image extension, timestamped or not.
    pub fn images<'a>(&'a self, naming: &'a NamingConvention) -> impl Iterator<Item = &'a str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|name| naming.accepts_extension(name))
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = SourceListing::read(&missing).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(p) if p == missing));
    }

    #[test]
    fn test_lists_top_level_files_only() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("PXL_20240605_090000000.jpg"), b"x")?;
        std::fs::write(temp_dir.path().join("notes.txt"), b"x")?;
        std::fs::create_dir(temp_dir.path().join("nested"))?;
        std::fs::write(temp_dir.path().join("nested/PXL_20240605_100000000.jpg"), b"x")?;

        let listing = SourceListing::read(temp_dir.path())?;
        assert_eq!(listing.files, vec!["PXL_20240605_090000000.jpg", "notes.txt"]);

        let naming = NamingConvention::default();
        let images: Vec<_> = listing.images(&naming).collect();
        assert_eq!(images, vec!["PXL_20240605_090000000.jpg"]);

        Ok(())
    }
}
