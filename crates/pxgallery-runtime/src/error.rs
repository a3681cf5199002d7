use std::fmt;
use std::path::PathBuf;

/// Result type for pxgallery-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Directory traversal failed
    WalkDir(walkdir::Error),

    /// Image decoding or encoding failed
    Image(image::ImageError),

    /// Configuration error
    Config(String),

    /// Source directory does not exist or is not a directory
    SourceNotFound(PathBuf),

    /// Source directory holds no timestamped photos
    NoPhotos(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
            Error::Image(err) => write!(f, "Image error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::SourceNotFound(path) => {
                write!(f, "Photos directory not found at '{}'", path.display())
            }
            Error::NoPhotos(path) => write!(
                f,
                "No timestamped photos found in '{}' to generate a gallery",
                path.display()
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::Image(err) => Some(err),
            Error::Config(_) | Error::SourceNotFound(_) | Error::NoPhotos(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
