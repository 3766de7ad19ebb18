use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised when an artwork file cannot be turned into an RGBA pixel buffer.
///
/// Asset failures are never papered over with placeholder art: whoever was
/// constructing the overlay view receives this error and the view does not
/// come up.
#[derive(Debug, Error)]
pub enum AssetDecodeError {
    #[error("reading asset {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("decoding asset {} as PNG", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetDecodeError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            AssetDecodeError::Read { path, .. } | AssetDecodeError::Decode { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("asset volume {} is not mounted", .0.display())]
    VolumeMissing(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading overlay config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing overlay config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("overlay opacity must be non-zero")]
    Opacity,
}
