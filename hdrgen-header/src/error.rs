//! Error types for hdrgen-header.
//!
//! Two classes exist:
//! - Configuration failures (exit code 2): the platform is not recognized
//! - I/O failures (exit code 1): a unit's raw prefix header file cannot be read

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeaderError {
    /// The platform name is outside the recognized set.
    #[error("unrecognized platform `{name}`")]
    UnrecognizedPlatform { name: String },

    /// A unit's prefix header file could not be read.
    #[error("read prefix header of `{unit}` at {path}")]
    ReadRawFile {
        unit: String,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HeaderError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, HeaderError::UnrecognizedPlatform { .. })
    }

    /// The offending file, for read failures.
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            HeaderError::ReadRawFile { path, .. } => Some(path),
            HeaderError::UnrecognizedPlatform { .. } => None,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            HeaderError::UnrecognizedPlatform { .. } => 2,
            HeaderError::ReadRawFile { .. } => 1,
        }
    }
}

pub type HeaderResult<T> = Result<T, HeaderError>;
