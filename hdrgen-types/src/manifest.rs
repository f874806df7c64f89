//! Unit manifests: the on-disk form of a prefix header request.

use crate::platform::PlatformDescriptor;
use crate::unit::InputUnit;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform plus the ordered units contributing to one header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitManifest {
    /// Optional so a config file or CLI flag can supply it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformDescriptor>,
    #[serde(default)]
    pub units: Vec<InputUnit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    /// `.json` selects JSON; anything else is read as TOML.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
            _ => ManifestFormat::Toml,
        }
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
}

impl UnitManifest {
    pub fn parse(contents: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        let manifest = match format {
            ManifestFormat::Toml => toml::from_str(contents)?,
            ManifestFormat::Json => serde_json::from_str(contents)?,
        };
        Ok(manifest)
    }
}
