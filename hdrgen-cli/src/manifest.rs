//! Manifest loading from disk.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use hdrgen_types::{ManifestFormat, UnitManifest};
use tracing::debug;

/// A parsed manifest plus the directory its relative unit paths resolve against.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: Utf8PathBuf,
    pub base_dir: Utf8PathBuf,
    pub manifest: UnitManifest,
}

pub fn load_manifest(path: &Utf8Path) -> anyhow::Result<LoadedManifest> {
    let contents = fs::read_to_string(path).with_context(|| format!("read manifest {}", path))?;
    let format = ManifestFormat::from_path(path);
    let manifest = UnitManifest::parse(&contents, format)
        .with_context(|| format!("parse manifest {}", path))?;

    let base_dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    debug!(
        path = path.as_str(),
        units = manifest.units.len(),
        "loaded manifest"
    );

    Ok(LoadedManifest {
        path: path.to_path_buf(),
        base_dir,
        manifest,
    })
}
