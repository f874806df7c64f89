//! Writing generated headers to disk.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Write `contents` to `path` unless the file already holds exactly those bytes.
/// Parent directories are created as needed. Existing files are compared as
/// raw bytes, so a stale file in any encoding is simply replaced.
pub fn write_if_changed(
    path: &Utf8Path,
    contents: impl AsRef<[u8]>,
) -> anyhow::Result<WriteOutcome> {
    let contents = contents.as_ref();
    if path.is_file() {
        let existing = fs::read(path).with_context(|| format!("read {}", path))?;
        if existing == contents {
            debug!(path = path.as_str(), "generated header unchanged");
            return Ok(WriteOutcome::Unchanged);
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path))?;
    info!("wrote {}", path);
    Ok(WriteOutcome::Written)
}
