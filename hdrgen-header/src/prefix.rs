//! Prefix header generation.
//!
//! Output layout:
//! 1. the platform import, guarded by `#ifdef __OBJC__`
//! 2. a blank line
//! 3. each distinct unit snippet, in first-seen order, newline-terminated
//! 4. the verbatim contents of each unit's prefix header file, in unit order
//!
//! Raw files are copied byte for byte, so the output is bytes rather than a
//! `String`; only the generated parts are guaranteed to be UTF-8.

use crate::error::{HeaderError, HeaderResult};
use crate::header::HeaderAssembler;
use crate::ports::{FsSourceReader, SourceReader};
use crate::render::ObjcGuard;
use hdrgen_types::{InputUnit, PlatformDescriptor};
use std::collections::HashSet;
use tracing::debug;

/// Assembles the prefix header for one generation pass.
#[derive(Debug, Clone)]
pub struct PrefixHeaderAssembler<S = FsSourceReader> {
    header: HeaderAssembler<ObjcGuard>,
    units: Vec<InputUnit>,
    reader: S,
}

impl<S: SourceReader> PrefixHeaderAssembler<S> {
    pub fn new(units: Vec<InputUnit>, platform: PlatformDescriptor, reader: S) -> Self {
        Self {
            header: HeaderAssembler::with_renderer(platform, ObjcGuard),
            units,
            reader,
        }
    }

    pub fn units(&self) -> &[InputUnit] {
        &self.units
    }

    pub fn platform(&self) -> &PlatformDescriptor {
        self.header.platform()
    }

    /// The umbrella import wrapped in the Objective-C guard.
    pub fn generate_platform_import_header(&self) -> HeaderResult<String> {
        self.header.generate_platform_import_header()
    }

    /// Build the full header. A read failure discards everything
    /// assembled so far.
    pub fn generate(&self) -> HeaderResult<Vec<u8>> {
        let mut out = self.header.generate()?.into_bytes();
        out.push(b'\n');

        for snippet in unique_snippets(&self.units) {
            out.extend_from_slice(snippet.as_bytes());
            out.push(b'\n');
        }

        for unit in &self.units {
            let Some(path) = unit.raw_file() else {
                continue;
            };
            debug!(
                unit = unit.name.as_str(),
                path = path.as_str(),
                "appending prefix header file"
            );
            let contents = self
                .reader
                .read(path)
                .map_err(|source| HeaderError::ReadRawFile {
                    unit: unit.name.clone(),
                    path: path.to_path_buf(),
                    source,
                })?;
            out.extend_from_slice(&contents);
        }

        Ok(out)
    }
}

/// Present unit snippets with exact duplicates removed, in first-seen order.
pub fn unique_snippets(units: &[InputUnit]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for unit in units {
        let Some(snippet) = unit.snippet() else {
            continue;
        };
        if seen.insert(snippet) {
            out.push(snippet);
        } else {
            debug!(
                unit = unit.name.as_str(),
                "skipping duplicate prefix header contents"
            );
        }
    }
    out
}
