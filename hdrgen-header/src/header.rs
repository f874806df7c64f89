//! Base header generation: the platform import plus optional imports.

use crate::error::{HeaderError, HeaderResult};
use crate::render::{ImportRenderer, PlainImport};
use hdrgen_types::PlatformDescriptor;
use tracing::debug;

/// Generates the boilerplate shared by all header generators.
///
/// The platform import step is delegated to `R`.
#[derive(Debug, Clone)]
pub struct HeaderAssembler<R = PlainImport> {
    platform: PlatformDescriptor,
    renderer: R,
    imports: Vec<String>,
    module_imports: Vec<String>,
}

impl HeaderAssembler<PlainImport> {
    pub fn new(platform: PlatformDescriptor) -> Self {
        Self::with_renderer(platform, PlainImport)
    }
}

impl<R: ImportRenderer> HeaderAssembler<R> {
    pub fn with_renderer(platform: PlatformDescriptor, renderer: R) -> Self {
        Self {
            platform,
            renderer,
            imports: Vec::new(),
            module_imports: Vec::new(),
        }
    }

    /// Headers emitted as `#import "<name>"` after the platform import.
    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Modules emitted as `@import <name>;` after the quoted imports.
    pub fn with_module_imports<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.module_imports = modules.into_iter().map(Into::into).collect();
        self
    }

    pub fn platform(&self) -> &PlatformDescriptor {
        &self.platform
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn module_imports(&self) -> &[String] {
        &self.module_imports
    }

    /// The fixed umbrella import line for the platform.
    pub fn umbrella_import(&self) -> HeaderResult<&'static str> {
        self.platform
            .platform()
            .map(|p| p.umbrella_import())
            .ok_or_else(|| HeaderError::UnrecognizedPlatform {
                name: self.platform.name.clone(),
            })
    }

    pub fn generate_platform_import_header(&self) -> HeaderResult<String> {
        let line = self.umbrella_import()?;
        Ok(self.renderer.render_import(line))
    }

    pub fn generate(&self) -> HeaderResult<String> {
        let mut out = self.generate_platform_import_header()?;
        if self.imports.is_empty() && self.module_imports.is_empty() {
            return Ok(out);
        }

        debug!(
            platform = %self.platform,
            imports = self.imports.len(),
            module_imports = self.module_imports.len(),
            "appending header imports"
        );
        out.push('\n');
        for import in &self.imports {
            out.push_str(&format!("#import \"{}\"\n", import));
        }
        for module in &self.module_imports {
            out.push_str(&format!("@import {};\n", module));
        }
        Ok(out)
    }
}
