//! Configuration file loading for hdrgen.
//!
//! Discovers and loads `hdrgen.toml` from the root directory.
//! Merges config file settings with manifest values and CLI arguments
//! (CLI first, then manifest, then config file).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use hdrgen_types::PlatformDescriptor;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "hdrgen.toml";

/// Top-level configuration from hdrgen.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HdrgenConfig {
    /// Defaults for `hdrgen prefix`.
    pub prefix: PrefixConfig,

    /// Defaults for `hdrgen header`.
    pub header: HeaderConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrefixConfig {
    /// Platform used when neither the CLI nor the manifest names one.
    pub platform: Option<String>,

    /// Output path, relative to the root directory.
    pub output: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub platform: Option<String>,

    pub output: Option<Utf8PathBuf>,

    /// Quoted imports emitted after the platform import.
    pub imports: Vec<String>,

    /// Module imports emitted after the quoted imports.
    pub module_imports: Vec<String>,
}

/// Discover the hdrgen.toml config file.
///
/// Returns `None` if no config file is found.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

pub fn load_config(path: &Utf8Path) -> anyhow::Result<HdrgenConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<HdrgenConfig> {
    let config: HdrgenConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the root directory, or return default if not found.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<HdrgenConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(HdrgenConfig::default()),
    }
}

/// Settings for one `hdrgen prefix` run.
#[derive(Debug, Clone, Default)]
pub struct MergedPrefixConfig {
    pub platform: Option<PlatformDescriptor>,
    pub output: Option<Utf8PathBuf>,
}

/// Settings for one `hdrgen header` run.
#[derive(Debug, Clone, Default)]
pub struct MergedHeaderConfig {
    pub platform: Option<PlatformDescriptor>,
    pub output: Option<Utf8PathBuf>,
    pub imports: Vec<String>,
    pub module_imports: Vec<String>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: HdrgenConfig,
}

impl ConfigMerger {
    pub fn new(config: HdrgenConfig) -> Self {
        Self { config }
    }

    /// A CLI platform name replaces the manifest's descriptor entirely;
    /// the config file is only consulted when both are absent.
    pub fn merge_prefix_args(
        self,
        cli_platform: Option<&str>,
        manifest_platform: Option<PlatformDescriptor>,
        cli_output: Option<Utf8PathBuf>,
    ) -> MergedPrefixConfig {
        let platform = cli_platform
            .map(PlatformDescriptor::new)
            .or(manifest_platform)
            .or_else(|| self.config.prefix.platform.map(PlatformDescriptor::new));

        MergedPrefixConfig {
            platform,
            output: cli_output.or(self.config.prefix.output),
        }
    }

    /// CLI import lists extend the config file lists.
    pub fn merge_header_args(
        self,
        cli_platform: Option<&str>,
        cli_imports: &[String],
        cli_module_imports: &[String],
        cli_output: Option<Utf8PathBuf>,
    ) -> MergedHeaderConfig {
        let mut imports = self.config.header.imports;
        for import in cli_imports {
            if !imports.contains(import) {
                imports.push(import.clone());
            }
        }
        let mut module_imports = self.config.header.module_imports;
        for module in cli_module_imports {
            if !module_imports.contains(module) {
                module_imports.push(module.clone());
            }
        }

        MergedHeaderConfig {
            platform: cli_platform
                .map(PlatformDescriptor::new)
                .or_else(|| self.config.header.platform.map(PlatformDescriptor::new)),
            output: cli_output.or(self.config.header.output),
            imports,
            module_imports,
        }
    }
}
