use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use hdrgen_cli::config::{self, ConfigMerger};
use hdrgen_cli::manifest::load_manifest;
use hdrgen_cli::output::{WriteOutcome, write_if_changed};
use hdrgen_header::{FsSourceReader, HeaderAssembler, HeaderError, PrefixHeaderAssembler};
use hdrgen_types::Platform;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "hdrgen",
    version,
    about = "Assembles platform and prefix headers for generated build targets."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a prefix header from a unit manifest.
    Prefix(PrefixArgs),
    /// Generate a plain platform header.
    Header(HeaderArgs),
    /// List recognized platforms and their umbrella imports.
    Platforms,
}

#[derive(Debug, Parser)]
struct PrefixArgs {
    /// Directory holding hdrgen.toml; relative output paths resolve here (default: current directory).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Unit manifest (TOML, or JSON when the extension is .json).
    #[arg(long)]
    manifest: Utf8PathBuf,

    /// Platform name, overriding the manifest and config file.
    #[arg(long)]
    platform: Option<String>,

    /// Output file. Written only when its contents change.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Print to stdout even if an output file is configured.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

#[derive(Debug, Parser)]
struct HeaderArgs {
    /// Directory holding hdrgen.toml (default: current directory).
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Platform name, overriding the config file.
    #[arg(long)]
    platform: Option<String>,

    /// Quoted header import to add (repeatable).
    #[arg(long = "import")]
    imports: Vec<String>,

    /// Module import to add (repeatable).
    #[arg(long = "module-import")]
    module_imports: Vec<String>,

    /// Output file. Written only when its contents change.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Print to stdout even if an output file is configured.
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(exit_code(&e));
    }
    ExitCode::from(0)
}

fn exit_code(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<HeaderError>()
        .map(HeaderError::exit_code)
        .unwrap_or(1)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Prefix(args) => cmd_prefix(args),
        Command::Header(args) => cmd_header(args),
        Command::Platforms => cmd_platforms(),
    }
}

fn cmd_prefix(args: PrefixArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(&args.root).context("load hdrgen.toml config")?;
    let loaded = load_manifest(&args.manifest)?;
    let merged = ConfigMerger::new(file_config).merge_prefix_args(
        args.platform.as_deref(),
        loaded.manifest.platform.clone(),
        args.out,
    );
    debug!(
        "merged config: platform={:?}, output={:?}",
        merged.platform, merged.output
    );

    let platform = merged.platform.with_context(|| {
        format!(
            "no platform for {}; pass --platform, set `platform` in the manifest, \
             or [prefix].platform in {}",
            loaded.path,
            config::CONFIG_FILE_NAME
        )
    })?;

    let assembler = PrefixHeaderAssembler::new(
        loaded.manifest.units,
        platform,
        FsSourceReader::new(loaded.base_dir),
    );
    let contents = assembler
        .generate()
        .with_context(|| format!("generate prefix header from {}", loaded.path))?;

    emit(&args.root, merged.output.as_deref(), args.stdout, &contents)
}

fn cmd_header(args: HeaderArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(&args.root).context("load hdrgen.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_header_args(
        args.platform.as_deref(),
        &args.imports,
        &args.module_imports,
        args.out,
    );
    debug!(
        "merged config: platform={:?}, imports={:?}, module_imports={:?}",
        merged.platform, merged.imports, merged.module_imports
    );

    let platform = merged.platform.with_context(|| {
        format!(
            "no platform given; pass --platform or set [header].platform in {}",
            config::CONFIG_FILE_NAME
        )
    })?;

    let contents = HeaderAssembler::new(platform)
        .with_imports(merged.imports)
        .with_module_imports(merged.module_imports)
        .generate()
        .context("generate header")?;

    emit(
        &args.root,
        merged.output.as_deref(),
        args.stdout,
        contents.as_bytes(),
    )
}

fn cmd_platforms() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for platform in Platform::ALL {
        writeln!(stdout, "{:<10} {}", platform.name(), platform.umbrella_import())
            .context("write stdout")?;
    }
    Ok(())
}

fn emit(
    root: &Utf8Path,
    output: Option<&Utf8Path>,
    force_stdout: bool,
    contents: &[u8],
) -> anyhow::Result<()> {
    let target = match output {
        Some(path) if !force_stdout => path,
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents)
                .context("write stdout")?;
            return Ok(());
        }
    };

    let path = if target.is_absolute() {
        target.to_path_buf()
    } else {
        root.join(target)
    };
    match write_if_changed(&path, contents)? {
        WriteOutcome::Written => {}
        WriteOutcome::Unchanged => info!("{} is up to date", path),
    }
    Ok(())
}
