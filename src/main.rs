use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mypy_baseline_core::{Config, Normalizer};

#[derive(Parser)]
#[command(
    name = "mypy-baseline",
    about = "Normalize mypy output from stdin into baseline lines on stdout"
)]
struct Cli {
    /// TOML file holding a [tool.mypy_baseline] table.
    #[arg(long, default_value = "pyproject.toml")]
    config: PathBuf,

    /// Path components to keep (overrides the config file).
    #[arg(long)]
    depth: Option<usize>,

    /// Keep line numbers instead of rendering 0.
    #[arg(long)]
    preserve_position: bool,

    /// Log at debug level to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let mut config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config = config.with_depth(depth);
    }
    if cli.preserve_position {
        config = config.with_preserve_position(true);
    }

    let normalizer = Normalizer::new(config).context("compiling ignore rules")?;

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::BufWriter::new(std::io::stdout().lock());
    let mut kept = 0usize;
    for line in stdin.lines() {
        let line = line.context("reading stdin")?;
        if let Some(clean) = normalizer.normalize_line(&line) {
            writeln!(stdout, "{clean}")?;
            kept += 1;
        }
    }
    stdout.flush()?;

    tracing::debug!(kept, "normalization finished");
    Ok(())
}
