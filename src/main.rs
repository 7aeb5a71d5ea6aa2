//! Robotsmith main entry point
//!
//! Command-line interface: loads a TOML build manifest, validates the
//! crawling policy, and writes the rendered `robots.txt` into the build
//! output directory.

use anyhow::Context;
use clap::Parser;
use robotsmith::config::load_manifest;
use robotsmith::generate;
use robotsmith::output::write_robots_txt;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Robotsmith: deterministic robots.txt generation
///
/// Robotsmith validates a site's crawling policy manifest and serializes it
/// into `robots.txt`. A manifest that fails validation skips generation with
/// a warning rather than failing the build.
#[derive(Parser, Debug)]
#[command(name = "robotsmith")]
#[command(version = "1.0.0")]
#[command(about = "Deterministic robots.txt generation", long_about = None)]
struct Cli {
    /// Path to the TOML build manifest
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// Build output directory to write robots.txt into
    #[arg(short, long, value_name = "DIR", required_unless_present_any = ["check", "stdout"])]
    out_dir: Option<PathBuf>,

    /// Validate the manifest and report what would be generated, writing nothing
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the rendered body to stdout instead of writing a file
    #[arg(long, conflicts_with = "check")]
    stdout: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading manifest from: {}", cli.manifest.display());
    let manifest = load_manifest(&cli.manifest)
        .with_context(|| format!("failed to load manifest {}", cli.manifest.display()))?;

    let body = match generate(manifest.site.as_deref(), &manifest.options) {
        Ok(body) => body,
        Err(rejection) => {
            // Skip semantics: the build goes on without a robots.txt.
            tracing::warn!("Skipped creating 'robots.txt': {}", rejection);
            return Ok(());
        }
    };

    if cli.check {
        tracing::info!("Manifest is valid; would generate {} bytes", body.len());
        for line in body.lines() {
            tracing::debug!("{}", line);
        }
        return Ok(());
    }

    if cli.stdout {
        print!("{}", body);
        return Ok(());
    }

    // Clap guarantees out_dir is present when neither --check nor --stdout is.
    let out_dir = cli.out_dir.as_deref().context("--out-dir is required")?;

    match write_robots_txt(out_dir, &body) {
        Ok(path) => {
            tracing::info!("'robots.txt' created at: {}", path.display());
            Ok(())
        }
        Err(e) => {
            // Validation passed; only the write failed. Keep the two
            // outcomes distinguishable in the output.
            tracing::error!("Failed to create 'robots.txt': {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robotsmith=info,warn"),
            1 => EnvFilter::new("robotsmith=debug,info"),
            2 => EnvFilter::new("robotsmith=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
