//! stylecomb CLI
//!
//! Normalizes stylesheet formatting in place, or checks it in lint mode.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stylecomb_core::{Config, Session};

/// Bundled fallback configuration, used when no dotfile is found.
const DEFAULT_CONFIG: &str = include_str!("../config/default.json");

/// stylecomb - stylesheet formatting normalizer
#[derive(Parser)]
#[command(name = "stylecomb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File or directory paths to process
    paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report files that would change without rewriting them
    #[arg(short, long)]
    lint: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.paths.is_empty() {
        eprintln!("No input paths specified");
        return ExitCode::from(1);
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let mut config = load_config(cli.config.as_deref())?;
    config.verbose = cli.verbose || config.verbose;
    config.lint = cli.lint;
    let verbose = config.verbose;

    let session = Session::new(&config).into_diagnostic()?;
    let started = Instant::now();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .into_diagnostic()?
        .block_on(session.run(&cli.paths))
        .into_diagnostic()?;

    if verbose {
        println!();
        println!("{} processed", count(session.processed(), "file"));
        println!("{} fixed", count(session.changed(), "file"));
        println!("spent: {:?}", started.elapsed());
    }

    Ok(session.succeeded())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(miette::miette!(
                "Configuration file {} was not found.",
                path.display()
            ));
        }
        return Config::from_file(path).into_diagnostic();
    }

    if let Some(path) = discover_config() {
        info!("Using config: {}", path.display());
        return Config::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using bundled defaults");
    Config::from_json(DEFAULT_CONFIG).into_diagnostic()
}

/// Looks for a dotfile config from the current directory upward, stopping
/// at the home directory (or the filesystem root, whichever comes first).
fn discover_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let home = dirs::home_dir();
    let mut dir = cwd.as_path();
    loop {
        let candidate = dir.join(Config::FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if home.as_deref() == Some(dir) {
            return None;
        }
        dir = dir.parent()?;
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}
