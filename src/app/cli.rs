//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{AppError, InstallerConfig};

#[derive(Parser)]
#[command(name = "agent-bootstrap")]
#[command(version)]
#[command(
    about = "Install the agent: fetch its source, set up its workspace and dependencies",
    long_about = None
)]
struct Cli {
    /// Installation directory (default: `default_dir` from --config, else claude-agent)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,
    /// Start the daemon after install
    #[arg(long)]
    start: bool,
    /// Skip dependency installation
    #[arg(long)]
    no_deps: bool,
    /// TOML file overriding the built-in installer settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = run_install(cli) {
        eprintln!("[ERROR] {}", e);
        std::process::exit(1);
    }
}

fn run_install(cli: Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => InstallerConfig::load(path)?,
        None => InstallerConfig::default(),
    };
    let dir = cli.dir.unwrap_or_else(|| PathBuf::from(&config.default_dir));

    let options = crate::InstallOptions { dir, start: cli.start, skip_deps: cli.no_deps };
    crate::install(config, &options)?;
    Ok(())
}
