mod report;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use navcheck::{check_project, Config};

#[derive(Parser)]
#[command(name = "navcheck")]
#[command(version, about = "Fail the build when a navigation menu links to a page that does not exist", long_about = None)]
struct Cli {
    /// Project root the menu file and pages directory are resolved against
    #[arg(short, long, default_value = ".")]
    project: PathBuf,

    /// Configuration file (default: <project>/navcheck.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every compiled route and resolved link
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the check and prints the report; `Ok(false)` means at least one link is dangling
fn run(cli: &Cli) -> Result<bool> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.project.join(navcheck::config::CONFIG_FILE));
    let config = Config::load(&config_path)?;

    let report = check_project(&cli.project, &config.check)
        .with_context(|| format!("Menu check failed in {:?}", cli.project))?;

    report::print(&report)?;
    Ok(report.is_clean())
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {:#}", "✗".red().bold(), err);
            ExitCode::from(2)
        }
    }
}
