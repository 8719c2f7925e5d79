//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::api;
use crate::domain::{AppError, RepositoryIdentity, paths};

#[derive(Parser)]
#[command(name = "ezcat")]
#[command(version)]
#[command(
    about = "Configure a data catalog: inject search parameters and rewrite README links",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Repository root (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Hosting repository as owner/repository
    #[arg(short, long, global = true, env = "GITHUB_REPOSITORY", value_name = "OWNER/REPO")]
    repository: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject config.txt parameters into catalog scripts and rewrite README links
    #[clap(visible_alias = "c")]
    Configure {
        /// Parameter file, relative to the repository root
        #[arg(short, long, default_value = paths::CONFIG_FILE)]
        config: PathBuf,
    },
    /// Rewrite README links only
    #[clap(visible_alias = "l")]
    Links,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let result = execute(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    // Resolved before any file is touched so a bad identity cannot leave partial edits.
    let repository = RepositoryIdentity::from_optional(cli.repository.as_deref())?;
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Configure { config: PathBuf::from(paths::CONFIG_FILE) })
    {
        Commands::Configure { config } => run_configure(root, &config, &repository),
        Commands::Links => run_links(root, &repository),
    }
}

fn run_configure(
    root: PathBuf,
    config: &std::path::Path,
    repository: &RepositoryIdentity,
) -> Result<(), AppError> {
    let outcome = api::configure_at(root, config, repository)?;

    for target in &outcome.targets {
        let status = if target.rewritten { "updated" } else { "unchanged" };
        println!(
            "  {} ({}): {} parameter(s) applied, {}",
            target.target.path(),
            target.target,
            target.applied.len(),
            status
        );
    }
    print_links(&outcome.links);
    println!("✅ Configured catalog for {}", outcome.links.repository);
    Ok(())
}

fn run_links(root: PathBuf, repository: &RepositoryIdentity) -> Result<(), AppError> {
    let outcome = api::links_at(root, repository)?;
    print_links(&outcome);
    println!("✅ Rewrote README links for {}", outcome.repository);
    Ok(())
}

fn print_links(outcome: &api::LinksOutcome) {
    println!("  {}: {} demo link(s) -> {}", paths::README, outcome.demo_replacements, outcome.demo_url);
    println!(
        "  {}: {} workflow link(s) -> {}",
        paths::README,
        outcome.workflow_replacements,
        outcome.workflow_url
    );
}
