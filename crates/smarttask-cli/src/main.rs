use clap::{CommandFactory, Parser, Subcommand};
use smarttask_core::{Config, Endpoint};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "smarttask", version, about = "Smart Task Analyzer CLI")]
struct Cli {
    /// Config file to use instead of ~/.config/smarttask/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score tasks and show them ranked
    Analyze(commands::tasks::TaskArgs),
    /// Ask for suggested tasks, optionally seeded with your own
    Suggest(commands::tasks::TaskArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn init_tracing(level: &str, verbose: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ if verbose => EnvFilter::new("debug"),
        _ => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_path(cli_path: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match cli_path {
        Some(path) => Ok(path),
        None => Ok(Config::path()?),
    }
}

/// Returns the process exit code.
fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let (endpoint, args) = match cli.command {
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())?;
            return Ok(0);
        }
        Commands::Config { action } => {
            commands::config::run(action, &config_path(cli.config)?)?;
            return Ok(0);
        }
        Commands::Analyze(args) => (Endpoint::Analyze, args),
        Commands::Suggest(args) => (Endpoint::Suggest, args),
    };

    let path = config_path(cli.config)?;
    let config = Config::load_from(&path)?;
    init_tracing(&config.logging.level, cli.verbose);
    tracing::debug!(config = %path.display(), "loaded configuration");

    let outcome = commands::tasks::run(endpoint, args, &config)?;
    Ok(if outcome.is_rendered() { 0 } else { 1 })
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
