//! `analyze` and `suggest` commands.
//!
//! Both read task JSON, call the scoring API through the core dashboard and
//! print the ranked cards. Errors go to stderr; the exit status tells
//! whether anything was rendered.

use clap::Args;
use smarttask_core::{
    ActionOutcome, Config, Dashboard, Endpoint, OutputFormat, Strategy, TaskApiClient, View,
};
use std::io::Read;
use std::path::PathBuf;

use crate::terminal::TerminalView;

#[derive(Args, Debug)]
pub struct TaskArgs {
    /// File with a JSON array of tasks or {"tasks": [...]}; "-" reads stdin
    pub file: Option<PathBuf>,
    /// Inline task JSON instead of a file
    #[arg(long, conflicts_with = "file")]
    pub tasks: Option<String>,
    /// Ranking strategy: fast, impact, deadline or balanced
    #[arg(short, long)]
    pub strategy: Option<String>,
    /// Scoring server root, e.g. http://127.0.0.1:8000
    #[arg(long)]
    pub base_url: Option<String>,
    /// Print cards as JSON
    #[arg(long)]
    pub json: bool,
}

impl TaskArgs {
    fn read_input(&self) -> std::io::Result<String> {
        if let Some(tasks) = &self.tasks {
            return Ok(tasks.clone());
        }
        match &self.file {
            Some(path) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
            Some(path) => std::fs::read_to_string(path),
            None => Ok(String::new()),
        }
    }

    fn strategy(&self, config: &Config) -> Strategy {
        self.strategy
            .as_deref()
            .map(Strategy::from_name)
            .unwrap_or(config.display.strategy)
    }

    fn format(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.display.format
        }
    }
}

/// Run one action against the scoring API.
pub fn run(
    endpoint: Endpoint,
    args: TaskArgs,
    config: &Config,
) -> Result<ActionOutcome, Box<dyn std::error::Error>> {
    let raw = args.read_input()?;
    let base_url = args.base_url.as_deref().unwrap_or(&config.api.base_url);
    let client = TaskApiClient::with_timeout(base_url, config.timeout())?;
    let dashboard = Dashboard::new(client);
    let view = TerminalView::new(args.strategy(config), args.format(config));

    tracing::debug!(endpoint = endpoint.as_str(), base_url, strategy = %view.strategy(), "running action");

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(async {
        match endpoint {
            Endpoint::Analyze => dashboard.analyze(&raw, &view).await,
            Endpoint::Suggest => dashboard.suggest(&raw, &view).await,
        }
    });
    Ok(outcome)
}
