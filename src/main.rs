//! aicommit - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use aicommit::error::WorkflowError;
use aicommit::{CompletionClient, Config, ConsoleOperator, GitCli, Outcome, run_commit};

/// Draft a commit message for the staged changes using an LLM.
#[derive(Parser, Debug)]
#[command(name = "aicommit")]
#[command(about = "Draft a Conventional Commits message for the staged changes")]
#[command(version)]
struct Cli {
    /// Model to request (overrides OPENAI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = dotenv::dotenv() {
        debug!("No .env loaded: {}", e);
    }

    match run(cli).await {
        Ok(outcome) => {
            debug!(?outcome, "Run finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initialize logging to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "aicommit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Apply command-line settings on top of the environment's.
fn apply_overrides(config: Config, cli: &Cli) -> Config {
    match &cli.model {
        Some(model) => config.with_model(model.as_str()),
        None => config,
    }
}

async fn run(cli: Cli) -> Result<Outcome, WorkflowError> {
    // The key is checked before git or the network is touched.
    let config = apply_overrides(Config::from_env()?, &cli);

    let client = CompletionClient::new(config);
    let git = GitCli::new();
    let mut operator = ConsoleOperator;

    run_commit(&git, &client, &mut operator).await
}
