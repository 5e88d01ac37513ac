//! CLI entrypoint for Tool Relay
//!
//! Wires the layers together: config, the in-process dispatch engine
//! behind its credential gate, the keyword reasoner, and the agent loop.

use anyhow::{Result, bail};
use clap::Parser;
use relay_application::{AgentProgressNotifier, RunAgentUseCase};
use relay_domain::ToolCall;
use relay_infrastructure::{
    ApiKeyGate, ConfigLoader, InProcessDispatchClient, KeywordReasoner, default_engine,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tool-relay", version, about = "Run a natural-language request through the tool dispatch loop")]
struct Cli {
    /// The request to fulfil, e.g. "Add 7 and 12"
    request: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress per-attempt progress output
    #[arg(short, long)]
    quiet: bool,

    /// Override the configured retry budget
    #[arg(long)]
    max_retries: Option<u32>,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Prints each attempt as the loop runs
struct ConsoleProgress;

impl AgentProgressNotifier for ConsoleProgress {
    fn on_attempt(&self, attempt: u32, call: &ToolCall) {
        let args = serde_json::to_string(&call.args).unwrap_or_default();
        println!("[attempt {}] {} {}", attempt + 1, call.tool, args);
    }

    fn on_failure(&self, attempt: u32, message: &str) {
        println!("[attempt {}] failed: {}", attempt + 1, message);
    }

    fn on_success(&self, attempt: u32, value: &serde_json::Value) {
        println!("[attempt {}] succeeded: {}", attempt + 1, value);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.request.trim().is_empty() {
        bail!("Request must not be empty.");
    }

    let config = ConfigLoader::load(cli.config.as_ref())?;
    let max_retries = cli.max_retries.unwrap_or(config.max_retries);

    info!(request = %cli.request, max_retries, "starting tool relay");

    // === Dependency Injection ===
    let engine = Arc::new(default_engine());
    let gate = ApiKeyGate::new(&config.api_key);
    let client =
        Arc::new(InProcessDispatchClient::new(engine, gate).with_credential(&config.api_key));
    let reasoner = Arc::new(KeywordReasoner::new());

    let use_case = RunAgentUseCase::new(reasoner, client).with_max_retries(max_retries);

    let output = if cli.quiet {
        use_case.execute(&cli.request).await?
    } else {
        use_case
            .execute_with_progress(&cli.request, &ConsoleProgress)
            .await?
    };

    if !cli.quiet {
        println!();
        println!("Result after {} attempt(s):", output.attempts);
    }
    println!("{}", output.value);

    Ok(())
}
