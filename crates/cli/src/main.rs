// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gsc-run: run a command (or smartctl) through the GSmartControl executor.

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::exec::ExecArgs;
use commands::smartctl::SmartctlArgs;
use config::Config;
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "gsc-run", version, about = "Run a command and report its output and exit status", styles = color::styles())]
struct Cli {
    /// Config file (default: $GSC_CONFIG, then $XDG_CONFIG_HOME/gsmartcontrol/gsc-run.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Send SIGTERM after this many milliseconds (0 disables)
    #[arg(long, global = true, value_name = "MS")]
    terminate_ms: Option<u64>,

    /// Send SIGKILL after this many milliseconds (0 disables)
    #[arg(long, global = true, value_name = "MS")]
    kill_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an arbitrary command
    Exec(ExecArgs),
    /// Run the configured smartctl binary against a device
    Smartctl(SmartctlArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("gsc-run: {err:#}");
        std::process::exit(exit_error::START_FAILURE);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.terminate_ms, cli.kill_ms)?;
    tracing::debug!(?config, "configuration");

    match cli.command {
        Commands::Exec(args) => commands::exec::handle(args, &config, cli.format).await,
        Commands::Smartctl(args) => commands::smartctl::handle(args, &config, cli.format).await,
    }
}

/// Logs go to stderr so captured child output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
