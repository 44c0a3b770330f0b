// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor tests against real child processes

mod errors;
mod lifecycle;
mod output;
mod stop;

use super::*;
use crate::reactor::TokioReactor;
use gsc_core::Severity;

/// Upper bound on how long any test child may take to exit.
const EXIT_LIMIT: Duration = Duration::from_secs(10);

fn reactor() -> Arc<dyn Reactor> {
    Arc::new(TokioReactor::try_current().unwrap())
}

fn executor() -> CommandExecutor {
    CommandExecutor::new(reactor())
}

fn executor_with(config: ExecutorConfig) -> CommandExecutor {
    CommandExecutor::with_config(reactor(), config)
}

async fn wait_exit<C: Clock>(exec: &CommandExecutor<C>) {
    tokio::time::timeout(EXIT_LIMIT, exec.wait_exited())
        .await
        .expect("child did not exit in time");
}

/// Execute, wait for the exit and clean up.
async fn run<C: Clock>(exec: &CommandExecutor<C>, command: &str, arguments: &str) -> ExitOutcome {
    exec.execute(command, arguments).unwrap();
    wait_exit(exec).await;
    exec.stopped_cleanup().unwrap()
}

/// Kill whatever is running and reset the executor.
async fn kill<C: Clock>(exec: &CommandExecutor<C>) {
    exec.try_stop(Signal::SIGKILL).unwrap();
    wait_exit(exec).await;
    exec.stopped_cleanup().unwrap();
}

fn severities(records: &[ErrorRecord]) -> Vec<(Severity, &'static str)> {
    records.iter().map(|r| (r.severity, r.source_tag())).collect()
}
