// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gsc-run exec`

use clap::Args;

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Quote each argument so it reaches the child verbatim instead of being
    /// split again.
    #[arg(long)]
    pub literal: bool,

    /// Command to run, followed by its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl ExecArgs {
    /// Program and argument string handed to the executor.
    pub fn command_line(&self) -> (String, String) {
        let (program, rest) = match self.command.split_first() {
            Some((program, rest)) => (program.clone(), rest),
            None => (String::new(), &[][..]),
        };
        let arguments = if self.literal { gsc_shell::join(rest) } else { rest.join(" ") };
        (program, arguments)
    }
}

pub async fn handle(args: ExecArgs, config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let (program, arguments) = args.command_line();
    let mut runner = super::runner(config)?;
    let result = runner.run(&program, &arguments).await;
    super::finish(result, &runner.executor().command_line(), format)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
