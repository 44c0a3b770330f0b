// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gsc-run smartctl`

use clap::Args;
use gsc_cmdex::SmartctlRunner;

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Args, Debug)]
pub struct SmartctlArgs {
    /// Device to query, e.g. /dev/sda
    pub device: String,

    /// Options placed before the device (replaces `smartctl_options` from the config)
    #[arg(long, allow_hyphen_values = true, value_name = "OPTIONS")]
    pub options: Option<String>,

    /// Extra smartctl arguments, after `--`
    #[arg(last = true, value_name = "ARGS")]
    pub extra: Vec<String>,
}

pub async fn handle(args: SmartctlArgs, config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let options = args.options.unwrap_or_else(|| config.smartctl_options.clone());
    let mut smartctl =
        SmartctlRunner::new(config.smartctl_binary.as_str(), super::runner(config)?).options(options);
    let result = smartctl.run(&args.device, &args.extra.join(" ")).await;
    super::finish(result, &smartctl.runner().executor().command_line(), format)
}
