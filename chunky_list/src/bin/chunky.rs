// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_chunky_list::{CLIArg, ChunkedList, run_script,
                       setup_default_miette_global_report_handler};

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    cli_arg.tracing_config().install_global()?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Start chunky", cli_arg = ?cli_arg);

    let config = cli_arg.try_resolve_config()?;
    let mut list = ChunkedList::try_from_config(config)?;

    for line in run_script(&mut list, &cli_arg.ops) {
        println!("{line}");
    }

    tracing::debug!(message = "Stop chunky", segment_count = list.segment_count());

    Ok(())
}
