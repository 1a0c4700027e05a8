// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Installs the graphical [miette] report handler used by the `chunky` binary when
//! `main() -> miette::Result<_>` returns an error.
//!
//! The hook is lazy. It only runs when a report is actually rendered, so the width
//! lookup below happens at most once per failing run.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Used when the `COLUMNS` environment variable is missing or unparsable.
pub const DEFAULT_REPORT_WIDTH: usize = 100;

pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = std::env::var("COLUMNS")
                .ok()
                .and_then(|columns| columns.parse::<usize>().ok())
                .unwrap_or(DEFAULT_REPORT_WIDTH);
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
