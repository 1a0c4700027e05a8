// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_core::LevelFilter;

use super::ListOp;
use crate::{ChunkedListConfig, DisplayPreference, TracingConfig, WriterConfig};

#[derive(Debug, Parser)]
#[command(bin_name = "chunky")]
#[command(about = "🧱 Run a script of operations against a chunked list, printing each result")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[arg(
        long,
        short = 'c',
        value_name = "N",
        help = "Capacity of each segment, overrides the config file [default: 16]"
    )]
    pub chunk_capacity: Option<usize>,

    #[arg(
        long,
        value_name = "FILE",
        help = "JSON config file, eg: { \"chunk_capacity\": 8 }"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'l', value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[arg(
        long,
        value_name = "PATH",
        help = "Write log output to this file instead of stderr"
    )]
    pub log_file: Option<String>,

    #[arg(
        value_name = "OP",
        required = true,
        help = "add-front:ITEM | add-back:ITEM | add-index:INDEX:ITEM | remove-front | \
                remove-back | remove-index:INDEX | get-front | get-back | get-index:INDEX | \
                size | is-empty | dump | stats"
    )]
    pub ops: Vec<ListOp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CLIArg {
    /// The config file (or the defaults) with `--chunk-capacity` applied on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file can't be loaded.
    pub fn try_resolve_config(&self) -> miette::Result<ChunkedListConfig> {
        let mut config = match &self.config {
            Some(path) => ChunkedListConfig::try_load_from_json_file(path)?,
            None => ChunkedListConfig::default(),
        };
        if let Some(chunk_capacity) = self.chunk_capacity {
            config.chunk_capacity = chunk_capacity;
        }
        Ok(config)
    }

    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let writer_config = match (self.log_level, &self.log_file) {
            (LogLevel::Off, _) => WriterConfig::None,
            (_, Some(path)) => WriterConfig::File(path.clone()),
            (_, None) => WriterConfig::Display(DisplayPreference::Stderr),
        };
        TracingConfig {
            writer_config,
            level_filter: self.log_level.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_parse_args() {
        let cli_arg = CLIArg::try_parse_from([
            "chunky",
            "--chunk-capacity",
            "4",
            "--log-level",
            "debug",
            "add-back:a",
            "get-index:0",
            "dump",
        ])
        .unwrap();

        assert_eq!(cli_arg.chunk_capacity, Some(4));
        assert_eq!(cli_arg.log_level, LogLevel::Debug);
        assert_eq!(
            cli_arg.ops,
            vec![
                ListOp::AddBack("a".into()),
                ListOp::GetIndex(0),
                ListOp::Dump
            ]
        );
        assert_eq!(cli_arg.try_resolve_config().unwrap(), ChunkedListConfig::new(4));
        assert_eq!(
            cli_arg.tracing_config(),
            TracingConfig {
                writer_config: WriterConfig::Display(DisplayPreference::Stderr),
                level_filter: LevelFilter::DEBUG,
            }
        );
    }

    #[test]
    fn test_bad_op_is_rejected_by_clap() {
        assert!(CLIArg::try_parse_from(["chunky", "add-middle:a"]).is_err());
        assert!(CLIArg::try_parse_from(["chunky"]).is_err());
    }

    #[test]
    fn test_tracing_config_for_log_file_and_off() {
        let cli_arg =
            CLIArg::try_parse_from(["chunky", "--log-file", "chunky.log", "size"]).unwrap();
        assert_eq!(
            cli_arg.tracing_config().writer_config,
            WriterConfig::File("chunky.log".into())
        );
        assert_eq!(cli_arg.try_resolve_config().unwrap(), ChunkedListConfig::default());

        let cli_arg = CLIArg::try_parse_from(["chunky", "-l", "off", "size"]).unwrap();
        assert_eq!(cli_arg.tracing_config().writer_config, WriterConfig::None);
    }
}
