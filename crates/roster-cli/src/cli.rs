//! CLI argument definitions for the roster provisioning tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rosterize",
    version,
    about = "Generate a shell script that provisions accounts from a CSV roster",
    long_about = "Read a CSV roster (lastname,firstname,group,extension), reconcile it\n\
                  against the system user and group databases, and write a shell script\n\
                  that creates the missing groups and accounts with unique usernames.\n\n\
                  The script goes to stdout and diagnostics go to stderr, so stdout can\n\
                  be piped straight to a file or a shell."
)]
pub struct Cli {
    /// Path to the roster CSV file.
    #[arg(value_name = "ROSTER_CSV")]
    pub roster: PathBuf,

    /// Write the generated script to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Read system users from this file instead of /etc/passwd.
    #[arg(long = "passwd-file", value_name = "PATH")]
    pub passwd_file: Option<PathBuf>,

    /// Read system groups from this file instead of /etc/group.
    #[arg(long = "group-file", value_name = "PATH")]
    pub group_file: Option<PathBuf>,

    /// Parse and resolve without emitting the script.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Show clear-text passwords in the stderr summary and in debug logs.
    #[arg(long = "log-secrets")]
    pub log_secrets: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
