use crate::config::{ColorMode, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "compose-diff",
    about = "Fedora Rawhide compose differ",
    long_about = "Compare the RPM package manifests of two Fedora Rawhide composes",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output (debug logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode (no progress messages)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Compose root: Koji index URL or local mirror directory
    #[arg(long, value_name = "URL|DIR", global = true)]
    pub compose_root: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available compose versions
    List,

    /// Compare compose versions
    #[command(
        long_about = "Compare compose versions between VERSION-FROM and VERSION-TO. If VERSION-TO is not specified, \"latest\" is used."
    )]
    Compare {
        /// VERSION-FROM, e.g. 20250626.n.0
        #[arg(value_name = "VERSION-FROM")]
        from: String,

        /// VERSION-TO (default: latest)
        #[arg(value_name = "VERSION-TO", default_value = "latest")]
        to: String,

        /// Requested CPU architecture
        #[arg(short = 'a', long, value_parser = ["x86_64", "aarch64"])]
        arch: Option<String>,

        /// Machine readable output in JSON format (same as --format json)
        #[arg(short = 'j', long)]
        json_output: bool,

        /// Fetch the two manifests one after the other
        #[arg(long)]
        sequential: bool,
    },
}
