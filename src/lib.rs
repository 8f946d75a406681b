pub mod cli;
pub mod commands;
pub mod compose;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod project_identity;
pub mod traits;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run compose-diff CLI entrypoint.
pub fn run_cli() {
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    logging::init(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
