//! Command dispatcher
//!
//! Resolves settings and routes CLI commands to their handlers.

use crate::cli::args::{Cli, Command, GlobalFlags};
use crate::commands;
use crate::config::Settings;
use crate::error::Result;
use crate::ui;
use clap::CommandFactory;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    let settings = resolve_settings(&args.global)?;
    ui::init_colors(settings.color);

    match &args.command {
        Some(Command::List) => commands::list::run(&settings),

        Some(Command::Compare {
            from,
            to,
            arch,
            json_output,
            sequential,
        }) => commands::compare::run(
            commands::compare::CompareOptions {
                from: from.clone(),
                to: to.clone(),
                arch: arch.clone(),
                json_output: *json_output,
                sequential: *sequential,
            },
            &settings,
        ),

        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

fn resolve_settings(global: &GlobalFlags) -> Result<Settings> {
    let mut settings = Settings::load(global.settings.as_deref())?;
    apply_cli_overrides(&mut settings, global)?;
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

/// Command-line flags take precedence over file and environment settings
pub(crate) fn apply_cli_overrides(settings: &mut Settings, global: &GlobalFlags) -> Result<()> {
    if let Some(root) = &global.compose_root {
        settings.set("compose-root", root)?;
    }
    if let Some(timeout) = global.timeout {
        settings.set("timeout", &timeout.to_string())?;
    }
    if let Some(format) = global.format {
        settings.format = format;
    }
    if let Some(color) = global.color {
        settings.color = color;
    }
    Ok(())
}
