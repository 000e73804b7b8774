mod commands;
mod core;
mod ui;

use clap::{Parser, Subcommand};

use crate::commands::doctor::DoctorCommand;
use crate::commands::platforms::PlatformsCommand;
use crate::commands::resolve::ResolveCommand;
use crate::commands::shell::ShellCommand;
use crate::core::error::CliError;

#[derive(Parser)]
#[command(name = "shellpin")]
#[command(about = "Pin and enter reproducible development shells", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter the pinned development shell (the default)
    Shell(ShellCommand),
    /// Print the resolved environment without entering it
    Resolve(ResolveCommand),
    /// List the supported platforms
    Platforms(PlatformsCommand),
    /// Check that every required executable is materialized
    Doctor(DoctorCommand),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Shell(cmd)) => cmd.execute(),
        Some(Commands::Resolve(cmd)) => cmd.execute(),
        Some(Commands::Platforms(cmd)) => cmd.execute(),
        Some(Commands::Doctor(cmd)) => cmd.execute(),
        // `shellpin` with no subcommand is the implicit "enter shell" entry point.
        None => ShellCommand::default().execute(),
    };

    if let Err(err) = result {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) => cli_err.render(),
            None => eprintln!("\n{} {err:#}", console::style("Error:").red().bold()),
        }
        std::process::exit(1);
    }
}
