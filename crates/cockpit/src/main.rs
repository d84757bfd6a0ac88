mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cockpit",
    version,
    about = "Capture and re-apply window layouts for multi-monitor sim cockpits"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List candidate windows on the desktop
    List,
    /// Capture selected windows into a named layout profile
    Capture(commands::capture::CaptureArgs),
    /// List saved layout profiles
    Profiles,
    /// Show the records stored in a profile
    Show {
        /// Profile name
        name: String,
    },
    /// Apply a saved profile to the live desktop
    Apply(commands::apply::ApplyArgs),
    /// Restore the original window styles recorded in a profile
    Undo {
        /// Profile name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List => commands::list::execute(),
        Commands::Capture(args) => commands::capture::execute(&args),
        Commands::Profiles => commands::profiles::execute(),
        Commands::Show { name } => commands::show::execute(&name),
        Commands::Apply(args) => commands::apply::execute(&args),
        Commands::Undo { name } => commands::undo::execute(&name),
    }
}
