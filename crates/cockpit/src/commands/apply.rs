use clap::Args;

use cockpit_core::plan::ApplyOutcome;

/// Arguments for the `apply` subcommand.
#[derive(Args)]
pub struct ApplyArgs {
    /// Profile name
    name: String,
    /// Match and report without moving anything
    #[arg(long)]
    dry_run: bool,
    /// Keep running: maintain overlays and re-assert drifted windows
    /// until Ctrl+C
    #[arg(long)]
    hold: bool,
    /// Skip border overlays in hold mode
    #[arg(long)]
    no_overlay: bool,
    /// Restore the original window styles when the hold loop exits
    #[arg(long)]
    undo_on_exit: bool,
}

pub fn execute(args: &ApplyArgs) {
    cockpit_windows::dpi::enable_dpi_awareness();

    let config = cockpit_core::config::load();
    cockpit_core::log::init(&config.logging);

    let profile = super::load_profile(&args.name);
    if profile.windows.is_empty() {
        eprintln!("Profile \"{}\" has no windows.", args.name);
        std::process::exit(1);
    }

    let report = match cockpit_windows::apply::apply_profile(&profile, &config, args.dry_run) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for (title, outcome) in &report.outcomes {
        match outcome {
            ApplyOutcome::Placed { attempts: 0 } => println!("  match    {title}"),
            ApplyOutcome::Placed { attempts } => {
                println!("  placed   {title} ({attempts} attempt(s))");
            }
            ApplyOutcome::Drifted { got } => {
                println!(
                    "  drifted  {title} (stuck at {},{} {}x{})",
                    got.x, got.y, got.width, got.height
                );
            }
            ApplyOutcome::NotFound => println!("  missing  {title}"),
        }
    }
    println!("\n{}", report.summary());

    if args.hold && !args.dry_run {
        println!("Holding layout; press Ctrl+C to stop.");
        if let Err(e) =
            cockpit_windows::apply::run_hold(&profile, &config, !args.no_overlay, args.undo_on_exit)
        {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if !report.all_placed() {
        std::process::exit(1);
    }
}
