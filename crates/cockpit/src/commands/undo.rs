use cockpit_core::plan::ApplyOutcome;

pub fn execute(name: &str) {
    cockpit_windows::dpi::enable_dpi_awareness();

    let config = cockpit_core::config::load();
    cockpit_core::log::init(&config.logging);

    let profile = super::load_profile(name);

    let report = match cockpit_windows::apply::undo_profile(&profile) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for (title, outcome) in &report.outcomes {
        match outcome {
            ApplyOutcome::Placed { .. } => println!("  restored {title}"),
            _ => println!("  missing  {title}"),
        }
    }
    println!("\n{} of {} restored", report.placed(), report.outcomes.len());
}
