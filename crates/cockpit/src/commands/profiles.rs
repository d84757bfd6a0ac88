use std::time::SystemTime;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use cockpit_core::profile;

pub fn execute() {
    let summaries = profile::list_profiles();

    if summaries.is_empty() {
        println!("No saved profiles. Run 'cockpit capture <name>' to create one.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Profile"),
            Cell::new("Windows").set_alignment(CellAlignment::Right),
            Cell::new("Modified"),
        ]);

    for summary in &summaries {
        table.add_row(vec![
            Cell::new(&summary.name),
            Cell::new(summary.windows).set_alignment(CellAlignment::Right),
            Cell::new(age(summary.modified)),
        ]);
    }

    println!("{table}");
}

/// Formats a modification time as a rough age ("3h ago").
fn age(modified: Option<SystemTime>) -> String {
    let Some(time) = modified else {
        return "-".into();
    };
    let Ok(elapsed) = time.elapsed() else {
        return "-".into();
    };

    let secs = elapsed.as_secs();
    if secs < 60 {
        "just now".into()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}
