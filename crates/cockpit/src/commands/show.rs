use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use cockpit_core::profile::ChromeMode;

pub fn execute(name: &str) {
    let profile = super::load_profile(name);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Title"),
            Cell::new("Class"),
            Cell::new("Exe"),
            Cell::new("X").set_alignment(CellAlignment::Right),
            Cell::new("Y").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
            Cell::new("Chrome"),
            Cell::new("Overlay"),
        ]);

    for window in &profile.windows {
        let chrome = match window.chrome {
            ChromeMode::Keep => "keep",
            ChromeMode::Strip => "strip",
        };
        let overlay = match &window.overlay {
            None => "-".to_string(),
            Some(spec) => match spec.pad {
                Some(pad) => format!("pad {}/{}/{}/{}", pad.left, pad.top, pad.right, pad.bottom),
                None => "default pad".to_string(),
            },
        };

        table.add_row(vec![
            Cell::new(&window.title),
            Cell::new(&window.class),
            Cell::new(&window.exe),
            Cell::new(window.rect.x).set_alignment(CellAlignment::Right),
            Cell::new(window.rect.y).set_alignment(CellAlignment::Right),
            Cell::new(window.rect.width).set_alignment(CellAlignment::Right),
            Cell::new(window.rect.height).set_alignment(CellAlignment::Right),
            Cell::new(chrome),
            Cell::new(overlay),
        ]);
    }

    println!("{table}");
    println!("\n{} record(s)", profile.windows.len());
}
