use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

pub fn execute() {
    cockpit_windows::dpi::enable_dpi_awareness();

    let infos = match cockpit_windows::window_infos() {
        Ok(infos) => infos,
        Err(e) => {
            eprintln!("Error: failed to enumerate windows: {e}");
            std::process::exit(1);
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("Class"),
            Cell::new("Exe"),
            Cell::new("X").set_alignment(CellAlignment::Right),
            Cell::new("Y").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    let mut count = 0;
    for info in &infos {
        if info.title.is_empty() {
            continue;
        }

        table.add_row(vec![
            Cell::new(format!("0x{:X}", info.handle)),
            Cell::new(&info.title),
            Cell::new(&info.class),
            Cell::new(&info.exe),
            Cell::new(info.rect.x).set_alignment(CellAlignment::Right),
            Cell::new(info.rect.y).set_alignment(CellAlignment::Right),
            Cell::new(info.rect.width).set_alignment(CellAlignment::Right),
            Cell::new(info.rect.height).set_alignment(CellAlignment::Right),
        ]);
        count += 1;
    }

    println!("{table}");
    println!("\n{count} windows found");

    if let Ok(work_area) = cockpit_windows::monitor::primary_work_area() {
        println!(
            "Primary work area: {}x{} at ({},{})",
            work_area.width, work_area.height, work_area.x, work_area.y
        );
    }
}
