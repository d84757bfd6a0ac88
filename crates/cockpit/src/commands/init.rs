use cockpit_core::config;

/// Creates the default configuration at `~/.config/cockpit/`.
///
/// Generates `config.toml` with comments explaining every option and
/// creates the `layouts/` directory. Existing files are not overwritten.
pub fn execute() {
    let Some(dir) = config::config_dir() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error: could not create {}: {e}", dir.display());
        std::process::exit(1);
    }

    write_if_missing(
        &dir.join("config.toml"),
        &config::template::generate_config(),
    );

    if let Some(layouts) = config::layouts_dir() {
        match std::fs::create_dir_all(&layouts) {
            Ok(()) => println!("Layouts go in {}", layouts.display()),
            Err(e) => eprintln!("Error: could not create {}: {e}", layouts.display()),
        }
    }

    println!("\nRun 'cockpit list' to see windows, then 'cockpit capture <name>' to save a layout.");
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &std::path::Path, content: &str) {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(path, content) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => eprintln!("Error: could not write {}: {e}", path.display()),
    }
}
