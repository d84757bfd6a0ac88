pub mod apply;
pub mod capture;
pub mod init;
pub mod list;
pub mod picker;
pub mod profiles;
pub mod show;
pub mod undo;

use cockpit_core::Profile;

/// Loads a named profile, exiting with an error message if it cannot
/// be found or parsed.
pub(crate) fn load_profile(name: &str) -> Profile {
    let Some(path) = cockpit_core::profile::profile_path(name) else {
        eprintln!("Error: could not determine the layouts directory.");
        std::process::exit(1);
    };

    match Profile::load(&path) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
