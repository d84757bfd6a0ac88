use std::io::Write;

use clap::{Args, ValueEnum};

use cockpit_core::profile::{ChromeMode, OverlaySpec, Profile, SavedWindow};
use cockpit_core::rect::Insets;
use cockpit_core::{FilterSet, WindowInfo};

use super::picker;

/// Arguments for the `capture` subcommand.
#[derive(Args)]
pub struct CaptureArgs {
    /// Profile name (saved as ~/.config/cockpit/layouts/<name>.json)
    name: String,
    /// Keep windows whose title contains this text (repeatable)
    #[arg(long = "match", value_name = "TEXT")]
    matches: Vec<String>,
    /// Keep windows with this exact class name (repeatable)
    #[arg(long, value_name = "CLASS")]
    class: Vec<String>,
    /// Keep windows of this executable (repeatable)
    #[arg(long, value_name = "EXE")]
    exe: Vec<String>,
    /// Capture every matching window without prompting
    #[arg(long)]
    all: bool,
    /// Chrome handling when the profile is applied
    #[arg(long, value_enum, default_value = "keep")]
    chrome: ChromeArg,
    /// Pin captured windows above normal windows on apply
    #[arg(long)]
    topmost: bool,
    /// Attach a border overlay, optionally with a pad in pixels
    #[arg(long, value_name = "PAD", num_args = 0..=1)]
    overlay: Option<Option<i32>>,
    /// Overwrite an existing profile
    #[arg(long)]
    force: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChromeArg {
    /// Leave the title bar and sizing frame alone
    Keep,
    /// Remove the caption and sizing frame
    Strip,
}

impl From<ChromeArg> for ChromeMode {
    fn from(arg: ChromeArg) -> Self {
        match arg {
            ChromeArg::Keep => ChromeMode::Keep,
            ChromeArg::Strip => ChromeMode::Strip,
        }
    }
}

pub fn execute(args: &CaptureArgs) {
    cockpit_windows::dpi::enable_dpi_awareness();

    let filters = FilterSet {
        titles: args.matches.clone(),
        classes: args.class.clone(),
        exes: args.exe.clone(),
    };

    let candidates: Vec<WindowInfo> = match cockpit_windows::window_infos() {
        Ok(infos) => infos
            .into_iter()
            .filter(|info| !info.title.is_empty() && filters.matches(info))
            .collect(),
        Err(e) => {
            eprintln!("Error: failed to enumerate windows: {e}");
            std::process::exit(1);
        }
    };

    if candidates.is_empty() {
        eprintln!("No windows match the given filters.");
        std::process::exit(1);
    }

    let selected = if args.all {
        candidates
    } else {
        pick_interactively(candidates)
    };

    let overlay = args.overlay.map(|pad| OverlaySpec {
        pad: pad.map(Insets::uniform),
        color: None,
    });

    let windows = selected
        .into_iter()
        .map(|info| {
            // Capture the raw style bits now so `undo` can restore them
            // even after chrome stripping.
            let (style, ex_style) =
                cockpit_core::Window::styles(&cockpit_windows::Window::from_raw(info.handle));
            SavedWindow {
                title: info.title,
                class: info.class,
                exe: info.exe,
                rect: info.rect,
                chrome: args.chrome.into(),
                topmost: args.topmost,
                overlay: overlay.clone(),
                style,
                ex_style,
            }
        })
        .collect();
    let profile = Profile { windows };

    let Some(path) = cockpit_core::profile::profile_path(&args.name) else {
        eprintln!("Error: could not determine the layouts directory.");
        std::process::exit(1);
    };
    if path.exists() && !args.force {
        eprintln!(
            "Profile \"{}\" already exists. Use --force to overwrite.",
            args.name
        );
        std::process::exit(1);
    }

    match profile.save(&path) {
        Ok(()) => println!(
            "Captured {} window(s) to {}",
            profile.windows.len(),
            path.display()
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Prints a numbered listing and reads a selection from stdin.
fn pick_interactively(candidates: Vec<WindowInfo>) -> Vec<WindowInfo> {
    for (i, info) in candidates.iter().enumerate() {
        println!(
            "{:>3}. {}  [{}]  ({},{} {}x{})",
            i + 1,
            info.title,
            info.exe,
            info.rect.x,
            info.rect.y,
            info.rect.width,
            info.rect.height
        );
    }
    print!("\nWindows to capture (e.g. 1,3-5; empty for all): ");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        eprintln!("Error: could not read selection.");
        std::process::exit(1);
    }

    match picker::parse_selection(&line, candidates.len()) {
        Ok(indices) => indices
            .into_iter()
            .map(|i| candidates[i].clone())
            .collect(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
