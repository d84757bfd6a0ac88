//! Applies saved profiles to the live desktop.
//!
//! Placement is not fire-and-forget: `SetWindowPos` can silently be
//! overridden by the target (minimum sizes, deferred layout, DPI
//! changes). Every placement is therefore verified by re-reading the
//! visible rect and retried per [`cockpit_core::plan`].

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use cockpit_core::plan::{ApplyOutcome, ApplyReport, Step, VerifyPolicy, next_step};
use cockpit_core::profile::{ChromeMode, Profile, SavedWindow};
use cockpit_core::rect::Insets;
use cockpit_core::{Config, WindowResult, matching};

use crate::ctrl_c;
use crate::enumerate;
use crate::monitor;
use crate::overlay::{Color, Overlay};
use crate::window::Window;

/// Applies a profile: match, restyle, place, verify.
///
/// With `dry_run` the matching runs but nothing is touched; matched
/// records report as placed with zero attempts.
pub fn apply_profile(profile: &Profile, config: &Config, dry_run: bool) -> WindowResult<ApplyReport> {
    let live = enumerate::window_infos()?;
    let mut claimed = vec![false; live.len()];
    let mut report = ApplyReport::default();
    let policy = config.apply.policy();
    let virtual_screen = monitor::virtual_screen();

    for saved in &profile.windows {
        let Some(index) = matching::find_match(saved, &live, &claimed) else {
            cockpit_core::log_warn!("no live window matches \"{}\"", saved.title);
            report.push(&saved.title, ApplyOutcome::NotFound);
            continue;
        };
        claimed[index] = true;

        if dry_run {
            report.push(&saved.title, ApplyOutcome::Placed { attempts: 0 });
            continue;
        }

        // Layouts saved on a different monitor arrangement can point at
        // coordinates no monitor covers. Still applied: the arrangement
        // may come back (projector warm-up), and the user asked for it.
        if !saved.rect.intersects(&virtual_screen) {
            cockpit_core::log_warn!(
                "\"{}\" target ({},{}) lies outside the virtual screen",
                saved.title,
                saved.rect.x,
                saved.rect.y
            );
        }

        let window = Window::from_raw(live[index].handle);
        let outcome = place_window(&window, saved, &policy);
        report.push(&saved.title, outcome);
    }

    Ok(report)
}

/// Restores captured styles on every matched window and releases it
/// from the topmost band.
pub fn undo_profile(profile: &Profile) -> WindowResult<ApplyReport> {
    use cockpit_core::Window as _;

    let live = enumerate::window_infos()?;
    let mut claimed = vec![false; live.len()];
    let mut report = ApplyReport::default();

    for saved in &profile.windows {
        let Some(index) = matching::find_match(saved, &live, &claimed) else {
            report.push(&saved.title, ApplyOutcome::NotFound);
            continue;
        };
        claimed[index] = true;

        let window = Window::from_raw(live[index].handle);
        restore_window(&window, saved);
        report.push(&saved.title, ApplyOutcome::Placed { attempts: 1 });
    }

    Ok(report)
}

/// Keeps the profile enforced until Ctrl+C.
///
/// Every `poll_ms` tick, each managed window is re-read; one that
/// drifted beyond tolerance is placed again (a single attempt per tick)
/// and its overlay re-covered. Windows that disappear have their
/// overlay hidden and are skipped until they come back.
pub fn run_hold(
    profile: &Profile,
    config: &Config,
    overlays: bool,
    undo_on_exit: bool,
) -> WindowResult<()> {
    use cockpit_core::Window as _;

    let live = enumerate::window_infos()?;
    let mut claimed = vec![false; live.len()];
    let mut managed = Vec::new();

    for saved in &profile.windows {
        let Some(index) = matching::find_match(saved, &live, &claimed) else {
            continue;
        };
        claimed[index] = true;
        managed.push(Managed {
            window: Window::from_raw(live[index].handle),
            overlay: None,
            covered: false,
            saved: saved.clone(),
        });
    }

    if managed.is_empty() {
        return Err("no windows to hold".into());
    }

    if overlays {
        for entry in &mut managed {
            if entry.saved.overlay.is_none() {
                continue;
            }
            let overlay = Overlay::new()?;
            let (pad, color) = overlay_params(&entry.saved, config);
            overlay.cover(&entry.saved.rect, &pad, color, config.overlay.topmost);
            entry.overlay = Some(overlay);
            entry.covered = true;
        }
    }

    let (tx, rx) = mpsc::channel();
    ctrl_c::set_handler(tx);
    cockpit_core::log_info!("holding {} windows", managed.len());

    let tick = Duration::from_millis(config.apply.poll_ms);
    let tolerance = config.apply.tolerance_px;

    loop {
        match rx.recv_timeout(tick) {
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        for entry in &mut managed {
            let Ok(observed) = entry.window.rect() else {
                entry.hide_overlay();
                continue;
            };
            if !entry.window.is_visible() {
                entry.hide_overlay();
                continue;
            }

            let drifted = !observed.approx_eq(&entry.saved.rect, tolerance);
            if drifted {
                cockpit_core::log_debug!(
                    "\"{}\" drifted to ({},{} {}x{}); re-asserting",
                    entry.saved.title,
                    observed.x,
                    observed.y,
                    observed.width,
                    observed.height
                );
                let _ = entry.window.set_rect(&entry.saved.rect);
            }

            // Re-render the overlay only when something changed; the
            // bitmap upload is not free at large sizes.
            if let Some(overlay) = &entry.overlay
                && (drifted || !entry.covered)
            {
                let (pad, color) = overlay_params(&entry.saved, config);
                overlay.cover(&entry.saved.rect, &pad, color, config.overlay.topmost);
                entry.covered = true;
            }
        }
    }

    cockpit_core::log_info!("hold loop stopped");

    if undo_on_exit {
        for entry in &managed {
            restore_window(&entry.window, &entry.saved);
        }
    }

    // Dropping `managed` destroys the overlay windows.
    Ok(())
}

/// One window under hold-mode management.
struct Managed {
    window: Window,
    overlay: Option<Overlay>,
    /// Whether the overlay is currently shown and up to date.
    covered: bool,
    saved: SavedWindow,
}

impl Managed {
    fn hide_overlay(&mut self) {
        if let Some(overlay) = &self.overlay {
            overlay.hide();
        }
        self.covered = false;
    }
}

/// Restyles one window, then drives the place-and-verify loop.
fn place_window(window: &Window, saved: &SavedWindow, policy: &VerifyPolicy) -> ApplyOutcome {
    use cockpit_core::Window as _;

    if saved.chrome == ChromeMode::Strip
        && let Err(e) = window.set_chrome(saved.chrome)
    {
        cockpit_core::log_warn!("failed to strip chrome on \"{}\": {e}", saved.title);
    }
    if saved.topmost && let Err(e) = window.set_topmost(true) {
        cockpit_core::log_warn!("failed to raise \"{}\": {e}", saved.title);
    }

    let target = saved.rect;
    let mut attempts = 0;
    let mut place_at = target;

    loop {
        if let Err(e) = window.set_rect(&place_at) {
            cockpit_core::log_warn!("set_rect failed for \"{}\": {e}", saved.title);
        }
        attempts += 1;

        // Give the window a moment to process the move before verifying;
        // some targets apply the new size asynchronously.
        thread::sleep(Duration::from_millis(policy.poll_ms));

        let observed = match window.rect() {
            Ok(rect) => rect,
            Err(_) => {
                // The window went away mid-placement.
                cockpit_core::log_warn!("\"{}\" disappeared during placement", saved.title);
                return ApplyOutcome::NotFound;
            }
        };

        match next_step(&target, &observed, attempts, policy) {
            Step::Done => {
                cockpit_core::log_info!("placed \"{}\" in {} attempt(s)", saved.title, attempts);
                return ApplyOutcome::Placed { attempts };
            }
            Step::Retry { rect } => place_at = rect,
            Step::GiveUp => {
                cockpit_core::log_warn!(
                    "\"{}\" stuck at ({},{} {}x{}) after {} attempts",
                    saved.title,
                    observed.x,
                    observed.y,
                    observed.width,
                    observed.height,
                    attempts
                );
                return ApplyOutcome::Drifted { got: observed };
            }
        }
    }
}

fn restore_window(window: &Window, saved: &SavedWindow) {
    use cockpit_core::Window as _;

    // A zero style was never captured (top-level windows always carry
    // at least WS_CLIPSIBLINGS); treat it as "nothing to restore".
    if saved.style != 0 && let Err(e) = window.restore_styles(saved.style, saved.ex_style) {
        cockpit_core::log_warn!("failed to restore styles on \"{}\": {e}", saved.title);
    }
    let _ = window.set_topmost(false);
}

/// Resolves a record's overlay pad and color against the config defaults.
fn overlay_params(saved: &SavedWindow, config: &Config) -> (Insets, Color) {
    let spec = saved.overlay.as_ref();
    let pad = spec
        .and_then(|s| s.pad)
        .unwrap_or_else(|| Insets::uniform(config.overlay.pad));
    let color = spec
        .and_then(|s| s.color.as_deref())
        .and_then(Color::from_hex)
        .or_else(|| Color::from_hex(&config.overlay.color))
        .unwrap_or(Color { r: 0, g: 0, b: 0 });
    (pad, color)
}
