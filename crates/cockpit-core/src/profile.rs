use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::rect::Insets;

/// A saved window layout: a flat list of window records, stored as JSON
/// under `~/.config/cockpit/layouts/<name>.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub windows: Vec<SavedWindow>,
}

/// One captured window: identity for matching, geometry to re-apply,
/// and styling choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedWindow {
    pub title: String,
    pub class: String,
    /// Lowercased executable stem (e.g. "prepar3d"), empty if unknown.
    #[serde(default)]
    pub exe: String,
    pub rect: Rect,
    #[serde(default)]
    pub chrome: ChromeMode,
    #[serde(default)]
    pub topmost: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlaySpec>,
    /// Raw style bits at capture time, kept so `undo` can restore the
    /// original chrome exactly.
    #[serde(default)]
    pub style: u32,
    #[serde(default)]
    pub ex_style: u32,
}

/// What to do with the native window chrome when applying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromeMode {
    /// Leave the title bar and sizing frame alone.
    #[default]
    Keep,
    /// Remove the caption and sizing frame.
    Strip,
}

/// Per-window border overlay settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlaySpec {
    /// Edge widths the overlay covers, measured inward from the window
    /// rect. `None` falls back to the configured default pad.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad: Option<Insets>,
    /// Hex color override; `None` falls back to the configured color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Profile {
    /// Writes the profile as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| format!("{}: {e}", path.display()))
    }

    /// Reads and parses a profile file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
        serde_json::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))
    }
}

/// Returns the path of a named profile: `<layouts_dir>/<name>.json`.
pub fn profile_path(name: &str) -> Option<PathBuf> {
    crate::config::layouts_dir().map(|d| d.join(format!("{name}.json")))
}

/// Summary row for the `profiles` listing.
#[derive(Debug)]
pub struct ProfileSummary {
    pub name: String,
    pub windows: usize,
    pub modified: Option<SystemTime>,
}

/// Lists the saved profiles, sorted by name.
///
/// Unreadable or malformed files still show up, with a window count of
/// zero, so the user can find and delete them.
pub fn list_profiles() -> Vec<ProfileSummary> {
    let Some(dir) = crate::config::layouts_dir() else {
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };

    let mut summaries: Vec<ProfileSummary> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                return None;
            }
            let name = path.file_stem()?.to_str()?.to_string();
            let windows = Profile::load(&path).map(|p| p.windows.len()).unwrap_or(0);
            let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
            Some(ProfileSummary {
                name,
                windows,
                modified,
            })
        })
        .collect();

    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        // Arrange
        let profile = Profile {
            windows: vec![SavedWindow {
                title: "Prepar3D".into(),
                class: "FS98MAIN".into(),
                exe: "prepar3d".into(),
                rect: Rect::new(-1920, 0, 1920, 1080),
                chrome: ChromeMode::Strip,
                topmost: true,
                overlay: Some(OverlaySpec {
                    pad: Some(Insets::uniform(32)),
                    color: None,
                }),
                style: 0x94CA_0000,
                ex_style: 0x0001_0100,
            }],
        };

        // Act
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(back.windows.len(), 1);
        let w = &back.windows[0];
        assert_eq!(w.title, "Prepar3D");
        assert_eq!(w.rect, Rect::new(-1920, 0, 1920, 1080));
        assert_eq!(w.chrome, ChromeMode::Strip);
        assert!(w.topmost);
        assert_eq!(w.style, 0x94CA_0000);
    }

    #[test]
    fn minimal_record_uses_defaults() {
        // Arrange: only the required fields, as an older capture would write
        let json = r#"{
            "windows": [
                {
                    "title": "Map",
                    "class": "GlassCockpit",
                    "rect": { "x": 0, "y": 0, "width": 640, "height": 480 }
                }
            ]
        }"#;

        // Act
        let profile: Profile = serde_json::from_str(json).unwrap();

        // Assert
        let w = &profile.windows[0];
        assert_eq!(w.exe, "");
        assert_eq!(w.chrome, ChromeMode::Keep);
        assert!(!w.topmost);
        assert!(w.overlay.is_none());
        assert_eq!((w.style, w.ex_style), (0, 0));
    }

    #[test]
    fn chrome_mode_serializes_lowercase() {
        // Act / Assert
        assert_eq!(
            serde_json::to_string(&ChromeMode::Strip).unwrap(),
            "\"strip\""
        );
        assert_eq!(serde_json::to_string(&ChromeMode::Keep).unwrap(), "\"keep\"");
    }

    #[test]
    fn empty_windows_list_is_valid() {
        // Act
        let profile: Profile = serde_json::from_str("{}").unwrap();

        // Assert
        assert!(profile.windows.is_empty());
    }
}
