mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::plan::VerifyPolicy;

pub use loader::{config_dir, config_path, layouts_dir, load, try_load};

/// Top-level configuration for Cockpit.
///
/// Loaded from `~/.config/cockpit/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Placement and verification settings.
    pub apply: ApplyConfig,
    /// Border overlay appearance settings.
    pub overlay: OverlayConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Placement loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyConfig {
    /// Delay in milliseconds between placement attempts (and between
    /// hold-mode ticks).
    pub poll_ms: u64,
    /// Maximum placement attempts per window.
    pub attempts: u32,
    /// Accepted per-edge error in pixels when verifying a placement.
    pub tolerance_px: i32,
    /// Jog the size by one pixel on the penultimate attempt to shake
    /// windows that latched a stale size.
    pub nudge: bool,
}

/// Border overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Hex color of the overlay frame (e.g. "#000000").
    pub color: String,
    /// Default uniform pad in pixels for profile entries without one.
    pub pad: i32,
    /// Keep overlays above the windows they cover.
    pub topmost: bool,
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            poll_ms: 250,
            attempts: 8,
            tolerance_px: 1,
            nudge: true,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: "#000000".into(),
            pad: 24,
            topmost: true,
        }
    }
}

impl ApplyConfig {
    /// The verification policy fed to the placement loop.
    pub fn policy(&self) -> VerifyPolicy {
        VerifyPolicy {
            poll_ms: self.poll_ms,
            attempts: self.attempts,
            tolerance_px: self.tolerance_px,
            nudge: self.nudge,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Prevents zero-attempt loops, sub-resolution poll intervals, and
    /// pads large enough to blank a whole monitor by accident.
    pub fn validate(&mut self) {
        self.apply.poll_ms = self.apply.poll_ms.clamp(10, 5000);
        self.apply.attempts = self.apply.attempts.clamp(1, 50);
        self.apply.tolerance_px = self.apply.tolerance_px.clamp(0, 16);
        self.overlay.pad = self.overlay.pad.clamp(0, 512);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.apply.poll_ms, 250);
        assert_eq!(config.apply.attempts, 8);
        assert_eq!(config.apply.tolerance_px, 1);
        assert!(config.apply.nudge);
        assert_eq!(config.overlay.color, "#000000");
        assert_eq!(config.overlay.pad, 24);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[apply]\nattempts = 3\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.apply.attempts, 3);
        assert_eq!(config.apply.poll_ms, 250);
        assert_eq!(config.overlay.pad, 24);
    }

    #[test]
    fn validate_clamps_extreme_values() {
        // Arrange
        let mut config = Config {
            apply: ApplyConfig {
                poll_ms: 0,
                attempts: 0,
                tolerance_px: 100,
                nudge: true,
            },
            overlay: OverlayConfig {
                pad: 9999,
                ..Default::default()
            },
            logging: LogConfig::default(),
        };

        // Act
        config.validate();

        // Assert
        assert_eq!(config.apply.poll_ms, 10);
        assert_eq!(config.apply.attempts, 1);
        assert_eq!(config.apply.tolerance_px, 16);
        assert_eq!(config.overlay.pad, 512);
    }

    #[test]
    fn policy_mirrors_apply_section() {
        // Arrange
        let apply = ApplyConfig {
            poll_ms: 100,
            attempts: 5,
            tolerance_px: 2,
            nudge: false,
        };

        // Act
        let policy = apply.policy();

        // Assert
        assert_eq!(policy.poll_ms, 100);
        assert_eq!(policy.attempts, 5);
        assert_eq!(policy.tolerance_px, 2);
        assert!(!policy.nudge);
    }
}
