/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `cockpit init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Cockpit configuration
# Location: ~/.config/cockpit/config.toml

[apply]
# Delay in milliseconds between placement attempts, and between
# re-assert ticks in hold mode.
poll_ms = 250
# Maximum placement attempts per window before it is reported as drifted.
attempts = 8
# Accepted per-edge error in pixels when verifying a placement.
tolerance_px = 1
# Jog the size by one pixel on the penultimate attempt. Helps windows
# that enforce a latched size until it actually changes.
nudge = true

[overlay]
# Hex color of the border overlay frame.
color = "#000000"
# Default overlay pad in pixels, used when a profile entry has none.
pad = 24
# Keep overlays above the windows they cover.
topmost = true

[logging]
# Enable file logging to ~/.config/cockpit/logs/cockpit.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_template_parses_as_valid_config() {
        // Arrange
        let toml_str = generate_config();

        // Act
        let result: Result<crate::Config, _> = toml::from_str(&toml_str);

        // Assert
        assert!(
            result.is_ok(),
            "config template is not valid TOML: {result:?}"
        );
    }

    #[test]
    fn config_template_matches_default_values() {
        // Arrange
        let toml_str = generate_config();

        // Act
        let mut config: crate::Config = toml::from_str(&toml_str).unwrap();
        config.validate();

        // Assert
        let defaults = crate::Config::default();
        assert_eq!(config.apply.poll_ms, defaults.apply.poll_ms);
        assert_eq!(config.apply.attempts, defaults.apply.attempts);
        assert_eq!(config.apply.tolerance_px, defaults.apply.tolerance_px);
        assert_eq!(config.apply.nudge, defaults.apply.nudge);
        assert_eq!(config.overlay.color, defaults.overlay.color);
        assert_eq!(config.overlay.pad, defaults.overlay.pad);
        assert_eq!(config.overlay.topmost, defaults.overlay.topmost);
        assert_eq!(config.logging.enabled, defaults.logging.enabled);
        assert_eq!(config.logging.level, defaults.logging.level);
    }
}
