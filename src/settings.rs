//! Console settings loading and validation.

use crate::commands::CommandResult;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Settings errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// The settings file is not valid TOML.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    /// The settings parsed but hold an invalid value.
    #[error("invalid settings: {0}")]
    Invalid(#[from] ValidationError),
}

/// Validation errors for settings.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The typo threshold is outside the meaningful similarity range.
    #[error("typo_correction_threshold must be within 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f64),
    /// An empty separator would make every character a command boundary.
    #[error("command_separator must not be empty")]
    EmptySeparator,
}

/// Console configuration.
///
/// Constructed once at startup (either from a TOML file or via [`Default`])
/// and shared read-only by the dispatcher, reporter, and commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Keystroke that summons the console overlay. Read by the host's input
    /// layer; the dispatch core never inspects it.
    pub summon_key: KeyStroke,
    /// Literal string separating multiple commands on one input line.
    pub command_separator: String,
    /// Whether each entered command is echoed back before its output.
    pub show_entered_commands: bool,
    /// Whether the host's input popup shows the current cursor index.
    pub show_cursor_index: bool,
    /// How similar a registered name must be to an unrecognized one for typo
    /// correction to treat them as a match (0.0 = anything, 1.0 = identical).
    pub typo_correction_threshold: f64,
    /// Color of the console's output text.
    pub output_color: Color,
    /// Characters per output line before wrapping. Zero disables wrapping.
    pub output_max_line_length: usize,
    /// Sound played when a command returns a given result. Sparse: results
    /// with no entry play nothing.
    pub result_sounds: HashMap<CommandResult, String>,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            summon_key: KeyStroke::default(),
            command_separator: "|".to_string(),
            show_entered_commands: true,
            show_cursor_index: false,
            typo_correction_threshold: 0.9,
            output_color: Color { r: 0, g: 255, b: 0 },
            output_max_line_length: 80,
            result_sounds: HashMap::new(),
        }
    }
}

impl ConsoleSettings {
    /// Load settings from a TOML file and validate them.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: ConsoleSettings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings, catching common mistakes early.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.typo_correction_threshold) {
            return Err(ValidationError::ThresholdOutOfRange(
                self.typo_correction_threshold,
            ));
        }
        if self.command_separator.is_empty() {
            return Err(ValidationError::EmptySeparator);
        }
        Ok(())
    }

    /// Sound id configured for `result`, if any.
    pub fn sound_for(&self, result: CommandResult) -> Option<&str> {
        self.result_sounds.get(&result).map(String::as_str)
    }
}

/// Key (plus modifier keys) that summons the console.
///
/// The key is stored as the host's raw key code; the core only carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyStroke {
    /// Raw key code in the host's keyboard mapping.
    pub key: u16,
    /// Shift must be held.
    pub require_shift: bool,
    /// Control must be held.
    pub require_control: bool,
    /// Alt must be held.
    pub require_alt: bool,
}

impl Default for KeyStroke {
    fn default() -> Self {
        // Grave/backquote, the usual dev-console key.
        Self {
            key: 41,
            require_shift: false,
            require_control: false,
            require_alt: false,
        }
    }
}

impl fmt::Display for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.require_control {
            write!(f, "CONTROL+")?;
        }
        if self.require_alt {
            write!(f, "ALT+")?;
        }
        if self.require_shift {
            write!(f, "SHIFT+")?;
        }
        write!(f, "#{}", self.key)
    }
}

/// RGB color of the console's output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ConsoleSettings::default();
        assert_eq!(settings.command_separator, "|");
        assert!((settings.typo_correction_threshold - 0.9).abs() < f64::EPSILON);
        assert!(settings.validate().is_ok());
        assert_eq!(settings.sound_for(CommandResult::Error), None);
    }

    #[test]
    fn test_parse_toml() {
        let settings: ConsoleSettings = toml::from_str(
            r#"
            command_separator = ";"
            typo_correction_threshold = 0.75
            output_max_line_length = 60
            output_color = { r = 255, g = 255, b = 255 }
            summon_key = { key = 59, require_control = true }

            [result_sounds]
            success = "ui_ok"
            error = "ui_fail"
            "#,
        )
        .expect("settings should parse");

        assert_eq!(settings.command_separator, ";");
        assert_eq!(settings.output_max_line_length, 60);
        assert_eq!(settings.sound_for(CommandResult::Success), Some("ui_ok"));
        assert_eq!(settings.sound_for(CommandResult::Error), Some("ui_fail"));
        assert_eq!(settings.sound_for(CommandResult::BadSyntax), None);
        // Unspecified fields fall back to defaults.
        assert!(settings.show_entered_commands);
        assert_eq!(settings.summon_key.to_string(), "CONTROL+#59");
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let settings = ConsoleSettings {
            typo_correction_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::ThresholdOutOfRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_separator() {
        let settings = ConsoleSettings {
            command_separator: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::EmptySeparator)
        ));
    }

    #[test]
    fn test_keystroke_display_modifier_order() {
        let key = KeyStroke {
            key: 14,
            require_shift: true,
            require_control: true,
            require_alt: true,
        };
        assert_eq!(key.to_string(), "CONTROL+ALT+SHIFT+#14");
    }
}
