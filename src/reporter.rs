//! Maps command results to user-visible feedback.
//!
//! Pure data-in data-out: the host renders the text and plays the sound.

use crate::commands::CommandResult;
use crate::settings::ConsoleSettings;

/// Shared message for commands usable only on the campaign map.
pub const ERROR_CAMPAIGN_ONLY: &str = "Error: This command is campaign-only!";
/// Shared message for commands usable only in battle.
pub const ERROR_COMBAT_ONLY: &str = "Error: This command is combat-only!";

/// Feedback for one reported result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Status text to display; empty for results that need no extra line.
    pub text: String,
    /// Sound id to play, if one is configured for the result.
    pub sound: Option<String>,
}

/// Map `result` to its display text and configured sound cue.
///
/// Total over every [`CommandResult`]; success carries no status line since
/// the command's own output already tells the story.
pub fn report(result: CommandResult, settings: &ConsoleSettings) -> Feedback {
    let text = match result {
        CommandResult::Success => "",
        CommandResult::Error => "An error occurred while running the command.",
        CommandResult::BadSyntax => "Bad command syntax.",
        CommandResult::WrongContext => "That command cannot be used right now.",
        CommandResult::DuplicateCommand => "A command with that name is already registered.",
        CommandResult::DidNotRun => "Command did not run.",
    };

    Feedback {
        text: text.to_string(),
        sound: settings.sound_for(result).map(str::to_string),
    }
}

/// Word-wrap `text` so no line exceeds `max_len` characters.
///
/// Existing line breaks are kept; words longer than a line are broken hard.
/// `max_len` of zero disables wrapping.
pub fn wrap_line(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return text.to_string();
    }

    let mut wrapped = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            wrapped.push('\n');
        }

        let mut column = 0;
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            if column > 0 {
                if column + 1 + word_len > max_len {
                    wrapped.push('\n');
                    column = 0;
                } else {
                    wrapped.push(' ');
                    column += 1;
                }
            }

            if word_len > max_len {
                // Hard-break an overlong word across lines.
                for ch in word.chars() {
                    if column == max_len {
                        wrapped.push('\n');
                        column = 0;
                    }
                    wrapped.push(ch);
                    column += 1;
                }
            } else {
                wrapped.push_str(word);
                column += word_len;
            }
        }
    }

    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_report_covers_every_result() {
        let settings = ConsoleSettings::default();
        for result in [
            CommandResult::Success,
            CommandResult::Error,
            CommandResult::BadSyntax,
            CommandResult::WrongContext,
            CommandResult::DuplicateCommand,
            CommandResult::DidNotRun,
        ] {
            let feedback = report(result, &settings);
            // No sounds configured by default.
            assert_eq!(feedback.sound, None);
            if result == CommandResult::Success {
                assert!(feedback.text.is_empty());
            } else {
                assert!(!feedback.text.is_empty());
            }
        }
    }

    #[test]
    fn test_report_reads_sparse_sound_map() {
        let mut sounds = HashMap::new();
        sounds.insert(CommandResult::Error, "ui_fail".to_string());
        let settings = ConsoleSettings {
            result_sounds: sounds,
            ..Default::default()
        };

        assert_eq!(
            report(CommandResult::Error, &settings).sound.as_deref(),
            Some("ui_fail")
        );
        assert_eq!(report(CommandResult::Success, &settings).sound, None);
    }

    #[test]
    fn test_wrap_line_breaks_on_words() {
        let wrapped = wrap_line("one two three four", 9);
        assert_eq!(wrapped, "one two\nthree\nfour");
    }

    #[test]
    fn test_wrap_line_keeps_existing_breaks() {
        let wrapped = wrap_line("first line\nsecond", 40);
        assert_eq!(wrapped, "first line\nsecond");
    }

    #[test]
    fn test_wrap_line_hard_breaks_long_words() {
        let wrapped = wrap_line("abcdefghij", 4);
        assert_eq!(wrapped, "abcd\nefgh\nij");
    }

    #[test]
    fn test_wrap_line_zero_disables() {
        assert_eq!(wrap_line("anything at all", 0), "anything at all");
    }
}
