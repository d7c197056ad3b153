//! Input line tokenization.
//!
//! An input line may hold several commands separated by the configured
//! separator string. Separators inside double quotes are literal, so
//! `say "a|b" | help` is two commands.

/// Split a raw input line into ordered sub-commands on `separator`.
///
/// Each sub-command is trimmed; empty segments are dropped. A line of only
/// separators or whitespace yields an empty vec.
pub fn split_commands(line: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![trimmed.to_string()];
    }

    let mut commands = Vec::new();
    let mut segment = String::new();
    let mut in_quotes = false;
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if !in_quotes && rest.starts_with(separator) {
            push_segment(&mut commands, &segment);
            segment.clear();
            rest = &rest[separator.len()..];
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
        }
        segment.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    push_segment(&mut commands, &segment);

    commands
}

fn push_segment(commands: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        commands.push(trimmed.to_string());
    }
}

/// Split one sub-command into `(name, args)` at the first whitespace run.
///
/// The name is lowercased for case-insensitive lookup; the argument remainder
/// is passed through untouched. A sub-command with no arguments yields an
/// empty args string.
pub fn split_command_and_args(sub: &str) -> (String, String) {
    let trimmed = sub.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((name, args)) => (name.to_lowercase(), args.trim_start().to_string()),
        None => (trimmed.to_lowercase(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(split_commands("list|help", "|"), vec!["list", "help"]);
        assert_eq!(
            split_commands(" spawn x ; status ", ";"),
            vec!["spawn x", "status"]
        );
    }

    #[test]
    fn test_split_drops_empty_segments() {
        assert_eq!(split_commands("help||list", "|"), vec!["help", "list"]);
        assert_eq!(split_commands("|||", "|"), Vec::<String>::new());
        assert_eq!(split_commands("", "|"), Vec::<String>::new());
        assert_eq!(split_commands("   ", "|"), Vec::<String>::new());
    }

    #[test]
    fn test_split_respects_quotes() {
        assert_eq!(
            split_commands(r#"say "a|b" | help"#, "|"),
            vec![r#"say "a|b""#, "help"]
        );
        // Unterminated quote swallows the rest of the line.
        assert_eq!(
            split_commands(r#"say "a|b | help"#, "|"),
            vec![r#"say "a|b | help"#]
        );
    }

    #[test]
    fn test_split_multichar_separator() {
        assert_eq!(
            split_commands("help&&list&&", "&&"),
            vec!["help", "list"]
        );
    }

    #[test]
    fn test_name_and_args() {
        assert_eq!(
            split_command_and_args("runscript foo bar"),
            ("runscript".to_string(), "foo bar".to_string())
        );
        assert_eq!(
            split_command_and_args("HELP"),
            ("help".to_string(), String::new())
        );
        assert_eq!(
            split_command_and_args("  SpawnFleet   pirates  4 "),
            ("spawnfleet".to_string(), "pirates  4".to_string())
        );
        assert_eq!(split_command_and_args(""), (String::new(), String::new()));
    }
}
