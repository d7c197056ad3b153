//! `help` command.

use super::{Command, CommandOutcome, CommandResult, Context};

/// Shows help for a command, or lists all registered commands.
///
/// An unrecognized argument goes through the same typo correction as
/// dispatch, so `help spwn` shows help for `spawn`.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn syntax(&self) -> &str {
        "help [command]"
    }

    fn help(&self) -> &str {
        "Shows a command's usage and description. With no argument, lists every registered command."
    }

    fn execute(&self, args: &str, ctx: &mut Context<'_>) -> CommandOutcome {
        let args = args.trim();
        if args.is_empty() {
            let names = ctx.registry.list_names();
            ctx.show_message(format!(
                "Registered commands ({}): {}",
                names.len(),
                names.join(", ")
            ));
            return Ok(CommandResult::Success);
        }

        let wanted = args.to_lowercase();
        let (name, command) = match ctx.registry.lookup(&wanted) {
            Some(command) => (wanted, command),
            None => {
                let threshold = ctx.settings.typo_correction_threshold;
                match ctx.registry.find_closest(&wanted, threshold) {
                    Some((matched, command)) => {
                        ctx.show_message(format!(
                            "No command '{wanted}', showing help for '{matched}':"
                        ));
                        (matched, command)
                    }
                    None => {
                        ctx.show_message(format!("No command named '{wanted}'."));
                        return Ok(CommandResult::Error);
                    }
                }
            }
        };

        if command.syntax().is_empty() && command.help().is_empty() {
            ctx.show_message(format!("No help available for '{name}'."));
            return Ok(CommandResult::Success);
        }

        if !command.syntax().is_empty() {
            ctx.show_message(format!("Usage: {}", command.syntax()));
        }
        if !command.help().is_empty() {
            ctx.show_message(command.help().to_string());
        }
        Ok(CommandResult::Success)
    }
}
