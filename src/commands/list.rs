//! `list` command.

use super::{Command, CommandOutcome, CommandResult, Context};

/// Lists every registered command, comma-joined in registration order.
pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn syntax(&self) -> &str {
        "list"
    }

    fn help(&self) -> &str {
        "Lists all commands currently registered with the console."
    }

    fn execute(&self, args: &str, ctx: &mut Context<'_>) -> CommandOutcome {
        if !args.trim().is_empty() {
            return Ok(CommandResult::BadSyntax);
        }

        let names = ctx.registry.list_names();
        if names.is_empty() {
            ctx.show_message("Commands: none");
        } else {
            ctx.show_message(format!("Commands ({}): {}", names.len(), names.join(", ")));
        }
        Ok(CommandResult::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::context::CommandContext;
    use crate::settings::ConsoleSettings;

    #[test]
    fn test_list_outputs_names_in_order() {
        let registry = CommandRegistry::with_builtins();
        let settings = ConsoleSettings::default();
        let mut ctx = Context::new(CommandContext::Campaign, &settings, &registry);

        let result = ListCommand.execute("", &mut ctx).expect("list runs");
        assert_eq!(result, CommandResult::Success);
        assert_eq!(ctx.messages()[0], "Commands (3): help, list, runscript");
    }

    #[test]
    fn test_list_rejects_arguments() {
        let registry = CommandRegistry::new();
        let settings = ConsoleSettings::default();
        let mut ctx = Context::new(CommandContext::None, &settings, &registry);

        let result = ListCommand.execute("ships", &mut ctx).expect("list runs");
        assert_eq!(result, CommandResult::BadSyntax);
    }

    #[test]
    fn test_list_empty_registry() {
        let registry = CommandRegistry::new();
        let settings = ConsoleSettings::default();
        let mut ctx = Context::new(CommandContext::None, &settings, &registry);

        let result = ListCommand.execute("", &mut ctx).expect("list runs");
        assert_eq!(result, CommandResult::Success);
        assert_eq!(ctx.messages()[0], "Commands: none");
    }
}
