//! `runscript` command: runtime-registered named scripts.
//!
//! External modules extend the console at load time by registering scripts
//! under a name; players then invoke them with `runscript <name>`.

use super::{Command, CommandOutcome, CommandResult, Context};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// A named script runnable through [`RunScriptCommand`].
///
/// Closures taking the execution context implement this automatically.
pub trait Script: Send + Sync {
    /// Run the script.
    fn run(&self, ctx: &mut Context<'_>);
}

impl<F> Script for F
where
    F: Fn(&mut Context<'_>) + Send + Sync,
{
    fn run(&self, ctx: &mut Context<'_>) {
        self(ctx)
    }
}

/// Runs a script previously registered with [`RunScriptCommand::add_script`].
///
/// The script table is shared state mutated by load-time registration while
/// dispatches may be reading it, so it is lock-guarded like the registry.
#[derive(Default)]
pub struct RunScriptCommand {
    scripts: RwLock<IndexMap<String, Arc<dyn Script>>>,
}

impl RunScriptCommand {
    /// Create the command with an empty script table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `script` under `name` (case-insensitive, last wins).
    pub fn add_script(&self, name: &str, script: Arc<dyn Script>) {
        let key = name.to_lowercase();
        debug!(script = %key, "registered script");
        self.scripts.write().insert(key, script);
    }

    /// Remove the script registered under `name`, if present.
    pub fn remove_script(&self, name: &str) -> bool {
        self.scripts
            .write()
            .shift_remove(&name.to_lowercase())
            .is_some()
    }
}

impl Command for RunScriptCommand {
    fn name(&self) -> &str {
        "runscript"
    }

    fn syntax(&self) -> &str {
        "runscript <scriptname>|list"
    }

    fn help(&self) -> &str {
        "Valid arguments:\n  <scriptname> (runs that script)\n  list (lists all available scripts)\n  help (shows this helpfile)"
    }

    fn execute(&self, args: &str, ctx: &mut Context<'_>) -> CommandOutcome {
        let args = args.trim().to_lowercase();

        if args.is_empty() {
            return Ok(CommandResult::BadSyntax);
        }

        if args == "help" {
            ctx.show_message(format!("Usage: {}", self.syntax()));
            ctx.show_message(self.help().to_string());
            return Ok(CommandResult::Success);
        }

        if args == "list" {
            let scripts = self.scripts.read();
            if scripts.is_empty() {
                ctx.show_message("Scripts: none");
            } else {
                let names: Vec<&str> = scripts.keys().map(String::as_str).collect();
                ctx.show_message(format!("Scripts: {}", names.join(", ")));
            }
            return Ok(CommandResult::Success);
        }

        // Clone the Arc out so the table lock is not held while the script
        // runs (a script may register further scripts).
        let script = self.scripts.read().get(&args).cloned();
        match script {
            Some(script) => {
                script.run(ctx);
                Ok(CommandResult::Success)
            }
            None => {
                ctx.show_message(format!("No such script: '{args}'"));
                Ok(CommandResult::Error)
            }
        }
    }
}
