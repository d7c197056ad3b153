//! Console commands.
//!
//! This module contains the Command trait, the execution context handed to
//! each command, and the registry used to resolve entered names to
//! implementations.

mod help;
mod list;
mod run_script;

pub use help::HelpCommand;
pub use list::ListCommand;
pub use run_script::{RunScriptCommand, Script};

use crate::context::CommandContext;
use crate::settings::ConsoleSettings;
use crate::similarity;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Terminal result of one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandResult {
    /// The command ran and did what was asked.
    Success,
    /// The command ran but failed internally.
    Error,
    /// The arguments were malformed or missing.
    BadSyntax,
    /// The command is not valid in the current game mode.
    WrongContext,
    /// A registration conflict was rejected by a host layering a
    /// no-overwrite policy on top of the registry.
    DuplicateCommand,
    /// No registered command matched the entered name, even fuzzily.
    DidNotRun,
}

impl CommandResult {
    /// True only for [`CommandResult::Success`].
    pub fn is_success(self) -> bool {
        self == CommandResult::Success
    }

    /// Static code string for logging and metrics labeling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::BadSyntax => "bad_syntax",
            Self::WrongContext => "wrong_context",
            Self::DuplicateCommand => "duplicate_command",
            Self::DidNotRun => "did_not_run",
        }
    }
}

/// Outcome of [`Command::execute`].
///
/// Commands normally return `Ok` with the result they want reported. The
/// `Err` channel is for unexpected internal failures propagated with `?`;
/// the dispatcher downgrades those to [`CommandResult::Error`] with a generic
/// message rather than letting them abort the rest of the line.
pub type CommandOutcome = anyhow::Result<CommandResult>;

/// Execution context passed to each command.
///
/// Carries the game-mode snapshot taken by the host for this dispatch, the
/// shared settings, a handle to the registry (for introspection commands),
/// and the buffer collecting the command's user-visible output lines.
pub struct Context<'a> {
    /// Where the player is for the duration of this dispatch.
    pub context: CommandContext,
    /// Shared console settings.
    pub settings: &'a ConsoleSettings,
    /// The registry this dispatch resolves against.
    pub registry: &'a CommandRegistry,
    output: Vec<String>,
}

impl<'a> Context<'a> {
    /// Create a context for one sub-command invocation.
    pub fn new(
        context: CommandContext,
        settings: &'a ConsoleSettings,
        registry: &'a CommandRegistry,
    ) -> Self {
        Self {
            context,
            settings,
            registry,
            output: Vec::new(),
        }
    }

    /// Queue a line of user-visible output.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.output.push(message.into());
    }

    /// True while on the campaign map.
    pub fn is_in_campaign(&self) -> bool {
        self.context.is_in_campaign()
    }

    /// True while in a battle.
    pub fn is_in_combat(&self) -> bool {
        self.context.is_in_combat()
    }

    /// Lines queued so far.
    pub fn messages(&self) -> &[String] {
        &self.output
    }

    /// Drain the queued lines, leaving the buffer empty.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

/// Trait implemented by all console commands.
///
/// Commands self-validate their context: a campaign-only command checks
/// `ctx.is_in_campaign()` and returns [`CommandResult::WrongContext`] itself,
/// since context requirements vary per command.
pub trait Command: Send + Sync {
    /// Canonical name the command registers under.
    fn name(&self) -> &str;

    /// One-line usage syntax, shown on bad-syntax feedback and by `help`.
    fn syntax(&self) -> &str {
        ""
    }

    /// Longer help text shown by `help <name>`.
    fn help(&self) -> &str {
        ""
    }

    /// Run the command against `args` in the given context.
    fn execute(&self, args: &str, ctx: &mut Context<'_>) -> CommandOutcome;
}

/// Registry of console commands, keyed by lowercase name.
///
/// Insertion order is preserved, so [`CommandRegistry::find_closest`]
/// tie-breaks and [`CommandRegistry::list_names`] are deterministic. All
/// operations take `&self` and are safe under concurrent readers and
/// writers; the dispatch path never observes a partially inserted entry.
#[derive(Default)]
pub struct CommandRegistry {
    commands: RwLock<IndexMap<String, Arc<dyn Command>>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the built-in commands
    /// (`help`, `list`, `runscript`).
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register("help", Arc::new(HelpCommand));
        registry.register("list", Arc::new(ListCommand));
        registry.register("runscript", Arc::new(RunScriptCommand::new()));
        registry
    }

    /// Register `command` under `name` (case-insensitive).
    ///
    /// Last registration for a name wins: an existing entry is displaced and
    /// returned, matching how runtime extensions re-register themselves. The
    /// displaced slot keeps its position in registration order.
    pub fn register(&self, name: &str, command: Arc<dyn Command>) -> Option<Arc<dyn Command>> {
        let key = name.to_lowercase();
        let displaced = self.commands.write().insert(key.clone(), command);
        if displaced.is_some() {
            warn!(command = %key, "overwrote existing command registration");
        } else {
            debug!(command = %key, "registered command");
        }
        displaced
    }

    /// Remove the command registered under `name`, returning it if present.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Command>> {
        let key = name.to_lowercase();
        // shift_remove keeps the remaining entries in registration order.
        let removed = self.commands.write().shift_remove(&key);
        if removed.is_some() {
            debug!(command = %key, "unregistered command");
        }
        removed
    }

    /// Exact, case-insensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.read().get(&name.to_lowercase()).cloned()
    }

    /// Best fuzzy match for `name` scoring at or above `threshold`.
    ///
    /// Scans every registered name in registration order; ties go to the
    /// earlier registration. Returns the matched name together with the
    /// command so callers can tell the player what actually ran.
    pub fn find_closest(&self, name: &str, threshold: f64) -> Option<(String, Arc<dyn Command>)> {
        let needle = name.to_lowercase();
        let commands = self.commands.read();
        let matched = similarity::best_match(
            &needle,
            commands.keys().map(String::as_str),
            threshold,
        )?;
        debug!(entered = %needle, matched = %matched, "typo correction matched");
        let command = commands.get(matched).cloned()?;
        Some((matched.to_string(), command))
    }

    /// All registered names, in registration order.
    pub fn list_names(&self) -> Vec<String> {
        self.commands.read().keys().cloned().collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.read().len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.read().is_empty()
    }
}
