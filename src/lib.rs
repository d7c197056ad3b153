//! # devcon
//!
//! The dispatch core of an in-game developer console: a command registry,
//! a quote-aware multi-command tokenizer, typo correction for misspelled
//! names, and a dispatcher that reports a typed result with user-facing
//! feedback for every command it runs.
//!
//! ## Features
//!
//! - Case-insensitive command registry with runtime registration, safe under
//!   concurrent readers and writers
//! - Multiple commands per input line, split on a configurable separator that
//!   respects double quotes
//! - Typo correction via normalized edit distance, with a configurable
//!   threshold and an auto-run notice
//! - Per-command result reporting (text + optional sound cue) that isolates
//!   failures so one bad command never takes down the line or the host
//! - Immutable TOML-loadable settings shared by every component
//!
//! ## Quick Start
//!
//! ```rust
//! use devcon::{
//!     Command, CommandContext, CommandOutcome, CommandRegistry, CommandResult,
//!     ConsoleSettings, Context, Dispatcher,
//! };
//! use std::sync::Arc;
//!
//! struct Heal;
//!
//! impl Command for Heal {
//!     fn name(&self) -> &str {
//!         "heal"
//!     }
//!
//!     fn syntax(&self) -> &str {
//!         "heal"
//!     }
//!
//!     fn execute(&self, _args: &str, ctx: &mut Context<'_>) -> CommandOutcome {
//!         // Commands self-validate their context.
//!         if !ctx.is_in_combat() {
//!             ctx.show_message(devcon::reporter::ERROR_COMBAT_ONLY);
//!             return Ok(CommandResult::WrongContext);
//!         }
//!         ctx.show_message("Hull restored.");
//!         Ok(CommandResult::Success)
//!     }
//! }
//!
//! let registry = Arc::new(CommandRegistry::with_builtins());
//! registry.register("heal", Arc::new(Heal));
//!
//! let dispatcher = Dispatcher::new(Arc::new(ConsoleSettings::default()), registry);
//! let outcome = dispatcher.dispatch("heal | list", CommandContext::Combat);
//! assert!(outcome.succeeded());
//! assert_eq!(outcome.reports.len(), 2);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod commands;
pub mod context;
pub mod dispatch;
pub mod reporter;
pub mod settings;
pub mod similarity;
pub mod tokenizer;

pub use commands::{
    Command, CommandOutcome, CommandRegistry, CommandResult, Context, HelpCommand, ListCommand,
    RunScriptCommand, Script,
};
pub use context::CommandContext;
pub use dispatch::{CommandReport, DispatchOutcome, Dispatcher, ReportListener};
pub use reporter::Feedback;
pub use settings::{Color, ConfigError, ConsoleSettings, KeyStroke};
