//! Command dispatch.
//!
//! One input line is fully processed before the next is accepted: split into
//! sub-commands, then for each in order resolve → execute → report. A failing
//! sub-command never aborts its siblings.

use crate::commands::{CommandRegistry, CommandResult, Context};
use crate::context::CommandContext;
use crate::reporter;
use crate::settings::ConsoleSettings;
use crate::tokenizer;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info_span};

/// Per-sub-command feedback handed to the host UI.
#[derive(Debug, Clone)]
pub struct CommandReport {
    /// The sub-command text as the player entered it.
    pub entered: String,
    /// Registered name that actually ran; differs from the entered name when
    /// typo correction kicked in, `None` when nothing resolved.
    pub resolved: Option<String>,
    /// Result the command invocation ended with.
    pub result: CommandResult,
    /// Composed display text, already wrapped to the configured width.
    pub message: String,
    /// Sound cue configured for the result, if any.
    pub sound: Option<String>,
}

/// Everything produced by dispatching one input line.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// One report per sub-command, in execution order.
    pub reports: Vec<CommandReport>,
}

impl DispatchOutcome {
    /// True only if every sub-command returned
    /// [`CommandResult::Success`] (vacuously true for an empty line).
    ///
    /// Meant for external callers such as test harnesses; the interactive
    /// feedback is the per-command reports.
    pub fn succeeded(&self) -> bool {
        self.reports.iter().all(|r| r.result.is_success())
    }
}

/// Listener invoked with each report as soon as its sub-command finishes.
pub type ReportListener = Box<dyn Fn(&CommandReport) + Send + Sync>;

/// Resolves and executes entered command lines against a registry.
pub struct Dispatcher {
    settings: Arc<ConsoleSettings>,
    registry: Arc<CommandRegistry>,
    listener: Option<ReportListener>,
}

impl Dispatcher {
    /// Create a dispatcher over the given settings and registry.
    pub fn new(settings: Arc<ConsoleSettings>, registry: Arc<CommandRegistry>) -> Self {
        Self {
            settings,
            registry,
            listener: None,
        }
    }

    /// Install a listener receiving each [`CommandReport`] as it is produced,
    /// so feedback appears per command instead of after the whole line.
    pub fn with_listener(
        mut self,
        listener: impl Fn(&CommandReport) + Send + Sync + 'static,
    ) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Process one input line in the given context.
    ///
    /// Sub-commands run strictly in order; each produces exactly one report.
    pub fn dispatch(&self, line: &str, context: CommandContext) -> DispatchOutcome {
        let subs = tokenizer::split_commands(line, &self.settings.command_separator);
        debug!(count = subs.len(), "dispatching input line");

        let mut outcome = DispatchOutcome::default();
        for sub in subs {
            let report = self.run_sub_command(&sub, context);
            if let Some(listener) = &self.listener {
                listener(&report);
            }
            outcome.reports.push(report);
        }
        outcome
    }

    fn run_sub_command(&self, sub: &str, context: CommandContext) -> CommandReport {
        let (name, args) = tokenizer::split_command_and_args(sub);

        // RESOLVE: exact lookup first, then typo correction. A corrected
        // match auto-runs but the notice names both spellings.
        let mut notice = None;
        let resolved = match self.registry.lookup(&name) {
            Some(command) => Some((name.clone(), command)),
            None => {
                let threshold = self.settings.typo_correction_threshold;
                match self.registry.find_closest(&name, threshold) {
                    Some((matched, command)) => {
                        notice = Some(format!(
                            "No command '{name}' found, running '{matched}' instead."
                        ));
                        Some((matched, command))
                    }
                    None => None,
                }
            }
        };

        let mut lines = Vec::new();
        let mut usage = None;
        if self.settings.show_entered_commands {
            lines.push(format!("> {sub}"));
        }
        if let Some(notice) = notice {
            lines.push(notice);
        }

        let (resolved_name, result) = match resolved {
            None => {
                lines.push(format!("No such command '{name}'."));
                (None, CommandResult::DidNotRun)
            }
            Some((resolved_name, command)) => {
                let span = info_span!("command", name = %resolved_name);
                let _guard = span.enter();

                let started = Instant::now();
                let mut ctx = Context::new(context, &self.settings, &self.registry);
                // EXECUTE: failures and panics downgrade to ERROR so one bad
                // command cannot take the rest of the line (or the host) down.
                let exec =
                    panic::catch_unwind(AssertUnwindSafe(|| command.execute(&args, &mut ctx)));
                let result = match exec {
                    Ok(Ok(result)) => result,
                    Ok(Err(e)) => {
                        error!(command = %resolved_name, error = %e, "command failed");
                        CommandResult::Error
                    }
                    Err(_) => {
                        error!(command = %resolved_name, "command panicked");
                        CommandResult::Error
                    }
                };
                debug!(
                    command = %resolved_name,
                    result = result.as_str(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "command finished"
                );

                lines.extend(ctx.take_messages());
                if result == CommandResult::BadSyntax && !command.syntax().is_empty() {
                    usage = Some(format!("Usage: {}", command.syntax()));
                }
                (Some(resolved_name), result)
            }
        };

        // REPORT: one feedback entry per sub-command, no batching.
        let feedback = reporter::report(result, &self.settings);
        if !feedback.text.is_empty() && result != CommandResult::DidNotRun {
            lines.push(feedback.text);
        }
        if let Some(usage) = usage {
            lines.push(usage);
        }
        let message =
            reporter::wrap_line(&lines.join("\n"), self.settings.output_max_line_length);

        CommandReport {
            entered: sub.to_string(),
            resolved: resolved_name,
            result,
            message,
            sound: feedback.sound,
        }
    }
}
