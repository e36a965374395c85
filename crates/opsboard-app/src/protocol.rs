// Messages between the TUI and the app orchestrator.

use chrono::{DateTime, Local};

use opsboard_core::{Outcome, Trigger, TriggerKind};

/// Commands sent from the TUI to the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    /// Start a load for the given trigger.
    Load(Trigger),
    Quit,
}

/// Updates pushed from the orchestrator to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    /// A request for `kind` was issued.
    LoadStarted { kind: TriggerKind, generation: u64 },
    /// The most recent request for `trigger` completed.
    LoadFinished {
        trigger: Trigger,
        outcome: Outcome,
        finished_at: DateTime<Local>,
    },
}
