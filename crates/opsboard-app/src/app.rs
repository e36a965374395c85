// Application orchestration.
//
// Receives user commands from the TUI, runs each load as its own tokio task,
// and forwards completed outcomes back to the TUI. Loads are never cancelled;
// every request carries a per-trigger-kind generation number and only the
// result of the most recently issued request of that kind is forwarded.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use opsboard_core::{evaluate, DatasetLoader, Outcome, Trigger, TriggerKind};

use crate::protocol::{UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// A finished load, sent from the spawned task back to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadEvent {
    pub trigger: Trigger,
    pub generation: u64,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    /// Shared with every spawned load task.
    pub loader: Arc<dyn DatasetLoader>,
    /// Generation of the latest by-position request. 0 means none yet.
    pub position_generation: u64,
    /// Generation of the latest top-overall request. 0 means none yet.
    pub top_generation: u64,
    /// Spawned load tasks report back through a clone of this sender.
    pub load_tx: mpsc::Sender<LoadEvent>,
}

impl AppState {
    pub fn new(loader: Arc<dyn DatasetLoader>, load_tx: mpsc::Sender<LoadEvent>) -> Self {
        AppState {
            loader,
            position_generation: 0,
            top_generation: 0,
            load_tx,
        }
    }

    pub fn generation(&self, kind: TriggerKind) -> u64 {
        match kind {
            TriggerKind::ByPosition => self.position_generation,
            TriggerKind::TopOverall => self.top_generation,
        }
    }

    fn next_generation(&mut self, kind: TriggerKind) -> u64 {
        let slot = match kind {
            TriggerKind::ByPosition => &mut self.position_generation,
            TriggerKind::TopOverall => &mut self.top_generation,
        };
        *slot += 1;
        *slot
    }

    /// Spawn a load for `trigger` and return its generation.
    ///
    /// Earlier requests of the same kind keep running; their results are
    /// dropped on arrival.
    pub fn start_load(&mut self, trigger: Trigger) -> u64 {
        let generation = self.next_generation(trigger.kind());
        let loader = Arc::clone(&self.loader);
        let tx = self.load_tx.clone();

        info!(
            "Starting load {:?} (gen: {}) from {}",
            trigger,
            generation,
            loader.describe()
        );

        tokio::spawn(async move {
            let outcome = execute(loader.as_ref(), &trigger).await;
            let _ = tx
                .send(LoadEvent {
                    trigger,
                    generation,
                    outcome,
                })
                .await;
        });

        generation
    }

    /// Whether `event` answers the latest request of its kind.
    pub fn is_current(&self, event: &LoadEvent) -> bool {
        event.generation == self.generation(event.trigger.kind())
    }
}

/// Load the dataset once and reduce it to the outcome of `trigger`.
pub async fn execute(loader: &dyn DatasetLoader, trigger: &Trigger) -> Outcome {
    let loaded = loader.load().await;
    match &loaded {
        Ok(records) => debug!("{:?}: {} records loaded", trigger, records.len()),
        Err(e) => warn!("{:?}: load failed: {}", trigger, e),
    }
    let outcome = evaluate(trigger, loaded);
    if let Outcome::Ranked(players) = &outcome {
        info!("{:?}: ranked {} players", trigger, players.len());
    }
    outcome
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the orchestrator until the TUI quits or goes away.
///
/// Listens on two channels using `tokio::select!`:
/// - `cmd_rx`: commands from the TUI
/// - `load_rx`: finished loads from spawned tasks
pub async fn run(
    mut load_rx: mpsc::Receiver<LoadEvent>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(cmd) => {
                        if !handle_user_command(&mut state, cmd, &ui_tx).await {
                            break;
                        }
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            Some(event) = load_rx.recv() => {
                if !handle_load_event(&state, event, &ui_tx).await {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns `false` when the loop should stop.
async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> bool {
    match cmd {
        UserCommand::Load(trigger) => {
            let generation = state.start_load(trigger);
            ui_tx
                .send(UiUpdate::LoadStarted {
                    kind: trigger.kind(),
                    generation,
                })
                .await
                .is_ok()
        }
        UserCommand::Quit => {
            info!("Quit requested");
            false
        }
    }
}

/// Forward `event` if it is current. Returns `false` when the TUI is gone.
async fn handle_load_event(
    state: &AppState,
    event: LoadEvent,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> bool {
    if !state.is_current(&event) {
        debug!(
            "Discarding stale result for {:?} (gen {} < {})",
            event.trigger,
            event.generation,
            state.generation(event.trigger.kind())
        );
        return true;
    }

    ui_tx
        .send(UiUpdate::LoadFinished {
            trigger: event.trigger,
            outcome: event.outcome,
            finished_at: Local::now(),
        })
        .await
        .is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
