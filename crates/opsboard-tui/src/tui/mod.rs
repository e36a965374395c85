// TUI module: terminal dashboard.
//
// Uses ratatui + crossterm for rendering and input handling.
// Receives UiUpdate messages from the app orchestrator via mpsc channel.
// Sends UserCommand messages back to the app via mpsc channel.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use opsboard_app::config::DEFAULT_TITLE;
use opsboard_app::protocol::{UiUpdate, UserCommand};
use opsboard_core::{LoadError, Outcome, PlayerRecord, PositionCode, Trigger, TriggerKind};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Everything the renderer needs. Only the TUI task touches it.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub title: String,
    /// Picker selection. `None` until the user chooses a position.
    pub selected_position: Option<PositionCode>,
    /// Position whose players are currently listed.
    pub shown_position: Option<PositionCode>,
    pub position_players: Vec<PlayerRecord>,
    pub top_players: Vec<PlayerRecord>,
    /// The shared message line.
    pub message: Option<String>,
    pub position_loading: bool,
    pub top_loading: bool,
    pub last_loaded: Option<DateTime<Local>>,
    pub confirm_quit: bool,
}

impl ViewState {
    pub fn new(title: impl Into<String>) -> Self {
        ViewState {
            title: title.into(),
            selected_position: None,
            shown_position: None,
            position_players: Vec::new(),
            top_players: Vec::new(),
            message: None,
            position_loading: false,
            top_loading: false,
            last_loaded: None,
            confirm_quit: false,
        }
    }

    pub fn is_loading(&self, kind: TriggerKind) -> bool {
        match kind {
            TriggerKind::ByPosition => self.position_loading,
            TriggerKind::TopOverall => self.top_loading,
        }
    }

    fn set_loading(&mut self, kind: TriggerKind, loading: bool) {
        match kind {
            TriggerKind::ByPosition => self.position_loading = loading,
            TriggerKind::TopOverall => self.top_loading = loading,
        }
    }

    fn clear_list(&mut self, kind: TriggerKind) {
        match kind {
            TriggerKind::ByPosition => {
                self.position_players.clear();
                self.shown_position = None;
            }
            TriggerKind::TopOverall => self.top_players.clear(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(DEFAULT_TITLE)
    }
}

/// Fold an update from the orchestrator into the view.
///
/// The message line is shared: any start clears it and the most recent
/// finish sets it. A fetch failure leaves both lists as they were.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::LoadStarted { kind, .. } => {
            state.message = None;
            state.set_loading(kind, true);
        }
        UiUpdate::LoadFinished {
            trigger,
            outcome,
            finished_at,
        } => {
            let kind = trigger.kind();
            state.set_loading(kind, false);
            state.message = outcome.message(kind).map(str::to_string);

            match outcome {
                Outcome::Ranked(players) => {
                    match trigger {
                        Trigger::ByPosition(position) => {
                            state.position_players = players;
                            state.shown_position = Some(position);
                        }
                        Trigger::TopOverall => state.top_players = players,
                    }
                    state.last_loaded = Some(finished_at);
                }
                Outcome::Empty | Outcome::Failed(LoadError::MalformedData { .. }) => {
                    state.clear_list(kind);
                }
                Outcome::Failed(LoadError::Fetch { .. }) => {}
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = layout::build_layout(frame.area());

    widgets::title_bar::render(frame, layout.title_bar, state);
    widgets::position_picker::render(frame, layout.picker, state);
    widgets::message::render(frame, layout.message, state.message.as_deref());

    let position_title = match state.shown_position {
        Some(position) => format!(" Top {position} by OPS "),
        None => " Top Players by Position ".to_string(),
    };
    widgets::player_list::render(
        frame,
        layout.position_list,
        &position_title,
        &state.position_players,
        state.position_loading,
    );
    widgets::player_list::render(
        frame,
        layout.top_list,
        " Top 10 MLB Batters by OPS ",
        &state.top_players,
        state.top_loading,
    );

    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the dashboard until the user quits or the app loop goes away.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    title: String,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal before the default hook prints the panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(title);
    let mut event_stream = EventStream::new();

    // ~30fps
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => break Ok(()),
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            if cmd_tx.send(cmd).await.is_err() || quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => break Err(anyhow::Error::from(e)),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::from(e));
                }
            }
        }
    };

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
