// Keyboard input handling.
//
// Maps key events to view changes and, for actions, to UserCommands.
//
// Keys:
//   Left/Right, h/l, p   cycle the position picker
//   1-7                  select DH, C, 1B, 2B, 3B, SS, OF
//   Enter, a             Analyze the selected position
//   t                    Top 10 overall
//   Esc                  clear the selection
//   q                    quit (asks for confirmation)
//   Ctrl+C               quit immediately

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use opsboard_app::protocol::UserCommand;
use opsboard_core::{PositionCode, Trigger};

use super::ViewState;

/// Handle one key event. Returns a command when the key triggers an action.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows reports Release events as well; only act on Press.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('p') => {
            view_state.selected_position = next_position(view_state.selected_position);
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            view_state.selected_position = prev_position(view_state.selected_position);
            None
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = (c as usize) - ('1' as usize);
            view_state.selected_position = PositionCode::ALL.get(index).copied();
            None
        }
        KeyCode::Esc => {
            view_state.selected_position = None;
            None
        }
        // Analyze is disabled until a position is chosen.
        KeyCode::Enter | KeyCode::Char('a') => view_state
            .selected_position
            .map(|position| UserCommand::Load(Trigger::ByPosition(position))),
        KeyCode::Char('t') => Some(UserCommand::Load(Trigger::TopOverall)),
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }
        _ => None,
    }
}

fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('q') => Some(UserCommand::Quit),
        KeyCode::Char('n') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Unselected -> DH -> ... -> OF -> unselected.
fn next_position(current: Option<PositionCode>) -> Option<PositionCode> {
    match current {
        None => PositionCode::ALL.first().copied(),
        Some(position) => {
            let index = position_index(position);
            PositionCode::ALL.get(index + 1).copied()
        }
    }
}

fn prev_position(current: Option<PositionCode>) -> Option<PositionCode> {
    match current {
        None => PositionCode::ALL.last().copied(),
        Some(position) => match position_index(position) {
            0 => None,
            index => PositionCode::ALL.get(index - 1).copied(),
        },
    }
}

fn position_index(position: PositionCode) -> usize {
    PositionCode::ALL
        .iter()
        .position(|p| *p == position)
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    // -- Position picker --

    #[test]
    fn right_cycles_through_all_positions_and_back() {
        let mut state = ViewState::default();
        for expected in PositionCode::ALL {
            assert!(handle_key(key(KeyCode::Right), &mut state).is_none());
            assert_eq!(state.selected_position, Some(expected));
        }
        handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.selected_position, None);
    }

    #[test]
    fn left_wraps_from_unselected_to_outfield() {
        let mut state = ViewState::default();
        handle_key(key(KeyCode::Left), &mut state);
        assert_eq!(state.selected_position, Some(PositionCode::Outfield));
        handle_key(key(KeyCode::Left), &mut state);
        assert_eq!(state.selected_position, Some(PositionCode::ShortStop));
    }

    #[test]
    fn left_from_first_position_unselects() {
        let mut state = ViewState::default();
        state.selected_position = Some(PositionCode::DesignatedHitter);
        handle_key(key(KeyCode::Char('h')), &mut state);
        assert_eq!(state.selected_position, None);
    }

    #[test]
    fn digits_select_positions() {
        let mut state = ViewState::default();
        handle_key(key(KeyCode::Char('1')), &mut state);
        assert_eq!(state.selected_position, Some(PositionCode::DesignatedHitter));
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.selected_position, Some(PositionCode::FirstBase));
        handle_key(key(KeyCode::Char('7')), &mut state);
        assert_eq!(state.selected_position, Some(PositionCode::Outfield));
    }

    #[test]
    fn digits_outside_picker_are_ignored() {
        let mut state = ViewState::default();
        state.selected_position = Some(PositionCode::Catcher);
        assert!(handle_key(key(KeyCode::Char('8')), &mut state).is_none());
        assert!(handle_key(key(KeyCode::Char('0')), &mut state).is_none());
        assert_eq!(state.selected_position, Some(PositionCode::Catcher));
    }

    #[test]
    fn esc_clears_selection() {
        let mut state = ViewState::default();
        state.selected_position = Some(PositionCode::SecondBase);
        handle_key(key(KeyCode::Esc), &mut state);
        assert_eq!(state.selected_position, None);
    }

    // -- Actions --

    #[test]
    fn analyze_without_selection_does_nothing() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Enter), &mut state).is_none());
        assert!(handle_key(key(KeyCode::Char('a')), &mut state).is_none());
    }

    #[test]
    fn analyze_sends_selected_position() {
        let mut state = ViewState::default();
        state.selected_position = Some(PositionCode::ShortStop);
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut state),
            Some(UserCommand::Load(Trigger::ByPosition(PositionCode::ShortStop)))
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('a')), &mut state),
            Some(UserCommand::Load(Trigger::ByPosition(PositionCode::ShortStop)))
        );
    }

    #[test]
    fn t_requests_top_overall_regardless_of_selection() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(key(KeyCode::Char('t')), &mut state),
            Some(UserCommand::Load(Trigger::TopOverall))
        );
    }

    // -- Quit --

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = ViewState::default();
        assert_eq!(
            handle_key(ctrl_key(KeyCode::Char('c')), &mut state),
            Some(UserCommand::Quit)
        );
    }

    #[test]
    fn q_asks_for_confirmation() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Char('q')), &mut state).is_none());
        assert!(state.confirm_quit);
        assert_eq!(
            handle_key(key(KeyCode::Char('y')), &mut state),
            Some(UserCommand::Quit)
        );
    }

    #[test]
    fn confirm_quit_can_be_cancelled() {
        let mut state = ViewState::default();
        state.confirm_quit = true;
        assert!(handle_key(key(KeyCode::Char('n')), &mut state).is_none());
        assert!(!state.confirm_quit);

        state.confirm_quit = true;
        assert!(handle_key(key(KeyCode::Esc), &mut state).is_none());
        assert!(!state.confirm_quit);
    }

    #[test]
    fn confirm_quit_blocks_other_keys() {
        let mut state = ViewState::default();
        state.confirm_quit = true;
        assert!(handle_key(key(KeyCode::Char('t')), &mut state).is_none());
        handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.selected_position, None);
        assert!(state.confirm_quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = ViewState::default();
        let mut event = key(KeyCode::Char('t'));
        event.kind = KeyEventKind::Release;
        assert!(handle_key(event, &mut state).is_none());
    }
}
