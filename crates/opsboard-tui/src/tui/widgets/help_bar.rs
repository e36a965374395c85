// Help bar: key hints for the current mode.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

const NORMAL_KEYS: &[(&str, &str)] = &[
    ("\u{2190}/\u{2192}", "position"),
    ("1-7", "pick"),
    ("Enter", "analyze"),
    ("t", "top 10"),
    ("Esc", "clear"),
    ("q", "quit"),
];

const CONFIRM_KEYS: &[(&str, &str)] = &[("y", "quit"), ("n", "cancel")];

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let keys = if state.confirm_quit {
        CONFIRM_KEYS
    } else {
        NORMAL_KEYS
    };

    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, action) in keys {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {action} "),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_does_not_panic_in_either_mode() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        state.confirm_quit = true;
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
