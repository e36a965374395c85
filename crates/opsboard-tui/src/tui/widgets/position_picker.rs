// Position picker: the seven codes with the current selection highlighted,
// followed by the Analyze and Top 10 actions.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use opsboard_core::PositionCode;

use crate::tui::ViewState;

pub const PLACEHOLDER: &str = "Select a position";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Position ");
    let paragraph = Paragraph::new(Line::from(picker_spans(state))).block(block);
    frame.render_widget(paragraph, area);
}

pub fn picker_spans(state: &ViewState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    if state.selected_position.is_none() {
        spans.push(Span::styled(
            format!("{PLACEHOLDER}: "),
            Style::default().fg(Color::Gray),
        ));
    }

    for (i, position) in PositionCode::ALL.iter().enumerate() {
        let label = format!("[{}:{}]", i + 1, position.code());
        let style = if state.selected_position == Some(*position) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "[Enter] Analyze",
        action_style(analyze_enabled(state) && !state.position_loading),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled("[t] Top 10", action_style(!state.top_loading)));
    spans
}

/// Analyze stays disabled until a position is chosen.
pub fn analyze_enabled(state: &ViewState) -> bool {
    state.selected_position.is_some()
}

fn action_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn unselected_picker_shows_placeholder_and_all_codes() {
        let state = ViewState::default();
        let text = text_of(&picker_spans(&state));
        assert!(text.starts_with(PLACEHOLDER));
        for code in ["DH", "C", "1B", "2B", "3B", "SS", "OF"] {
            assert!(text.contains(code), "missing {code}");
        }
        assert!(!analyze_enabled(&state));
    }

    #[test]
    fn selected_position_is_highlighted() {
        let mut state = ViewState::default();
        state.selected_position = Some(PositionCode::ThirdBase);
        let spans = picker_spans(&state);

        assert!(!text_of(&spans).contains(PLACEHOLDER));
        let highlighted: Vec<&Span> = spans
            .iter()
            .filter(|s| s.style.bg == Some(Color::Cyan))
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].content, "[5:3B]");
        assert!(analyze_enabled(&state));
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
