// Title bar: dashboard title plus the time of the last successful load.

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let spans = vec![
        Span::styled(
            format!(" {} ", state.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
        Span::styled(
            last_loaded_text(state.last_loaded),
            Style::default().fg(Color::White),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

pub fn last_loaded_text(last_loaded: Option<DateTime<Local>>) -> String {
    match last_loaded {
        Some(at) => format!("Last loaded {}", at.format("%H:%M:%S")),
        None => "Not loaded yet".to_string(),
    }
}
