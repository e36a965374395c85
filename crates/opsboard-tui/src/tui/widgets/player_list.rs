// Ranked player list, used for both the by-position and top-10 panels.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use opsboard_core::PlayerRecord;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    players: &[PlayerRecord],
    loading: bool,
) {
    let mut title_spans = vec![Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if loading {
        title_spans.push(Span::styled(
            "(loading...) ",
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(ratatui::text::Line::from(title_spans));

    let items: Vec<ListItem> = players
        .iter()
        .enumerate()
        .map(|(i, p)| list_item(i, p))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// "1. Aaron Judge - OF - OPS: 1.159". Unrated rows are dimmed.
pub fn format_row(index: usize, player: &PlayerRecord) -> String {
    format!("{}. {}", index + 1, player.display_line())
}

fn list_item(index: usize, player: &PlayerRecord) -> ListItem<'static> {
    let style = if player.is_rated() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    ListItem::new(format_row(index, player)).style(style)
}
