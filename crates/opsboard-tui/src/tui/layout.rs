// Screen layout.
//
// +--------------------------------------------------+
// | Title Bar (1 row)                                 |
// +--------------------------------------------------+
// | Position Picker (3 rows)                          |
// +--------------------------------------------------+
// | Message (3 rows)                                  |
// +-------------------------+------------------------+
// | Position List (50%)      | Top 10 List (50%)      |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone)]
pub struct AppLayout {
    pub title_bar: Rect,
    pub picker: Rect,
    pub message: Rect,
    pub position_list: Rect,
    pub top_list: Rect,
    pub help_bar: Rect,
}

pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(3), // picker
            Constraint::Length(3), // message
            Constraint::Min(5),    // lists
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[3]);

    AppLayout {
        title_bar: vertical[0],
        picker: vertical[1],
        message: vertical[2],
        position_list: lists[0],
        top_list: lists[1],
        help_bar: vertical[4],
    }
}
