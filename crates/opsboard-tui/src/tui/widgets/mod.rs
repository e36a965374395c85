// Dashboard widgets, one module per zone.

pub mod help_bar;
pub mod message;
pub mod player_list;
pub mod position_picker;
pub mod quit_confirm;
pub mod title_bar;
