// Terminal front end for the OPS dashboard.

pub mod logging;
pub mod tui;
