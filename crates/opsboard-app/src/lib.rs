// Library root: configuration, dataset sources, and the orchestrator that
// sits between the TUI and the rank selector.

pub mod app;
pub mod config;
pub mod protocol;
pub mod source;
