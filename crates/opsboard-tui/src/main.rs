// OPS dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Build the dataset loader for the configured source
// 4. Create mpsc channels and spawn the app loop
// 5. Run the TUI until the user quits
// 6. Cleanup on exit

use opsboard_app::{app, config, source};
use opsboard_tui::{logging, tui};

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_path = logging::init_tracing()?;
    info!("opsboard starting up, logging to {}", log_path.display());

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: source={:?}, title={:?}",
        config.source.kind, config.display.title
    );

    let loader = source::build_loader(&config.source).context("failed to build dataset loader")?;
    info!("Dataset source: {}", loader.describe());

    let (load_tx, load_rx) = mpsc::channel(64);
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let app_state = app::AppState::new(loader, load_tx);

    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(load_rx, cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    if let Err(e) = tui::run(ui_rx, cmd_tx, config.display.title.clone()).await {
        error!("TUI error: {}", e);
    }

    // In-flight loads are not cancelled; give the app loop a moment to drain.
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("opsboard shut down cleanly");
    Ok(())
}
