// Dataset sources: HTTP (csv2json JSON payload) and local CSV.

pub mod csv_file;
pub mod http_json;
pub mod payload;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::warn;

use opsboard_core::{DatasetLoader, PlayerRecord};

use crate::config::{SourceConfig, SourceKind};

/// Build the loader selected by `[source]`.
pub fn build_loader(source: &SourceConfig) -> anyhow::Result<Arc<dyn DatasetLoader>> {
    match source.kind {
        SourceKind::Http => {
            let timeout = source.timeout_secs.map(Duration::from_secs);
            let loader = http_json::HttpLoader::new(source.url.trim(), timeout)
                .context("failed to build HTTP client")?;
            Ok(Arc::new(loader))
        }
        SourceKind::Csv => {
            let path = source
                .csv_path
                .as_deref()
                .context("source.csv_path is required for the csv source")?;
            Ok(Arc::new(csv_file::CsvLoader::new(path.trim())))
        }
    }
}

/// Build a record from one row's cells, or `None` when the name or position
/// is blank. The name is trimmed; the position is kept as sent so that the
/// position filter stays an exact match.
pub(crate) fn row_record(
    row: usize,
    player: &str,
    position: &str,
    ops_text: String,
) -> Option<PlayerRecord> {
    let player = player.trim();
    if player.is_empty() || position.trim().is_empty() {
        warn!("skipping row {}: missing PLAYER or POS", row);
        return None;
    }
    Some(PlayerRecord::new(player, position, ops_text))
}
