// Local CSV dataset loader.
//
// Reads the spreadsheet the HTTP endpoint is generated from, for offline use.
// Columns are matched by header name; PLAYER and POS are required, a missing
// OPS column leaves every row unrated.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use opsboard_core::{DatasetLoader, LoadError, PlayerRecord};

use super::row_record;

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawCsvRow {
    PLAYER: String,
    POS: String,
    #[serde(default)]
    OPS: String,
}

pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvLoader { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetLoader for CsvLoader {
    async fn load(&self) -> Result<Vec<PlayerRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            LoadError::fetch(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let records = load_records_from_reader(bytes.as_slice())?;
        info!("Loaded {} player rows from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse CSV rows from any reader.
pub fn load_records_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::malformed(format!("unreadable CSV header: {e}")))?;
    for required in ["PLAYER", "POS"] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::malformed(format!(
                "CSV header is missing the {required} column"
            )));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawCsvRow>().enumerate() {
        match result {
            Ok(raw) => records.extend(row_record(idx, &raw.PLAYER, &raw.POS, raw.OPS)),
            Err(e) => {
                warn!("skipping malformed CSV row: {}", e);
            }
        }
    }
    Ok(records)
}
