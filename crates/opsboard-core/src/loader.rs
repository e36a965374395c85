// Dataset loader contract.
//
// The orchestrator only ever sees this trait; HTTP and CSV sources live in
// the app crate, tests use in-memory implementations.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::record::PlayerRecord;

#[async_trait]
pub trait DatasetLoader: Send + Sync {
    /// Fetch the current dataset. Zero records is a success.
    async fn load(&self) -> Result<Vec<PlayerRecord>, LoadError>;

    /// Short label for logs (URL, file path, ...).
    fn describe(&self) -> String;
}

/// Loader over a fixed set of records.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    records: Vec<PlayerRecord>,
}

impl StaticLoader {
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        StaticLoader { records }
    }
}

#[async_trait]
impl DatasetLoader for StaticLoader {
    async fn load(&self) -> Result<Vec<PlayerRecord>, LoadError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn static_loader_returns_its_records() {
        let loader: Arc<dyn DatasetLoader> = Arc::new(StaticLoader::new(vec![
            PlayerRecord::new("A", "OF", "0.900"),
            PlayerRecord::new("B", "C", "0.700"),
        ]));
        let records = loader.load().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player, "A");
        assert_eq!(loader.describe(), "static (2 records)");
    }

    #[tokio::test]
    async fn empty_static_loader_succeeds() {
        let loader = StaticLoader::default();
        assert!(loader.load().await.unwrap().is_empty());
    }
}
