use thiserror::Error;

/// Why a dataset load produced no records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The data could not be retrieved at all (network, HTTP status, body
    /// that is not JSON, unreadable file).
    #[error("failed to fetch dataset: {message}")]
    Fetch { message: String },

    /// The data arrived but does not contain the expected record collection.
    #[error("dataset has unexpected shape: {message}")]
    MalformedData { message: String },
}

impl LoadError {
    pub fn fetch(message: impl Into<String>) -> Self {
        LoadError::Fetch {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        LoadError::MalformedData {
            message: message.into(),
        }
    }
}
