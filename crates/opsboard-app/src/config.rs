// Configuration loading and parsing (config/opsboard.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dataset endpoint the dashboard was built against.
pub const DEFAULT_SOURCE_URL: &str =
    "https://v1.nocodeapi.com/ecupirate99/csv2json/pRAZmSaVoFTYWIBW?perPage=1";

pub const DEFAULT_TITLE: &str = "2024 MLB Batting - AI Analysis";

const CONFIG_FILE: &str = "opsboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where player rows come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Http,
    Csv,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout. Absent means the request waits as long as the
    /// server keeps the connection open.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub csv_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: default_title(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/opsboard.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config()` does that first.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config = parse_config(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

/// Copy `defaults/opsboard.toml` to `config/opsboard.toml` unless the latter
/// already exists. Returns the written path, or `None` when nothing was copied.
pub fn seed_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let seed = base_dir.join("defaults").join(CONFIG_FILE);
    let content = std::fs::read(&seed).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!(
            "no {} and no {} to seed it from ({e})",
            target.display(),
            seed.display()
        ),
    })?;

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", dir.display()),
        })?;
    }

    let written = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .and_then(|mut dest| std::io::Write::write_all(&mut dest, &content));
    match written {
        Ok(()) => Ok(Some(target)),
        // Another process seeded it first.
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(None),
        Err(e) => Err(ConfigError::DefaultsCopyError {
            message: format!("failed to write {}: {e}", target.display()),
        }),
    }
}

/// Load config relative to the current working directory, seeding it from
/// `defaults/` on first run.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    seed_config(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let source = &config.source;

    match source.kind {
        SourceKind::Http => {
            let url = source.url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    field: "source.url".into(),
                    message: format!("must be an http(s) URL, got {url:?}"),
                });
            }
        }
        SourceKind::Csv => {
            if source.csv_path.as_deref().map_or(true, |p| p.trim().is_empty()) {
                return Err(ConfigError::ValidationError {
                    field: "source.csv_path".into(),
                    message: "required when source.kind = \"csv\"".into(),
                });
            }
        }
    }

    if source.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError {
            field: "source.timeout_secs".into(),
            message: "must be > 0 when set".into(),
        });
    }

    if config.display.title.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "display.title".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
