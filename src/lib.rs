//! Resume-Harvest: a résumé crawler for Ukrainian job boards
//!
//! This crate translates a structured search filter into site-specific queries,
//! walks the paginated result lists of work.ua and robota.ua, fetches every
//! résumé document through a pool of workers, and normalizes the heterogeneous
//! HTML/JSON documents into one canonical [`ResumeRecord`] shape.

pub mod config;
pub mod crawler;
pub mod filter;
pub mod normalize;
pub mod query;
pub mod vocabulary;

use thiserror::Error;

/// Main error type for Resume-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request to {url} failed: {status} {reason}")]
    Transport {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("No resumes found for {query}")]
    NotFound { query: String },

    #[error("Failed to parse list page for {query}: {source}")]
    ListParse {
        query: String,
        source: DocumentError,
    },

    #[error("Failed to parse document {reference}: {source}")]
    DocumentParse {
        reference: String,
        source: DocumentError,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Worker failure: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Unknown {table} code: {code}")]
    UnknownCode { table: &'static str, code: u32 },
}

/// Field extraction errors raised while normalizing a single document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("malformed field '{field}': {value:?}")]
    Malformed { field: &'static str, value: String },

    #[error("unknown {table} code: {code}")]
    UnknownCode { table: &'static str, code: u32 },

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocumentError {
    pub(crate) fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            value: value.into(),
        }
    }
}

/// Result type alias for Resume-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for document normalization
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{harvest, Harvest, Site};
pub use filter::Filter;
pub use normalize::ResumeRecord;
pub use vocabulary::Vocabulary;
