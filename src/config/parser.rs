use crate::config::types::Config;
use crate::config::validation::validate;
use crate::vocabulary::Vocabulary;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// The filter section is validated against `vocabulary`, so an unknown city,
/// schedule or language code is rejected here rather than during the crawl.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use resume_harvest::config::load_config;
/// use resume_harvest::Vocabulary;
///
/// let config = load_config(Path::new("harvest.toml"), &Vocabulary::default()).unwrap();
/// println!("Workers: {}", config.crawler.workers);
/// ```
pub fn load_config(path: &Path, vocabulary: &Vocabulary) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content, vocabulary)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str, vocabulary: &Vocabulary) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config, vocabulary)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so that a result set can be traced back to the exact
/// configuration that produced it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(
    path: &Path,
    vocabulary: &Vocabulary,
) -> Result<(Config, String), ConfigError> {
    let config = load_config(path, vocabulary)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}
