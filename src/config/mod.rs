//! Configuration module for Resume-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! The configuration carries the worker pool settings, HTTP session settings,
//! the endpoints of both job boards and the search filter.
//!
//! # Example
//!
//! ```no_run
//! use resume_harvest::config::load_config;
//! use resume_harvest::Vocabulary;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml"), &Vocabulary::default()).unwrap();
//! println!("Searching for: {}", config.filter.speciality);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{
    Config, CrawlerConfig, RobotaUaEndpoints, SourcesConfig, TransportConfig, WorkUaEndpoints,
};

pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
