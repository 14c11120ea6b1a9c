use crate::config::types::{Config, CrawlerConfig, SourcesConfig, TransportConfig};
use crate::vocabulary::Vocabulary;
use crate::ConfigError;
use reqwest::header::HeaderValue;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config, vocabulary: &Vocabulary) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_transport_config(&config.transport)?;
    validate_sources(&config.sources)?;
    config.filter.validate(vocabulary)?;
    Ok(())
}

/// Validates worker pool configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.workers < 1 || config.workers > 64 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 64, got {}",
            config.workers
        )));
    }

    if config.max_concurrent_documents < 1 || config.max_concurrent_documents > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_documents must be between 1 and 100, got {}",
            config.max_concurrent_documents
        )));
    }

    Ok(())
}

fn validate_transport_config(config: &TransportConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    for (field, value) in [
        ("user-agent", &config.user_agent),
        ("accept-language", &config.accept_language),
    ] {
        if HeaderValue::from_str(value).is_err() {
            return Err(ConfigError::Validation(format!(
                "{} is not a valid header value: {:?}",
                field, value
            )));
        }
    }

    if config.timeout_secs < 1 || config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeouts must be >= 1s, got timeout={}s connect={}s",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

fn validate_sources(sources: &SourcesConfig) -> Result<(), ConfigError> {
    validate_endpoint("work-ua.base-url", &sources.work_ua.base_url)?;
    validate_endpoint("work-ua.resumes-url", &sources.work_ua.resumes_url)?;
    validate_endpoint("robota-ua.search-url", &sources.robota_ua.search_url)?;
    validate_endpoint("robota-ua.resume-url", &sources.robota_ua.resume_url)?;
    validate_endpoint("robota-ua.candidate-url", &sources.robota_ua.candidate_url)?;
    Ok(())
}

/// Endpoints must be absolute http(s) URLs
fn validate_endpoint(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            name, value
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("x", "https://www.work.ua/resumes").is_ok());
        assert!(validate_endpoint("x", "http://127.0.0.1:8080/").is_ok());

        assert!(validate_endpoint("x", "").is_err());
        assert!(validate_endpoint("x", "www.work.ua").is_err());
        assert!(validate_endpoint("x", "ftp://work.ua/").is_err());
    }

    #[test]
    fn test_validate_crawler_limits() {
        let mut crawler = CrawlerConfig {
            workers: 4,
            max_concurrent_documents: 2,
            skip_failed_documents: false,
        };
        assert!(validate_crawler_config(&crawler).is_ok());

        crawler.workers = 0;
        assert!(validate_crawler_config(&crawler).is_err());

        crawler.workers = 4;
        crawler.max_concurrent_documents = 0;
        assert!(validate_crawler_config(&crawler).is_err());
    }

    #[test]
    fn test_validate_transport() {
        let mut transport = TransportConfig::default();
        assert!(validate_transport_config(&transport).is_ok());

        transport.timeout_secs = 0;
        assert!(validate_transport_config(&transport).is_err());
    }

    #[test]
    fn test_invalid_header_values_rejected() {
        let transport = TransportConfig {
            accept_language: "uk\nUA".to_string(),
            ..TransportConfig::default()
        };
        match validate_transport_config(&transport) {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("accept-language")),
            other => panic!("expected validation error, got {:?}", other),
        }

        let transport = TransportConfig {
            user_agent: "bot\r\nX-Injected: 1".to_string(),
            ..TransportConfig::default()
        };
        assert!(validate_transport_config(&transport).is_err());
    }
}
