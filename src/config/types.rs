use crate::filter::Filter;
use serde::Deserialize;

/// Main configuration structure for Resume-Harvest
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub transport: TransportConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    pub filter: Filter,
}

/// Worker pool and failure policy
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Number of worker threads, each with its own session and event loop
    pub workers: u32,

    /// Maximum number of in-flight document fetches per worker
    pub max_concurrent_documents: u32,

    /// Log and skip documents that fail to fetch or parse instead of
    /// aborting the run
    #[serde(default)]
    pub skip_failed_documents: bool,
}

/// HTTP session settings shared by every session the crawler opens
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransportConfig {
    pub user_agent: String,
    pub accept_language: String,

    /// Whole-request deadline in seconds
    pub timeout_secs: u64,

    pub connect_timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0 Safari/537.36"
                .to_string(),
            accept_language: "uk-UA,uk;q=0.9,en;q=0.8".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Endpoints of both job boards
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SourcesConfig {
    pub work_ua: WorkUaEndpoints,
    pub robota_ua: RobotaUaEndpoints,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WorkUaEndpoints {
    /// Site root, used to resolve relative résumé links
    pub base_url: String,

    /// Prefix of the search path; location and speciality are appended to it
    pub resumes_url: String,
}

impl Default for WorkUaEndpoints {
    fn default() -> Self {
        Self {
            base_url: "https://www.work.ua".to_string(),
            resumes_url: "https://www.work.ua/resumes".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RobotaUaEndpoints {
    /// Search endpoint receiving the JSON request body
    pub search_url: String,

    /// Prefix of the single-résumé endpoint; the résumé id is appended
    pub resume_url: String,

    /// Prefix of the public candidate page used as the record link
    pub candidate_url: String,
}

impl Default for RobotaUaEndpoints {
    fn default() -> Self {
        Self {
            search_url: "https://employer-api.robota.ua/resume/search".to_string(),
            resume_url: "https://employer-api.robota.ua/resume/".to_string(),
            candidate_url: "https://robota.ua/candidates/".to_string(),
        }
    }
}
