//! Query builders
//!
//! Each source turns the shared [`Filter`](crate::filter::Filter) into its own
//! wire form: work.ua takes a search URL with a query string, robota.ua takes
//! a JSON body posted to its search endpoint. Builders are pure; they never
//! touch the network.

pub mod robota_ua;
pub mod work_ua;

use serde_json::Value;
use std::fmt;
use url::Url;

/// A single list-page request, one per page fetched
#[derive(Debug, Clone, PartialEq)]
pub enum QueryRequest {
    /// GET of a URL carrying the whole query in its query string
    Get { url: Url },

    /// POST of a JSON body to a fixed endpoint
    Post { url: Url, body: Value },
}

impl QueryRequest {
    pub fn url(&self) -> &Url {
        match self {
            Self::Get { url } | Self::Post { url, .. } => url,
        }
    }
}

impl fmt::Display for QueryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get { url } => write!(f, "GET {}", url),
            Self::Post { url, body } => write!(f, "POST {} {}", url, body),
        }
    }
}
