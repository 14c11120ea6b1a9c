//! Crawl pipeline for both job boards
//!
//! This module contains the network side of a harvest:
//! - HTTP session construction and single-call fetching
//! - List-page parsing into totals and document references
//! - Pagination over every result page
//! - The worker pool that fetches and normalizes documents
//! - Run coordination and result collection

mod coordinator;
mod fetcher;
mod listing;
mod paginator;
mod pool;

pub use coordinator::{harvest, Harvest, Harvester};
pub use fetcher::{build_http_client, fetch_document, fetch_list_page};
pub use listing::{parse_list_page, ListPage};
pub use paginator::{collect_references, page_count};
pub use pool::{chunk_references, fetch_documents, PoolSettings, WorkerReport};

use crate::config::SourcesConfig;
use crate::filter::Filter;
use crate::query::{robota_ua, work_ua, QueryRequest};
use crate::vocabulary::Vocabulary;
use crate::ConfigResult;
use std::fmt;

/// A job board the crawler knows how to harvest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    WorkUa,
    RobotaUa,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::WorkUa, Site::RobotaUa];

    pub fn name(self) -> &'static str {
        match self {
            Self::WorkUa => "work.ua",
            Self::RobotaUa => "robota.ua",
        }
    }

    /// Number of documents on a full list page
    pub fn page_size(self) -> u32 {
        match self {
            Self::WorkUa => work_ua::PAGE_SIZE,
            Self::RobotaUa => robota_ua::PAGE_SIZE,
        }
    }

    /// Index of the first list page, 0 or 1 depending on the site
    pub fn first_page(self) -> u32 {
        match self {
            Self::WorkUa => work_ua::FIRST_PAGE,
            Self::RobotaUa => robota_ua::FIRST_PAGE,
        }
    }

    /// Builds the list-page request for the zero-based page `offset`
    pub fn build_query(
        self,
        filter: &Filter,
        offset: u32,
        vocabulary: &Vocabulary,
        sources: &SourcesConfig,
    ) -> ConfigResult<QueryRequest> {
        let page = self.first_page() + offset;
        match self {
            Self::WorkUa => work_ua::build_query(filter, page, vocabulary, &sources.work_ua),
            Self::RobotaUa => robota_ua::build_query(filter, page, vocabulary, &sources.robota_ua),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Absolute URL of a single résumé document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentReference(String);

impl DocumentReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unparsed document body together with where it came from
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub reference: DocumentReference,
    pub body: String,
}
