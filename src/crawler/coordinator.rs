//! Harvest coordinator - run orchestration and result collection
//!
//! A run for one site goes through three stages:
//! - the pagination driver collects every document reference
//! - the worker pool fetches and normalizes the documents
//! - the collector merges the worker reports into the final records
//!
//! The collector is the only place where a document failure is judged. With
//! `skip-failed-documents` off, the first failure fails the run once every
//! worker has finished; with it on, failures are logged and counted.

use crate::config::Config;
use crate::crawler::{
    build_http_client, collect_references, fetch_documents, PoolSettings, Site, WorkerReport,
};
use crate::normalize::ResumeRecord;
use crate::vocabulary::Vocabulary;
use crate::{DocumentError, HarvestError, Result};
use chrono::NaiveDate;
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;

/// Outcome of a harvest on one site
#[derive(Debug)]
pub struct Harvest {
    pub site: Site,

    /// Records in no particular order
    pub records: Vec<ResumeRecord>,

    /// Documents that failed and were skipped
    pub skipped: usize,
}

/// Runs harvests with one configuration
pub struct Harvester {
    config: Config,
    vocabulary: Arc<Vocabulary>,
    client: Client,
    today: NaiveDate,
}

impl Harvester {
    /// Creates a harvester; the reference date is captured here, once
    pub fn new(config: Config, vocabulary: Vocabulary) -> Result<Self> {
        let client = build_http_client(&config.transport)?;

        Ok(Self {
            config,
            vocabulary: Arc::new(vocabulary),
            client,
            today: chrono::Local::now().date_naive(),
        })
    }

    /// Overrides the date open-ended experience is measured against
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Harvests every résumé matching the configured filter on `site`
    pub async fn run(&self, site: Site) -> Result<Harvest> {
        let start_time = Instant::now();

        let references = collect_references(
            &self.client,
            site,
            &self.config.filter,
            &self.vocabulary,
            &self.config.sources,
        )
        .await?;
        tracing::info!("Collected {} document references from {}", references.len(), site);

        let settings = Arc::new(PoolSettings {
            site,
            workers: self.config.crawler.workers as usize,
            max_concurrent: self.config.crawler.max_concurrent_documents as usize,
            transport: self.config.transport.clone(),
            vocabulary: Arc::clone(&self.vocabulary),
            today: self.today,
            candidate_url: self.config.sources.robota_ua.candidate_url.clone(),
        });
        let reports = fetch_documents(references, settings).await?;

        let harvest = collect(site, reports, self.config.crawler.skip_failed_documents)?;
        tracing::info!(
            "Harvest of {} completed: {} resumes, {} skipped in {:?}",
            site,
            harvest.records.len(),
            harvest.skipped,
            start_time.elapsed()
        );

        Ok(harvest)
    }
}

/// Runs a single harvest of `site`
///
/// This is the main entry point for library callers. It builds a
/// [`Harvester`] for the configuration and runs it once.
pub async fn harvest(site: Site, config: Config, vocabulary: Vocabulary) -> Result<Harvest> {
    Harvester::new(config, vocabulary)?.run(site).await
}

/// Merges worker reports, applying the failure policy
fn collect(site: Site, reports: Vec<WorkerReport>, skip_failed: bool) -> Result<Harvest> {
    let mut records = Vec::new();
    let mut skipped = 0;
    let mut first_error = None;

    for report in reports {
        for outcome in report.outcomes {
            match outcome.and_then(checked) {
                Ok(record) => records.push(record),
                Err(e) if skip_failed => {
                    tracing::warn!("Skipping document on worker {}: {}", report.worker, e);
                    skipped += 1;
                }
                Err(e) => {
                    tracing::debug!("Document failed on worker {}: {}", report.worker, e);
                    first_error.get_or_insert(e);
                }
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }

    Ok(Harvest {
        site,
        records,
        skipped,
    })
}

fn checked(record: ResumeRecord) -> Result<ResumeRecord> {
    match record.validate() {
        Ok(()) => Ok(record),
        Err(reason) => Err(HarvestError::DocumentParse {
            reference: record.link,
            source: DocumentError::malformed("record", reason),
        }),
    }
}
