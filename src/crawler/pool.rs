//! Concurrent document fetcher
//!
//! References are split into contiguous chunks, one per worker. Every worker
//! is an OS thread running its own single-threaded tokio runtime with its own
//! HTTP session. Inside a worker a semaphore caps the number of in-flight
//! fetches; each document is normalized as soon as its body arrives.
//!
//! A failing document never cancels its siblings. Workers report every
//! outcome back to the coordinator, which decides what a failure means.

use crate::config::TransportConfig;
use crate::crawler::{build_http_client, fetch_document, DocumentReference, RawDocument, Site};
use crate::normalize::{normalize_document, NormalizeContext, ResumeRecord};
use crate::vocabulary::Vocabulary;
use crate::{HarvestError, Result};
use chrono::NaiveDate;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{oneshot, Semaphore};
use tokio::task::JoinSet;

/// Everything a worker needs, shared read-only across the pool
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub site: Site,

    /// Number of workers (W)
    pub workers: usize,

    /// In-flight fetch ceiling per worker (C)
    pub max_concurrent: usize,

    pub transport: TransportConfig,
    pub vocabulary: Arc<Vocabulary>,

    /// Reference date for open-ended experience
    pub today: NaiveDate,

    /// Prefix of robota.ua candidate pages
    pub candidate_url: String,
}

/// Outcomes of one worker's chunk, in completion order
#[derive(Debug)]
pub struct WorkerReport {
    pub worker: usize,
    pub outcomes: Vec<Result<ResumeRecord>>,
}

/// Splits references into at most `workers` contiguous chunks of
/// `ceil(n / workers)` references each
///
/// ```
/// use resume_harvest::crawler::{chunk_references, DocumentReference};
///
/// let refs: Vec<_> = (0..10).map(|i| DocumentReference::new(i.to_string())).collect();
/// let sizes: Vec<_> = chunk_references(refs, 4).iter().map(Vec::len).collect();
/// assert_eq!(sizes, vec![3, 3, 3, 1]);
/// ```
pub fn chunk_references(
    references: Vec<DocumentReference>,
    workers: usize,
) -> Vec<Vec<DocumentReference>> {
    if references.is_empty() {
        return Vec::new();
    }

    let chunk_len = references.len().div_ceil(workers.max(1));
    references
        .chunks(chunk_len)
        .map(<[DocumentReference]>::to_vec)
        .collect()
}

/// Fetches and normalizes every reference on a pool of worker threads
///
/// Returns once every worker has finished its whole chunk. Only a worker
/// that cannot start or dies without reporting is an error here; document
/// failures are inside the reports.
pub async fn fetch_documents(
    references: Vec<DocumentReference>,
    settings: Arc<PoolSettings>,
) -> Result<Vec<WorkerReport>> {
    let chunks = chunk_references(references, settings.workers);
    tracing::info!(
        "Distributing documents across {} workers of {} on {}",
        chunks.len(),
        settings.workers,
        settings.site
    );

    let mut receivers = Vec::with_capacity(chunks.len());
    for (worker, chunk) in chunks.into_iter().enumerate() {
        let (tx, rx) = oneshot::channel();
        let settings = Arc::clone(&settings);

        std::thread::Builder::new()
            .name(format!("resume-worker-{}", worker))
            .spawn(move || {
                let report = run_worker(worker, chunk, &settings);
                // the coordinator only goes away if the whole run is dropped
                let _ = tx.send(report);
            })?;

        receivers.push((worker, rx));
    }

    let mut reports = Vec::with_capacity(receivers.len());
    for (worker, rx) in receivers {
        let report = rx.await.map_err(|_| {
            HarvestError::Worker(format!("worker {} exited without reporting", worker))
        })??;
        reports.push(report);
    }

    Ok(reports)
}

/// Runs one chunk to completion on a fresh current-thread runtime
fn run_worker(
    worker: usize,
    chunk: Vec<DocumentReference>,
    settings: &PoolSettings,
) -> Result<WorkerReport> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let client = build_http_client(&settings.transport)?;
    let count = chunk.len();
    let outcomes = runtime.block_on(fetch_chunk(client, chunk, settings));

    tracing::info!(
        "Worker {} finished {} documents from {}",
        worker,
        count,
        settings.site
    );

    Ok(WorkerReport { worker, outcomes })
}

async fn fetch_chunk(
    client: Client,
    chunk: Vec<DocumentReference>,
    settings: &PoolSettings,
) -> Vec<Result<ResumeRecord>> {
    let gate = Arc::new(Semaphore::new(settings.max_concurrent.max(1)));
    let candidate_url: Arc<str> = Arc::from(settings.candidate_url.as_str());
    let mut tasks = JoinSet::new();

    for reference in chunk {
        let gate = Arc::clone(&gate);
        let client = client.clone();
        let vocabulary = Arc::clone(&settings.vocabulary);
        let candidate_url = Arc::clone(&candidate_url);
        let site = settings.site;
        let today = settings.today;

        tasks.spawn(async move {
            let permit = gate
                .acquire_owned()
                .await
                .map_err(|e| HarvestError::Worker(e.to_string()))?;

            tracing::debug!("Fetching document {}", reference);
            let body = fetch_document(&client, &reference).await;
            drop(permit);

            let document = RawDocument {
                reference,
                body: body?,
            };
            let context = NormalizeContext {
                vocabulary: &vocabulary,
                today,
                candidate_url: &candidate_url,
            };

            normalize_document(site, &document, &context).map_err(|source| {
                HarvestError::DocumentParse {
                    reference: document.reference.to_string(),
                    source,
                }
            })
        });
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined.unwrap_or_else(|e| Err(HarvestError::Worker(e.to_string()))));
    }
    outcomes
}
