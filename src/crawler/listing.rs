//! List-page parsing
//!
//! Turns the body of one result page into the total result count and the
//! ordered document references found on that page.

use crate::config::SourcesConfig;
use crate::crawler::{DocumentReference, Site};
use crate::query::QueryRequest;
use crate::{DocumentError, DocumentResult, HarvestError, Result};
use scraper::{Html, Selector};
use serde::Deserialize;
use url::Url;

/// One parsed result page
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    /// Total results of the whole query
    pub total: u64,

    /// References on this page, in page order
    pub references: Vec<DocumentReference>,
}

/// Parses a list-page body of `site`
///
/// A page without a readable total is reported as [`HarvestError::NotFound`];
/// a body of the wrong shape is a [`HarvestError::ListParse`].
pub fn parse_list_page(
    site: Site,
    body: &str,
    sources: &SourcesConfig,
    request: &QueryRequest,
) -> Result<ListPage> {
    let page = match site {
        Site::WorkUa => parse_work_ua(body, &sources.work_ua.base_url),
        Site::RobotaUa => parse_robota_ua(body, &sources.robota_ua.resume_url),
    }
    .map_err(|source| HarvestError::ListParse {
        query: request.to_string(),
        source,
    })?;

    page.ok_or_else(|| HarvestError::NotFound {
        query: request.to_string(),
    })
}

impl ListPage {
    /// The query has results but none of them were found on this page
    pub fn is_missing_references(&self) -> bool {
        self.total > 0 && self.references.is_empty()
    }
}

fn selector(css: &str) -> DocumentResult<Selector> {
    Selector::parse(css).map_err(|e| DocumentError::malformed("selector", format!("{css}: {e}")))
}

fn parse_work_ua(body: &str, base_url: &str) -> DocumentResult<Option<ListPage>> {
    let document = Html::parse_document(body);
    let header = selector("div.col-md-8 h1")?;
    let links = selector("h2.mt-0 > a")?;
    let base = Url::parse(base_url).map_err(|_| DocumentError::malformed("base url", base_url))?;

    let Some(total) = document
        .select(&header)
        .next()
        .and_then(|h1| leading_number(&h1.text().collect::<String>()))
    else {
        return Ok(None);
    };

    let references = document
        .select(&links)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| {
            base.join(href)
                .map(|url| DocumentReference::new(url.to_string()))
                .map_err(|_| DocumentError::malformed("link", href))
        })
        .collect::<DocumentResult<Vec<_>>>()?;

    Ok(Some(ListPage { total, references }))
}

/// First number of a header such as `1 234 резюме`
fn leading_number(text: &str) -> Option<u64> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '\u{a0}' | '\u{202f}'))
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[derive(Debug, Deserialize)]
struct RobotaUaPage {
    total: Option<u64>,
    #[serde(default)]
    documents: Vec<RobotaUaDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RobotaUaDocument {
    resume_id: u64,
}

fn parse_robota_ua(body: &str, resume_url: &str) -> DocumentResult<Option<ListPage>> {
    let page: RobotaUaPage = serde_json::from_str(body)?;
    let Some(total) = page.total else {
        return Ok(None);
    };

    let references = page
        .documents
        .iter()
        .map(|doc| DocumentReference::new(format!("{}{}", resume_url, doc.resume_id)))
        .collect();

    Ok(Some(ListPage { total, references }))
}
