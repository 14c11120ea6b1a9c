//! work.ua search URLs
//!
//! The search path encodes location and speciality
//! (`/resumes-kyiv-python+developer/`), everything else goes into the query
//! string. Multi-valued parameters are space separated before encoding, which
//! puts them on the wire as `1+5` the way the site expects.

use crate::config::WorkUaEndpoints;
use crate::filter::Filter;
use crate::query::QueryRequest;
use crate::vocabulary::Vocabulary;
use crate::ConfigError;
use url::form_urlencoded;
use url::Url;

/// Results per list page
pub const PAGE_SIZE: u32 = 14;

/// work.ua pages are numbered from one
pub const FIRST_PAGE: u32 = 1;

/// Education codes are shifted by this offset on work.ua
const EDUCATION_OFFSET: u32 = 65;

const EMPLOYMENT_ANY: u32 = 0;
const EMPLOYMENT_FULL_TIME: u32 = 74;
const EMPLOYMENT_OTHER: u32 = 75;

/// Builds the list-page request for `page`
///
/// # Errors
///
/// Any generic code without a work.ua counterpart yields
/// [`ConfigError::UnknownCode`]; nothing is silently dropped.
pub fn build_query(
    filter: &Filter,
    page: u32,
    vocabulary: &Vocabulary,
    endpoints: &WorkUaEndpoints,
) -> Result<QueryRequest, ConfigError> {
    let codes = &vocabulary.work_ua;

    let location = if filter.city == 0 {
        "-".to_string()
    } else {
        format!("-{}-", vocabulary.city.term(filter.city)?.slug)
    };

    let speciality = filter
        .search_terms()
        .iter()
        .map(|term| form_urlencoded::byte_serialize(term.as_bytes()).collect::<String>())
        .collect::<Vec<_>>()
        .join("+");

    vocabulary.period.term(filter.period)?;
    let period = match filter.period {
        3 | 4 => filter.period - 1,
        other => other,
    };

    vocabulary.schedule.term(filter.schedule)?;
    let employment = match filter.schedule {
        0 => EMPLOYMENT_ANY,
        1 => EMPLOYMENT_FULL_TIME,
        _ => EMPLOYMENT_OTHER,
    };

    let salary_from = codes.salary.round_down(filter.salary_from).unwrap_or(0);
    let salary_to = codes.salary.round_up(filter.salary_to).unwrap_or(0);

    vocabulary.education.term(filter.education)?;
    let education = filter.education + EDUCATION_OFFSET;
    let experience = codes.experience.translate(filter.experience)?;

    let mut languages = Vec::with_capacity(filter.languages.len());
    let mut language_levels = Vec::with_capacity(filter.languages.len());
    for requirement in &filter.languages {
        let language = codes.language.translate(requirement.language)?;
        let level = codes.language_level.translate(requirement.level)?;
        languages.push(language.to_string());
        language_levels.push(format!("{}-{}", language, level));
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("notitle", "1")
        .append_pair("sort", "1")
        .append_pair("period", &period.to_string())
        .append_pair("employment", &employment.to_string())
        .append_pair("agefrom", &filter.age_from.to_string())
        .append_pair("ageto", &filter.age_to.to_string())
        .append_pair("salaryfrom", &salary_from.to_string())
        .append_pair("salaryto", &salary_to.to_string())
        .append_pair("education", &education.to_string())
        .append_pair("experience", &experience.to_string())
        .append_pair("language", &languages.join(" "))
        .append_pair("language_level", &language_levels.join(" "))
        .append_pair("photo", if filter.photo { "1" } else { "0" })
        .append_pair("page", &page.to_string())
        .finish();

    let raw = format!(
        "{}{}{}/?{}",
        endpoints.resumes_url.trim_end_matches('/'),
        location,
        speciality,
        query
    );
    let url = Url::parse(&raw)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid work.ua query '{}': {}", raw, e)))?;

    Ok(QueryRequest::Get { url })
}
