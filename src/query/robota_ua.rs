//! robota.ua search request bodies
//!
//! robota.ua uses the generic codes directly, so the builder only checks
//! them against the vocabulary and lays them out as the JSON body expected by
//! the search endpoint.

use crate::config::RobotaUaEndpoints;
use crate::filter::Filter;
use crate::query::QueryRequest;
use crate::vocabulary::Vocabulary;
use crate::ConfigError;
use serde_json::json;
use url::Url;

/// Results per list page
pub const PAGE_SIZE: u32 = 20;

/// robota.ua pages are numbered from zero
pub const FIRST_PAGE: u32 = 0;

/// Generic "any" codes which the API expresses as an empty id list
const SCHEDULE_ANY: u32 = 0;
const EDUCATION_ANY: u32 = 0;
const EXPERIENCE_ANY: u32 = 6;

/// Builds the list-page request for `page`
pub fn build_query(
    filter: &Filter,
    page: u32,
    vocabulary: &Vocabulary,
    endpoints: &RobotaUaEndpoints,
) -> Result<QueryRequest, ConfigError> {
    vocabulary.city.term(filter.city)?;
    vocabulary.period.term(filter.period)?;

    let education_ids = id_list(&vocabulary.education, filter.education, EDUCATION_ANY)?;
    let schedule_ids = id_list(&vocabulary.schedule, filter.schedule, SCHEDULE_ANY)?;
    let experience_ids = id_list(&vocabulary.experience, filter.experience, EXPERIENCE_ANY)?;

    let mut languages = Vec::with_capacity(filter.languages.len());
    for requirement in &filter.languages {
        vocabulary.language.term(requirement.language)?;
        vocabulary.language_level.term(requirement.level)?;
        languages.push(format!("{}-{}", requirement.language, requirement.level));
    }

    let mut body = json!({
        "page": page,
        "period": filter.period,
        "sort": 0,
        "searchType": "everywhere",
        "ukrainian": true,
        "cityId": filter.city,
        "keyWords": filter.search_terms().join(" "),
        "ageFrom": filter.age_from,
        "ageTo": filter.age_to,
        "educationIds": education_ids,
        "scheduleIds": schedule_ids,
        "experienceIds": experience_ids,
        "languages": languages,
        "hasPhoto": filter.photo,
    });

    if filter.salary_from != 0 {
        body["salaryFrom"] = json!(filter.salary_from);
    }
    if filter.salary_to != 0 {
        body["salaryTo"] = json!(filter.salary_to);
    }

    let url = Url::parse(&endpoints.search_url).map_err(|e| {
        ConfigError::InvalidUrl(format!(
            "Invalid robota.ua search URL '{}': {}",
            endpoints.search_url, e
        ))
    })?;

    Ok(QueryRequest::Post { url, body })
}

/// Validates `code` and expresses it as the API's id list
fn id_list(
    table: &crate::vocabulary::Table,
    code: u32,
    any: u32,
) -> Result<Vec<u32>, ConfigError> {
    table.term(code)?;
    Ok(if code == any { Vec::new() } else { vec![code] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::LanguageRequirement;
    use serde_json::Value;

    fn body(filter: &Filter, page: u32) -> Value {
        match build_query(
            filter,
            page,
            &Vocabulary::default(),
            &RobotaUaEndpoints::default(),
        )
        .unwrap()
        {
            QueryRequest::Post { body, .. } => body,
            other => panic!("expected POST, got {}", other),
        }
    }

    #[test]
    fn test_default_body() {
        let filter = Filter {
            main_skills: vec!["fastapi".into()],
            ..Filter::new("python developer")
        };
        let body = body(&filter, 0);

        assert_eq!(body["page"], 0);
        assert_eq!(body["keyWords"], "python developer fastapi");
        assert_eq!(body["period"], 5);
        assert_eq!(body["cityId"], 0);
        assert_eq!(body["scheduleIds"], json!([]));
        assert_eq!(body["experienceIds"], json!([]));
        assert_eq!(body["educationIds"], json!([]));
        assert_eq!(body["hasPhoto"], false);
        assert!(body.get("salaryFrom").is_none());
        assert!(body.get("salaryTo").is_none());
    }

    #[test]
    fn test_round_trip_of_filter_fields() {
        let filter = Filter {
            city: 21,
            education: 2,
            age_from: 25,
            age_to: 45,
            salary_from: 12_345,
            salary_to: 60_000,
            schedule: 3,
            period: 7,
            experience: 4,
            languages: vec![LanguageRequirement { language: 2, level: 4 }],
            photo: true,
            ..Filter::new("devops")
        };
        let body = body(&filter, 2);

        assert_eq!(body["page"], 2);
        assert_eq!(body["cityId"], 21);
        assert_eq!(body["educationIds"], json!([2]));
        assert_eq!(body["ageFrom"], 25);
        assert_eq!(body["ageTo"], 45);
        // robota.ua takes raw salary values, no bucket rounding
        assert_eq!(body["salaryFrom"], 12_345);
        assert_eq!(body["salaryTo"], 60_000);
        assert_eq!(body["scheduleIds"], json!([3]));
        assert_eq!(body["period"], 7);
        assert_eq!(body["experienceIds"], json!([4]));
        assert_eq!(body["languages"], json!(["2-4"]));
        assert_eq!(body["hasPhoto"], true);
    }

    #[test]
    fn test_unknown_experience_fails() {
        let filter = Filter {
            experience: 12,
            ..Filter::new("qa")
        };
        let result = build_query(
            &filter,
            0,
            &Vocabulary::default(),
            &RobotaUaEndpoints::default(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::UnknownCode {
                table: "experience",
                code: 12
            })
        ));
    }
}
