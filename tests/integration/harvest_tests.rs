//! Integration tests for the harvester
//!
//! These tests use wiremock to stand in for both job boards and run the
//! whole pipeline end-to-end: query building, pagination, the worker pool,
//! normalization and result collection.

use resume_harvest::config::{parse_config, Config};
use resume_harvest::crawler::{Harvester, Site};
use resume_harvest::{HarvestError, Vocabulary};
use serde_json::json;
use std::collections::HashSet;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing both sources at the mock server
fn create_test_config(server: &MockServer, skip_failed: bool) -> Config {
    let base = server.uri();
    let toml = format!(
        r#"
[crawler]
workers = 4
max-concurrent-documents = 2
skip-failed-documents = {skip_failed}

[transport]
timeout-secs = 5

[sources.work-ua]
base-url = "{base}"
resumes-url = "{base}/resumes"

[sources.robota-ua]
search-url = "{base}/resume/search"
resume-url = "{base}/resume/"
candidate-url = "https://robota.ua/candidates/"

[filter]
speciality = "python developer"
main-skills = ["fastapi"]
"#
    );

    parse_config(&toml, &Vocabulary::default()).expect("test config is valid")
}

fn robota_ua_resume(id: u64) -> serde_json::Value {
    json!({
        "resumeId": id,
        "name": "Candidate",
        "age": "30 років",
        "speciality": "Python developer",
        "cityId": 1,
        "scheduleId": 1,
        "salary": 2000,
        "currencySign": "$",
        "skills": [{"description": "<p>FastAPI, PostgreSQL</p>"}],
        "experiences": [{
            "position": "Developer",
            "company": "Acme",
            "description": "<p>APIs</p>",
            "startWork": "2020-01-01T00:00:00",
            "endWork": "2022-07-01T00:00:00"
        }],
        "languageSkills": [{"languageId": 1, "languageSkillId": 3}]
    })
}

async fn mount_robota_ua_search(server: &MockServer, page: u32, total: u64, ids: std::ops::Range<u64>) {
    let documents: Vec<_> = ids.map(|id| json!({ "resumeId": id })).collect();
    Mock::given(method("POST"))
        .and(path("/resume/search"))
        .and(body_partial_json(json!({
            "page": page,
            "keyWords": "python developer fastapi"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "total": total, "documents": documents })),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_robota_ua_two_pages_end_to_end() {
    let server = MockServer::start().await;

    mount_robota_ua_search(&server, 0, 25, 100..120).await;
    mount_robota_ua_search(&server, 1, 25, 120..125).await;

    for id in 100..125 {
        Mock::given(method("GET"))
            .and(path(format!("/resume/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(robota_ua_resume(id)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let config = create_test_config(&server, false);
    let harvest = Harvester::new(config, Vocabulary::default())
        .unwrap()
        .run(Site::RobotaUa)
        .await
        .unwrap();

    assert_eq!(harvest.site, Site::RobotaUa);
    assert_eq!(harvest.records.len(), 25);
    assert_eq!(harvest.skipped, 0);

    let links: HashSet<&str> = harvest.records.iter().map(|r| r.link.as_str()).collect();
    assert_eq!(links.len(), 25);
    assert!(links.contains("https://robota.ua/candidates/100"));
    assert!(links.contains("https://robota.ua/candidates/124"));

    for record in &harvest.records {
        assert!(record.validate().is_ok());
        assert_eq!(record.city, "Kyiv");
        assert_eq!(record.age, 30);
        assert_eq!(record.skills, "FastAPI, PostgreSQL");
        assert_eq!(record.experiences[0].tenure_years, 2.5);
        assert_eq!(record.languages[0].level, "Intermediate");
    }
}

fn work_ua_list_page(total: u64, ids: std::ops::Range<u64>) -> String {
    let cards: String = ids
        .map(|id| {
            format!(
                r#"<div class="card"><h2 class="mt-0"><a href="/resumes/{id}/">Python developer</a></h2></div>"#
            )
        })
        .collect();

    format!(
        r#"<html><body><div id="pjax"><div><div class="row"><div class="col-md-8">
<div class="flex"><div class="mt-8 text-default-7"><h1>{total} резюме</h1></div></div>
{cards}
</div></div></div></div></body></html>"#
    )
}

fn work_ua_resume(base: &str, id: u64) -> String {
    format!(
        r#"<html><head><link rel="canonical" href="{base}/resumes/{id}/"></head>
<body><div class="row"><div class="col-md-8"><div class="card">
  <h1 class="mt-0 mb-0">Кандидат</h1>
  <h2>Python developer <span class="text-muted-print">, 30&nbsp;000&nbsp;грн</span></h2>
  <dl><dt>Вік:</dt><dd>25&nbsp;років</dd><dt>Місто:</dt><dd>Львів</dd></dl>
  <h2>Досвід роботи</h2>
  <h2 class="h4 strong-600 mt-lg sm:mt-xl">Developer</h2>
  <p class="mb-0"><span class="text-default-7">(1&nbsp;рік&nbsp;6&nbsp;місяців)</span>
  Acme</p>
  <h2>Ключова інформація</h2>
  <ul><li><span class="ellipsis">FastAPI</span></li></ul>
</div></div></div></body></html>"#
    )
}

#[tokio::test]
async fn test_work_ua_two_pages_end_to_end() {
    let server = MockServer::start().await;
    let base = server.uri();
    let search_path = "/resumes-python+developer+fastapi/";

    for (page, ids) in [("1", 1..15), ("2", 15..21)] {
        Mock::given(method("GET"))
            .and(path(search_path))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_string(work_ua_list_page(20, ids)))
            .expect(1)
            .mount(&server)
            .await;
    }

    for id in 1..21 {
        Mock::given(method("GET"))
            .and(path(format!("/resumes/{}/", id)))
            .respond_with(ResponseTemplate::new(200).set_body_string(work_ua_resume(&base, id)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let config = create_test_config(&server, false);
    let harvest = Harvester::new(config, Vocabulary::default())
        .unwrap()
        .run(Site::WorkUa)
        .await
        .unwrap();

    assert_eq!(harvest.records.len(), 20);
    for record in &harvest.records {
        assert!(record.validate().is_ok());
        assert_eq!(record.age, 25);
        assert_eq!(record.city, "Львів");
        assert_eq!(record.salary_expectation, 30000);
        assert_eq!(record.experiences[0].tenure_years, 1.5);
        assert_eq!(record.skills, "FastAPI");
    }
}

#[tokio::test]
async fn test_zero_results_is_not_found() {
    let server = MockServer::start().await;
    mount_robota_ua_search(&server, 0, 0, 0..0).await;

    let config = create_test_config(&server, false);
    let result = Harvester::new(config, Vocabulary::default())
        .unwrap()
        .run(Site::RobotaUa)
        .await;

    assert!(matches!(result, Err(HarvestError::NotFound { .. })));
}

async fn mount_partially_failing_documents(server: &MockServer) {
    mount_robota_ua_search(server, 0, 3, 1..4).await;
    for id in [1, 3] {
        Mock::given(method("GET"))
            .and(path(format!("/resume/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(robota_ua_resume(id)))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/resume/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_failed_document_aborts_by_default() {
    let server = MockServer::start().await;
    mount_partially_failing_documents(&server).await;

    let config = create_test_config(&server, false);
    let result = Harvester::new(config, Vocabulary::default())
        .unwrap()
        .run(Site::RobotaUa)
        .await;

    assert!(matches!(
        result,
        Err(HarvestError::Transport { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_failed_document_skipped_when_configured() {
    let server = MockServer::start().await;
    mount_partially_failing_documents(&server).await;

    let config = create_test_config(&server, true);
    let harvest = Harvester::new(config, Vocabulary::default())
        .unwrap()
        .run(Site::RobotaUa)
        .await
        .unwrap();

    assert_eq!(harvest.records.len(), 2);
    assert_eq!(harvest.skipped, 1);
}
