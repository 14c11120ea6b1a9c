//! robota.ua résumé payloads
//!
//! The API returns JSON with coded city, schedule and language fields, HTML
//! fragments in free-text fields and ISO timestamps for experience periods.

use super::text::strip_html;
use super::{
    display, parse_date, tenure_between, EducationEntry, ExperienceEntry, LanguageSkill,
    NormalizeContext, ResumeRecord,
};
use crate::{DocumentError, DocumentResult};
use serde::Deserialize;
use serde_json::Value;

/// Payload of the single-résumé endpoint, as sent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResume {
    resume_id: u64,
    #[serde(default)]
    surname: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    father_name: Option<String>,
    #[serde(default)]
    age: Value,
    #[serde(default)]
    speciality: Option<String>,
    #[serde(default)]
    city_id: Option<u32>,
    #[serde(default)]
    schedule_id: Option<u32>,
    #[serde(default)]
    salary: Option<f64>,
    #[serde(default)]
    currency_sign: Option<String>,
    #[serde(default)]
    filling_percentage: Option<u32>,
    #[serde(default)]
    skills: Option<Vec<RawSkill>>,
    #[serde(default)]
    educations: Option<Vec<RawEducation>>,
    #[serde(default)]
    experiences: Option<Vec<RawExperience>>,
    #[serde(default)]
    language_skills: Option<Vec<RawLanguageSkill>>,
}

#[derive(Debug, Deserialize)]
struct RawSkill {
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEducation {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    speciality: Option<String>,
    #[serde(default)]
    year_of_graduation: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExperience {
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    description: Option<String>,
    start_work: String,
    #[serde(default)]
    end_work: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLanguageSkill {
    language_id: u32,
    language_skill_id: u32,
}

/// Parses a robota.ua résumé payload
pub(super) fn normalize(
    body: &str,
    context: &NormalizeContext<'_>,
) -> DocumentResult<ResumeRecord> {
    let raw: RawResume = serde_json::from_str(body)?;
    build_record(raw, context)
}

fn build_record(raw: RawResume, context: &NormalizeContext<'_>) -> DocumentResult<ResumeRecord> {
    let vocabulary = context.vocabulary;

    let speciality = raw
        .speciality
        .map(|s| s.trim().to_string())
        .ok_or(DocumentError::MissingField("speciality"))?;

    let city = match raw.city_id {
        Some(code) => display(&vocabulary.city, code)?,
        None => String::new(),
    };
    let schedule = match raw.schedule_id {
        Some(code) => display(&vocabulary.schedule, code)?,
        None => String::new(),
    };

    let salary_expectation = raw.salary.filter(|s| *s > 0.0).map_or(0, |s| s as u64);
    let currency = if salary_expectation != 0 {
        raw.currency_sign.unwrap_or_default()
    } else {
        String::new()
    };

    let skills = raw
        .skills
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|skill| skill.description)
        .map(|description| strip_html(&description))
        .unwrap_or_default();

    let educations: Vec<EducationEntry> = raw
        .educations
        .unwrap_or_default()
        .into_iter()
        .map(|ed| EducationEntry {
            institution: ed.name.unwrap_or_default().trim().to_string(),
            description: strip_html(&ed.comment.unwrap_or_default()),
            location: ed.location.unwrap_or_default().trim().to_string(),
            speciality: ed.speciality.unwrap_or_default().trim().to_string(),
            graduation_year: ed.year_of_graduation.unwrap_or(0),
        })
        .collect();

    let experiences = raw
        .experiences
        .unwrap_or_default()
        .into_iter()
        .map(|ex| experience_entry(ex, context))
        .collect::<DocumentResult<Vec<_>>>()?;

    let languages = raw
        .language_skills
        .unwrap_or_default()
        .into_iter()
        .map(|skill| -> DocumentResult<LanguageSkill> {
            Ok(LanguageSkill {
                language: display(&vocabulary.language, skill.language_id)?,
                level: display(&vocabulary.language_level, skill.language_skill_id)?,
            })
        })
        .collect::<DocumentResult<Vec<_>>>()?;

    let mut record = ResumeRecord {
        link: format!("{}{}", context.candidate_url, raw.resume_id),
        last_name: raw.surname.unwrap_or_default().trim().to_string(),
        first_name: raw.name.unwrap_or_default().trim().to_string(),
        father_name: raw.father_name.unwrap_or_default().trim().to_string(),
        age: parse_age(&raw.age)?,
        speciality,
        city,
        schedule,
        salary_expectation,
        currency,
        completeness: 0,
        skills,
        educations,
        experiences,
        languages,
    };

    record.completeness = match raw.filling_percentage {
        Some(percentage) => percentage.min(100) as u8,
        None => record.section_score(),
    };

    Ok(record)
}

fn experience_entry(
    raw: RawExperience,
    context: &NormalizeContext<'_>,
) -> DocumentResult<ExperienceEntry> {
    let start = parse_date(&raw.start_work)
        .ok_or_else(|| DocumentError::malformed("startWork", &raw.start_work))?;

    let end = match raw.end_work.as_deref().map(str::trim) {
        None | Some("") => context.today,
        Some(value) => parse_date(value).ok_or_else(|| DocumentError::malformed("endWork", value))?,
    };

    Ok(ExperienceEntry {
        position: raw.position.unwrap_or_default().trim().to_string(),
        company: raw.company.unwrap_or_default().trim().to_string(),
        description: strip_html(&raw.description.unwrap_or_default()),
        tenure_years: tenure_between(start, end),
    })
}

/// Age is either a number or text like `25 років`
fn parse_age(value: &Value) -> DocumentResult<u32> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| DocumentError::malformed("age", n.to_string())),
        Value::String(s) => match s.split_whitespace().next() {
            None => Ok(0),
            Some(number) => number
                .parse()
                .map_err(|_| DocumentError::malformed("age", s.as_str())),
        },
        other => Err(DocumentError::malformed("age", other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;
    use chrono::NaiveDate;
    use serde_json::json;

    fn context(vocabulary: &Vocabulary) -> NormalizeContext<'_> {
        NormalizeContext {
            vocabulary,
            today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            candidate_url: "https://robota.ua/candidates/",
        }
    }

    fn payload() -> Value {
        json!({
            "resumeId": 987654,
            "surname": "Шевченко",
            "name": "Тарас",
            "fatherName": "Григорович",
            "age": "34 роки",
            "speciality": " Senior Python developer ",
            "cityId": 1,
            "scheduleId": 3,
            "salary": 3500,
            "currencySign": "$",
            "fillingPercentage": 85,
            "skills": [{"description": "<p>Python, <b>Django</b></p><p>PostgreSQL</p>"}],
            "educations": [{
                "name": "КНУ",
                "comment": "<p>Магістр</p>",
                "location": "Київ",
                "speciality": "Комп'ютерні науки",
                "yearOfGraduation": 2012
            }],
            "experiences": [
                {
                    "position": "Developer",
                    "company": "Acme",
                    "description": "<ul><li>APIs</li><li>ETL</li></ul>",
                    "startWork": "2020-01-01T00:00:00",
                    "endWork": "2022-07-01T00:00:00"
                },
                {
                    "position": "Lead",
                    "company": "Beta",
                    "description": "",
                    "startWork": "2022-07-01T00:00:00",
                    "endWork": null
                }
            ],
            "languageSkills": [
                {"languageId": 1, "languageSkillId": 6},
                {"languageId": 145, "languageSkillId": 7}
            ]
        })
    }

    #[test]
    fn test_full_payload() {
        let vocabulary = Vocabulary::default();
        let record = normalize(&payload().to_string(), &context(&vocabulary)).unwrap();

        assert_eq!(record.link, "https://robota.ua/candidates/987654");
        assert_eq!(record.last_name, "Шевченко");
        assert_eq!(record.first_name, "Тарас");
        assert_eq!(record.father_name, "Григорович");
        assert_eq!(record.age, 34);
        assert_eq!(record.speciality, "Senior Python developer");
        assert_eq!(record.city, "Kyiv");
        assert_eq!(record.schedule, "Remote");
        assert_eq!(record.salary_expectation, 3500);
        assert_eq!(record.currency, "$");
        assert_eq!(record.completeness, 85);
        assert_eq!(record.skills, "Python, Django PostgreSQL");
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_sections() {
        let vocabulary = Vocabulary::default();
        let record = normalize(&payload().to_string(), &context(&vocabulary)).unwrap();

        assert_eq!(record.educations[0].description, "Магістр");
        assert_eq!(record.educations[0].location, "Київ");
        assert_eq!(record.educations[0].graduation_year, 2012);

        assert_eq!(record.experiences[0].tenure_years, 2.5);
        assert_eq!(record.experiences[0].description, "APIs ETL");
        // open-ended: 2022-07-01 .. 2024-01-01 = 549 days
        assert_eq!(record.experiences[1].tenure_years, 1.5);

        assert_eq!(
            record.languages[0],
            LanguageSkill {
                language: "English".to_string(),
                level: "Upper intermediate".to_string()
            }
        );
        assert_eq!(record.languages[1].language, "Ukrainian");
        assert_eq!(record.languages[1].level, "Native");
    }

    #[test]
    fn test_sparse_payload_defaults() {
        let vocabulary = Vocabulary::default();
        let body = json!({
            "resumeId": 1,
            "speciality": "QA",
            "salary": 0,
            "currencySign": "грн",
            "skills": [{"description": "Selenium"}]
        });
        let record = normalize(&body.to_string(), &context(&vocabulary)).unwrap();

        assert_eq!(record.age, 0);
        assert_eq!(record.last_name, "");
        assert_eq!(record.city, "");
        assert_eq!(record.salary_expectation, 0);
        assert_eq!(record.currency, "");
        // no fillingPercentage: computed from the sections present
        assert_eq!(record.completeness, crate::normalize::SKILLS_WEIGHT);
    }

    #[test]
    fn test_unknown_language_code_fails() {
        let vocabulary = Vocabulary::default();
        let body = json!({
            "resumeId": 1,
            "speciality": "QA",
            "languageSkills": [{"languageId": 999, "languageSkillId": 1}]
        });
        let result = normalize(&body.to_string(), &context(&vocabulary));
        assert!(matches!(
            result,
            Err(DocumentError::UnknownCode {
                table: "language",
                code: 999
            })
        ));
    }

    #[test]
    fn test_malformed_start_date_fails() {
        let vocabulary = Vocabulary::default();
        let body = json!({
            "resumeId": 1,
            "speciality": "QA",
            "experiences": [{"startWork": "yesterday", "endWork": null}]
        });
        assert!(matches!(
            normalize(&body.to_string(), &context(&vocabulary)),
            Err(DocumentError::Malformed {
                field: "startWork",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_json_fails() {
        let vocabulary = Vocabulary::default();
        assert!(matches!(
            normalize("<html>", &context(&vocabulary)),
            Err(DocumentError::Json(_))
        ));
    }

    #[test]
    fn test_numeric_age() {
        assert_eq!(parse_age(&json!(41)).unwrap(), 41);
        assert_eq!(parse_age(&json!("")).unwrap(), 0);
        assert_eq!(parse_age(&Value::Null).unwrap(), 0);
        assert!(parse_age(&json!("n/a")).is_err());
    }

    #[test]
    fn test_custom_candidate_url() {
        let vocabulary = Vocabulary::default();
        let context = NormalizeContext {
            candidate_url: "http://localhost/candidates/",
            ..context(&vocabulary)
        };
        let record = normalize(&payload().to_string(), &context).unwrap();
        assert_eq!(record.link, "http://localhost/candidates/987654");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let vocabulary = Vocabulary::default();
        let body = payload().to_string();
        let first = normalize(&body, &context(&vocabulary)).unwrap();
        let second = normalize(&body, &context(&vocabulary)).unwrap();
        assert_eq!(first, second);
    }
}
