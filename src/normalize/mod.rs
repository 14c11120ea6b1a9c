//! Document normalization
//!
//! Every source turns its raw document into the same [`ResumeRecord`]. Each
//! source module works in two stages: an extraction step that pulls raw
//! field values out of the HTML or JSON into a plain struct, and a
//! normalization step that cleans text, computes tenure and translates codes.

mod robota_ua;
mod tenure;
mod text;
mod work_ua;

pub use tenure::{parse_date, parse_duration_text, round_tenth, tenure_between, DAYS_PER_YEAR};
pub use text::{collapse_whitespace, strip_html};

use crate::crawler::{RawDocument, Site};
use crate::vocabulary::{Table, Vocabulary};
use crate::{DocumentError, DocumentResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completeness weight of a non-empty skills section
pub const SKILLS_WEIGHT: u8 = 40;
/// Completeness weight of a non-empty education section
pub const EDUCATION_WEIGHT: u8 = 20;
/// Completeness weight of a non-empty experience section
pub const EXPERIENCE_WEIGHT: u8 = 20;
/// Completeness weight of a non-empty languages section
pub const LANGUAGES_WEIGHT: u8 = 20;

/// Canonical résumé representation, independent of the source
///
/// Numeric fields are 0 and text fields are empty when the source does not
/// disclose them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub link: String,
    pub last_name: String,
    pub first_name: String,
    pub father_name: String,
    pub age: u32,
    pub speciality: String,
    pub city: String,
    pub schedule: String,
    pub salary_expectation: u64,
    pub currency: String,

    /// 0-100 heuristic of how many sections are filled in
    pub completeness: u8,

    pub skills: String,
    pub educations: Vec<EducationEntry>,
    pub experiences: Vec<ExperienceEntry>,
    pub languages: Vec<LanguageSkill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub description: String,
    pub location: String,
    pub speciality: String,
    pub graduation_year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub description: String,

    /// Years, rounded to one decimal
    pub tenure_years: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub language: String,
    pub level: String,
}

impl ResumeRecord {
    /// Checks the record invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.link.is_empty() {
            return Err("link is empty".to_string());
        }

        if self.completeness > 100 {
            return Err(format!("completeness {} exceeds 100", self.completeness));
        }

        for experience in &self.experiences {
            let tenure = experience.tenure_years;
            if !tenure.is_finite() || tenure < 0.0 || round_tenth(tenure) != tenure {
                return Err(format!(
                    "invalid tenure {} for position '{}'",
                    tenure, experience.position
                ));
            }
        }

        Ok(())
    }

    /// Sum of the section weights present in this record
    pub fn section_score(&self) -> u8 {
        completeness_score(
            !self.skills.is_empty(),
            !self.educations.is_empty(),
            !self.experiences.is_empty(),
            !self.languages.is_empty(),
        )
    }
}

/// Completeness from the sections that are present
pub fn completeness_score(
    skills: bool,
    educations: bool,
    experiences: bool,
    languages: bool,
) -> u8 {
    [
        (skills, SKILLS_WEIGHT),
        (educations, EDUCATION_WEIGHT),
        (experiences, EXPERIENCE_WEIGHT),
        (languages, LANGUAGES_WEIGHT),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, weight)| weight)
    .sum()
}

/// What a normalizer needs besides the document itself
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    pub vocabulary: &'a Vocabulary,

    /// End date of open-ended experience, fixed once per run
    pub today: NaiveDate,

    /// Prefix of robota.ua candidate pages
    pub candidate_url: &'a str,
}

/// Parses a raw document of `site` into the canonical record
pub fn normalize_document(
    site: Site,
    document: &RawDocument,
    context: &NormalizeContext<'_>,
) -> DocumentResult<ResumeRecord> {
    match site {
        Site::WorkUa => work_ua::normalize(&document.body),
        Site::RobotaUa => robota_ua::normalize(&document.body, context),
    }
}

/// Display name of a code, unknown codes fail the document
fn display(table: &Table, code: u32) -> DocumentResult<String> {
    table
        .display(code)
        .map(str::to_string)
        .map_err(|_| DocumentError::UnknownCode {
            table: table.name(),
            code,
        })
}
