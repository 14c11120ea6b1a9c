//! work.ua résumé pages
//!
//! The page has a fixed layout: name in `h1`, speciality and salary in the
//! following `h2`, labelled `dt`/`dd` pairs for age, city and schedule, and
//! `h2`-headed sections for education, experience and languages whose
//! entries each start with a styled `h2` heading.

use super::text::{collapse_whitespace, element_text};
use super::{
    completeness_score, parse_duration_text, EducationEntry, ExperienceEntry, LanguageSkill,
    ResumeRecord,
};
use crate::{DocumentError, DocumentResult};
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;

const EDUCATION_TITLE: &str = "Освіта";
const EXPERIENCE_TITLE: &str = "Досвід роботи";
const LANGUAGES_TITLE: &str = "Знання мов";

const AGE_LABEL: &str = "Вік:";
const CITY_LABELS: &[&str] = &["Місто:", "Місто проживання:"];
const SCHEDULE_LABEL: &str = "Зайнятість:";

/// Class list of the heading that opens one education or experience entry
const ENTRY_HEADING_CLASSES: &[&str] = &["h4", "strong-600", "mt-lg", "sm:mt-xl"];

/// Placeholder left in free-form résumés where contacts are hidden
const HIDDEN_CONTACTS: &str =
    "[відкрити контакти](див. вище в блоці «контактна інформація»)";

/// Raw field values as they appear on the page
#[derive(Debug, Default)]
struct WorkUaFields {
    link: String,
    name: String,
    age: String,
    speciality: String,
    salary: Option<String>,
    city: String,
    schedule: String,
    skills: String,
    educations: Vec<RawEntry>,
    experiences: Vec<RawExperience>,
    languages: Vec<String>,
}

/// Heading, details line and optional comment of one section entry
#[derive(Debug, Default)]
struct RawEntry {
    title: String,
    details: String,
    comment: String,
}

#[derive(Debug, Default)]
struct RawExperience {
    entry: RawEntry,
    duration: String,
    company: String,
}

/// Parses a work.ua résumé page
pub(super) fn normalize(html: &str) -> DocumentResult<ResumeRecord> {
    let fields = extract(&Html::parse_document(html))?;
    build_record(fields)
}

fn extract(document: &Html) -> DocumentResult<WorkUaFields> {
    let link = select_first(document, "head > link[rel='canonical']")
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
        .ok_or(DocumentError::MissingField("canonical link"))?;

    let name = select_first(document, "div.row > div > div > h1.mt-0.mb-0")
        .map(element_text)
        .ok_or(DocumentError::MissingField("name"))?;

    let speciality_heading = select_first(document, "div.row > div > div > h2")
        .ok_or(DocumentError::MissingField("speciality"))?;
    let speciality = own_text(speciality_heading);
    let salary = select_first(document, "div.row > div > div > h2 > span.text-muted-print")
        .map(|el| el.text().collect::<String>());

    let age = definition(document, |label| label == AGE_LABEL).unwrap_or_default();
    let city = definition(document, |label| CITY_LABELS.contains(&label)).unwrap_or_default();
    let schedule = definition(document, |label| label == SCHEDULE_LABEL).unwrap_or_default();

    Ok(WorkUaFields {
        link,
        name,
        age,
        speciality,
        salary,
        city,
        schedule,
        skills: extract_skills(document),
        educations: section_entries(document, EDUCATION_TITLE)
            .iter()
            .map(|entry| raw_entry(entry))
            .collect(),
        experiences: section_entries(document, EXPERIENCE_TITLE)
            .iter()
            .map(|entry| raw_experience(entry))
            .collect(),
        languages: extract_languages(document),
    })
}

fn build_record(fields: WorkUaFields) -> DocumentResult<ResumeRecord> {
    let age = parse_age(&fields.age)?;

    let (salary_expectation, currency) = match &fields.salary {
        Some(text) => parse_salary(text)?,
        None => (0, String::new()),
    };

    let educations = fields
        .educations
        .into_iter()
        .map(education_entry)
        .collect::<DocumentResult<Vec<_>>>()?;

    let experiences = fields
        .experiences
        .into_iter()
        .map(|raw| -> DocumentResult<ExperienceEntry> {
            let tenure_years = parse_duration_text(&raw.duration)
                .ok_or_else(|| DocumentError::malformed("experience period", &raw.duration))?;
            Ok(ExperienceEntry {
                position: raw.entry.title,
                company: raw.company,
                description: raw.entry.comment,
                tenure_years,
            })
        })
        .collect::<DocumentResult<Vec<_>>>()?;

    let languages: Vec<LanguageSkill> = fields.languages.iter().map(|l| language(l)).collect();

    let completeness = completeness_score(
        !fields.skills.is_empty(),
        !educations.is_empty(),
        !experiences.is_empty(),
        !languages.is_empty(),
    );

    Ok(ResumeRecord {
        link: fields.link,
        last_name: String::new(),
        first_name: fields.name,
        father_name: String::new(),
        age,
        speciality: fields.speciality,
        city: fields.city,
        schedule: fields.schedule,
        salary_expectation,
        currency,
        completeness,
        skills: fields.skills,
        educations,
        experiences,
        languages,
    })
}

fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

/// First non-empty text node directly inside the element
fn own_text(element: ElementRef<'_>) -> String {
    element
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(collapse_whitespace(text)),
            _ => None,
        })
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Value of the `dd` following the first `dt` whose label matches
fn definition(document: &Html, is_label: impl Fn(&str) -> bool) -> Option<String> {
    let selector = Selector::parse("dt").ok()?;
    let label = document
        .select(&selector)
        .find(|dt| is_label(&element_text(*dt)))?;
    label
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "dd")
        .map(element_text)
}

/// Skills from the tag list, or the free-form block of a text résumé
fn extract_skills(document: &Html) -> String {
    let free_form = select_first(document, "span.label.label-violet-light").is_some();
    if free_form {
        if let Some(block) = select_first(document, "div#add_info") {
            return collapse_whitespace(&element_text(block).replace(HIDDEN_CONTACTS, ""));
        }
    }

    let Ok(selector) = Selector::parse("span.ellipsis") else {
        return String::new();
    };
    document
        .select(&selector)
        .map(element_text)
        .filter(|skill| !skill.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn find_heading<'a>(document: &'a Html, title: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("h2").ok()?;
    document
        .select(&selector)
        .find(|h2| element_text(*h2) == title)
}

fn is_entry_heading(element: &ElementRef<'_>) -> bool {
    let classes: HashSet<&str> = element.value().classes().collect();
    classes.len() == ENTRY_HEADING_CLASSES.len()
        && ENTRY_HEADING_CLASSES.iter().all(|c| classes.contains(c))
}

/// Groups the siblings after a section heading into entries
///
/// An entry starts at each entry heading; the section ends at the first
/// plain `h2`.
fn section_entries<'a>(document: &'a Html, title: &str) -> Vec<Vec<ElementRef<'a>>> {
    let Some(heading) = find_heading(document, title) else {
        return Vec::new();
    };

    let mut entries: Vec<Vec<ElementRef<'a>>> = Vec::new();
    for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
        let opens_entry = is_entry_heading(&sibling);
        if sibling.value().name() == "h2" && !opens_entry {
            break;
        }
        if opens_entry {
            entries.push(Vec::new());
        }
        if let Some(current) = entries.last_mut() {
            current.push(sibling);
        }
    }
    entries
}

fn raw_entry(elements: &[ElementRef<'_>]) -> RawEntry {
    let text_at = |i: usize| elements.get(i).map(|el| element_text(*el)).unwrap_or_default();
    RawEntry {
        title: text_at(0),
        details: text_at(1),
        comment: text_at(2),
    }
}

fn raw_experience(elements: &[ElementRef<'_>]) -> RawExperience {
    let entry = raw_entry(elements);
    let Some(details) = elements.get(1) else {
        return RawExperience {
            entry,
            ..RawExperience::default()
        };
    };

    let duration = Selector::parse("span.text-default-7")
        .ok()
        .and_then(|selector| details.select(&selector).next())
        .map(element_text)
        .unwrap_or_default();

    // the company is on the last line of the details block
    let company = details
        .text()
        .collect::<String>()
        .lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .last()
        .map(|line| line.replace(&duration, "").trim().to_string())
        .unwrap_or_default();

    RawExperience {
        entry,
        duration,
        company,
    }
}

/// Language items, either a plain list or a single paragraph
fn extract_languages(document: &Html) -> Vec<String> {
    let Some(heading) = find_heading(document, LANGUAGES_TITLE) else {
        return Vec::new();
    };

    let siblings: Vec<ElementRef<'_>> = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| el.value().name() != "h2")
        .collect();

    if let Some(list) = siblings
        .iter()
        .find(|el| el.value().name() == "ul" && el.value().attr("class").is_none())
    {
        if let Ok(selector) = Selector::parse("li") {
            return list.select(&selector).map(element_text).collect();
        }
    }

    siblings
        .iter()
        .find(|el| el.value().name() == "p")
        .map(|p| vec![element_text(*p)])
        .unwrap_or_default()
}

fn language(item: &str) -> LanguageSkill {
    match item.split_once(" — ") {
        Some((language, level)) => LanguageSkill {
            language: language.trim().to_string(),
            level: level.trim().to_string(),
        },
        None => LanguageSkill {
            language: item.trim().to_string(),
            level: String::new(),
        },
    }
}

/// `35 років` -> 35, empty -> 0
fn parse_age(text: &str) -> DocumentResult<u32> {
    match text.split_whitespace().next() {
        None => Ok(0),
        Some(number) => number
            .parse()
            .map_err(|_| DocumentError::malformed("age", text)),
    }
}

/// `, 25 000 грн` -> (25000, "грн")
fn parse_salary(text: &str) -> DocumentResult<(u64, String)> {
    let trimmed = text.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    let mut tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let currency = tokens
        .pop()
        .ok_or_else(|| DocumentError::malformed("salary", text))?;
    let amount = tokens
        .concat()
        .parse()
        .map_err(|_| DocumentError::malformed("salary", text))?;
    Ok((amount, currency.to_string()))
}

/// `Computer science, з 2012 по 2016 рік` -> speciality and graduation year
fn education_entry(raw: RawEntry) -> DocumentResult<EducationEntry> {
    let parts: Vec<&str> = raw.details.split(", з ").collect();
    let speciality = parts.first().copied().unwrap_or_default().trim().to_string();

    let graduation_year = if parts.len() > 1 {
        let period = parts[parts.len() - 1];
        period
            .split_whitespace()
            .filter_map(|token| token.parse::<u32>().ok())
            .last()
            .ok_or_else(|| DocumentError::malformed("graduation year", period))?
    } else {
        0
    };

    Ok(EducationEntry {
        institution: raw.title,
        description: raw.comment,
        location: String::new(),
        speciality,
        graduation_year,
    })
}
