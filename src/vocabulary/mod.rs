//! Enumeration tables
//!
//! The filter, the query builders and the normalizers never hard-code site
//! codes. Everything they translate goes through a [`Vocabulary`], which the
//! caller builds once per run and hands down. [`Vocabulary::default`] carries
//! the built-in tables for both job boards.

mod tables;

use crate::ConfigError;
use std::collections::BTreeMap;

/// One entry of a generic enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Human readable name ("Upper intermediate")
    pub display: String,

    /// URL slug, only meaningful for cities
    pub slug: String,
}

/// A fixed mapping from numeric codes to terms
#[derive(Debug, Clone, Default)]
pub struct Table {
    name: &'static str,
    entries: BTreeMap<u32, Term>,
}

impl Table {
    /// Builds a table from `(code, ENUM_NAME)` pairs
    ///
    /// Display names are derived from the enumeration name: sentence case,
    /// underscores become spaces. The slug is the lowercased name.
    pub fn from_names(name: &'static str, entries: &[(u32, &str)]) -> Self {
        let entries = entries
            .iter()
            .map(|(code, raw)| {
                (
                    *code,
                    Term {
                        display: display_name(raw),
                        slug: raw.to_lowercase(),
                    },
                )
            })
            .collect();
        Self { name, entries }
    }

    /// Table name used in error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, code: u32) -> bool {
        self.entries.contains_key(&code)
    }

    /// Looks up a code, failing with [`ConfigError::UnknownCode`]
    pub fn term(&self, code: u32) -> Result<&Term, ConfigError> {
        self.entries.get(&code).ok_or(ConfigError::UnknownCode {
            table: self.name,
            code,
        })
    }

    /// Display name for a code
    pub fn display(&self, code: u32) -> Result<&str, ConfigError> {
        self.term(code).map(|t| t.display.as_str())
    }
}

/// A site-local translation of generic codes into the site's own codes
#[derive(Debug, Clone, Default)]
pub struct CodeMap {
    name: &'static str,
    entries: BTreeMap<u32, u32>,
}

impl CodeMap {
    pub fn new(name: &'static str, entries: &[(u32, u32)]) -> Self {
        Self {
            name,
            entries: entries.iter().copied().collect(),
        }
    }

    /// Translates a generic code; a code without a counterpart is a configuration error
    pub fn translate(&self, code: u32) -> Result<u32, ConfigError> {
        self.entries
            .get(&code)
            .copied()
            .ok_or(ConfigError::UnknownCode {
                table: self.name,
                code,
            })
    }
}

/// Discrete salary buckets of a site, keyed by the lower salary bound
#[derive(Debug, Clone, Default)]
pub struct SalaryBuckets {
    buckets: BTreeMap<u64, u32>,
}

impl SalaryBuckets {
    pub fn new(entries: &[(u64, u32)]) -> Self {
        Self {
            buckets: entries.iter().copied().collect(),
        }
    }

    /// Bucket code for a "from" bound: the largest bucket not above `value`
    pub fn round_down(&self, value: u64) -> Option<u32> {
        self.buckets.range(..=value).next_back().map(|(_, c)| *c)
    }

    /// Bucket code for a "to" bound: the smallest bucket not below `value`,
    /// or the last bucket when `value` exceeds all of them
    pub fn round_up(&self, value: u64) -> Option<u32> {
        self.buckets
            .range(value..)
            .next()
            .or_else(|| self.buckets.iter().next_back())
            .map(|(_, c)| *c)
    }
}

/// work.ua specific code tables
#[derive(Debug, Clone, Default)]
pub struct WorkUaCodes {
    pub experience: CodeMap,
    pub language: CodeMap,
    pub language_level: CodeMap,
    pub salary: SalaryBuckets,
}

/// All enumeration tables consumed by the pipeline
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub city: Table,
    pub education: Table,
    pub schedule: Table,
    pub period: Table,
    pub experience: Table,
    pub language: Table,
    pub language_level: Table,
    pub work_ua: WorkUaCodes,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            city: Table::from_names("city", tables::CITIES),
            education: Table::from_names("education", tables::EDUCATION),
            schedule: Table::from_names("schedule", tables::SCHEDULES),
            period: Table::from_names("period", tables::PERIODS),
            experience: Table::from_names("experience", tables::EXPERIENCE),
            language: Table::from_names("language", tables::LANGUAGES),
            language_level: Table::from_names("language level", tables::LANGUAGE_LEVELS),
            work_ua: WorkUaCodes {
                experience: CodeMap::new("work.ua experience", tables::WORK_UA_EXPERIENCE),
                language: CodeMap::new("work.ua language", tables::WORK_UA_LANGUAGES),
                language_level: CodeMap::new(
                    "work.ua language level",
                    tables::WORK_UA_LANGUAGE_LEVELS,
                ),
                salary: SalaryBuckets::new(tables::WORK_UA_SALARY),
            },
        }
    }
}

/// `UPPER_INTERMEDIATE` -> `Upper intermediate`
fn display_name(raw: &str) -> String {
    let lower = raw.to_lowercase().replace('_', " ");
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
