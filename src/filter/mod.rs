//! Search filter
//!
//! A [`Filter`] is the structured search specification shared by every
//! source. It is deserialized from the `[filter]` section of the
//! configuration, validated once against the [`Vocabulary`], and only read
//! afterwards.

use crate::vocabulary::Vocabulary;
use crate::ConfigError;
use serde::Deserialize;
use std::collections::HashSet;

/// Maximum number of main skills appended to the speciality
pub const MAX_MAIN_SKILLS: usize = 3;

/// Upper bound for both age limits
pub const MAX_AGE: u32 = 100;

/// Required language and proficiency, both as generic codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LanguageRequirement {
    pub language: u32,
    pub level: u32,
}

/// Structured search criteria
///
/// Zero in an age or salary bound means "not set".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Filter {
    /// Free-text speciality ("python developer")
    pub speciality: String,

    /// Up to three skill keywords appended to the speciality
    pub main_skills: Vec<String>,

    pub city: u32,
    pub education: u32,
    pub age_from: u32,
    pub age_to: u32,
    pub salary_from: u64,
    pub salary_to: u64,
    pub schedule: u32,

    /// Lookback window
    pub period: u32,

    pub experience: u32,
    pub languages: Vec<LanguageRequirement>,

    /// Only résumés with a photo
    pub photo: bool,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            speciality: String::new(),
            main_skills: Vec::new(),
            city: 0,
            education: 0,
            age_from: 0,
            age_to: 0,
            salary_from: 0,
            salary_to: 0,
            schedule: 0,
            period: 5,
            experience: 6,
            languages: Vec::new(),
            photo: false,
        }
    }
}

impl Filter {
    /// Creates a filter for a speciality with every other field at its default
    pub fn new(speciality: impl Into<String>) -> Self {
        Self {
            speciality: speciality.into(),
            ..Self::default()
        }
    }

    /// Speciality words followed by the non-empty main skills
    pub fn search_terms(&self) -> Vec<&str> {
        self.speciality
            .split_whitespace()
            .chain(
                self.main_skills
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty()),
            )
            .collect()
    }

    /// Validates ranges and checks every coded field against the vocabulary
    pub fn validate(&self, vocabulary: &Vocabulary) -> Result<(), ConfigError> {
        if self.main_skills.len() > MAX_MAIN_SKILLS {
            return Err(ConfigError::Validation(format!(
                "at most {} main skills are allowed, got {}",
                MAX_MAIN_SKILLS,
                self.main_skills.len()
            )));
        }

        if self.age_from > MAX_AGE || self.age_to > MAX_AGE {
            return Err(ConfigError::Validation(format!(
                "age range must be within 0..={}, got {}..{}",
                MAX_AGE, self.age_from, self.age_to
            )));
        }

        if self.age_from != 0 && self.age_to != 0 && self.age_from > self.age_to {
            return Err(ConfigError::Validation(format!(
                "age_from ({}) must not exceed age_to ({})",
                self.age_from, self.age_to
            )));
        }

        if self.salary_from != 0 && self.salary_to != 0 && self.salary_from > self.salary_to {
            return Err(ConfigError::Validation(format!(
                "salary_from ({}) must not exceed salary_to ({})",
                self.salary_from, self.salary_to
            )));
        }

        vocabulary.city.term(self.city)?;
        vocabulary.education.term(self.education)?;
        vocabulary.schedule.term(self.schedule)?;
        vocabulary.period.term(self.period)?;
        vocabulary.experience.term(self.experience)?;

        let mut seen = HashSet::new();
        for requirement in &self.languages {
            vocabulary.language.term(requirement.language)?;
            vocabulary.language_level.term(requirement.level)?;
            if !seen.insert(requirement.language) {
                return Err(ConfigError::Validation(format!(
                    "language {} is listed more than once",
                    requirement.language
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let filter = Filter::new("python developer");
        assert_eq!(filter.period, 5);
        assert_eq!(filter.experience, 6);
        assert!(filter.validate(&Vocabulary::default()).is_ok());
    }

    #[test]
    fn test_search_terms_skip_empty_skills() {
        let filter = Filter {
            main_skills: vec!["fastapi".into(), "".into(), " ".into()],
            ..Filter::new("python  developer")
        };
        assert_eq!(filter.search_terms(), vec!["python", "developer", "fastapi"]);
    }

    #[test]
    fn test_too_many_skills() {
        let filter = Filter {
            main_skills: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..Filter::new("rust")
        };
        assert!(matches!(
            filter.validate(&Vocabulary::default()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_age_range() {
        let vocab = Vocabulary::default();

        let reversed = Filter {
            age_from: 40,
            age_to: 20,
            ..Filter::new("rust")
        };
        assert!(reversed.validate(&vocab).is_err());

        let open_ended = Filter {
            age_from: 40,
            ..Filter::new("rust")
        };
        assert!(open_ended.validate(&vocab).is_ok());

        let too_old = Filter {
            age_to: 101,
            ..Filter::new("rust")
        };
        assert!(too_old.validate(&vocab).is_err());
    }

    #[test]
    fn test_unknown_city_fails_fast() {
        let filter = Filter {
            city: 7,
            ..Filter::new("rust")
        };
        assert!(matches!(
            filter.validate(&Vocabulary::default()),
            Err(ConfigError::UnknownCode { table: "city", code: 7 })
        ));
    }

    #[test]
    fn test_duplicate_language() {
        let filter = Filter {
            languages: vec![
                LanguageRequirement { language: 1, level: 3 },
                LanguageRequirement { language: 1, level: 4 },
            ],
            ..Filter::new("rust")
        };
        assert!(filter.validate(&Vocabulary::default()).is_err());
    }

    #[test]
    fn test_unknown_language_level() {
        let filter = Filter {
            languages: vec![LanguageRequirement { language: 1, level: 9 }],
            ..Filter::new("rust")
        };
        assert!(matches!(
            filter.validate(&Vocabulary::default()),
            Err(ConfigError::UnknownCode { .. })
        ));
    }
}
