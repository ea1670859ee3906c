//! Year extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

// ---------------------------------------------------------------------------
// YearExtraction
// ---------------------------------------------------------------------------

/// A detected card year plus its provenance.
///
/// `inferred` is true when neither the title nor the search term contained a
/// usable year and the current calendar year was substituted. Callers that
/// care about data quality can tell a sourced 2026 from a defaulted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearExtraction {
    pub year: i32,
    pub inferred: bool,
}

/// Extract the card year from a title, falling back to the search term.
///
/// Only the first 4-digit match is used, so season ranges like "1994-95"
/// yield 1994. Out-of-range values (before 1900 or after next year) are
/// coerced to the current year rather than rejected.
pub fn extract_year(title: &str, search_term: Option<&str>) -> YearExtraction {
    if let Some(year) = first_year(title) {
        return YearExtraction {
            year: clamp_year(year),
            inferred: false,
        };
    }
    if let Some(term) = search_term {
        if let Some(year) = first_year(term) {
            return YearExtraction {
                year: clamp_year(year),
                inferred: false,
            };
        }
    }
    YearExtraction {
        year: config::current_year(),
        inferred: true,
    }
}

fn first_year(text: &str) -> Option<i32> {
    YEAR_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

fn clamp_year(year: i32) -> i32 {
    let max = config::current_year() + 1;
    if year < config::MIN_CARD_YEAR || year > max {
        config::current_year()
    } else {
        year
    }
}
