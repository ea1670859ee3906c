//! Listing title normalization.
//!
//! Every extractor works from the same normalized form: lower-cased, with
//! grading and condition noise removed, punctuation other than `#`, `/`,
//! and `-` stripped, and whitespace collapsed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab;

/// Grading terms with a numeric grade attached, e.g. "psa 10", "gem mt 10",
/// "mint 9", "bgs 9.5". Grades run 1-10, so the number part never touches a
/// `#`-prefixed card number that happens to follow a grading word.
static GRADE_WITH_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(psa|bgs|sgc|cgc|csg|hga|gma|gem\s*mt|gem\s*mint|mint|mt|grade[d]?)\s*(10|[1-9](\.5)?)\b")
        .unwrap()
});

/// Long digit runs are certification numbers, never card data.
static CERT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{7,}\b").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a raw listing title.
///
/// Pure and total: `None`-like inputs (empty strings) come back empty.
pub fn normalize_title(title: &str) -> String {
    if title.trim().is_empty() {
        return String::new();
    }

    let mut text = title.to_lowercase();

    text = GRADE_WITH_NUMBER.replace_all(&text, " ").into_owned();
    text = CERT_NUMBER.replace_all(&text, " ").into_owned();

    // Remaining bare grading words ("psa", "gem", "pop") without a grade.
    // A digit run right after one of them is a population count or an odd
    // grade, never card data, so it goes too.
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut kept: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if vocab::GRADING_TERMS.contains(&tokens[i]) {
            i += 1;
            if tokens
                .get(i)
                .map(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
                .unwrap_or(false)
            {
                i += 1;
            }
            continue;
        }
        kept.push(tokens[i]);
        i += 1;
    }
    text = kept.join(" ");

    // Keep only the punctuation the extractors understand.
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '#' || c == '/' || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    WHITESPACE.replace_all(cleaned.trim(), " ").into_owned()
}
