//! Card number and print run extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered candidate patterns, most explicit first. Bare short numbers are
/// the last resort because they collide with grades and population counts.
static NUMBER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // #ABC-123 and #123
        Regex::new(r"#([A-Za-z]+-?\d+)").unwrap(),
        Regex::new(r"#(\d+)").unwrap(),
        // Manufacturer-prefixed codes without the hash. The input is the
        // normalized (lower-cased) title, hence the inline flag.
        Regex::new(r"(?i)\b(bd[a-z]?-?\d+)\b").unwrap(),
        Regex::new(r"(?i)\b(bs-?\d+)\b").unwrap(),
        Regex::new(r"(?i)\b(cpa-?[a-z]*\d+)\b").unwrap(),
        // Bare 1-3 digit number, last resort
        Regex::new(r"\b(\d{1,3})\b").unwrap(),
    ]
});

static PRINT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"/(\d+)\b").unwrap());

/// Words that disqualify an adjacent numeric candidate: grades and
/// population counts, not card numbers.
static GUARD_WORDS: &[&str] = &["psa", "pop", "gem", "mint", "bgs", "sgc", "mt"];

/// Extract the card number from a normalized title.
///
/// Candidates adjacent to a grading term or immediately followed by a
/// `/print-run` token are rejected. The accepted value always carries a
/// leading `#`.
pub fn extract_card_number(normalized_title: &str) -> Option<String> {
    for pattern in NUMBER_PATTERNS.iter() {
        for caps in pattern.captures_iter(normalized_title) {
            let whole = caps.get(0).unwrap();
            let value = caps.get(1).unwrap().as_str();
            if is_guarded(normalized_title, whole.start()) {
                continue;
            }
            // A digit run attached to '/', '#', or '-' belongs to a print
            // run or an already-considered code, not a bare card number.
            if let Some(prev) = normalized_title[..whole.start()].chars().next_back() {
                if matches!(prev, '/' | '#' | '-') && !whole.as_str().starts_with('#') {
                    continue;
                }
            }
            // A bare number feeding a `/run` token is the numerator of a
            // print run ("17/99"), not a card number. An explicit `#17/99`
            // still counts -- the hash marks it unambiguously.
            if !whole.as_str().starts_with('#')
                && followed_by_print_run(normalized_title, whole.end())
            {
                continue;
            }
            return Some(format!("#{}", value.to_uppercase()));
        }
    }
    None
}

/// Extract the print run (`/25` style) from a normalized title.
/// Always normalized to carry a leading `/`.
pub fn extract_print_run(normalized_title: &str) -> Option<String> {
    PRINT_RUN
        .captures(normalized_title)
        .map(|caps| format!("/{}", &caps[1]))
}

/// True when the word immediately before the candidate is a grading term.
fn is_guarded(title: &str, start: usize) -> bool {
    let before = title[..start].trim_end_matches(|c: char| c == '#');
    let prev = before.split_whitespace().next_back();
    match prev {
        Some(word) => GUARD_WORDS.contains(&word.trim_matches(|c: char| !c.is_alphanumeric())),
        None => false,
    }
}

/// True when a `/number` token begins right after the candidate, meaning the
/// candidate was the numerator of a print run ("17/99"), not a card number.
fn followed_by_print_run(title: &str, end: usize) -> bool {
    let rest = title[end..].trim_start();
    rest.starts_with('/') && rest[1..].chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false)
}
