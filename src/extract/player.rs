//! Player name extraction.
//!
//! A filtering pipeline, not a parser: strip everything that is provably
//! not a name (years, card numbers, print runs, grading, jargon, team
//! names), then take the first two or three surviving tokens. Known to
//! truncate a name to the given name when a team nickname swallows the
//! surname; the repair pass re-runs extraction with a curated denylist of
//! previously observed bad single-token outputs.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::reference::SetReference;
use crate::vocab;

static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}(-\d{2})?\b").unwrap());
static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\S+").unwrap());
static PRINT_RUN_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+\b").unwrap());
static STANDALONE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(\.\d+)?\b").unwrap());

/// Metadata words that mark a reference-DB hit as card-set jargon rather
/// than a genuine player reference.
static JARGON_MARKERS: &[&str] = &["edition", "collection", "chrome", "prizm", "series", "set"];

static NAME_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v"];

/// Extract the player name from a raw (un-normalized) listing title.
///
/// `reference` is advisory: a surviving token that only shows up in
/// jargon-looking card-set metadata is discarded, and any lookup failure
/// keeps the token. Returns `None` when extraction failed -- callers must
/// not read that as "no player on the card".
pub fn extract_player_name(title: &str, reference: Option<&dyn SetReference>) -> Option<String> {
    extract_filtered(title, reference, &[])
}

/// Repair variant: identical pipeline plus a curated denylist of known-bad
/// outputs. Used by the batch repair job on already-persisted records.
pub fn repair_player_name(title: &str, reference: Option<&dyn SetReference>) -> Option<String> {
    let denylist: Vec<&str> = vocab::REPAIR_DENYLIST.iter().copied().collect();
    extract_filtered(title, reference, &denylist)
}

fn extract_filtered(
    title: &str,
    reference: Option<&dyn SetReference>,
    extra_denylist: &[&str],
) -> Option<String> {
    if title.trim().is_empty() {
        return None;
    }

    // Numeric and grading strips on a working copy that keeps case, so the
    // surviving tokens still carry the seller's capitalization.
    let mut working = YEAR_TOKEN.replace_all(title, " ").into_owned();
    working = NUMBER_TOKEN.replace_all(&working, " ").into_owned();
    working = PRINT_RUN_TOKEN.replace_all(&working, " ").into_owned();
    working = STANDALONE_NUMBER.replace_all(&working, " ").into_owned();

    // Multi-word team nicknames go first so "Red Sox" cannot leave "Red".
    let mut mask = working.to_lowercase();
    let mut phrases: Vec<&&str> = vocab::TEAM_NAMES.iter().filter(|t| t.contains(' ')).collect();
    phrases.sort();
    for phrase in phrases {
        mask = vocab::remove_whole_phrase(&mask, phrase);
    }

    let mut survivors: Vec<String> = Vec::new();
    for raw_token in working.split_whitespace() {
        let token = raw_token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-');
        if token.is_empty() {
            continue;
        }
        let key = token.to_lowercase();
        if !vocab::contains_whole_word(&mask, &key) {
            // Consumed by a team-phrase strip above.
            continue;
        }
        if vocab::CARD_JARGON.contains(key.as_str()) || vocab::TEAM_NAMES.contains(key.as_str()) {
            continue;
        }
        if is_set_jargon_per_reference(&key, reference) {
            continue;
        }
        survivors.push(token.to_string());
    }

    // First two tokens, plus a third only when it is a name suffix.
    let mut candidate: Vec<String> = survivors.iter().take(2).cloned().collect();
    if let Some(third) = survivors.get(2) {
        if NAME_SUFFIXES.contains(&third.to_lowercase().trim_end_matches('.')) {
            candidate.push(third.clone());
        }
    }
    if candidate.is_empty() {
        return None;
    }

    let joined: String = candidate.join(" ");
    if joined.len() < 3 || joined.len() > 30 {
        return None;
    }

    let cased: Vec<String> = candidate.iter().map(|t| proper_case_token(t)).collect();
    let name = cased.join(" ");
    // The denylist holds observed bad single-token outputs, so it only
    // vetoes a whole candidate, never a token inside a full name.
    if extra_denylist.contains(&name.to_lowercase().as_str()) {
        return None;
    }
    Some(name)
}

/// Advisory reference-database check. A token whose only reference hits
/// look like set metadata ("edition", "collection", ...) is jargon, not a
/// name. Lookup failures keep the token.
fn is_set_jargon_per_reference(token: &str, reference: Option<&dyn SetReference>) -> bool {
    let Some(reference) = reference else {
        return false;
    };
    match reference.search(token) {
        Ok(rows) if !rows.is_empty() => rows.iter().all(|row| {
            let haystack = format!(
                "{} {} {}",
                row.name.to_lowercase(),
                row.display_name.to_lowercase(),
                row.search_text.to_lowercase()
            );
            JARGON_MARKERS.iter().any(|marker| haystack.contains(marker))
        }),
        Ok(_) => false,
        Err(e) => {
            debug!(token, error = %e, "reference lookup failed; keeping token");
            false
        }
    }
}

/// Proper-case a name token.
///
/// Short all-caps tokens ("CJ", "JJ") and roman-numeral suffixes stay as
/// written; hyphen and apostrophe segments are capitalized independently
/// ("smith-njigba" -> "Smith-Njigba", "o'hearn" -> "O'Hearn").
fn proper_case_token(token: &str) -> String {
    let upper = token.to_uppercase();
    if token.len() <= 3 && token == upper && token.chars().all(|c| c.is_alphabetic()) {
        let lower = token.to_lowercase();
        if NAME_SUFFIXES.contains(&lower.as_str()) {
            return upper;
        }
        // Initials like "CJ" stay upper only when the seller wrote them so.
        return token.to_string();
    }
    let lower = token.to_lowercase();
    if NAME_SUFFIXES.contains(&lower.trim_end_matches('.')) {
        return match lower.as_str() {
            "jr" | "jr." => "Jr".to_string(),
            "sr" | "sr." => "Sr".to_string(),
            other => other.to_uppercase(),
        };
    }

    let mut out = String::with_capacity(token.len());
    let mut capitalize_next = true;
    for c in token.chars() {
        if c == '-' || c == '\'' {
            out.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
