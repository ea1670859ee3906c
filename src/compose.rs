//! Summary title composition.
//!
//! A pure function of the extracted fields. The composed string carries no
//! information not present elsewhere on the record, so batch jobs can
//! regenerate it at any time; composing twice from the same fields is
//! byte-identical.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::card_type::BASE_TYPE;
use crate::models::CardRecord;
use crate::vocab;

static SPORT_WORDS: &[&str] = &[
    "football", "baseball", "basketball", "hockey", "soccer", "golf",
    "wrestling", "racing",
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Compose the canonical display title from a record's structured fields.
///
/// Field order is fixed: year, set, type, player, "auto", number, print
/// run. Falls back to the original title if everything else comes up
/// empty.
pub fn compose_summary_title(record: &CardRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(year) = record.year {
        parts.push(year.to_string());
    }

    let card_set = record.card_set.as_deref().map(strip_sport_words);
    if let Some(set) = &card_set {
        if !set.is_empty() {
            parts.push(set.clone());
        }
    }

    if record.card_type != BASE_TYPE {
        parts.push(record.card_type.clone());
    }

    if let Some(player) = &record.player_name {
        // Team tokens stripped again as a final safety net; a player name
        // already embedded in the set label is not repeated.
        let cleaned = player
            .split_whitespace()
            .filter(|tok| !vocab::TEAM_NAMES.contains(tok.to_lowercase().as_str()))
            .collect::<Vec<_>>()
            .join(" ");
        let in_set = card_set
            .as_deref()
            .map(|s| s.to_lowercase().contains(&cleaned.to_lowercase()))
            .unwrap_or(false);
        if !cleaned.is_empty() && !in_set {
            parts.push(cleaned);
        }
    }

    if record.is_autograph {
        parts.push("auto".to_string());
    }

    if let Some(number) = &record.card_number {
        parts.push(number.clone());
    }
    if let Some(run) = &record.print_run {
        parts.push(run.clone());
    }

    let joined = parts.join(" ");
    let cleaned = strip_unwanted_terms(&joined);
    let collapsed = WHITESPACE.replace_all(cleaned.trim(), " ").into_owned();
    let final_title = collapsed
        .trim_end_matches(|c: char| c == '-' || c == ',' || c == '.' || c == ' ')
        .to_string();

    if final_title.is_empty() {
        record.title.clone()
    } else {
        final_title
    }
}

/// Remove sport names from a set label ("Topps Football" -> "Topps").
fn strip_sport_words(set: &str) -> String {
    set.split_whitespace()
        .filter(|w| !SPORT_WORDS.contains(&w.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-word removal of the fixed unwanted-term stoplist.
fn strip_unwanted_terms(text: &str) -> String {
    text.split_whitespace()
        .filter(|w| {
            let key = w.to_lowercase();
            !vocab::UNWANTED_SUMMARY_TERMS.contains(key.as_str())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
