//! Sport classification.
//!
//! A strict fallback cascade; each stage runs only when the previous one
//! produced no answer, and every external dependency fails soft:
//!
//! 1. external player-to-sport lookup (when a player name was extracted),
//! 2. reference-database aggregate over known set names,
//! 3. keyword-indicator tables in fixed priority order,
//! 4. the `"Unknown"` sentinel.

use std::collections::BTreeMap;

use tracing::warn;

use crate::lookup::SportLookup;
use crate::reference::SetReference;
use crate::vocab;

/// Sentinel for "no classification". Never null.
pub const UNKNOWN_SPORT: &str = "Unknown";

// ---------------------------------------------------------------------------
// SportClassifier
// ---------------------------------------------------------------------------

/// Cascading classifier over the optional external collaborators.
pub struct SportClassifier<'a> {
    lookup: Option<&'a dyn SportLookup>,
    reference: Option<&'a dyn SetReference>,
}

impl<'a> SportClassifier<'a> {
    pub fn new(
        lookup: Option<&'a dyn SportLookup>,
        reference: Option<&'a dyn SetReference>,
    ) -> Self {
        Self { lookup, reference }
    }

    /// Classify a normalized title, using the extracted player name for the
    /// external-lookup stage when available.
    pub fn classify(&self, normalized_title: &str, player_name: Option<&str>) -> String {
        if let Some(sport) = self.from_player_lookup(player_name) {
            return sport;
        }
        if let Some(sport) = self.from_reference_aggregate(normalized_title) {
            return sport;
        }
        if let Some(sport) = from_keyword_indicators(normalized_title) {
            return sport;
        }
        UNKNOWN_SPORT.to_string()
    }

    fn from_player_lookup(&self, player_name: Option<&str>) -> Option<String> {
        let lookup = self.lookup?;
        let name = player_name?;
        match lookup.sport_for_player(name) {
            Ok(Some(sport)) if sport != UNKNOWN_SPORT => Some(sport),
            Ok(_) => None,
            Err(e) => {
                warn!(player = name, error = %e, "player sport lookup failed; falling through");
                None
            }
        }
    }

    /// Aggregate stage: every reference row whose search text appears in
    /// the title votes for its sport; most rows wins. Ties break
    /// lexicographically on the sport name, which `BTreeMap` iteration
    /// order gives for free.
    fn from_reference_aggregate(&self, normalized_title: &str) -> Option<String> {
        let reference = self.reference?;
        let rows = match reference.matches_within(normalized_title) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "reference aggregate failed; falling through");
                return None;
            }
        };
        if rows.is_empty() {
            return None;
        }

        let mut votes: BTreeMap<String, usize> = BTreeMap::new();
        for row in rows {
            *votes.entry(row.sport).or_insert(0) += 1;
        }
        votes
            .into_iter()
            .max_by(|(a_sport, a_n), (b_sport, b_n)| a_n.cmp(b_n).then(b_sport.cmp(a_sport)))
            .map(|(sport, _)| sport)
            .filter(|sport| sport != UNKNOWN_SPORT)
    }
}

/// Stage 3: keyword-indicator tables, first table with any whole-word
/// match wins. Table order is fixed; earlier vocabularies are the most
/// distinctive.
pub fn from_keyword_indicators(normalized_title: &str) -> Option<String> {
    for table in vocab::SPORT_INDICATORS {
        if table
            .keywords
            .iter()
            .any(|kw| vocab::contains_whole_word(normalized_title, kw))
        {
            return Some(table.sport.to_string());
        }
    }
    None
}
