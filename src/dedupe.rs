//! Identity-based deduplication.
//!
//! Two records with the same `(player, card number, year)` identity are the
//! same card scraped twice. Exactly one record per identity survives: the
//! one with the most price data, because more price points mean a more
//! complete record. The merge is destructive and one-directional -- losing
//! records are deleted without folding their fields into the winner.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{CardIdentity, CardRecord};
use crate::store::CardStore;

/// Outcome of a deduplication pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct DedupeStats {
    pub groups: usize,
    pub deleted: usize,
}

/// Remove duplicate records, keeping one survivor per identity.
///
/// Only records with player name, card number, and year all present are
/// considered. Survivor selection is deterministic: highest price
/// completeness, then earliest creation timestamp, then lowest id.
pub fn dedupe_records(store: &dyn CardStore) -> Result<DedupeStats> {
    let mut groups: HashMap<CardIdentity, Vec<CardRecord>> = HashMap::new();
    for record in store.list_all()? {
        if let Some(identity) = CardIdentity::of(&record) {
            groups.entry(identity).or_default().push(record);
        }
    }

    let mut stats = DedupeStats::default();
    for (identity, mut records) in groups {
        if records.len() < 2 {
            continue;
        }
        stats.groups += 1;

        records.sort_by(|a, b| {
            b.price_completeness()
                .cmp(&a.price_completeness())
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        let survivor = &records[0];
        debug!(
            player = %identity.player_name,
            number = %identity.card_number,
            year = identity.year,
            survivor = survivor.id,
            "deduplicating identity group"
        );

        for loser in &records[1..] {
            if let Some(id) = loser.id {
                store.delete(id)?;
                stats.deleted += 1;
            }
        }
    }

    info!(groups = stats.groups, deleted = stats.deleted, "dedupe complete");
    Ok(stats)
}
