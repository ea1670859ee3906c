//! Listing-to-record pipeline and batch maintenance jobs.
//!
//! Extraction is pure and synchronous; only the sport classifier and the
//! advisory reference consult touch the outside world, and both fail soft.
//! An individual extractor finding nothing never aborts the record -- the
//! record is composed from whatever subset of fields succeeded.

use std::time::Duration;

use tracing::{info, warn};

use crate::compose::compose_summary_title;
use crate::error::{CardtrackError, Result};
use crate::extract;
use crate::lookup::SportLookup;
use crate::models::{CardRecord, RawListing};
use crate::reference::SetReference;
use crate::sport::SportClassifier;
use crate::{normalize, store::CardStore};

/// Run the full extraction pipeline over one listing.
///
/// The only hard error is an empty title; every other miss degrades to a
/// sentinel or `None`. The result is not yet persisted.
pub fn extract_listing(
    listing: &RawListing,
    reference: Option<&dyn SetReference>,
    lookup: Option<&dyn SportLookup>,
) -> Result<CardRecord> {
    if listing.title.trim().is_empty() {
        return Err(CardtrackError::InvalidArgument(
            "listing title must be non-empty".to_string(),
        ));
    }

    let normalized = normalize::normalize_title(&listing.title);

    let year = extract::extract_year(&listing.title, listing.search_term.as_deref());
    let card_set = extract::extract_card_set(&normalized);
    let card_type = extract::extract_card_type(&normalized, card_set);
    let card_number = extract::extract_card_number(&normalized);
    let print_run = extract::extract_print_run(&normalized);
    let is_rookie = extract::is_rookie(&normalized);
    let is_autograph = extract::is_autograph(&normalized);
    let player_name = extract::extract_player_name(&listing.title, reference);

    let sport = SportClassifier::new(lookup, reference)
        .classify(&normalized, player_name.as_deref());

    let mut record = CardRecord {
        id: None,
        title: listing.title.clone(),
        summary_title: String::new(),
        player_name,
        year: Some(year.year),
        year_inferred: year.inferred,
        card_set: card_set.map(|s| s.to_string()),
        card_type,
        card_number,
        print_run,
        is_rookie,
        is_autograph,
        sport,
        raw_price: listing.price,
        psa9_price: None,
        psa10_price: None,
        created_at: None,
    };
    record.summary_title = compose_summary_title(&record);
    Ok(record)
}

// ---------------------------------------------------------------------------
// Batch maintenance
// ---------------------------------------------------------------------------

/// Counters reported by a batch maintenance pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchStats {
    pub processed: usize,
    pub updated: usize,
    pub failed: usize,
}

/// Re-run extraction over every stored record and overwrite the derived
/// fields in place.
///
/// Idempotent: the original `title` is immutable, so re-running converges.
/// Each record is written in a single `update` call; a failure is logged
/// and the batch moves on. `throttle` spaces out external-lookup traffic
/// and is skipped when no lookup service is wired in.
pub fn refresh_records(
    store: &dyn CardStore,
    reference: Option<&dyn SetReference>,
    lookup: Option<&dyn SportLookup>,
    throttle: Duration,
) -> Result<BatchStats> {
    let mut stats = BatchStats::default();

    for existing in store.list_all()? {
        stats.processed += 1;
        let Some(id) = existing.id else { continue };

        let listing = RawListing::from_title(&existing.title);
        match extract_listing(&listing, reference, lookup) {
            Ok(fresh) => {
                if let Err(e) = store.update(id, &fresh) {
                    warn!(id, error = %e, "refresh update failed; continuing");
                    stats.failed += 1;
                } else {
                    stats.updated += 1;
                }
            }
            Err(e) => {
                warn!(id, error = %e, "refresh extraction failed; continuing");
                stats.failed += 1;
            }
        }

        if lookup.is_some() && !throttle.is_zero() {
            std::thread::sleep(throttle);
        }
    }

    info!(
        processed = stats.processed,
        updated = stats.updated,
        failed = stats.failed,
        "record refresh complete"
    );
    Ok(stats)
}

/// Re-extract player names with the curated bad-output denylist applied,
/// overwriting the name and regenerated summary where the result differs.
pub fn repair_player_names(
    store: &dyn CardStore,
    reference: Option<&dyn SetReference>,
) -> Result<BatchStats> {
    let mut stats = BatchStats::default();

    for existing in store.list_all()? {
        stats.processed += 1;
        let Some(id) = existing.id else { continue };

        let repaired = extract::repair_player_name(&existing.title, reference);
        if repaired == existing.player_name {
            continue;
        }

        let mut updated = existing.clone();
        updated.player_name = repaired;
        updated.summary_title = compose_summary_title(&updated);

        match store.update(id, &updated) {
            Ok(()) => stats.updated += 1,
            Err(e) => {
                warn!(id, error = %e, "player name repair failed; continuing");
                stats.failed += 1;
            }
        }
    }

    info!(
        processed = stats.processed,
        updated = stats.updated,
        "player name repair complete"
    );
    Ok(stats)
}
