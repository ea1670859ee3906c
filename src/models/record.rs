use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawListing — A scraped marketplace listing (input, externally supplied)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub title: String,
    pub search_term: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub ebay_item_id: Option<String>,
    pub source: Option<String>,
}

impl RawListing {
    /// Convenience constructor for a listing that only carries a title.
    pub fn from_title(title: &str) -> Self {
        Self {
            title: title.to_string(),
            search_term: None,
            price: None,
            image_url: None,
            ebay_item_id: None,
            source: None,
        }
    }
}

// ---------------------------------------------------------------------------
// CardRecord — The extracted, persisted card (one row per distinct listing)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Surrogate id, assigned by the store on insert.
    pub id: Option<i64>,
    /// Original listing title, preserved verbatim.
    pub title: String,
    /// Canonical display string derived from the structured fields.
    pub summary_title: String,
    pub player_name: Option<String>,
    pub year: Option<i32>,
    /// True when no year was found in the title or search term and the
    /// current calendar year was substituted.
    #[serde(default)]
    pub year_inferred: bool,
    pub card_set: Option<String>,
    /// Never null; `"Base"` when no parallel/variant was detected.
    pub card_type: String,
    /// Always `#`-prefixed when present.
    pub card_number: Option<String>,
    /// Always `/`-prefixed when present.
    pub print_run: Option<String>,
    #[serde(default)]
    pub is_rookie: bool,
    #[serde(default)]
    pub is_autograph: bool,
    /// Never null; `"Unknown"` when no classification stage produced an answer.
    pub sport: String,

    // -- Price points, populated by external scrape jobs --
    pub raw_price: Option<f64>,
    pub psa9_price: Option<f64>,
    pub psa10_price: Option<f64>,

    /// Creation timestamp, assigned by the store on insert (RFC 3339).
    pub created_at: Option<String>,
}

impl CardRecord {
    /// Number of populated price fields. The deduplicator treats more price
    /// data as a more complete record.
    pub fn price_completeness(&self) -> u32 {
        [self.raw_price, self.psa9_price, self.psa10_price]
            .iter()
            .filter(|p| p.is_some())
            .count() as u32
    }
}

// ---------------------------------------------------------------------------
// CardIdentity — Derived equivalence key for deduplication (not stored)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardIdentity {
    pub player_name: String,
    pub card_number: String,
    pub year: i32,
}

impl CardIdentity {
    /// Build the identity key for a record.
    ///
    /// Returns `None` unless player name, card number, and year are all
    /// present -- partially identified records are never deduplicated.
    pub fn of(record: &CardRecord) -> Option<CardIdentity> {
        match (&record.player_name, &record.card_number, record.year) {
            (Some(player), Some(number), Some(year)) => Some(CardIdentity {
                player_name: player.to_lowercase(),
                card_number: number.to_lowercase(),
                year,
            }),
            _ => None,
        }
    }
}
