//! Title extraction and classification engine for collectible card listings.
//!
//! Converts an unstructured marketplace listing title into a structured
//! card record (player, year, set, parallel, card number, print run,
//! rookie/autograph flags, sport) plus a canonical display title, and
//! maintains the persisted record set with idempotent refresh, player-name
//! repair, and identity-based deduplication passes. Records and the
//! read-only card-set reference data live in DuckDB.
//!
//! # Quick start
//!
//! ```no_run
//! use cardtrack::{Cardtrack, models::RawListing};
//!
//! let ct = Cardtrack::builder().in_memory().build().unwrap();
//!
//! let listing = RawListing::from_title(
//!     "2023 Panini Prizm CJ Stroud Orange Lazer PSA 10 Gem Mint #339 RC",
//! );
//! let record = ct.extract(&listing).unwrap();
//! assert_eq!(record.card_number.as_deref(), Some("#339"));
//! ```

pub mod compose;
pub mod config;
pub mod connection;
pub mod dedupe;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod reference;
pub mod sport;
pub mod sql_builder;
pub mod store;
pub mod vocab;

pub use connection::Connection;
pub use error::{CardtrackError, Result};
pub use sql_builder::SqlBuilder;

use std::path::{Path, PathBuf};
use std::time::Duration;

use lookup::{HttpSportLookup, SportLookup};
use models::{CardRecord, RawListing};
use reference::{DuckDbSetReference, SetReference};
use store::{CardStore, DuckDbCardStore};

// ---------------------------------------------------------------------------
// CardtrackBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Cardtrack`] instance.
pub struct CardtrackBuilder {
    db_path: Option<PathBuf>,
    in_memory: bool,
    lookup_endpoint: Option<String>,
    lookup_enabled: bool,
    timeout: Duration,
    throttle: Duration,
}

impl Default for CardtrackBuilder {
    fn default() -> Self {
        Self {
            db_path: None,
            in_memory: false,
            lookup_endpoint: None,
            lookup_enabled: true,
            timeout: config::LOOKUP_TIMEOUT,
            throttle: config::BATCH_THROTTLE,
        }
    }
}

impl CardtrackBuilder {
    /// Set the database file path. Defaults to `cards.duckdb` under the
    /// platform data directory.
    pub fn db_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.db_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory database (useful for tests and one-off runs).
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Override the external player-to-sport lookup endpoint.
    pub fn lookup_endpoint(mut self, url: &str) -> Self {
        self.lookup_endpoint = Some(url.to_string());
        self
    }

    /// Disable the external lookup stage entirely. Sport classification
    /// then starts at the reference-database aggregate.
    pub fn no_lookup(mut self) -> Self {
        self.lookup_enabled = false;
        self
    }

    /// Set the HTTP timeout for external lookup calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the inter-record delay for batch jobs that call external
    /// services. Zero disables throttling.
    pub fn throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Build the engine, opening the database and creating the schema.
    pub fn build(self) -> Result<Cardtrack> {
        let conn = if self.in_memory {
            Connection::open_in_memory()?
        } else {
            let path = match self.db_path {
                Some(p) => p,
                None => {
                    let dir = config::default_data_dir();
                    std::fs::create_dir_all(&dir)?;
                    dir.join("cards.duckdb")
                }
            };
            Connection::open(path)?
        };

        let lookup = if self.lookup_enabled {
            Some(HttpSportLookup::new(self.lookup_endpoint, self.timeout)?)
        } else {
            None
        };

        Ok(Cardtrack {
            conn,
            lookup,
            throttle: self.throttle,
        })
    }
}

// ---------------------------------------------------------------------------
// Cardtrack
// ---------------------------------------------------------------------------

/// The main entry point: owns the database connection and the optional
/// external lookup client, and exposes the extraction pipeline plus the
/// batch maintenance passes.
pub struct Cardtrack {
    conn: Connection,
    lookup: Option<HttpSportLookup>,
    throttle: Duration,
}

impl Cardtrack {
    /// Create a new builder.
    pub fn builder() -> CardtrackBuilder {
        CardtrackBuilder::default()
    }

    // -- Interfaces --------------------------------------------------------

    /// Access the record store.
    pub fn store(&self) -> DuckDbCardStore<'_> {
        DuckDbCardStore::new(&self.conn)
    }

    /// Access the read-only card-set reference lookup.
    pub fn reference(&self) -> DuckDbSetReference<'_> {
        DuckDbSetReference::new(&self.conn)
    }

    // -- Pipeline ----------------------------------------------------------

    /// Run the extraction pipeline over one listing without persisting.
    pub fn extract(&self, listing: &RawListing) -> Result<CardRecord> {
        let reference = self.reference();
        pipeline::extract_listing(listing, Some(&reference as &dyn SetReference), self.lookup_ref())
    }

    /// Extract a listing and insert the resulting record.
    pub fn ingest(&self, listing: &RawListing) -> Result<CardRecord> {
        let record = self.extract(listing)?;
        self.store().insert(&record)
    }

    // -- Batch maintenance -------------------------------------------------

    /// Re-run extraction over every stored record, overwriting derived
    /// fields in place.
    pub fn refresh_records(&self) -> Result<pipeline::BatchStats> {
        let store = self.store();
        let reference = self.reference();
        pipeline::refresh_records(&store, Some(&reference as &dyn SetReference), self.lookup_ref(), self.throttle)
    }

    /// Re-extract player names with the curated bad-output denylist.
    pub fn repair_player_names(&self) -> Result<pipeline::BatchStats> {
        let store = self.store();
        let reference = self.reference();
        pipeline::repair_player_names(&store, Some(&reference as &dyn SetReference))
    }

    /// Delete duplicate records, keeping one survivor per card identity.
    pub fn dedupe(&self) -> Result<dedupe::DedupeStats> {
        let store = self.store();
        dedupe::dedupe_records(&store)
    }

    // -- Utility -----------------------------------------------------------

    /// Seed the `card_sets` reference table from a newline-delimited JSON
    /// file with `name`, `displayName`, `searchText`, and `sport` keys.
    pub fn load_reference_sets(&self, ndjson_path: &str) -> Result<()> {
        self.conn.register_table_from_ndjson("card_sets", ndjson_path)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn lookup_ref(&self) -> Option<&dyn SportLookup> {
        self.lookup.as_ref().map(|l| l as &dyn SportLookup)
    }
}
