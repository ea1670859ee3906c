//! Read-only card-set reference lookup.
//!
//! Optional collaborator: sport classification and the player extractor's
//! jargon check consult it when present and simply skip their stage when it
//! is absent or failing.

use crate::connection::Connection;
use crate::error::Result;
use crate::models::SetRow;
use crate::sql_builder::SqlBuilder;

/// Substring search over known card-set metadata.
pub trait SetReference {
    /// Return every set row whose search text contains `substr`
    /// (case-insensitive). An empty result is a normal miss.
    fn search(&self, substr: &str) -> Result<Vec<SetRow>>;

    /// Return every set row whose search text occurs inside `text`
    /// (case-insensitive). Feeds the sport classifier's aggregate stage.
    fn matches_within(&self, text: &str) -> Result<Vec<SetRow>>;
}

// ---------------------------------------------------------------------------
// DuckDbSetReference
// ---------------------------------------------------------------------------

/// Reference lookup backed by the `card_sets` DuckDB table.
pub struct DuckDbSetReference<'a> {
    conn: &'a Connection,
}

impl<'a> DuckDbSetReference<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl SetReference for DuckDbSetReference<'_> {
    fn search(&self, substr: &str) -> Result<Vec<SetRow>> {
        let escaped = substr.replace('%', "").replace('_', "");
        let (sql, params) = SqlBuilder::new("card_sets")
            .where_like("searchText", &format!("%{}%", escaped))
            .build();
        self.conn.execute_into(&sql, &params)
    }

    fn matches_within(&self, text: &str) -> Result<Vec<SetRow>> {
        let (sql, params) = SqlBuilder::new("card_sets")
            .where_clause("LOWER(?) LIKE '%' || LOWER(searchText) || '%'", &[text])
            .build();
        self.conn.execute_into(&sql, &params)
    }
}
