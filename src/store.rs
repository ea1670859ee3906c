//! Card record persistence.
//!
//! The core never manages schema or transactions beyond these five verbs;
//! the store assigns the surrogate id and creation timestamp.

use tracing::debug;

use crate::connection::Connection;
use crate::error::{CardtrackError, Result};
use crate::models::CardRecord;
use crate::sql_builder::{SqlBuilder, UpdateBuilder};

/// The persistence verbs the pipeline and batch jobs are written against.
pub trait CardStore {
    /// Insert a record, returning it with `id` and `created_at` assigned.
    fn insert(&self, record: &CardRecord) -> Result<CardRecord>;
    fn get_by_id(&self, id: i64) -> Result<Option<CardRecord>>;
    /// All records in insertion order.
    fn list_all(&self) -> Result<Vec<CardRecord>>;
    /// Overwrite all derived fields of a record. The original `title`,
    /// price points, id, and creation timestamp are left untouched.
    fn update(&self, id: i64, record: &CardRecord) -> Result<()>;
    fn delete(&self, id: i64) -> Result<()>;
}

// ---------------------------------------------------------------------------
// DuckDbCardStore
// ---------------------------------------------------------------------------

/// `CardStore` over the `cards` DuckDB table.
pub struct DuckDbCardStore<'a> {
    conn: &'a Connection,
}

impl<'a> DuckDbCardStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl CardStore for DuckDbCardStore<'_> {
    fn insert(&self, record: &CardRecord) -> Result<CardRecord> {
        let created_at = chrono::Utc::now().to_rfc3339();
        let sql = "INSERT INTO cards \
                   (title, summaryTitle, playerName, year, yearInferred, cardSet, \
                    cardType, cardNumber, printRun, isRookie, isAutograph, sport, \
                    rawPrice, psa9Price, psa10Price, createdAt) \
                   VALUES (?, ?, NULLIF(?, ''), TRY_CAST(NULLIF(?, '') AS INTEGER), \
                           CAST(? AS BOOLEAN), NULLIF(?, ''), \
                           ?, NULLIF(?, ''), NULLIF(?, ''), \
                           CAST(? AS BOOLEAN), CAST(? AS BOOLEAN), ?, \
                           TRY_CAST(NULLIF(?, '') AS DOUBLE), \
                           TRY_CAST(NULLIF(?, '') AS DOUBLE), \
                           TRY_CAST(NULLIF(?, '') AS DOUBLE), ?) \
                   RETURNING id";
        let params = vec![
            record.title.clone(),
            record.summary_title.clone(),
            opt_str(&record.player_name),
            record.year.map(|y| y.to_string()).unwrap_or_default(),
            record.year_inferred.to_string(),
            opt_str(&record.card_set),
            record.card_type.clone(),
            opt_str(&record.card_number),
            opt_str(&record.print_run),
            record.is_rookie.to_string(),
            record.is_autograph.to_string(),
            record.sport.clone(),
            opt_num(record.raw_price),
            opt_num(record.psa9_price),
            opt_num(record.psa10_price),
            created_at.clone(),
        ];

        let id = self
            .conn
            .execute_scalar(sql, &params)?
            .and_then(|v| v.as_i64())
            .ok_or_else(|| CardtrackError::NotFound("inserted row id".to_string()))?;

        debug!(id, title = %record.title, "inserted card record");

        let mut inserted = record.clone();
        inserted.id = Some(id);
        inserted.created_at = Some(created_at);
        Ok(inserted)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<CardRecord>> {
        let (sql, params) = SqlBuilder::new("cards")
            .where_eq("id", &id.to_string())
            .limit(1)
            .build();
        let rows: Vec<CardRecord> = self.conn.execute_into(&sql, &params)?;
        Ok(rows.into_iter().next())
    }

    fn list_all(&self) -> Result<Vec<CardRecord>> {
        let (sql, params) = SqlBuilder::new("cards").order_by(&["id ASC"]).build();
        self.conn.execute_into(&sql, &params)
    }

    fn update(&self, id: i64, record: &CardRecord) -> Result<()> {
        let mut ub = UpdateBuilder::new("cards");
        ub.set("summaryTitle", &record.summary_title)
            .set_opt("playerName", record.player_name.as_deref())
            .set_opt("cardSet", record.card_set.as_deref())
            .set("cardType", &record.card_type)
            .set_opt("cardNumber", record.card_number.as_deref())
            .set_opt("printRun", record.print_run.as_deref())
            .set("sport", &record.sport)
            .set_raw("year", &match record.year {
                Some(y) => y.to_string(),
                None => "NULL".to_string(),
            })
            .set_raw("yearInferred", if record.year_inferred { "TRUE" } else { "FALSE" })
            .set_raw("isRookie", if record.is_rookie { "TRUE" } else { "FALSE" })
            .set_raw("isAutograph", if record.is_autograph { "TRUE" } else { "FALSE" })
            .where_eq("id", &id.to_string());
        let (sql, params) = ub.build();

        let affected = self.conn.execute_update(&sql, &params)?;
        if affected == 0 {
            return Err(CardtrackError::NotFound(format!("card record {}", id)));
        }
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute_update("DELETE FROM cards WHERE id = ?", &[id.to_string()])?;
        if affected == 0 {
            return Err(CardtrackError::NotFound(format!("card record {}", id)));
        }
        Ok(())
    }
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_num(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
