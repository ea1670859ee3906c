//! DuckDB connection wrapper with query execution helpers.
//!
//! Both the persisted `cards` table and the read-only `card_sets` reference
//! table live in one DuckDB database, in-memory or file-backed. Rows come
//! back as JSON objects so the models deserialize through serde.

use std::collections::HashMap;
use std::path::Path;

use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Wraps a DuckDB connection shared by the store and the reference lookup.
pub struct Connection {
    conn: DuckDbConnection,
}

impl Connection {
    /// Open an in-memory database and create the schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        let this = Self { conn };
        this.bootstrap()?;
        Ok(this)
    }

    /// Open (or create) a file-backed database and create the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = DuckDbConnection::open(path.as_ref())?;
        let this = Self { conn };
        this.bootstrap()?;
        Ok(this)
    }

    /// Create tables and the id sequence if they do not already exist.
    fn bootstrap(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE SEQUENCE IF NOT EXISTS cards_id_seq;
             CREATE TABLE IF NOT EXISTS cards (
                 id BIGINT PRIMARY KEY DEFAULT nextval('cards_id_seq'),
                 title VARCHAR NOT NULL,
                 summaryTitle VARCHAR NOT NULL,
                 playerName VARCHAR,
                 year INTEGER,
                 yearInferred BOOLEAN DEFAULT FALSE,
                 cardSet VARCHAR,
                 cardType VARCHAR NOT NULL DEFAULT 'Base',
                 cardNumber VARCHAR,
                 printRun VARCHAR,
                 isRookie BOOLEAN DEFAULT FALSE,
                 isAutograph BOOLEAN DEFAULT FALSE,
                 sport VARCHAR NOT NULL DEFAULT 'Unknown',
                 rawPrice DOUBLE,
                 psa9Price DOUBLE,
                 psa10Price DOUBLE,
                 createdAt VARCHAR
             );
             CREATE TABLE IF NOT EXISTS card_sets (
                 name VARCHAR NOT NULL,
                 displayName VARCHAR NOT NULL,
                 searchText VARCHAR NOT NULL,
                 sport VARCHAR NOT NULL
             );",
        )?;
        Ok(())
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Column metadata is only valid after query execution in duckdb-rs.
        let column_names: Vec<String> = rows_result
            .as_ref()
            .unwrap()
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        let column_count = rows_result.as_ref().unwrap().column_count();

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();
        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::new();
            for i in 0..column_count {
                map.insert(column_names[i].clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }
        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(&self, sql: &str, params: &[String]) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(
                row.into_iter()
                    .collect::<serde_json::Map<String, serde_json::Value>>(),
            );
            results.push(serde_json::from_value(value)?);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    pub fn execute_scalar(&self, sql: &str, params: &[String]) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows = stmt.query(param_values.as_slice())?;
        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }

    /// Execute a statement that returns no rows (INSERT/UPDATE/DELETE),
    /// returning the affected row count.
    pub fn execute_update(&self, sql: &str, params: &[String]) -> Result<usize> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();
        Ok(stmt.execute(param_values.as_slice())?)
    }

    /// Load a table from a newline-delimited JSON file, replacing any
    /// existing contents. Used to seed the `card_sets` reference table and
    /// by the test fixtures.
    pub fn register_table_from_ndjson(&self, table_name: &str, ndjson_path: &str) -> Result<()> {
        let path_fwd = ndjson_path.replace('\\', "/");
        self.conn.execute_batch(&format!(
            "DROP TABLE IF EXISTS {}; \
             CREATE TABLE {} AS SELECT * FROM read_json_auto('{}', format='newline_delimited')",
            table_name, table_name, path_fwd
        ))?;
        Ok(())
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => {
            if let Ok(i) = i64::try_from(n) {
                serde_json::Value::Number(i.into())
            } else {
                serde_json::Value::String(n.to_string())
            }
        }
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).to_string()),
        _ => serde_json::Value::Null,
    }
}
