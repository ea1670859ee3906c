//! Parameterized SQL construction.
//!
//! All user-supplied values go through DuckDB's parameter binding (`?`
//! placeholders), never through string interpolation. Builder methods
//! return `&mut Self` for chaining.

// ---------------------------------------------------------------------------
// SqlBuilder — SELECT queries
// ---------------------------------------------------------------------------

/// Builds parameterized SELECT statements.
pub struct SqlBuilder {
    select_cols: Vec<String>,
    from_table: String,
    where_clauses: Vec<String>,
    params: Vec<String>,
    order_by_cols: Vec<String>,
    limit_val: Option<usize>,
}

impl SqlBuilder {
    /// Create a builder targeting the given table.
    pub fn new(table: &str) -> Self {
        Self {
            select_cols: vec!["*".to_string()],
            from_table: table.to_string(),
            where_clauses: Vec::new(),
            params: Vec::new(),
            order_by_cols: Vec::new(),
            limit_val: None,
        }
    }

    /// Set the columns to select (replaces the default `*`).
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add a WHERE condition with `?` placeholders for each param.
    pub fn where_clause(&mut self, condition: &str, params: &[&str]) -> &mut Self {
        self.where_clauses.push(condition.to_string());
        self.params.extend(params.iter().map(|p| p.to_string()));
        self
    }

    /// Add an equality condition: `{column} = ?`.
    pub fn where_eq(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clauses.push(format!("{} = ?", column));
        self.params.push(value.to_string());
        self
    }

    /// Add a case-insensitive LIKE condition: `LOWER({column}) LIKE LOWER(?)`.
    pub fn where_like(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push(format!("LOWER({}) LIKE LOWER(?)", column));
        self.params.push(value.to_string());
        self
    }

    /// Add a NOT NULL condition.
    pub fn where_not_null(&mut self, column: &str) -> &mut Self {
        self.where_clauses.push(format!("{} IS NOT NULL", column));
        self
    }

    /// Add ORDER BY clauses (e.g. `"createdAt ASC"`).
    pub fn order_by(&mut self, clauses: &[&str]) -> &mut Self {
        self.order_by_cols
            .extend(clauses.iter().map(|c| c.to_string()));
        self
    }

    /// Set the maximum number of rows to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Build the final SQL string and parameter list.
    pub fn build(&self) -> (String, Vec<String>) {
        let mut parts = vec![
            format!("SELECT {}", self.select_cols.join(", ")),
            format!("FROM {}", self.from_table),
        ];

        if !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
        }
        if !self.order_by_cols.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by_cols.join(", ")));
        }
        if let Some(n) = self.limit_val {
            parts.push(format!("LIMIT {}", n));
        }

        (parts.join("\n"), self.params.clone())
    }
}

// ---------------------------------------------------------------------------
// UpdateBuilder — UPDATE statements
// ---------------------------------------------------------------------------

/// Builds parameterized UPDATE statements. `NULL` assignments are inlined
/// since DuckDB parameters are strings here.
pub struct UpdateBuilder {
    table: String,
    assignments: Vec<String>,
    where_clauses: Vec<String>,
    params: Vec<String>,
}

impl UpdateBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            assignments: Vec::new(),
            where_clauses: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Assign `{column} = ?`.
    pub fn set(&mut self, column: &str, value: &str) -> &mut Self {
        self.assignments.push(format!("{} = ?", column));
        self.params.push(value.to_string());
        self
    }

    /// Assign an optional value; `None` becomes SQL `NULL`.
    pub fn set_opt(&mut self, column: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) => self.set(column, v),
            None => {
                self.assignments.push(format!("{} = NULL", column));
                self
            }
        }
    }

    /// Assign a raw (trusted, non-user) expression, e.g. `TRUE`.
    pub fn set_raw(&mut self, column: &str, expr: &str) -> &mut Self {
        self.assignments.push(format!("{} = {}", column, expr));
        self
    }

    pub fn where_eq(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clauses.push(format!("{} = ?", column));
        self.params.push(value.to_string());
        self
    }

    pub fn build(&self) -> (String, Vec<String>) {
        let mut sql = format!("UPDATE {} SET {}", self.table, self.assignments.join(", "));
        if !self.where_clauses.is_empty() {
            sql.push_str(&format!(" WHERE {}", self.where_clauses.join(" AND ")));
        }
        (sql, self.params.clone())
    }
}
