//! INSERT statement builder.

use std::sync::Arc;

use crate::builder::traits::SqlBuilder;
use crate::error::{BuildError, BuildResult};
use crate::quote::{MysqlQuoter, Quoter};
use crate::value::Value;

/// INSERT statement builder.
///
/// The first row is filled column by column with [`set`](InsertBuilder::set);
/// further rows are appended with [`row`](InsertBuilder::row) and must match
/// the first row's arity.
pub struct InsertBuilder {
    quoter: Arc<dyn Quoter + Send + Sync>,
    table: String,
    low_priority: bool,
    ignore: bool,
    /// Column names, unquoted
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    /// ON DUPLICATE KEY UPDATE assignments
    update_on_duplicate: Vec<(String, Value)>,
}

impl InsertBuilder {
    /// Create an INSERT builder for a table, using the MySQL quoter.
    pub fn new(table: &str) -> Self {
        Self::with_quoter(table, Arc::new(MysqlQuoter))
    }

    /// Create an INSERT builder with a custom quoter.
    pub fn with_quoter(table: &str, quoter: Arc<dyn Quoter + Send + Sync>) -> Self {
        Self {
            quoter,
            table: table.to_string(),
            low_priority: false,
            ignore: false,
            columns: Vec::new(),
            rows: Vec::new(),
            update_on_duplicate: Vec::new(),
        }
    }

    /// Add the LOW_PRIORITY modifier.
    pub fn low_priority(mut self) -> Self {
        self.low_priority = true;
        self
    }

    /// Add the IGNORE modifier.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Set a column value on the first row.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        self.columns.push(column.to_string());
        self.rows[0].push(value.into());
        self
    }

    /// Append a full row of values, matching the columns set so far.
    pub fn row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(values);
        self
    }

    /// Add an ON DUPLICATE KEY UPDATE assignment.
    pub fn on_duplicate_key_update(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.update_on_duplicate
            .push((column.to_string(), value.into()));
        self
    }
}

impl SqlBuilder for InsertBuilder {
    fn build(&self) -> BuildResult<String> {
        if self.columns.is_empty() {
            return Err(BuildError::validation(
                "INSERT requires at least one column",
            ));
        }
        for row in &self.rows {
            if row.len() != self.columns.len() {
                return Err(BuildError::validation(format!(
                    "INSERT row has {} values but {} columns",
                    row.len(),
                    self.columns.len()
                )));
            }
        }

        let mut sql = vec!["INSERT".to_string()];
        if self.low_priority {
            sql.push("LOW_PRIORITY".to_string());
        }
        if self.ignore {
            sql.push("IGNORE".to_string());
        }
        sql.push(format!("INTO {}", self.quoter.quote_name(&self.table)));

        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| self.quoter.quote_name(c))
            .collect();
        sql.push(format!("({})", columns.join(", ")));

        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| format!("({})", self.quoter.quote_array(row).join(", ")))
            .collect();
        sql.push(format!("VALUES {}", rows.join(", ")));

        if !self.update_on_duplicate.is_empty() {
            let assignments: Vec<String> = self
                .update_on_duplicate
                .iter()
                .map(|(col, val)| {
                    format!(
                        "{} = {}",
                        self.quoter.quote_name(col),
                        self.quoter.quote_value(val)
                    )
                })
                .collect();
            sql.push(format!("ON DUPLICATE KEY UPDATE {}", assignments.join(", ")));
        }

        let stmt = format!("{};", sql.join(" "));
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %stmt, "built INSERT statement");
        Ok(stmt)
    }
}
