//! UPDATE statement builder.

use std::sync::Arc;

use crate::builder::traits::SqlBuilder;
use crate::condition::{Conditions, Operand, join_fragments};
use crate::error::{BuildError, BuildResult};
use crate::quote::{MysqlQuoter, Quoter};
use crate::value::{Raw, Value};

/// Right-hand side of a SET assignment.
enum Assignment {
    Value(Value),
    Raw(Raw),
}

/// UPDATE statement builder.
///
/// At least one SET assignment is required; building without one is an
/// error rather than emitting a malformed statement.
pub struct UpdateBuilder {
    quoter: Arc<dyn Quoter + Send + Sync>,
    table: String,
    low_priority: bool,
    ignore: bool,
    sets: Vec<(String, Assignment)>,
    conditions: Conditions,
    order_by: Vec<String>,
    limit: Option<u64>,
}

impl UpdateBuilder {
    /// Create an UPDATE builder for a table, using the MySQL quoter.
    pub fn new(table: &str) -> Self {
        Self::with_quoter(table, Arc::new(MysqlQuoter))
    }

    /// Create an UPDATE builder with a custom quoter.
    pub fn with_quoter(table: &str, quoter: Arc<dyn Quoter + Send + Sync>) -> Self {
        Self {
            conditions: Conditions::new(quoter.clone()),
            quoter,
            table: table.to_string(),
            low_priority: false,
            ignore: false,
            sets: Vec::new(),
            order_by: Vec::new(),
            limit: None,
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

    /// Add a SET assignment.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.sets.push((column.to_string(), Assignment::Value(value.into())));
        self
    }

    /// Add a SET assignment with a raw right-hand expression, e.g. `NOW()`.
    ///
    /// # Safety
    /// The expression is concatenated into the statement as-is.
    pub fn set_raw(mut self, column: &str, expr: impl Into<Raw>) -> Self {
        self.sets.push((column.to_string(), Assignment::Raw(expr.into())));
        self
    }

    /// Add an AND condition to the WHERE clause.
    pub fn and_where(
        mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> Self {
        self.conditions.and_where(field, op, operand);
        self
    }

    /// Add an OR condition to the WHERE clause.
    pub fn or_where(
        mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> Self {
        self.conditions.or_where(field, op, operand);
        self
    }

    /// Add a raw AND predicate to the WHERE clause.
    pub fn and_where_raw(mut self, sql: impl Into<String>) -> Self {
        self.conditions.and_where_raw(sql);
        self
    }

    /// Add a parenthesized WHERE group joined with AND.
    pub fn and_where_group(mut self, f: impl FnOnce(&mut Conditions)) -> Self {
        self.conditions.and_where_group(f);
        self
    }

    /// Add a parenthesized WHERE group joined with OR.
    pub fn or_where_group(mut self, f: impl FnOnce(&mut Conditions)) -> Self {
        self.conditions.or_where_group(f);
        self
    }

    /// Append an ORDER BY field with no direction.
    pub fn order_by(mut self, field: &str) -> Self {
        let field = self.quoter.quote_name(field);
        self.order_by.push(field);
        self
    }

    /// Append an ascending ORDER BY field.
    pub fn order_by_asc(mut self, field: &str) -> Self {
        let field = self.quoter.quote_name(field);
        self.order_by.push(format!("{field} ASC"));
        self
    }

    /// Append a descending ORDER BY field.
    pub fn order_by_desc(mut self, field: &str) -> Self {
        let field = self.quoter.quote_name(field);
        self.order_by.push(format!("{field} DESC"));
        self
    }

    /// Set LIMIT.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }
}

impl SqlBuilder for UpdateBuilder {
    fn build(&self) -> BuildResult<String> {
        if self.sets.is_empty() {
            return Err(BuildError::validation(
                "UPDATE requires at least one SET column",
            ));
        }

        let mut sql = vec!["UPDATE".to_string()];
        if self.low_priority {
            sql.push("LOW_PRIORITY".to_string());
        }
        if self.ignore {
            sql.push("IGNORE".to_string());
        }
        sql.push(self.quoter.quote_name(&self.table));

        let assignments: Vec<String> = self
            .sets
            .iter()
            .map(|(col, assignment)| {
                let rhs = match assignment {
                    Assignment::Value(v) => self.quoter.quote_value(v),
                    Assignment::Raw(r) => r.as_str().to_string(),
                };
                format!("{} = {}", self.quoter.quote_name(col), rhs)
            })
            .collect();
        sql.push(format!("SET {}", assignments.join(", ")));

        let mut sql = self.conditions.where_sql(sql)?;
        if !self.order_by.is_empty() {
            sql.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }
        if let Some(limit) = self.limit {
            sql.push(format!("LIMIT {limit}"));
        }

        let stmt = format!("{};", join_fragments(&sql));
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %stmt, "built UPDATE statement");
        Ok(stmt)
    }
}
