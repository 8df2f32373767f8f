//! SELECT statement builder.

use std::sync::Arc;

use crate::builder::traits::SqlBuilder;
use crate::condition::{Conditions, Operand, join_fragments};
use crate::error::BuildResult;
use crate::quote::{MysqlQuoter, Quoter};
use crate::value::Raw;

/// SELECT statement builder.
///
/// Columns default to `*`. Identifiers passed to `columns`, joins,
/// `group_by` and the ordering methods are quoted; use
/// [`column_raw`](SelectBuilder::column_raw) for expressions such as
/// `COUNT(*)`.
pub struct SelectBuilder {
    quoter: Arc<dyn Quoter + Send + Sync>,
    table: String,
    distinct: bool,
    /// Rendered column expressions
    columns: Vec<String>,
    /// Rendered JOIN clauses
    joins: Vec<String>,
    conditions: Conditions,
    group_by: Vec<String>,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectBuilder {
    /// Create a SELECT builder for a table, using the MySQL quoter.
    pub fn new(table: &str) -> Self {
        Self::with_quoter(table, Arc::new(MysqlQuoter))
    }

    /// Create a SELECT builder with a custom quoter.
    pub fn with_quoter(table: &str, quoter: Arc<dyn Quoter + Send + Sync>) -> Self {
        Self {
            conditions: Conditions::new(quoter.clone()),
            quoter,
            table: table.to_string(),
            distinct: false,
            columns: Vec::new(),
            joins: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Add the DISTINCT modifier.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Append SELECT columns (quoted).
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns
            .extend(cols.iter().map(|c| self.quoter.quote_name(c)));
        self
    }

    /// Append one raw SELECT expression, e.g. `COUNT(*) AS cnt`.
    pub fn column_raw(mut self, expr: impl Into<Raw>) -> Self {
        self.columns.push(expr.into().into_string());
        self
    }

    /// Add an INNER JOIN with an equality ON condition (fields quoted).
    pub fn inner_join(self, table: &str, left: &str, right: &str) -> Self {
        self.push_join("INNER JOIN", table, left, right)
    }

    /// Add a LEFT JOIN with an equality ON condition (fields quoted).
    pub fn left_join(self, table: &str, left: &str, right: &str) -> Self {
        self.push_join("LEFT JOIN", table, left, right)
    }

    fn push_join(mut self, kind: &str, table: &str, left: &str, right: &str) -> Self {
        let join = format!(
            "{kind} {} ON {} = {}",
            self.quoter.quote_name(table),
            self.quoter.quote_name(left),
            self.quoter.quote_name(right)
        );
        self.joins.push(join);
        self
    }

    // ==================== WHERE / HAVING ====================

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

    /// Add a raw OR predicate to the WHERE clause.
    pub fn or_where_raw(mut self, sql: impl Into<String>) -> Self {
        self.conditions.or_where_raw(sql);
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

    /// Add an AND condition to the HAVING clause.
    pub fn and_having(
        mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> Self {
        self.conditions.and_having(field, op, operand);
        self
    }

    /// Add an OR condition to the HAVING clause.
    pub fn or_having(
        mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> Self {
        self.conditions.or_having(field, op, operand);
        self
    }

    /// Add a raw AND predicate to the HAVING clause.
    pub fn and_having_raw(mut self, sql: impl Into<String>) -> Self {
        self.conditions.and_having_raw(sql);
        self
    }

    /// Add a raw OR predicate to the HAVING clause.
    pub fn or_having_raw(mut self, sql: impl Into<String>) -> Self {
        self.conditions.or_having_raw(sql);
        self
    }

    /// Add a parenthesized HAVING group joined with AND.
    pub fn and_having_group(mut self, f: impl FnOnce(&mut Conditions)) -> Self {
        self.conditions.and_having_group(f);
        self
    }

    /// Add a parenthesized HAVING group joined with OR.
    pub fn or_having_group(mut self, f: impl FnOnce(&mut Conditions)) -> Self {
        self.conditions.or_having_group(f);
        self
    }

    // ==================== Grouping, ordering, pagination ====================

    /// Append GROUP BY fields (quoted).
    pub fn group_by(mut self, fields: &[&str]) -> Self {
        self.group_by
            .extend(fields.iter().map(|f| self.quoter.quote_name(f)));
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

    /// Set OFFSET.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }
}

impl SqlBuilder for SelectBuilder {
    fn build(&self) -> BuildResult<String> {
        let mut sql = vec!["SELECT".to_string()];
        if self.distinct {
            sql.push("DISTINCT".to_string());
        }
        sql.push(if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        });
        sql.push(format!("FROM {}", self.quoter.quote_name(&self.table)));
        sql.extend(self.joins.iter().cloned());

        let mut sql = self.conditions.where_sql(sql)?;
        if !self.group_by.is_empty() {
            sql.push(format!("GROUP BY {}", self.group_by.join(", ")));
        }
        let mut sql = self.conditions.having_sql(sql)?;
        if !self.order_by.is_empty() {
            sql.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }
        if let Some(limit) = self.limit {
            sql.push(format!("LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push(format!("OFFSET {offset}"));
        }

        let stmt = format!("{};", join_fragments(&sql));
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %stmt, "built SELECT statement");
        Ok(stmt)
    }
}
