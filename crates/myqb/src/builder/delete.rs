//! DELETE statement builder.

use std::sync::Arc;

use crate::builder::traits::SqlBuilder;
use crate::condition::{Conditions, Operand, join_fragments};
use crate::error::BuildResult;
use crate::quote::{MysqlQuoter, Quoter};

/// DELETE statement builder.
///
/// Modifiers render in MySQL grammar order: `LOW_PRIORITY QUICK IGNORE`.
/// [`truncate`](DeleteBuilder::truncate) switches the whole statement to
/// `TRUNCATE TABLE`, ignoring every other setting.
pub struct DeleteBuilder {
    quoter: Arc<dyn Quoter + Send + Sync>,
    table: String,
    low_priority: bool,
    quick: bool,
    ignore: bool,
    truncate: bool,
    conditions: Conditions,
    order_by: Vec<String>,
    limit: Option<u64>,
}

impl DeleteBuilder {
    /// Create a DELETE builder for a table, using the MySQL quoter.
    pub fn new(table: &str) -> Self {
        Self::with_quoter(table, Arc::new(MysqlQuoter))
    }

    /// Create a DELETE builder with a custom quoter.
    pub fn with_quoter(table: &str, quoter: Arc<dyn Quoter + Send + Sync>) -> Self {
        Self {
            conditions: Conditions::new(quoter.clone()),
            quoter,
            table: table.to_string(),
            low_priority: false,
            quick: false,
            ignore: false,
            truncate: false,
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Add the LOW_PRIORITY modifier.
    pub fn low_priority(mut self) -> Self {
        self.low_priority = true;
        self
    }

    /// Add the QUICK modifier.
    pub fn quick(mut self) -> Self {
        self.quick = true;
        self
    }

    /// Add the IGNORE modifier.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Render as `TRUNCATE TABLE` instead of `DELETE FROM`.
    pub fn truncate(mut self) -> Self {
        self.truncate = true;
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

impl SqlBuilder for DeleteBuilder {
    fn build(&self) -> BuildResult<String> {
        if self.truncate {
            let stmt = format!("TRUNCATE TABLE {};", self.quoter.quote_name(&self.table));
            #[cfg(feature = "tracing")]
            tracing::debug!(sql = %stmt, "built TRUNCATE statement");
            return Ok(stmt);
        }

        let mut sql = vec!["DELETE".to_string()];
        if self.low_priority {
            sql.push("LOW_PRIORITY".to_string());
        }
        if self.quick {
            sql.push("QUICK".to_string());
        }
        if self.ignore {
            sql.push("IGNORE".to_string());
        }
        sql.push(format!("FROM {}", self.quoter.quote_name(&self.table)));

        let mut sql = self.conditions.where_sql(sql)?;
        if !self.order_by.is_empty() {
            sql.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }
        if let Some(limit) = self.limit {
            sql.push(format!("LIMIT {limit}"));
        }

        let stmt = format!("{};", join_fragments(&sql));
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %stmt, "built DELETE statement");
        Ok(stmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_delete() {
        let sql = DeleteBuilder::new("test").build().unwrap();
        assert_eq!(sql, "DELETE FROM `test`;");
    }

    #[test]
    fn truncate_wins() {
        let sql = DeleteBuilder::new("test")
            .and_where("id", "=", "1")
            .truncate()
            .build()
            .unwrap();
        assert_eq!(sql, "TRUNCATE TABLE `test`;");
    }

    #[test]
    fn modifier_grammar_order() {
        let sql = DeleteBuilder::new("test")
            .ignore()
            .quick()
            .low_priority()
            .and_where("id", "=", "1")
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "DELETE LOW_PRIORITY QUICK IGNORE FROM `test` WHERE `id` = '1';"
        );
    }
}
