//! Fluent statement builders.
//!
//! Thin wrappers around the condition compiler: each builder owns its
//! [`Conditions`](crate::condition::Conditions) sets, renders its clause
//! fragments in order, and joins them into a complete statement terminated
//! with `;`.
//!
//! ```ignore
//! use myqb::{select, SqlBuilder, Value};
//!
//! let sql = select("users")
//!     .columns(&["id", "email"])
//!     .and_where("status", "=", "active")
//!     .or_where_group(|c| {
//!         c.and_where("role", "=", "admin");
//!         c.and_where("deleted_at", "=", Value::Null);
//!     })
//!     .order_by_desc("created_at")
//!     .limit(20)
//!     .build()?;
//! ```

pub mod delete;
pub mod insert;
pub mod select;
pub mod traits;
pub mod update;

pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::SelectBuilder;
pub use traits::SqlBuilder;
pub use update::UpdateBuilder;

/// Create a SELECT builder for the given table.
///
/// # Example
/// ```ignore
/// let sql = myqb::select("users").and_where("id", "=", 1i64).build()?;
/// ```
pub fn select(table: &str) -> SelectBuilder {
    SelectBuilder::new(table)
}

/// Create an INSERT builder for the given table.
pub fn insert(table: &str) -> InsertBuilder {
    InsertBuilder::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Create a DELETE builder for the given table.
pub fn delete(table: &str) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

#[cfg(test)]
mod tests;
