//! # myqb
//!
//! A fluent, string-first MySQL statement builder.
//!
//! ## Features
//!
//! - **Fully rendered statements**: builders produce complete SQL strings
//!   with identifiers quoted and values escaped, ready for logging, diffing
//!   or handing to any driver
//! - **Condition compiler**: ordered AND/OR condition sets with closure-based
//!   parenthesized groups, nesting to any depth
//! - **Operator normalization**: `in`, `between`, comparison functions and
//!   NULL rewrites (`=` → `IS`) handled case-insensitively
//! - **Typed values**: Rust scalars plus chrono, uuid and serde_json convert
//!   straight into literals; `Raw` bypasses quoting for expressions
//! - **Safe defaults**: shape errors (`between` without two values, a list
//!   where a scalar belongs) fail the build instead of emitting bad SQL
//!
//! ## Building statements
//!
//! ```ignore
//! use myqb::{select, update, SqlBuilder, Value};
//!
//! // SELECT
//! let sql = select("users")
//!     .columns(&["id", "email"])
//!     .and_where("status", "=", "active")
//!     .or_where_group(|c| {
//!         c.and_where("role", "in", vec!["admin", "editor"]);
//!         c.and_where("deleted_at", "=", Value::Null);
//!     })
//!     .order_by_desc("created_at")
//!     .limit(20)
//!     .build()?;
//!
//! // UPDATE
//! let sql = update("users")
//!     .set_raw("last_seen", "NOW()")
//!     .and_where("id", "=", 1i64)
//!     .build()?;
//! ```

pub mod builder;
pub mod condition;
pub mod error;
pub mod quote;
pub mod value;

pub use builder::{
    DeleteBuilder, InsertBuilder, SelectBuilder, SqlBuilder, UpdateBuilder, delete, insert, select,
    update,
};
pub use condition::{Conditions, Joiner, Operand};
pub use error::{BuildError, BuildResult};
pub use quote::{MysqlQuoter, Quoter};
pub use value::{Raw, Value};
