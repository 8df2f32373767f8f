//! Identifier and literal quoting.
//!
//! [`Quoter`] is the dialect seam: it turns identifiers into their quoted
//! form and [`Value`]s into literals suitable for direct embedding in a
//! statement. [`MysqlQuoter`] is the shipped MySQL implementation.
//!
//! - Identifiers use backticks, with embedded backticks doubled. Dotted
//!   `db.table.column` paths are quoted per part; a bare `*` passes through.
//! - String literals use backslash escaping for the characters MySQL treats
//!   specially (NUL, quotes, backspace, newline, carriage return, tab,
//!   ctrl-Z, backslash).

use crate::value::Value;

/// Dialect-specific identifier and value escaping service.
pub trait Quoter {
    /// Quote an identifier, handling dotted `db.table.column` paths.
    fn quote_name(&self, name: &str) -> String;

    /// Render a value as a literal suitable for direct SQL embedding.
    fn quote_value(&self, value: &Value) -> String;

    /// Render each value in a list as a literal.
    fn quote_array(&self, values: &[Value]) -> Vec<String> {
        values.iter().map(|v| self.quote_value(v)).collect()
    }
}

/// MySQL identifier and literal quoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlQuoter;

impl Quoter for MysqlQuoter {
    fn quote_name(&self, name: &str) -> String {
        name.split('.')
            .map(|part| {
                if part == "*" {
                    part.to_string()
                } else {
                    format!("`{}`", part.replace('`', "``"))
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    fn quote_value(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            Value::Int(n) => n.to_string(),
            Value::UInt(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Str(s) => quote_str(s),
            Value::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
            Value::Time(t) => format!("'{}'", t.format("%H:%M:%S")),
            Value::DateTime(dt) => format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S")),
            Value::Uuid(u) => format!("'{u}'"),
            Value::Json(j) => quote_str(&j.to_string()),
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(d) => d.to_string(),
        }
    }
}

/// Escape a string and wrap it in single quotes.
fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\0' => out.push_str("\\0"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\x08' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x1a' => out.push_str("\\Z"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}
