//! WHERE/HAVING condition sets and the compiler that renders them.
//!
//! A statement owns one [`Conditions`] value holding its WHERE and HAVING
//! sets. Conditions are appended through the `and_*`/`or_*` accumulator
//! methods; grouped (parenthesized) conditions are built through the
//! `*_group` methods, whose closure receives the same [`Conditions`] and
//! calls back into the accumulators. Rendering produces one text fragment
//! per entry, in insertion order; the first entry carries the clause
//! keyword, every later entry carries its own `AND`/`OR` joiner.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[cfg(feature = "rust_decimal")]
use rust_decimal::Decimal;

use crate::error::{BuildError, BuildResult};
use crate::quote::Quoter;
use crate::value::{Raw, Value};

/// Comparison functions rendered as `field = FUNC (args)`.
const LIST_FUNCTIONS: [&str; 5] = ["greatest", "least", "coalesce", "interval", "strcmp"];

/// Boolean connective linking a condition to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joiner {
    And,
    Or,
}

impl Joiner {
    fn as_sql(self) -> &'static str {
        match self {
            Joiner::And => "AND",
            Joiner::Or => "OR",
        }
    }
}

/// The clause a condition targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    Where,
    Having,
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A single scalar literal, including SQL NULL.
    Value(Value),
    /// A list of literals, for IN / BETWEEN / comparison functions.
    List(Vec<Value>),
    /// A pre-formatted fragment inserted verbatim, e.g. another column.
    Raw(Raw),
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

impl From<Raw> for Operand {
    fn from(r: Raw) -> Self {
        Operand::Raw(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(values: Vec<T>) -> Self {
        Operand::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        Operand::Value(Value::from(v))
    }
}

macro_rules! operand_from_scalar {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for Operand {
            fn from(v: $ty) -> Self {
                Operand::Value(Value::from(v))
            }
        }
    )+};
}

operand_from_scalar!(
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, &str, String, NaiveDate, NaiveTime,
    NaiveDateTime, DateTime<Utc>, Uuid, JsonValue,
);

#[cfg(feature = "rust_decimal")]
operand_from_scalar!(Decimal);

/// One entry of a condition set.
#[derive(Debug, Clone)]
enum CondEntry {
    /// Pre-rendered clause text, produced by the grouping fold.
    Fragment(String),
    /// A condition with its joiner.
    Cond(Joiner, Predicate),
}

/// The condition proper, without its joiner.
#[derive(Debug, Clone)]
enum Predicate {
    /// A complete raw predicate, e.g. `status IS NOT NULL`.
    Raw(String),
    /// A `field operator operand` comparison.
    Cmp {
        field: String,
        op: String,
        operand: Operand,
    },
}

/// Owner of the WHERE and HAVING condition sets of one statement.
///
/// Each set is append-only; it is swapped out wholesale only while a
/// grouping closure runs, and folded back wrapped in parentheses. Rendering
/// through [`where_sql`](Conditions::where_sql) /
/// [`having_sql`](Conditions::having_sql) is read-only and repeatable.
#[derive(Clone)]
pub struct Conditions {
    quoter: Arc<dyn Quoter + Send + Sync>,
    where_set: Vec<CondEntry>,
    having_set: Vec<CondEntry>,
    /// First error recorded by a grouping fold, surfaced at render time.
    build_error: Option<BuildError>,
}

impl Conditions {
    /// Create empty WHERE and HAVING sets backed by the given quoter.
    pub fn new(quoter: Arc<dyn Quoter + Send + Sync>) -> Self {
        Self {
            quoter,
            where_set: Vec::new(),
            having_set: Vec::new(),
            build_error: None,
        }
    }

    fn set_mut(&mut self, clause: Clause) -> &mut Vec<CondEntry> {
        match clause {
            Clause::Where => &mut self.where_set,
            Clause::Having => &mut self.having_set,
        }
    }

    // ==================== Accumulators ====================

    /// Append an AND condition to the WHERE set.
    pub fn and_where(
        &mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> &mut Self {
        self.push_cmp(Clause::Where, Joiner::And, field, op, operand)
    }

    /// Append an OR condition to the WHERE set.
    pub fn or_where(
        &mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> &mut Self {
        self.push_cmp(Clause::Where, Joiner::Or, field, op, operand)
    }

    /// Append an AND condition to the HAVING set.
    pub fn and_having(
        &mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> &mut Self {
        self.push_cmp(Clause::Having, Joiner::And, field, op, operand)
    }

    /// Append an OR condition to the HAVING set.
    pub fn or_having(
        &mut self,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> &mut Self {
        self.push_cmp(Clause::Having, Joiner::Or, field, op, operand)
    }

    /// Append a raw AND predicate to the WHERE set.
    ///
    /// # Safety
    /// The text is concatenated into the clause as-is.
    pub fn and_where_raw(&mut self, sql: impl Into<String>) -> &mut Self {
        self.push_raw(Clause::Where, Joiner::And, sql)
    }

    /// Append a raw OR predicate to the WHERE set.
    pub fn or_where_raw(&mut self, sql: impl Into<String>) -> &mut Self {
        self.push_raw(Clause::Where, Joiner::Or, sql)
    }

    /// Append a raw AND predicate to the HAVING set.
    pub fn and_having_raw(&mut self, sql: impl Into<String>) -> &mut Self {
        self.push_raw(Clause::Having, Joiner::And, sql)
    }

    /// Append a raw OR predicate to the HAVING set.
    pub fn or_having_raw(&mut self, sql: impl Into<String>) -> &mut Self {
        self.push_raw(Clause::Having, Joiner::Or, sql)
    }

    fn push_cmp(
        &mut self,
        clause: Clause,
        joiner: Joiner,
        field: impl Into<String>,
        op: impl Into<String>,
        operand: impl Into<Operand>,
    ) -> &mut Self {
        let predicate = Predicate::Cmp {
            field: field.into(),
            op: op.into(),
            operand: operand.into(),
        };
        self.set_mut(clause).push(CondEntry::Cond(joiner, predicate));
        self
    }

    fn push_raw(&mut self, clause: Clause, joiner: Joiner, sql: impl Into<String>) -> &mut Self {
        self.set_mut(clause)
            .push(CondEntry::Cond(joiner, Predicate::Raw(sql.into())));
        self
    }

    // ==================== Grouped conditions ====================

    /// Add a parenthesized WHERE group joined with AND.
    ///
    /// The closure receives this [`Conditions`] with an empty WHERE set;
    /// whatever it appends is folded back wrapped in parentheses. A closure
    /// that appends nothing leaves the clause untouched.
    pub fn and_where_group(&mut self, f: impl FnOnce(&mut Conditions)) -> &mut Self {
        self.add_grouped(Clause::Where, Joiner::And, f);
        self
    }

    /// Add a parenthesized WHERE group joined with OR.
    pub fn or_where_group(&mut self, f: impl FnOnce(&mut Conditions)) -> &mut Self {
        self.add_grouped(Clause::Where, Joiner::Or, f);
        self
    }

    /// Add a parenthesized HAVING group joined with AND.
    pub fn and_having_group(&mut self, f: impl FnOnce(&mut Conditions)) -> &mut Self {
        self.add_grouped(Clause::Having, Joiner::And, f);
        self
    }

    /// Add a parenthesized HAVING group joined with OR.
    pub fn or_having_group(&mut self, f: impl FnOnce(&mut Conditions)) -> &mut Self {
        self.add_grouped(Clause::Having, Joiner::Or, f);
        self
    }

    /// Retain the prior set and hand the closure an empty one to fill, then
    /// fold the result back as `JOINER ( ... )` fragments. Nested groups
    /// work because every level operates on its own temporary set.
    fn add_grouped(&mut self, clause: Clause, joiner: Joiner, f: impl FnOnce(&mut Conditions)) {
        let saved = std::mem::take(self.set_mut(clause));
        f(self);
        let working = std::mem::take(self.set_mut(clause));

        if working.is_empty() {
            *self.set_mut(clause) = saved;
            return;
        }

        let opener = if saved.is_empty() {
            "(".to_string()
        } else {
            format!("{} (", joiner.as_sql())
        };

        match self.compile(Vec::new(), "", &working) {
            Ok(fragments) => {
                let mut set = saved;
                set.push(CondEntry::Fragment(opener));
                set.extend(fragments.into_iter().map(CondEntry::Fragment));
                set.push(CondEntry::Fragment(")".to_string()));
                *self.set_mut(clause) = set;
            }
            Err(err) => {
                *self.set_mut(clause) = saved;
                if self.build_error.is_none() {
                    self.build_error = Some(err);
                }
            }
        }
    }

    // ==================== Rendering ====================

    /// Append the rendered WHERE clause fragments to `sql`.
    ///
    /// An empty set appends nothing and is not an error.
    pub fn where_sql(&self, sql: Vec<String>) -> BuildResult<Vec<String>> {
        self.check()?;
        self.compile(sql, "WHERE", &self.where_set)
    }

    /// Append the rendered HAVING clause fragments to `sql`.
    pub fn having_sql(&self, sql: Vec<String>) -> BuildResult<Vec<String>> {
        self.check()?;
        self.compile(sql, "HAVING", &self.having_set)
    }

    fn check(&self) -> BuildResult<()> {
        match &self.build_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Render one fragment per entry, in order. Entry 0 leads with the
    /// clause keyword; later entries lead with their own joiner. An empty
    /// keyword (nested group compilation) emits no lead at all.
    fn compile(
        &self,
        mut sql: Vec<String>,
        keyword: &str,
        entries: &[CondEntry],
    ) -> BuildResult<Vec<String>> {
        if entries.is_empty() {
            return Ok(sql);
        }

        for (i, entry) in entries.iter().enumerate() {
            match entry {
                CondEntry::Fragment(text) => {
                    if i == 0 && !keyword.is_empty() {
                        sql.push(format!("{keyword} {text}"));
                    } else {
                        sql.push(text.clone());
                    }
                }
                CondEntry::Cond(joiner, predicate) => {
                    let lead = if i == 0 { keyword } else { joiner.as_sql() };
                    let body = match predicate {
                        Predicate::Raw(text) => text.clone(),
                        Predicate::Cmp { field, op, operand } => {
                            let field = self.quoter.quote_name(field);
                            let (op, value) = self.render_operand(op, operand)?;
                            format!("{field} {op} {value}")
                        }
                    };
                    if lead.is_empty() {
                        sql.push(body);
                    } else {
                        sql.push(format!("{lead} {body}"));
                    }
                }
            }
        }

        Ok(sql)
    }

    /// Comparison operator normalization.
    ///
    /// Returns the rendered `(operator, value)` pair. Operator matching is
    /// case-insensitive on input; the output operator is always uppercased.
    /// Unknown operators fall through to the scalar branch by design.
    fn render_operand(&self, op: &str, operand: &Operand) -> BuildResult<(String, String)> {
        let key = op.to_ascii_lowercase();

        let (op_out, value) = if key == "in" || key == "not in" {
            (key, self.quoted_list(op, operand)?)
        } else if LIST_FUNCTIONS.contains(&key.as_str()) {
            (format!("= {key}"), self.quoted_list(op, operand)?)
        } else if key == "=" && matches!(operand, Operand::Value(Value::Null)) {
            ("is".to_string(), self.quoter.quote_value(&Value::Null))
        } else if (key == "<>" || key == "!=") && matches!(operand, Operand::Value(Value::Null)) {
            ("is not".to_string(), self.quoter.quote_value(&Value::Null))
        } else if key == "between" || key == "not between" {
            match operand {
                Operand::List(values) if values.len() == 2 => {
                    let low = self.quoter.quote_value(&values[0]);
                    let high = self.quoter.quote_value(&values[1]);
                    (key, format!("{low} AND {high}"))
                }
                _ => {
                    return Err(BuildError::invalid_condition(format!(
                        "operator {} expects a list of exactly two values",
                        op.to_ascii_uppercase()
                    )));
                }
            }
        } else {
            match operand {
                Operand::Raw(raw) => (key, raw.as_str().to_string()),
                Operand::Value(v) => (key, self.quoter.quote_value(v)),
                Operand::List(_) => {
                    return Err(BuildError::invalid_condition(format!(
                        "operator {} does not take a list value",
                        op.to_ascii_uppercase()
                    )));
                }
            }
        };

        Ok((op_out.to_ascii_uppercase(), value))
    }

    /// Render an operand as a quoted `(v1, v2, …)` list. A scalar is
    /// treated as a one-element list.
    fn quoted_list(&self, op: &str, operand: &Operand) -> BuildResult<String> {
        let quoted = match operand {
            Operand::Value(v) => vec![self.quoter.quote_value(v)],
            Operand::List(values) => self.quoter.quote_array(values),
            Operand::Raw(_) => {
                return Err(BuildError::invalid_condition(format!(
                    "operator {} expects literal values, not a raw fragment",
                    op.to_ascii_uppercase()
                )));
            }
        };
        Ok(format!("({})", quoted.join(", ")))
    }
}

/// Join clause fragments with single spaces, gluing parentheses tight: no
/// space after a fragment ending in `(`, none before a `)` fragment.
pub(crate) fn join_fragments(parts: &[String]) -> String {
    let mut out = String::new();
    for part in parts {
        if !out.is_empty() && !out.ends_with('(') && part != ")" {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
