//! `SET` clause generation for partial updates
//!
//! Turns an ordered set of field/value pairs into a parameterized fragment
//! such as `"first_name"=$1, "age"=$2` plus the values to bind, in the same
//! order as the placeholders.

use sqlx::{query::QueryAs, sqlite::SqliteArguments, Sqlite};
use std::collections::HashMap;

use crate::errors::{AppError, AppResult};

/// A value destined for a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Output of [`sql_for_partial_update`]
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    /// `"col"=$n` clauses joined with `, `
    pub set_cols: String,
    /// Values aligned with `$1..$n`
    pub values: Vec<SqlValue>,
}

impl PartialUpdate {
    /// Index of the first placeholder after the `SET` values, for `WHERE` clauses
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }

    /// Bind the values onto `query` in placeholder order
    pub fn bind<'q, O>(
        self,
        query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
        bind_values(query, self.values)
    }
}

/// Bind `values` onto `query` as `$1..$n`
pub fn bind_values<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::Real(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
        };
    }
    query
}

/// Build the `SET` fragment for a partial update.
///
/// Placeholders are numbered from 1 in the iteration order of `data`. Field
/// names found in `column_map` are replaced by their column name, others are
/// used verbatim. An empty `data` is rejected before anything is assembled.
pub fn sql_for_partial_update<I, K>(
    data: I,
    column_map: &HashMap<&str, &str>,
) -> AppResult<PartialUpdate>
where
    I: IntoIterator<Item = (K, SqlValue)>,
    K: AsRef<str>,
{
    let mut data = data.into_iter().peekable();
    if data.peek().is_none() {
        return Err(AppError::bad_request("No data"));
    }

    let mut clauses = Vec::new();
    let mut values = Vec::new();
    for (idx, (field, value)) in data.enumerate() {
        let field = field.as_ref();
        let column = column_map.get(field).copied().unwrap_or(field);
        clauses.push(format!("\"{}\"=${}", column, idx + 1));
        values.push(value);
    }

    Ok(PartialUpdate {
        set_cols: clauses.join(", "),
        values,
    })
}
