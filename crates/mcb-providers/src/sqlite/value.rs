//! Conversions between the engine-neutral [`QueryValue`]/[`Row`] contract and
//! `sqlx`'s SQLite types. Every column in our fixed schema is dynamically
//! typed TEXT/INTEGER, so decoding tries the likely Rust types in turn
//! rather than branching on a declared column type.

use std::collections::HashMap;

use mcb_domain::ports::{QueryValue, Row};
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Column, Row as _, query::Query};

/// Bind one [`QueryValue`] onto a prepared `sqlx` query, in placeholder order.
pub fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: QueryValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        QueryValue::Null => query.bind(None::<String>),
        QueryValue::Bool(b) => query.bind(b),
        QueryValue::Int(i) => query.bind(i),
        QueryValue::Float(f) => query.bind(f),
        QueryValue::Text(s) => query.bind(s),
        QueryValue::Timestamp(t) => query.bind(t.to_rfc3339()),
        QueryValue::List(items) => {
            let as_json: Vec<serde_json::Value> = items.into_iter().map(query_value_to_json).collect();
            query.bind(serde_json::Value::Array(as_json).to_string())
        }
        QueryValue::Json(v) => query.bind(v.to_string()),
    }
}

fn query_value_to_json(value: QueryValue) -> serde_json::Value {
    match value {
        QueryValue::Null => serde_json::Value::Null,
        QueryValue::Bool(b) => serde_json::Value::Bool(b),
        QueryValue::Int(i) => serde_json::Value::from(i),
        QueryValue::Float(f) => serde_json::Value::from(f),
        QueryValue::Text(s) => serde_json::Value::String(s),
        QueryValue::Timestamp(t) => serde_json::Value::String(t.to_rfc3339()),
        QueryValue::List(items) => {
            serde_json::Value::Array(items.into_iter().map(query_value_to_json).collect())
        }
        QueryValue::Json(v) => v,
    }
}

/// Decode one column by trying, in order, an optional string, an integer,
/// then a float — the three storage classes our schema and aggregate
/// queries (`COUNT(*)`) ever produce.
fn column_value(row: &SqliteRow, idx: usize) -> QueryValue {
    if let Ok(v) = row.try_get::<Option<String>, usize>(idx) {
        return match v {
            Some(s) => QueryValue::Text(s),
            None => QueryValue::Null,
        };
    }
    if let Ok(v) = row.try_get::<i64, usize>(idx) {
        return QueryValue::Int(v);
    }
    if let Ok(v) = row.try_get::<f64, usize>(idx) {
        return QueryValue::Float(v);
    }
    QueryValue::Null
}

/// Map one `sqlx` row to the engine-neutral [`Row`], keyed by column alias.
pub fn row_to_map(row: &SqliteRow) -> Row {
    let mut map: Row = HashMap::with_capacity(row.columns().len());
    for (idx, column) in row.columns().iter().enumerate() {
        map.insert(column.name().to_owned(), column_value(row, idx));
    }
    map
}
