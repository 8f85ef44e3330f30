use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Number, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};

/// Convert a row of unknown shape into a field-keyed JSON record, preserving
/// the store's column order and naming. Used where no typed model exists:
/// stored-procedure result sets are passed back verbatim. A value that fails
/// to decode is an error, not a NULL; the caller owns the failure boundary.
pub fn row_to_record(row: &PgRow) -> Result<Map<String, Value>, sqlx::Error> {
    let mut record = Map::new();
    for column in row.columns() {
        let i = column.ordinal();
        let value = match column.type_info().name() {
            "INT2" => row.try_get::<Option<i16>, _>(i)?.map(Value::from),
            "INT4" => row.try_get::<Option<i32>, _>(i)?.map(Value::from),
            "INT8" => row.try_get::<Option<i64>, _>(i)?.map(Value::from),
            "FLOAT4" => row
                .try_get::<Option<f32>, _>(i)?
                .map(|v| Value::from(v as f64)),
            "FLOAT8" => row.try_get::<Option<f64>, _>(i)?.map(Value::from),
            "NUMERIC" => row
                .try_get::<Option<BigDecimal>, _>(i)?
                .map(decimal_to_value),
            "BOOL" => row.try_get::<Option<bool>, _>(i)?.map(Value::from),
            "DATE" => row
                .try_get::<Option<NaiveDate>, _>(i)?
                .map(|d| Value::from(d.to_string())),
            "TIMESTAMP" => row
                .try_get::<Option<NaiveDateTime>, _>(i)?
                .map(|t| Value::from(t.to_string())),
            "TIMESTAMPTZ" => row
                .try_get::<Option<DateTime<Utc>>, _>(i)?
                .map(|t| Value::from(t.to_rfc3339())),
            "JSON" | "JSONB" => row.try_get::<Option<Value>, _>(i)?,
            // TEXT, VARCHAR, BPCHAR, NAME and anything else textual
            _ => row.try_get::<Option<String>, _>(i)?.map(Value::from),
        };
        record.insert(column.name().to_string(), value.unwrap_or(Value::Null));
    }
    Ok(record)
}

/// Aggregate totals fit in f64; fall back to the exact string form when a
/// value does not round-trip as a JSON number.
fn decimal_to_value(decimal: BigDecimal) -> Value {
    let text = decimal.to_string();
    match text.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(text),
    }
}
