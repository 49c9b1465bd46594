//! Column decoding shared by the relational repositories.

use crate::{DbError, Result};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::decode(format!("Invalid UUID in {}: {}", column, e)))
}

#[track_caller]
pub(crate) fn timestamp(millis: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::decode(format!("Invalid timestamp in {}", column)))
}

#[track_caller]
pub(crate) fn enumeration<T>(value: &str, column: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(value).map_err(|e| DbError::decode(format!("Invalid value in {}: {}", column, e)))
}
