//! Serde helpers for the date, time and id forms exchanged with clients.
//!
//! Times are read as `HH:MM` or `HH:MM:SS[.fff]` and written the way
//! PostgreSQL prints `time` values: `HH:MM:SS`, plus a fraction only when the
//! value has one. The `optional_*` variants read request fields loosely:
//! `null`, `false`, `0` and blank strings all count as absent, so presence
//! checks happen in request validation rather than in the decoder.

use chrono::{NaiveDate, NaiveTime, ParseResult};
use serde::{Deserialize, Deserializer, Serializer, de};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S%.f";

pub fn parse_date(value: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

pub fn parse_time(value: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
}

/// Any JSON scalar a client may put in a request field.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn is_falsy(&self) -> bool {
        match self {
            Scalar::Bool(value) => !value,
            Scalar::Int(value) => *value == 0,
            Scalar::Float(value) => *value == 0.0 || value.is_nan(),
            Scalar::Text(value) => value.trim().is_empty(),
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.filter(|scalar| !scalar.is_falsy()))
}

fn present_text<'de, D>(deserializer: D, expected: &str) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match present(deserializer)? {
        Some(Scalar::Text(raw)) => Ok(Some(raw.trim().to_string())),
        Some(_) => Err(de::Error::custom(format!("expected {expected}"))),
        None => Ok(None),
    }
}

pub mod time {
    use super::*;

    pub fn serialize<S>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_time(raw.trim()).map_err(de::Error::custom)
    }
}

pub mod optional_time {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.collect_str(&time.format(TIME_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match present_text(deserializer, "a time such as \"09:30\"")? {
            Some(raw) => parse_time(&raw).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

pub mod optional_date {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match present_text(deserializer, "a date such as \"2024-01-31\"")? {
            Some(raw) => parse_date(&raw).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Integer ids, also accepted as numeric strings.
pub mod optional_id {
    use super::*;

    pub fn serialize<S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_i32(*id),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match present(deserializer)? {
            Some(Scalar::Int(id)) => i32::try_from(id).map(Some).map_err(de::Error::custom),
            Some(Scalar::Text(raw)) => raw.trim().parse().map(Some).map_err(de::Error::custom),
            Some(_) => Err(de::Error::custom("expected an integer id")),
            None => Ok(None),
        }
    }
}
