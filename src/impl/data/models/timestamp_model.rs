use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::MalformedResponse;

/// Backend timestamp. Accepts RFC 3339, or a naive ISO-8601 date-time which
/// is taken to be UTC.
#[derive(Debug)]
pub(crate) struct TimestampModel(DateTime<Utc>);

impl FromStr for TimestampModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(TimestampModel(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
            .map(|naive| TimestampModel(naive.and_utc()))
            .map_err(|e| MalformedResponse::with_debug("timestamp", &e))
    }
}

impl<'de> Deserialize<'de> for TimestampModel {
    fn deserialize<D>(deserializer: D) -> Result<TimestampModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TimestampModel::from_str(&s)
            .map_err(|_| serde::de::Error::custom(format!("invalid timestamp '{s}'")))
    }
}

impl Into<DateTime<Utc>> for TimestampModel {
    fn into(self) -> DateTime<Utc> {
        self.0
    }
}
