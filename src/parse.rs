use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{Error, Result};

/// Publish timestamps arrive with or without sub-second precision.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%SZ", "%Y-%m-%dT%H:%M:%S%.fZ"];

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

fn duration_regex() -> &'static Regex {
    DURATION_RE.get_or_init(|| {
        Regex::new(
            r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)W)?(?:(\d+(?:\.\d+)?)D)?(?:T(?:(\d+(?:\.\d+)?)H)?(?:(\d+(?:\.\d+)?)M)?(?:(\d+(?:\.\d+)?)S)?)?$",
        )
        .expect("duration pattern is valid")
    })
}

/// Convert an ISO-8601 duration such as `PT4M13S` or `P1DT2H` to seconds.
///
/// Year and month components have no fixed length and are rejected unless zero.
pub fn parse_iso8601_duration(value: &str) -> Result<f64> {
    let invalid = || Error::Parse(format!("invalid ISO-8601 duration: {:?}", value));

    let caps = duration_regex().captures(value).ok_or_else(invalid)?;
    if value.ends_with('T') || caps.iter().skip(1).all(|c| c.is_none()) {
        return Err(invalid());
    }

    for calendar in [1, 2] {
        if let Some(m) = caps.get(calendar) {
            if !m.as_str().trim_start_matches('0').is_empty() {
                return Err(Error::Parse(format!(
                    "calendar duration not supported: {:?}",
                    value
                )));
            }
        }
    }

    let component = |idx: usize| -> Result<f64> {
        caps.get(idx)
            .map(|m| m.as_str().parse::<f64>().map_err(|_| invalid()))
            .unwrap_or(Ok(0.0))
    };

    Ok(component(3)? * 604_800.0
        + component(4)? * 86_400.0
        + component(5)? * 3_600.0
        + component(6)? * 60.0
        + component(7)?)
}

/// Parse an API timestamp in either accepted pattern.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::Parse(format!("unrecognized timestamp: {:?}", value)))
}

/// Parse a statistics counter, which the API sends as a decimal string.
/// Absent counters (hidden likes, disabled comments) count as zero.
pub fn parse_count(value: Option<&str>) -> Result<u64> {
    match value {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("invalid count: {:?}", raw))),
    }
}
