//! # Input Validation
//!
//! Identifier shape, text normalisation and publication year parsing.

use std::sync::OnceLock;

use chrono::{Datelike, Local};
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use super::errors::{CatalogError, CatalogResult};

/// Oldest accepted publication year
pub const MIN_YEAR: i32 = 1450;

static UUID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn uuid_pattern() -> &'static Regex {
    UUID_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
        )
        .expect("UUID pattern is valid")
    })
}

/// True for RFC 4122 ids of versions 1 through 5
pub fn is_uuid(value: &str) -> bool {
    uuid_pattern().is_match(value)
}

/// Check the id shape and parse it
pub fn parse_id(value: &str) -> CatalogResult<Uuid> {
    if !is_uuid(value) {
        return Err(CatalogError::InvalidId);
    }
    Uuid::parse_str(value).map_err(|_| CatalogError::InvalidId)
}

/// Key used to look a book up by the id text from a request.
///
/// Ids are compared as stored text, which is always lowercase, so a
/// well-formed id in any other case yields `None` and matches no book.
pub fn lookup_key(value: &str) -> CatalogResult<Option<Uuid>> {
    let id = parse_id(value)?;
    Ok((id.hyphenated().to_string() == value).then_some(id))
}

/// Trimmed string content; anything that is not a JSON string becomes empty
pub fn normalize_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Parse an optional publication year.
///
/// Absent, `null` and `""` mean "no year". Numbers and numeric strings must
/// be integral and fall within `MIN_YEAR..=max_year`.
pub fn parse_year(value: Option<&Value>, max_year: i32) -> CatalogResult<Option<i32>> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        Some(_) => None,
    };

    match number {
        Some(n)
            if n.is_finite()
                && n.fract() == 0.0
                && n >= f64::from(MIN_YEAR)
                && n <= f64::from(max_year) =>
        {
            Ok(Some(n as i32))
        }
        _ => Err(CatalogError::InvalidYear),
    }
}
