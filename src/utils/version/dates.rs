// date arithmetic and formatting for version metadata

use super::types::VersionInfo;
use crate::error::{Error, Result};
use chrono::{Days, Local, NaiveDate};
use log::debug;

/// english month names as produced by `%B`, paired with their german names
const GERMAN_MONTHS: [(&str, &str); 12] = [
    ("January", "Januar"),
    ("February", "Februar"),
    ("March", "März"),
    ("April", "April"),
    ("May", "Mai"),
    ("June", "Juni"),
    ("July", "Juli"),
    ("August", "August"),
    ("September", "September"),
    ("October", "Oktober"),
    ("November", "November"),
    ("December", "Dezember"),
];

const VALID_FOR_DAYS: u64 = 3 * 365;
const REVIEW_AFTER_DAYS: u64 = 2 * 365;

/// replace english month names with german ones
pub fn translate_month(text: &str) -> String {
    GERMAN_MONTHS
        .iter()
        .fold(text.to_string(), |acc, &(en, de)| acc.replace(en, de))
}

/// convert `YYYY-MM-DD` to `DD.MM.YYYY`, returning the input if it does not parse
pub fn format_date_german(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn parse_release_date(input: &str) -> Result<NaiveDate> {
    if !has_iso_shape(input) {
        return Err(Error::InvalidDate {
            input: input.to_string(),
            reason: "expected four-digit year, two-digit month and day".to_string(),
        });
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| Error::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| Error::InvalidDate {
            input: date.to_string(),
            reason: format!("adding {} days is out of range", days),
        })
}

/// derive version metadata from a calendar date
///
/// offsets are fixed day counts, so leap days shift `valid_until` and
/// `next_review` by a day now and then
pub fn version_for_date(date: NaiveDate) -> Result<VersionInfo> {
    let valid_until = add_days(date, VALID_FOR_DAYS)?;
    let next_review = add_days(date, REVIEW_AFTER_DAYS)?;

    Ok(VersionInfo {
        version: date.format("%Y.%m.%d").to_string(),
        document_date: translate_month(&date.format("%d. %B %Y").to_string()),
        valid_until: valid_until.format("%d.%m.%Y").to_string(),
        next_review: translate_month(&next_review.format("%B %Y").to_string()),
    })
}

/// derive version metadata from an optional `YYYY-MM-DD` string, defaulting to today
pub fn generate_version_from_date(date_str: Option<&str>) -> Result<VersionInfo> {
    let date = match date_str {
        Some(input) => parse_release_date(input)?,
        None => Local::now().date_naive(),
    };
    debug!("computing version metadata for {}", date);
    version_for_date(date)
}
