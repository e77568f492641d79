//! Field extractors for price, time range, duration and flight number.
//!
//! Every extractor is a pure function of the fragment text and is total:
//! malformed input is a `None`, never an error. Only airline and price are
//! mandatory for a record; the rest degrade to sentinels in the builder.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::airlines::Airline;
use crate::utils::{format_duration, normalize_clock};

/// An extracted amount with the currency it was quoted in.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTag {
    pub amount: f64,
    pub currency: &'static str,
}

/// Ordered currency table; the first matching entry wins, so the home-market
/// symbol sits on top.
static CURRENCIES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    let table = [
        ("INR", r"(?:₹|INR)\s*(\d[\d,]*(?:\.\d+)?)"),
        ("USD", r"(?:\$|USD)\s*(\d[\d,]*(?:\.\d+)?)"),
        ("EUR", r"(?:€|EUR)\s*(\d[\d,]*(?:\.\d+)?)"),
        ("GBP", r"(?:£|GBP)\s*(\d[\d,]*(?:\.\d+)?)"),
        ("AED", r"AED\s*(\d[\d,]*(?:\.\d+)?)"),
        ("SGD", r"SGD\s*(\d[\d,]*(?:\.\d+)?)"),
    ];
    table
        .into_iter()
        .map(|(code, pattern)| {
            let re = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("bad currency pattern for {code}: {e}"));
            (code, re)
        })
        .collect()
});

static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2}:\d{2}\s*(?:AM|PM)?)\s*[-–—]\s*(\d{1,2}:\d{2}\s*(?:AM|PM)?)")
        .unwrap()
});

static DURATION_HOURS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\s*(?:h|hr|hour)s?\b").unwrap());
static DURATION_MINUTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\s*(?:m|min|minute)s?\b").unwrap());

/// First currency whose pattern matches with a parseable amount. Commas are
/// grouping only and are stripped before parsing; an unparseable capture
/// falls through to the remaining table entries.
pub fn extract_price(fragment: &str) -> Option<PriceTag> {
    for (code, re) in CURRENCIES.iter() {
        if let Some(caps) = re.captures(fragment) {
            if let Ok(amount) = caps[1].replace(',', "").parse() {
                return Some(PriceTag {
                    amount,
                    currency: *code,
                });
            }
        }
    }
    None
}

/// Two clock tokens separated by a dash-like character, normalized to
/// display form.
pub fn extract_time_range(fragment: &str) -> Option<(String, String)> {
    let caps = TIME_RANGE.captures(fragment)?;
    Some((normalize_clock(&caps[1]), normalize_clock(&caps[2])))
}

/// Hours/minutes token pair in short ("2h 30m") or long ("2 hr 30 min")
/// form, re-emitted canonically. The minutes scan resumes after the hours
/// token so a lone hour digit is never double-counted.
pub fn extract_duration(fragment: &str) -> Option<String> {
    let hours = DURATION_HOURS.captures(fragment);
    let (hours_value, minutes_from) = match &hours {
        Some(caps) => {
            let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
            (caps[1].parse::<u32>().ok()?, &fragment[end..])
        }
        None => (0, fragment),
    };
    let minutes_value = DURATION_MINUTES
        .captures(minutes_from)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .unwrap_or(0);
    if hours_value == 0 && minutes_value == 0 {
        return None;
    }
    Some(format_duration(hours_value, minutes_value))
}

/// Flight number for the airline already detected in this fragment.
pub fn extract_flight_number(fragment: &str, airline: &Airline) -> Option<String> {
    airline.flight_number_in(fragment)
}
