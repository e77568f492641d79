// Core structs: SearchQuery, FlightRecord, ScrapeOutcome
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One `(origin, destination, date)` search. Validation of the codes is the
/// caller's job; the pipeline passes them through untouched.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

/// A single flight offer, either recovered from page text or injected as a
/// synthetic diversity record. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub id: String,
    pub airline: String,
    /// "`<IATA>-<digits>`", or "Multiple" when no code was recoverable.
    pub flight_number: String,
    /// 12-hour display form, or "TBD".
    pub departure_time: String,
    pub arrival_time: String,
    /// "2h 30m" form, or "Unknown".
    pub duration: String,
    pub origin: String,
    pub destination: String,
    pub price: f64,
    pub currency: String,
    /// Present only for airlines with a recognized loyalty program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_price: Option<u64>,
    pub is_mock: bool,
}

/// Dedup key for one scan. Not persisted, no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractionSignature {
    airline: String,
    price_hundredths: i64,
    departure_time: String,
}

impl ExtractionSignature {
    pub fn of(record: &FlightRecord) -> Self {
        Self {
            airline: record.airline.clone(),
            price_hundredths: (record.price * 100.0).round() as i64,
            departure_time: record.departure_time.clone(),
        }
    }
}

/// What `scrape` hands back. A failed scan is an empty `flights` plus a
/// message in `error`, never a panic or an `Err`.
#[derive(Debug, Serialize)]
pub struct ScrapeOutcome {
    pub flights: Vec<FlightRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected response status {0}")]
    InvalidResponse(u16),
    #[error("page fetch timed out")]
    Timeout,
    #[error("fragment text unavailable: {0}")]
    Fragment(String),
}
