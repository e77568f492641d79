//! Diversity fallback injection and the caller-level sample dataset.
//!
//! Presenting too few distinct airline categories degrades perceived result
//! quality more than presenting a clearly flagged synthetic entry, so each
//! under-represented category is topped up from fixed templates after the
//! scan. Injected records carry `is_mock = true` and template values chosen
//! to be unlikely in live data, so their signatures cannot collide with real
//! ones.

use std::cmp::Ordering;

use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::dedup::Deduplicator;
use crate::extract::airlines::Category;
use crate::model::{FlightRecord, ScrapeOutcome, SearchQuery};
use crate::points::PointsEstimator;

struct Template {
    airline: &'static str,
    category: Category,
    flight_number: &'static str,
    departure_time: &'static str,
    arrival_time: &'static str,
    duration: &'static str,
    price: f64,
}

const TEMPLATES: &[Template] = &[
    Template {
        airline: "IndiGo",
        category: Category::Domestic,
        flight_number: "6E-2175",
        departure_time: "06:00 AM",
        arrival_time: "08:15 AM",
        duration: "2h 15m",
        price: 4250.0,
    },
    Template {
        airline: "Air India",
        category: Category::Domestic,
        flight_number: "AI-631",
        departure_time: "09:30 AM",
        arrival_time: "11:45 AM",
        duration: "2h 15m",
        price: 5800.0,
    },
    Template {
        airline: "Vistara",
        category: Category::Domestic,
        flight_number: "UK-955",
        departure_time: "11:05 AM",
        arrival_time: "01:20 PM",
        duration: "2h 15m",
        price: 6200.0,
    },
    Template {
        airline: "Emirates",
        category: Category::International,
        flight_number: "EK-501",
        departure_time: "02:20 PM",
        arrival_time: "04:50 PM",
        duration: "2h 30m",
        price: 12_500.0,
    },
    Template {
        airline: "Qatar Airways",
        category: Category::International,
        flight_number: "QR-573",
        departure_time: "07:45 PM",
        arrival_time: "10:25 PM",
        duration: "2h 40m",
        price: 13_800.0,
    },
];

impl Template {
    fn materialize(&self, query: &SearchQuery, points: &PointsEstimator) -> FlightRecord {
        let iata = self.flight_number.split('-').next().unwrap_or("XX");
        FlightRecord {
            id: format!("{}-MOCK-{}", iata, query.date),
            airline: self.airline.to_string(),
            flight_number: self.flight_number.to_string(),
            departure_time: self.departure_time.to_string(),
            arrival_time: self.arrival_time.to_string(),
            duration: self.duration.to_string(),
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            price: self.price,
            currency: "INR".to_string(),
            points_price: points.estimate(self.price, "INR", self.airline),
            is_mock: true,
        }
    }
}

/// Runs exactly once, after scanning. Tops up every category below its
/// configured minimum with one synthetic record per missing airline.
/// Injected records are appended to the accepted set and never replace a
/// real one.
pub fn inject_diversity(
    flights: &mut Vec<FlightRecord>,
    dedup: &mut Deduplicator,
    cfg: &PipelineConfig,
    points: &PointsEstimator,
    query: &SearchQuery,
) {
    let needs = [
        (Category::Domestic, cfg.min_domestic),
        (Category::International, cfg.min_international),
    ];
    for (category, minimum) in needs {
        let mut have = dedup.category_count(category);
        if have >= minimum {
            continue;
        }
        for template in TEMPLATES.iter().filter(|t| t.category == category) {
            if have >= minimum {
                break;
            }
            if dedup.has_airline(template.airline) {
                continue;
            }
            let record = template.materialize(query, points);
            if dedup.accept(&record) {
                info!(
                    airline = template.airline,
                    ?category,
                    "injecting synthetic record to satisfy diversity minimum"
                );
                flights.push(record);
                have += 1;
            }
        }
        if have < minimum {
            warn!(
                ?category,
                have, minimum, "not enough templates to satisfy diversity minimum"
            );
        }
    }
}

/// Last-resort static dataset the caller substitutes when the scrape yields
/// nothing at all. The pipeline itself never uses this.
pub fn sample_flights(query: &SearchQuery, points: &PointsEstimator) -> Vec<FlightRecord> {
    [
        ("IndiGo", "6E-2175", "06:00 AM", "08:15 AM", "2h 15m", 4250.0),
        ("Air India", "AI-631", "09:30 AM", "11:45 AM", "2h 15m", 5800.0),
        ("Emirates", "EK-501", "02:20 PM", "04:50 PM", "2h 30m", 12_500.0),
    ]
    .into_iter()
    .map(
        |(airline, number, dep, arr, duration, price)| FlightRecord {
            id: format!("sample-{number}-{}", query.date),
            airline: airline.to_string(),
            flight_number: number.to_string(),
            departure_time: dep.to_string(),
            arrival_time: arr.to_string(),
            duration: duration.to_string(),
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            price,
            currency: "INR".to_string(),
            points_price: points.estimate(price, "INR", airline),
            is_mock: true,
        },
    )
    .collect()
}

/// Caller-level post-processing of a scrape outcome: substitute the sample
/// dataset only on a complete miss, then order by raw price for the wire.
/// Returns the flights plus any scan-level error messages.
pub fn finalize(
    outcome: ScrapeOutcome,
    query: &SearchQuery,
    points: &PointsEstimator,
) -> (Vec<FlightRecord>, Vec<String>) {
    let errors: Vec<String> = outcome.error.into_iter().collect();
    let mut flights = outcome.flights;
    if flights.is_empty() {
        warn!("zero flights scraped, substituting the sample dataset");
        flights = sample_flights(query, points);
    } else {
        info!(count = flights.len(), "returning scraped flights");
    }
    flights.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
    (flights, errors)
}
