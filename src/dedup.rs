//! Scan-wide deduplication and termination policy.
//!
//! One `Deduplicator` lives for exactly one scan and is owned by the scan
//! loop, so concurrent searches never share tracking state. The scan is a
//! single linear pass: a dropped fragment is never revisited.

use std::collections::{HashMap, HashSet};

use crate::config::PipelineConfig;
use crate::extract::airlines::{self, Category};
use crate::model::{ExtractionSignature, FlightRecord};

#[derive(Default)]
pub struct Deduplicator {
    seen: HashSet<ExtractionSignature>,
    airlines: HashSet<String>,
    by_category: HashMap<Category, HashSet<String>>,
    accepted: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the record is genuinely new. A repeated signature is treated
    /// as another presentation of the same offer and dropped; the first one
    /// stays.
    pub fn accept(&mut self, record: &FlightRecord) -> bool {
        if !self.seen.insert(ExtractionSignature::of(record)) {
            return false;
        }
        self.airlines.insert(record.airline.clone());
        if let Some(airline) = airlines::by_name(&record.airline) {
            self.by_category
                .entry(airline.category)
                .or_default()
                .insert(record.airline.clone());
        }
        self.accepted += 1;
        true
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Distinct airlines accepted in one category.
    pub fn category_count(&self, category: Category) -> usize {
        self.by_category.get(&category).map_or(0, HashSet::len)
    }

    pub fn has_airline(&self, name: &str) -> bool {
        self.airlines.contains(name)
    }
}

/// Checked before each fragment: stop once the result set is both large and
/// diverse enough, or when a hard cap guarantees termination regardless.
pub struct ScanPolicy<'a> {
    cfg: &'a PipelineConfig,
}

impl<'a> ScanPolicy<'a> {
    pub fn new(cfg: &'a PipelineConfig) -> Self {
        Self { cfg }
    }

    pub fn should_stop(&self, dedup: &Deduplicator, fragments_scanned: usize) -> bool {
        if fragments_scanned >= self.cfg.fragment_cap {
            return true;
        }
        if dedup.accepted() >= self.cfg.record_cap {
            return true;
        }
        dedup.accepted() >= self.cfg.target_results
            && dedup.category_count(Category::Domestic) >= self.cfg.min_domestic
            && dedup.category_count(Category::International) >= self.cfg.min_international
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(airline: &str, price: f64, departure: &str) -> FlightRecord {
        FlightRecord {
            id: format!("t-{airline}-{price}-{departure}"),
            airline: airline.into(),
            flight_number: "Multiple".into(),
            departure_time: departure.into(),
            arrival_time: "TBD".into(),
            duration: "Unknown".into(),
            origin: "DEL".into(),
            destination: "BOM".into(),
            price,
            currency: "INR".into(),
            points_price: None,
            is_mock: false,
        }
    }

    #[test]
    fn identical_signature_keeps_only_the_first() {
        let mut dedup = Deduplicator::new();
        let mut first = record("IndiGo", 4500.0, "06:00 AM");
        first.duration = "2h 15m".into();
        let second = record("IndiGo", 4500.0, "06:00 AM");
        assert!(dedup.accept(&first));
        assert!(!dedup.accept(&second));
        assert_eq!(dedup.accepted(), 1);
    }

    #[test]
    fn category_counts_track_distinct_airlines() {
        let mut dedup = Deduplicator::new();
        dedup.accept(&record("IndiGo", 4500.0, "06:00 AM"));
        dedup.accept(&record("IndiGo", 5100.0, "09:00 AM"));
        dedup.accept(&record("Air India", 5800.0, "09:30 AM"));
        dedup.accept(&record("Emirates", 12_500.0, "14:20 PM"));
        assert_eq!(dedup.category_count(Category::Domestic), 2);
        assert_eq!(dedup.category_count(Category::International), 1);
        assert!(dedup.has_airline("IndiGo"));
        assert!(!dedup.has_airline("Vistara"));
    }

    #[test]
    fn mock_records_still_dedup_against_prior_signatures() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.accept(&record("Emirates", 12_500.0, "14:20 PM")));
        let mut mock = record("Emirates", 12_500.0, "14:20 PM");
        mock.is_mock = true;
        assert!(!dedup.accept(&mock));
    }

    #[test]
    fn policy_stops_on_fragment_cap() {
        let cfg = PipelineConfig::default();
        let policy = ScanPolicy::new(&cfg);
        let dedup = Deduplicator::new();
        assert!(!policy.should_stop(&dedup, cfg.fragment_cap - 1));
        assert!(policy.should_stop(&dedup, cfg.fragment_cap));
    }

    #[test]
    fn policy_stops_on_record_cap_even_without_diversity() {
        let mut cfg = PipelineConfig::default();
        cfg.record_cap = 2;
        let policy = ScanPolicy::new(&cfg);
        let mut dedup = Deduplicator::new();
        dedup.accept(&record("IndiGo", 4500.0, "06:00 AM"));
        assert!(!policy.should_stop(&dedup, 1));
        dedup.accept(&record("IndiGo", 5100.0, "09:00 AM"));
        assert!(policy.should_stop(&dedup, 2));
    }

    #[test]
    fn policy_needs_both_size_and_diversity_for_early_stop() {
        let mut cfg = PipelineConfig::default();
        cfg.target_results = 2;
        cfg.min_domestic = 1;
        cfg.min_international = 1;
        let policy = ScanPolicy::new(&cfg);
        let mut dedup = Deduplicator::new();
        dedup.accept(&record("IndiGo", 4500.0, "06:00 AM"));
        dedup.accept(&record("Air India", 5800.0, "09:30 AM"));
        // size reached, diversity not: keep scanning
        assert!(!policy.should_stop(&dedup, 3));
        dedup.accept(&record("Emirates", 12_500.0, "14:20 PM"));
        assert!(policy.should_stop(&dedup, 4));
    }
}
