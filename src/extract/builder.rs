//! Turns one raw text fragment into a candidate record.
//!
//! The builder owns no scan-wide state beyond a sequence counter for id
//! uniqueness; accepting or rejecting against earlier records is the
//! deduplicator's job.

use chrono::Utc;
use tracing::debug;

use crate::config::PipelineConfig;
use crate::extract::{airlines, fields};
use crate::model::{FlightRecord, SearchQuery};
use crate::points::PointsEstimator;
use crate::utils::compact;

pub const TIME_SENTINEL: &str = "TBD";
pub const DURATION_SENTINEL: &str = "Unknown";
pub const FLIGHT_NUMBER_SENTINEL: &str = "Multiple";

pub struct RecordBuilder<'a> {
    cfg: &'a PipelineConfig,
    points: PointsEstimator,
    seq: u64,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(cfg: &'a PipelineConfig, points: PointsEstimator) -> Self {
        Self {
            cfg,
            points,
            seq: 0,
        }
    }

    pub fn points(&self) -> &PointsEstimator {
        &self.points
    }

    /// `None` when the fragment cannot yield an economically meaningful
    /// record: bad length, no airline, no price, or an implausible price.
    /// Everything else degrades to sentinels.
    pub fn build(&mut self, fragment: &str, query: &SearchQuery) -> Option<FlightRecord> {
        let len = fragment.chars().count();
        if len < self.cfg.min_fragment_len || len > self.cfg.max_fragment_len {
            return None;
        }

        let airline = airlines::detect(fragment)?;
        let tag = fields::extract_price(fragment)?;
        if tag.amount <= self.cfg.min_price || tag.amount >= self.cfg.max_price {
            debug!(
                airline = airline.name,
                price = tag.amount,
                "price outside plausible range, dropping fragment"
            );
            return None;
        }

        let (departure_time, arrival_time) = fields::extract_time_range(fragment)
            .unwrap_or_else(|| (TIME_SENTINEL.into(), TIME_SENTINEL.into()));
        let duration =
            fields::extract_duration(fragment).unwrap_or_else(|| DURATION_SENTINEL.into());
        let flight_number = fields::extract_flight_number(fragment, airline)
            .unwrap_or_else(|| FLIGHT_NUMBER_SENTINEL.into());
        let points_price = self.points.estimate(tag.amount, tag.currency, airline.name);

        self.seq += 1;
        Some(FlightRecord {
            id: format!(
                "GF-{}-{}-{}-{}",
                compact(airline.name),
                tag.amount as i64,
                Utc::now().timestamp_millis(),
                self.seq
            ),
            airline: airline.name.to_string(),
            flight_number,
            departure_time,
            arrival_time,
            duration,
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            price: tag.amount,
            currency: tag.currency.to_string(),
            points_price,
            is_mock: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn query() -> SearchQuery {
        SearchQuery {
            origin: "DEL".into(),
            destination: "BOM".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        }
    }

    fn builder(cfg: &PipelineConfig) -> RecordBuilder<'_> {
        RecordBuilder::new(cfg, PointsEstimator::new(cfg))
    }

    #[test]
    fn full_fragment_builds_complete_record() {
        let cfg = PipelineConfig::default();
        let record = builder(&cfg)
            .build("IndiGo 6E-2175 06:00 AM - 08:15 AM 2h 15m ₹4,500", &query())
            .unwrap();
        assert_eq!(record.airline, "IndiGo");
        assert_eq!(record.flight_number, "6E-2175");
        assert_eq!(record.departure_time, "06:00 AM");
        assert_eq!(record.arrival_time, "08:15 AM");
        assert_eq!(record.duration, "2h 15m");
        assert_eq!(record.price, 4500.0);
        assert_eq!(record.currency, "INR");
        assert_eq!(record.points_price, None);
        assert!(!record.is_mock);
        assert_eq!(record.origin, "DEL");
        assert_eq!(record.destination, "BOM");
    }

    #[test]
    fn missing_duration_degrades_to_sentinel_and_points_apply() {
        let cfg = PipelineConfig::default();
        let record = builder(&cfg)
            .build("Air India AI 631 09:30 AM - 11:45 AM ₹5,800", &query())
            .unwrap();
        assert_eq!(record.flight_number, "AI-631");
        assert_eq!(record.duration, DURATION_SENTINEL);
        assert_eq!(record.points_price, Some(580));
    }

    #[test]
    fn missing_times_and_number_degrade_to_sentinels() {
        let cfg = PipelineConfig::default();
        let record = builder(&cfg)
            .build("Emirates nonstop service from ₹12,500", &query())
            .unwrap();
        assert_eq!(record.departure_time, TIME_SENTINEL);
        assert_eq!(record.arrival_time, TIME_SENTINEL);
        assert_eq!(record.flight_number, FLIGHT_NUMBER_SENTINEL);
        assert_eq!(record.points_price, Some(1875));
    }

    #[test]
    fn fragment_without_airline_is_rejected() {
        let cfg = PipelineConfig::default();
        assert!(
            builder(&cfg)
                .build("Great deal today, only ₹4,500 per seat", &query())
                .is_none()
        );
    }

    #[test]
    fn fragment_without_price_is_rejected() {
        let cfg = PipelineConfig::default();
        assert!(
            builder(&cfg)
                .build("IndiGo 6E-2175 departs 06:00 AM daily", &query())
                .is_none()
        );
    }

    #[test]
    fn implausible_prices_are_discarded_not_clamped() {
        let cfg = PipelineConfig::default();
        let mut b = builder(&cfg);
        assert!(b.build("IndiGo special sale fare only ₹900", &query()).is_none());
        assert!(
            b.build("Emirates first class suite ₹9,50,000 all in", &query())
                .is_none()
        );
        // boundary values are exclusive
        assert!(b.build("IndiGo promo seat sale at ₹1,000", &query()).is_none());
    }

    #[test]
    fn fragment_length_gate() {
        let mut cfg = PipelineConfig::default();
        cfg.min_fragment_len = 20;
        cfg.max_fragment_len = 60;
        let mut b = builder(&cfg);
        assert!(b.build("IndiGo ₹4,500", &query()).is_none());
        let long = format!("IndiGo ₹4,500 {}", "x".repeat(80));
        assert!(b.build(&long, &query()).is_none());
    }

    #[test]
    fn ids_are_unique_across_one_scan() {
        let cfg = PipelineConfig::default();
        let mut b = builder(&cfg);
        let fragment = "IndiGo 6E-2175 06:00 AM - 08:15 AM 2h 15m ₹4,500";
        let a = b.build(fragment, &query()).unwrap();
        let c = b.build(fragment, &query()).unwrap();
        assert_ne!(a.id, c.id);
    }
}
