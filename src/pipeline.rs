//! Scan orchestration: the single entry point callers see.
//!
//! Fragments are processed one at a time in discovery order; all tracking
//! state lives in locals owned by the scan, so concurrent scrapes never
//! interfere. Per-fragment failures cost one fragment; only a scan-level
//! failure surfaces, and then as data, never as a panic.

use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::dedup::{Deduplicator, ScanPolicy};
use crate::extract::RecordBuilder;
use crate::fallback;
use crate::model::{FlightRecord, ScrapeOutcome, SearchQuery, SourceError};
use crate::points::PointsEstimator;
use crate::rank;
use crate::source::FragmentSource;

pub struct ScrapePipeline<S> {
    source: S,
    cfg: PipelineConfig,
}

impl<S: FragmentSource> ScrapePipeline<S> {
    pub fn new(source: S, cfg: PipelineConfig) -> Self {
        Self { source, cfg }
    }

    /// Never fails: a broken source becomes an empty result plus an error
    /// message, indistinguishable from a legitimately empty page except for
    /// that message.
    pub async fn scrape(&self, query: &SearchQuery) -> ScrapeOutcome {
        info!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.date,
            "starting scrape"
        );
        match self.scan(query).await {
            Ok(flights) => {
                info!(count = flights.len(), "scrape complete");
                ScrapeOutcome {
                    flights,
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "scrape failed");
                ScrapeOutcome {
                    flights: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn scan(&self, query: &SearchQuery) -> Result<Vec<FlightRecord>, SourceError> {
        let fragments = self.source.fragments(query).await?;
        info!(total = fragments.len(), "fragments received");

        let mut builder = RecordBuilder::new(&self.cfg, PointsEstimator::new(&self.cfg));
        let mut dedup = Deduplicator::new();
        let policy = ScanPolicy::new(&self.cfg);
        let mut flights: Vec<FlightRecord> = Vec::new();
        let mut scanned = 0usize;

        for fragment in fragments {
            if policy.should_stop(&dedup, scanned) {
                info!(
                    scanned,
                    accepted = dedup.accepted(),
                    "stopping scan early"
                );
                break;
            }
            scanned += 1;
            let text = match fragment {
                Ok(text) => text,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable fragment");
                    continue;
                }
            };
            let Some(record) = builder.build(&text, query) else {
                continue;
            };
            if dedup.accept(&record) {
                debug!(
                    airline = %record.airline,
                    flight_number = %record.flight_number,
                    price = record.price,
                    "accepted record"
                );
                flights.push(record);
            } else {
                debug!(airline = %record.airline, "duplicate signature, dropped");
            }
        }

        fallback::inject_diversity(&mut flights, &mut dedup, &self.cfg, builder.points(), query);
        Ok(rank::rank(flights, &self.cfg))
    }
}
