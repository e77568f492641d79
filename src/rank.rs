//! Final ordering of the accepted set.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::config::PipelineConfig;
use crate::extract::airlines::{self, Category};
use crate::fx;
use crate::model::FlightRecord;

/// Ascending by reference price so cross-currency comparison is meaningful;
/// the sort is stable, so discovery order breaks ties. Truncation to the
/// configured maximum is diversity-aware: the cheapest record of each
/// distinct airline needed to satisfy a category minimum is retained before
/// the remaining slots fill by rank, so an expensive injected record cannot
/// be trimmed back out of the result.
pub fn rank(mut flights: Vec<FlightRecord>, cfg: &PipelineConfig) -> Vec<FlightRecord> {
    flights.sort_by(|a, b| {
        let left = fx::to_reference(a.price, &a.currency);
        let right = fx::to_reference(b.price, &b.currency);
        left.partial_cmp(&right).unwrap_or(Ordering::Equal)
    });
    if flights.len() <= cfg.max_results {
        return flights;
    }

    let minimums = [
        (Category::Domestic, cfg.min_domestic),
        (Category::International, cfg.min_international),
    ];
    let mut keep = vec![false; flights.len()];
    let mut kept = 0usize;

    // cheapest distinct airlines per category first
    for (category, minimum) in minimums {
        let mut have: HashSet<&str> = HashSet::new();
        for (i, flight) in flights.iter().enumerate() {
            if have.len() >= minimum || kept >= cfg.max_results {
                break;
            }
            let Some(airline) = airlines::by_name(&flight.airline) else {
                continue;
            };
            if airline.category != category || have.contains(flight.airline.as_str()) {
                continue;
            }
            have.insert(flight.airline.as_str());
            keep[i] = true;
            kept += 1;
        }
    }

    // fill the remaining slots in price order
    for marked in keep.iter_mut() {
        if kept >= cfg.max_results {
            break;
        }
        if !*marked {
            *marked = true;
            kept += 1;
        }
    }

    let mut marks = keep.into_iter();
    flights.retain(|_| marks.next().unwrap_or(false));
    flights
}
