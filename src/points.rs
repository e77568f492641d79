//! Loyalty-point estimation.
//!
//! Only airlines carrying a recognized program yield a value; everything
//! else is "no points available", which is not the same thing as earning
//! zero. Estimates run over the reference-currency amount so the same fare
//! earns the same points regardless of the currency it was quoted in.

use std::collections::HashMap;

use crate::config::PipelineConfig;
use crate::extract::airlines;
use crate::fx;

pub struct PointsEstimator {
    overrides: HashMap<String, f64>,
}

impl PointsEstimator {
    pub fn new(cfg: &PipelineConfig) -> Self {
        Self {
            overrides: cfg.earn_rate_overrides.clone(),
        }
    }

    /// Estimated points for a fare, floored to a whole number. `None` when
    /// the airline has no program. Overrides adjust the rate of a program
    /// airline; they never grant a program to one that has none.
    pub fn estimate(&self, price: f64, currency: &str, airline: &str) -> Option<u64> {
        let entry = airlines::by_name(airline)?;
        let base_rate = entry.earn_rate?;
        let rate = self.overrides.get(airline).copied().unwrap_or(base_rate);
        let reference = fx::to_reference(price, currency);
        Some((reference * rate).floor().max(0.0) as u64)
    }
}
