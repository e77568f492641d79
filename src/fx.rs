//! Fixed currency conversion into the INR reference baseline.
//!
//! Rates are best-effort approximations, not live market rates; they only
//! need to make cross-currency prices comparable for ranking and points
//! estimation, never for display.

const RATES: &[(&str, f64)] = &[
    ("INR", 1.0),
    ("USD", 83.0),
    ("EUR", 90.0),
    ("GBP", 105.0),
    ("AED", 22.6),
    ("SGD", 61.5),
];

/// Unknown codes are treated as already being in the reference currency
/// rather than failing the record.
const DEFAULT_RATE: f64 = 1.0;

pub fn to_reference(price: f64, currency: &str) -> f64 {
    let rate = RATES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(currency))
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_RATE);
    price * rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_currency_is_identity() {
        assert_eq!(to_reference(4500.0, "INR"), 4500.0);
    }

    #[test]
    fn foreign_currencies_scale_up() {
        assert_eq!(to_reference(100.0, "USD"), 8300.0);
        assert_eq!(to_reference(100.0, "usd"), 8300.0);
    }

    #[test]
    fn cheap_foreign_fare_still_ranks_below_expensive_domestic() {
        // $60 vs ₹12,500
        assert!(to_reference(60.0, "USD") < to_reference(12_500.0, "INR"));
    }

    #[test]
    fn unknown_code_falls_back_to_default_rate() {
        assert_eq!(to_reference(700.0, "XYZ"), 700.0);
    }
}
