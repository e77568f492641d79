//! Ordered airline recognition table.
//!
//! Each entry matches either the full airline name or its IATA code adjacent
//! to digits (a bare two-letter code is too collision-prone, e.g. "AI"
//! appearing inside unrelated text). The table is scanned top to bottom and
//! the first hit wins, so order is a deliberate priority tie-break, not
//! alphabetical.

use once_cell::sync::Lazy;
use regex::Regex;

/// Grouping used to enforce minimum representation in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Domestic,
    International,
}

pub struct Airline {
    pub name: &'static str,
    pub iata: &'static str,
    pub category: Category,
    /// Loyalty earn fraction; `None` means no recognized program at all,
    /// which is distinct from a program that earns zero.
    pub earn_rate: Option<f64>,
    pattern: Regex,
    number_pattern: Regex,
}

impl Airline {
    fn new(
        name: &'static str,
        iata: &'static str,
        category: Category,
        earn_rate: Option<f64>,
    ) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\b{name}\b|\b{iata}[\s-]*\d"))
            .unwrap_or_else(|e| panic!("bad airline pattern for {name}: {e}"));
        let number_pattern = Regex::new(&format!(r"(?i)\b{iata}[\s-]*(\d{{2,4}})\b"))
            .unwrap_or_else(|e| panic!("bad number pattern for {name}: {e}"));
        Self {
            name,
            iata,
            category,
            earn_rate,
            pattern,
            number_pattern,
        }
    }

    /// "`<IATA>-<digits>`" if this airline's code appears with a flight
    /// number in the fragment.
    pub fn flight_number_in(&self, fragment: &str) -> Option<String> {
        let caps = self.number_pattern.captures(fragment)?;
        Some(format!("{}-{}", self.iata, &caps[1]))
    }
}

static AIRLINES: Lazy<Vec<Airline>> = Lazy::new(|| {
    use Category::{Domestic, International};
    vec![
        Airline::new("IndiGo", "6E", Domestic, None),
        Airline::new("Air India", "AI", Domestic, Some(0.10)),
        Airline::new("Vistara", "UK", Domestic, Some(0.10)),
        Airline::new("SpiceJet", "SG", Domestic, None),
        Airline::new("AirAsia India", "I5", Domestic, None),
        Airline::new("Emirates", "EK", International, Some(0.15)),
        Airline::new("Qatar Airways", "QR", International, Some(0.15)),
        Airline::new("Singapore Airlines", "SQ", International, Some(0.15)),
        Airline::new("Etihad", "EY", International, Some(0.15)),
        Airline::new("Lufthansa", "LH", International, Some(0.10)),
        Airline::new("British Airways", "BA", International, Some(0.15)),
    ]
});

/// First table entry matching the fragment, or `None` (which rejects the
/// fragment: airline is a mandatory field).
pub fn detect(fragment: &str) -> Option<&'static Airline> {
    AIRLINES.iter().find(|a| a.pattern.is_match(fragment))
}

/// Lookup by canonical display name.
pub fn by_name(name: &str) -> Option<&'static Airline> {
    AIRLINES.iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_full_name() {
        let airline = detect("Air India nonstop from DEL").unwrap();
        assert_eq!(airline.name, "Air India");
        assert_eq!(airline.category, Category::Domestic);
    }

    #[test]
    fn matches_iata_code_adjacent_to_digits() {
        assert_eq!(detect("6E 2175 departs 06:00").unwrap().name, "IndiGo");
        assert_eq!(detect("flight AI-631 to BOM").unwrap().name, "Air India");
    }

    #[test]
    fn bare_code_without_digits_does_not_match() {
        assert!(detect("the 6E lounge is closed").is_none());
        assert!(detect("total fare incl. taxes").is_none());
    }

    #[test]
    fn table_order_breaks_ties() {
        // Both IndiGo (by code) and Emirates (by name) are present; IndiGo
        // sits earlier in the table.
        let airline = detect("Emirates codeshare on 6E 123").unwrap();
        assert_eq!(airline.name, "IndiGo");
    }

    #[test]
    fn name_match_is_case_insensitive() {
        assert_eq!(detect("INDIGO saver fare").unwrap().name, "IndiGo");
    }

    #[test]
    fn flight_number_formats_canonically() {
        let indigo = by_name("IndiGo").unwrap();
        assert_eq!(
            indigo.flight_number_in("6E 2175 on time"),
            Some("6E-2175".into())
        );
        assert_eq!(
            indigo.flight_number_in("6E-2175"),
            Some("6E-2175".into())
        );
        assert_eq!(indigo.flight_number_in("no code here"), None);
    }

    #[test]
    fn loyalty_metadata_distinguishes_no_program_from_low_rate() {
        assert!(by_name("IndiGo").unwrap().earn_rate.is_none());
        assert_eq!(by_name("Emirates").unwrap().earn_rate, Some(0.15));
    }
}
