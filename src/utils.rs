// Text-normalization helpers shared by the extractors.

/// Normalizes a clock token to display form: zero-padded hour, upper-case
/// meridiem ("6:05 pm" -> "06:05 PM"). 24-hour tokens pass through with
/// padding only.
pub fn normalize_clock(token: &str) -> String {
    let token = token.trim();
    let (clock, meridiem) = match token.find(|c: char| c.is_ascii_alphabetic()) {
        Some(idx) => (token[..idx].trim(), Some(token[idx..].trim().to_uppercase())),
        None => (token, None),
    };
    let padded = match clock.split_once(':') {
        Some((h, m)) => format!("{:0>2}:{m}", h),
        None => clock.to_string(),
    };
    match meridiem {
        Some(m) => format!("{padded} {m}"),
        None => padded,
    }
}

/// Renders an hours/minutes pair canonically: "2h 15m", "3h", "45m".
/// A zero pair has no canonical form and is the caller's miss to handle.
pub fn format_duration(hours: u32, minutes: u32) -> String {
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Strips whitespace for use in record ids ("Air India" -> "AirIndia").
pub fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_and_uppercases() {
        assert_eq!(normalize_clock("6:05 pm"), "06:05 PM");
        assert_eq!(normalize_clock("06:00 AM"), "06:00 AM");
        assert_eq!(normalize_clock("9:30AM"), "09:30 AM");
        assert_eq!(normalize_clock("18:45"), "18:45");
    }

    #[test]
    fn clock_is_idempotent() {
        let once = normalize_clock("6:05 pm");
        assert_eq!(normalize_clock(&once), once);
    }

    #[test]
    fn duration_renders_all_shapes() {
        assert_eq!(format_duration(2, 15), "2h 15m");
        assert_eq!(format_duration(3, 0), "3h");
        assert_eq!(format_duration(0, 45), "45m");
    }

    #[test]
    fn compact_strips_whitespace() {
        assert_eq!(compact("Air India"), "AirIndia");
        assert_eq!(compact("IndiGo"), "IndiGo");
    }
}
