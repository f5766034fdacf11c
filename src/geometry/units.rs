//! Imperial unit formatting for plan annotations

pub const INCHES_PER_METER: f64 = 39.3701;
pub const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.764;

/// Format a length in meters as feet and whole inches, e.g. `12'4"`
pub fn feet_inches(meters: f64) -> String {
    let inches = (meters * INCHES_PER_METER).round() as i64;
    format!("{}'{}\"", inches.div_euclid(12), inches.rem_euclid(12))
}

pub fn square_feet(square_meters: f64) -> f64 {
    square_meters * SQUARE_FEET_PER_SQUARE_METER
}

/// Area label with one decimal, e.g. `107.6 sq ft`
pub fn format_square_feet(square_meters: f64) -> String {
    format!("{:.1} sq ft", square_feet(square_meters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_inches() {
        assert_eq!(feet_inches(0.0), "0'0\"");
        assert_eq!(feet_inches(1.0), "3'3\"");
        assert_eq!(feet_inches(3.048), "10'0\"");
        assert_eq!(feet_inches(0.3), "1'0\"");
    }

    #[test]
    fn test_square_feet_label() {
        assert_eq!(format_square_feet(10.0), "107.6 sq ft");
        assert_eq!(format_square_feet(0.0), "0.0 sq ft");
    }
}
