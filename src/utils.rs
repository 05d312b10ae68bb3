// Utility functions

/// Rounds a value to the given number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to(25.04, 1), 25.0);
        assert_eq!(round_to(25.05, 1), 25.1);
        assert_eq!(round_to(-3.14, 1), -3.1);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to(99.999, 2), 100.0);
        assert_eq!(round_to(84.994, 2), 84.99);
    }
}
