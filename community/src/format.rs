//! Number formatting for stat values.

/// Values above this are abbreviated to millions.
pub const MILLION: u64 = 1_000_000;

/// Format a stat value for display.
///
/// Values strictly greater than one million become whole millions with a
/// `" mil"` suffix, rounded half away from zero. Everything else is the
/// plain decimal representation.
///
/// ```rust
/// use community_page::format::format_stat;
///
/// assert_eq!(format_stat(25_000), "25000");
/// assert_eq!(format_stat(1_000_001), "1 mil");
/// ```
pub fn format_stat(value: u64) -> String {
    if value > MILLION {
        let millions = (value as f64 / MILLION as f64).round();
        format!("{millions:.0} mil")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn below_threshold_is_plain() {
        assert_eq!(format_stat(999_999), "999999");
        assert_eq!(format_stat(25_000), "25000");
        assert_eq!(format_stat(0), "0");
    }

    #[test]
    fn exactly_one_million_is_not_abbreviated() {
        assert_eq!(format_stat(1_000_000), "1000000");
    }

    #[test]
    fn above_threshold_rounds_to_whole_millions() {
        assert_eq!(format_stat(1_000_001), "1 mil");
        assert_eq!(format_stat(1_499_999), "1 mil");
        assert_eq!(format_stat(1_500_000), "2 mil");
        assert_eq!(format_stat(42_300_000), "42 mil");
    }
}
