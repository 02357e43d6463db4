//! Fixed-precision number formatting for the document writer.

/// Precision used for translations, pose matrices and geometry.
pub const POSITION_PLACES: usize = 15;
/// Precision used for material color channels.
pub const COLOR_PLACES: usize = 4;
/// Precision used for the placeholder mesh vertices and normals.
pub const MESH_PLACES: usize = 6;

/// Format `value` with exactly `places` fractional digits.
///
/// The value is scaled by `10^places`, rounded to the nearest integer and
/// scaled back before printing, so binary representation noise such as
/// `0.1 + 0.2` never leaks into the output. Negative zero prints as zero.
pub fn format_fixed(value: f64, places: usize) -> String {
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };
    // Handle -0.0 case
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", places, rounded)
}

/// Format a list of values joined by commas
pub fn format_list(values: &[f64], places: usize) -> String {
    values
        .iter()
        .map(|v| format_fixed(*v, places))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_to_four_places() {
        assert_eq!(format_fixed(1.0 / 3.0, 4), "0.3333");
    }

    #[test]
    fn test_zero_keeps_trailing_digits() {
        assert_eq!(format_fixed(0.0, 15), "0.000000000000000");
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(format_fixed(2.0 / 3.0, 4), "0.6667");
        assert_eq!(format_fixed(0.99996, 4), "1.0000");
        assert_eq!(format_fixed(-40.0, 2), "-40.00");
    }

    #[test]
    fn test_no_binary_artifacts() {
        assert_eq!(format_fixed(0.1 + 0.2, 15), "0.300000000000000");
        assert_eq!(format_fixed(0.1, 15), "0.100000000000000");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_fixed(-0.0, 4), "0.0000");
        assert_eq!(format_fixed(-0.00001, 4), "0.0000");
    }

    #[test]
    fn test_zero_places() {
        assert_eq!(format_fixed(12.7, 0), "13");
    }

    #[test]
    fn test_huge_value_does_not_overflow() {
        assert!(format_fixed(1e300, 15).starts_with("1000000000"));
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[1.0, -1.0, 0.5], 6), "1.000000,-1.000000,0.500000");
    }
}
