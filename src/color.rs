use crate::types::Color;

/// Fill color used when a path has none
pub const DEFAULT_FILL: &str = "#FFFFFF";

/// Parse a `#RRGGBB` (or `RRGGBB`) hex string into an RGB color in [0, 1].
///
/// Digits are case-insensitive. Anything else, including the three-digit
/// short form, yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| -> Option<f64> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| v as f64 / 255.0)
    };

    Some(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Convert a usvg color into an uppercase `#RRGGBB` string
pub fn to_hex(color: &usvg::Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}
