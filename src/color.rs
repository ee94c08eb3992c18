//! Conversions between hex color strings and channel arrays.

/// Parses `#rrggbb` (the hash is optional) into byte channels.
///
/// Returns `None` when the string is not exactly six hex digits.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix tolerates sign prefixes, so every byte is checked first.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range| u8::from_str_radix(&digits[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Formats byte channels as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Scales 0-255 channels down to the 0-1 range GLSL expects.
pub fn normalize_color(color: &[f32]) -> Vec<f32> {
    color.iter().map(|c| c / 255.0).collect()
}

/// Scales 0-1 channels back up to the 0-255 range.
pub fn denormalize_color(color: &[f32]) -> Vec<f32> {
    color.iter().map(|c| c * 255.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_the_hash() {
        assert_eq!(hex_to_rgb("#ffaa00"), Some([255, 170, 0]));
        assert_eq!(hex_to_rgb("ffaa00"), Some([255, 170, 0]));
        assert_eq!(hex_to_rgb("#FFAA00"), Some([255, 170, 0]));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#ffaa0"), None);
        assert_eq!(hex_to_rgb("#ffaa001"), None);
        assert_eq!(hex_to_rgb("#ggaa00"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn rejects_sign_prefixed_channels() {
        assert_eq!(hex_to_rgb("+a0b0c"), None);
        assert_eq!(hex_to_rgb("#-0-0-0"), None);
        assert_eq!(hex_to_rgb("+1+2+3"), None);
    }

    #[test]
    fn hex_round_trips_through_bytes() {
        let rgb = hex_to_rgb("#1a2b3c").unwrap();
        assert_eq!(rgb_to_hex(rgb), "#1a2b3c");
        assert_eq!(rgb_to_hex([0, 0, 0]), "#000000");
        assert_eq!(rgb_to_hex([255, 255, 255]), "#ffffff");
    }

    #[test]
    fn normalization_round_trips_rgba() {
        let rgba = [255.0, 128.0, 0.0, 255.0];
        let normalized = normalize_color(&rgba);
        assert_eq!(normalized[0], 1.0);
        assert_eq!(normalized[3], 1.0);
        let restored = denormalize_color(&normalized);
        for (a, b) in restored.iter().zip(rgba.iter()) {
            assert!((a - b).abs() < 1e-4);
        }
    }
}
