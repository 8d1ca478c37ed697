use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #00D9FF "), Some((0, 217, 255)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
}

#[test]
fn with_alpha_formats_rgba() {
    assert_eq!(with_alpha("#7C3AED", 0.25), "rgba(124, 58, 237, 0.25)");
    assert_eq!(with_alpha("#FF6B35", 3.0), "rgba(255, 107, 53, 1)");
}

#[test]
fn with_alpha_passes_through_non_hex() {
    assert_eq!(with_alpha("rgba(18, 18, 26, 0.8)", 0.5), "rgba(18, 18, 26, 0.8)");
}

#[test]
fn glow_uses_half_alpha() {
    assert_eq!(glow("#00D9FF", 20), "0 0 20px rgba(0, 217, 255, 0.5)");
}

#[test]
fn parse_hex_rgb_rejects_non_ascii() {
    assert_eq!(parse_hex_rgb("#aé"), None);
}
