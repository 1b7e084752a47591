//! Consistent identity color generation.
//!
//! Colors are derived from the account address following XEP-0392, so every
//! client shows the same color for the same identity.

use sha1::{Digest, Sha1};

/// Converts an identifier to a hue angle in degrees.
fn str_to_angle(s: &str) -> f32 {
    let bytes = s.as_bytes();
    let result = Sha1::digest(bytes);
    let checksum: u16 = result.first().map_or(0, |&x| u16::from(x))
        + 256 * result.get(1).map_or(0, |&x| u16::from(x));
    f32::from(checksum) / 65536.0 * 360.0
}

/// Converts an HSL color to RGB components.
///
/// Hue is in degrees, saturation and lightness in `0.0..=1.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue % 360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Derives the identity color for an address as a `#rrggbb` string.
///
/// Saturation is set to maximum to make colors distinguishable, and
/// lightness to half so the result works on light and dark themes.
#[must_use]
pub fn identity_color(addr: &str) -> String {
    let angle = str_to_angle(addr);
    let (r, g, b) = hsl_to_rgb(angle, 1.0, 0.5);
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_matches_xep_test_vectors() {
        // Test vectors from
        // <https://xmpp.org/extensions/xep-0392.html#testvectors-fullrange-no-cvd>
        assert!((str_to_angle("Romeo") - 327.255_249).abs() < 1e-4);
        assert!((str_to_angle("juliet@capulet.lit") - 209.410_4).abs() < 1e-4);
        assert!((str_to_angle("😺") - 331.199_341).abs() < 1e-4);
        assert!((str_to_angle("council") - 359.994_507).abs() < 1e-4);
        assert!((str_to_angle("Board") - 171.430_664).abs() < 1e-4);
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn color_is_stable_and_well_formed() {
        let color = identity_color("alice@example.com");
        assert_eq!(color, identity_color("alice@example.com"));
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_addresses_get_different_colors() {
        assert_ne!(
            identity_color("alice@example.com"),
            identity_color("bob@example.com")
        );
    }
}
