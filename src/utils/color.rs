//! sRGB hex colors as picked in the control panel

use crate::utils::SceneError;
use eframe::egui::Color32;

/// An 8-bit sRGB color. Values go to the shader unconverted so the
/// rendered color matches the picked hex on the (non-sRGB) egui target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`
    pub fn from_hex(input: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(input.to_string());
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())
                };
                Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self([channel(0)?, channel(1)?, channel(2)?]))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Normalized rgba for a vec4 uniform (alpha fixed at 1)
    pub fn to_vec4(self) -> [f32; 4] {
        let [r, g, b] = self.0;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub fn to_color32(self) -> Color32 {
        let [r, g, b] = self.0;
        Color32::from_rgb(r, g, b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgb {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(Rgb::from_hex("#ff0080").unwrap(), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::from_hex("00FF80").unwrap(), Rgb::new(0, 255, 128));
        assert_eq!(Rgb::from_hex("  #8000ff ").unwrap(), Rgb::new(128, 0, 255));
    }

    #[test]
    fn test_parse_short_form_expands_nibbles() {
        assert_eq!(Rgb::from_hex("#f08").unwrap(), Rgb::new(255, 0, 136));
        assert_eq!(Rgb::from_hex("abc").unwrap(), Rgb::from_hex("#aabbcc").unwrap());
    }

    #[test]
    fn test_rejects_malformed_input() {
        for bad in ["", "#", "#ff00", "#ff00800", "#gg0080", "red", "#ff 080"] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(SceneError::InvalidColor(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_output_is_lowercase() {
        assert_eq!(Rgb::new(0x66, 0x7E, 0xEA).to_hex(), "#667eea");
        assert_eq!("#764BA2".parse::<Rgb>().unwrap().to_string(), "#764ba2");
    }

    #[test]
    fn test_to_vec4_normalizes() {
        assert_eq!(Rgb::new(255, 0, 51).to_vec4(), [1.0, 0.0, 0.2, 1.0]);
    }
}
