use crate::utils::color::Rgb;

/// A named three-color preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
}

pub const NEON: Palette = Palette {
    name: "Neon",
    primary: Rgb::new(0xff, 0x00, 0x80),
    secondary: Rgb::new(0x00, 0xff, 0x80),
    tertiary: Rgb::new(0x80, 0x00, 0xff),
};

pub const SUNSET: Palette = Palette {
    name: "Sunset",
    primary: Rgb::new(0xff, 0x6b, 0x35),
    secondary: Rgb::new(0xf7, 0x93, 0x1e),
    tertiary: Rgb::new(0xff, 0xcc, 0x02),
};

pub const GALAXY: Palette = Palette {
    name: "Galaxy",
    primary: Rgb::new(0x66, 0x7e, 0xea),
    secondary: Rgb::new(0x76, 0x4b, 0xa2),
    tertiary: Rgb::new(0xf0, 0x93, 0xfb),
};

pub const OCEAN: Palette = Palette {
    name: "Ocean",
    primary: Rgb::new(0x00, 0xc9, 0xff),
    secondary: Rgb::new(0x92, 0xfe, 0x9d),
    tertiary: Rgb::new(0x00, 0xd2, 0xff),
};

/// Presets in panel order (also the 1-4 shortcut order)
pub static PRESETS: [Palette; 4] = [NEON, SUNSET, GALAXY, OCEAN];

impl Palette {
    /// Case-insensitive lookup by preset name
    pub fn by_name(name: &str) -> Option<&'static Palette> {
        let name = name.trim();
        PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neon_is_the_default_trio() {
        assert_eq!(NEON.primary.to_hex(), "#ff0080");
        assert_eq!(NEON.secondary.to_hex(), "#00ff80");
        assert_eq!(NEON.tertiary.to_hex(), "#8000ff");
    }

    #[test]
    fn test_preset_hex_values() {
        let hex: Vec<[String; 3]> = PRESETS
            .iter()
            .map(|p| [p.primary.to_hex(), p.secondary.to_hex(), p.tertiary.to_hex()])
            .collect();
        assert_eq!(hex[1], ["#ff6b35", "#f7931e", "#ffcc02"]);
        assert_eq!(hex[2], ["#667eea", "#764ba2", "#f093fb"]);
        assert_eq!(hex[3], ["#00c9ff", "#92fe9d", "#00d2ff"]);
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Palette::by_name("sunset"), Some(&SUNSET));
        assert_eq!(Palette::by_name(" OCEAN "), Some(&OCEAN));
        assert_eq!(Palette::by_name("vaporwave"), None);
    }
}
