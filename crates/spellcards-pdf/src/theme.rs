/// Colour with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbColor {
    pub const BLACK: Self = Self::from_hex(0x000000);
    /// Light grey used for the description rule
    pub const RULE: Self = Self::from_hex(0xE0E0E0);

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

/// Stripe, icon and tag colour for a school. Unknown schools are black.
pub fn school_color(school_key: Option<&str>) -> RgbColor {
    let key = school_key.map(|key| key.trim().to_ascii_lowercase());
    let hex = match key.as_deref() {
        Some("abjuration") => 0x3A6EA5,
        Some("conjuration") => 0x3A8F5C,
        Some("divination") => 0xC9A227,
        Some("enchantment") => 0x7A4FA3,
        Some("evocation") => 0xB22222,
        Some("illusion") => 0x4B5FA5,
        Some("necromancy") => 0x444444,
        Some("transmutation") => 0xC6862C,
        _ => return RgbColor::BLACK,
    };
    RgbColor::from_hex(hex)
}
