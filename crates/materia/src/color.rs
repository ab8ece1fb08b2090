/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    /// Uses proper sRGB gamma correction (ITU-R BT.709)
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Approximate ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Build an opaque color from a packed `0xRRGGBB` hex value
    pub const fn hex(rgb: u32) -> Self {
        Self::srgba(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
            255,
        )
    }

    /// with alpha builder method taking f32, clamped to [0, 1]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const BLACK: Color = Color::srgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::srgba(255, 255, 255, 255);
}

/// Material design palette (subset used by the default color schemes)
pub mod material {
    use super::Color;

    pub const INDIGO_100: Color = Color::hex(0xC5CAE9);
    pub const INDIGO_500: Color = Color::hex(0x3F51B5);
    pub const INDIGO_700: Color = Color::hex(0x303F9F);

    pub const BLUE_GREY_500: Color = Color::hex(0x607D8B);
    pub const BLUE_GREY_800: Color = Color::hex(0x37474F);
    pub const BLUE_GREY_900: Color = Color::hex(0x263238);

    pub const TEAL_100: Color = Color::hex(0xB2DFDB);
    pub const TEAL_500: Color = Color::hex(0x009688);
    pub const TEAL_700: Color = Color::hex(0x00796B);

    pub const PINK_A200: Color = Color::hex(0xFF4081);
    pub const PINK_200: Color = Color::hex(0xF48FB1);
    pub const LIGHT_BLUE_A200: Color = Color::hex(0x40C4FF);
    pub const AMBER_A400: Color = Color::hex(0xFFC400);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_matches_srgba() {
        assert_eq!(Color::hex(0x3F51B5), Color::srgba(0x3F, 0x51, 0xB5, 255));
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(css::BLACK.with_alpha(1.5).a, 1.0);
        assert_eq!(css::BLACK.with_alpha(-0.5).a, 0.0);
    }
}
