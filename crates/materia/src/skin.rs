//! Material skin: theme, color scheme and font shared by all widgets.

use crate::color::{css, material, Color};
use materia_macros::WithBuilders;

/// Light or dark base theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Brand colors of a skin
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct ColorScheme {
    pub primary: Color,
    pub dark_primary: Color,
    pub light_primary: Color,
    /// Color of checked controls and ripples
    pub accent: Color,
    /// Text color used on top of `primary`
    pub text_shade: Color,
}

impl ColorScheme {
    pub fn blue_grey() -> Self {
        Self {
            primary: material::BLUE_GREY_800,
            dark_primary: material::BLUE_GREY_900,
            light_primary: material::BLUE_GREY_500,
            accent: material::LIGHT_BLUE_A200,
            text_shade: css::WHITE,
        }
    }

    pub fn teal() -> Self {
        Self {
            primary: material::TEAL_500,
            dark_primary: material::TEAL_700,
            light_primary: material::TEAL_100,
            accent: material::AMBER_A400,
            text_shade: css::WHITE,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: material::INDIGO_500,
            dark_primary: material::INDIGO_700,
            light_primary: material::INDIGO_100,
            accent: material::PINK_200,
            text_shade: css::WHITE,
        }
    }
}

/// Font used for widget labels
#[derive(Debug, Clone, PartialEq, WithBuilders)]
pub struct Font {
    /// Family name handed to the text backend
    #[with_builders(into)]
    pub family: String,
    /// Size in logical pixels
    pub size: f32,
}

impl Default for Font {
    fn default() -> Self {
        // Roboto Medium 10pt at 96 dpi
        Self {
            family: "Roboto Medium".to_string(),
            size: 13.0,
        }
    }
}

/// Colors and font consumed by widgets when painting
#[derive(Debug, Clone, PartialEq, Default, WithBuilders)]
pub struct Skin {
    pub theme: Theme,
    pub color_scheme: ColorScheme,
    pub font: Font,
}

impl Skin {
    pub fn light() -> Self {
        Self::default()
    }

    pub fn dark() -> Self {
        Self::default().with_theme(Theme::Dark)
    }

    pub fn background_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::srgba(255, 255, 255, 255),
            Theme::Dark => Color::srgba(51, 51, 51, 255),
        }
    }

    pub fn accent_color(&self) -> Color {
        self.color_scheme.accent
    }

    /// Ring color of an unchecked, enabled check control
    pub fn checkbox_off_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::srgba(0, 0, 0, 138),
            Theme::Dark => Color::srgba(255, 255, 255, 179),
        }
    }

    /// Ring and mark color of a disabled check control
    pub fn checkbox_off_disabled_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::srgba(0, 0, 0, 66),
            Theme::Dark => Color::srgba(255, 255, 255, 77),
        }
    }

    pub fn primary_text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::srgba(0, 0, 0, 222),
            Theme::Dark => Color::srgba(255, 255, 255, 255),
        }
    }

    pub fn disabled_or_hint_text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::srgba(0, 0, 0, 97),
            Theme::Dark => Color::srgba(255, 255, 255, 128),
        }
    }
}
