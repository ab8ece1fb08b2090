//! Text measurement for widget sizing and label placement.
//!
//! This module provides a backend-agnostic trait for measuring text. Core
//! widgets must not depend on any specific text engine (cosmic-text, etc.);
//! backends like `materia-text` implement [`ContentMeasurer`].

/// Request to measure the intrinsic size of a single line of text.
#[derive(Debug, Clone, Copy)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font_size: f32,
    /// Optional font family name (backend-defined meaning)
    pub family: Option<&'a str>,
}

impl<'a> MeasureTextRequest<'a> {
    pub fn new(text: &'a str, font_size: f32) -> Self {
        Self {
            text,
            font_size,
            family: None,
        }
    }

    pub fn with_family(mut self, family: &'a str) -> Self {
        self.family = Some(family);
        self
    }
}

/// Intrinsic size measurement result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Backend-agnostic content measurement.
pub trait ContentMeasurer {
    /// Measure the bounding box of a single line of shaped text.
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize;
}

/// Deterministic measurer assuming every character has the same advance
///
/// Useful for headless hosts and tests where no font database is available.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasurer {
    /// Advance of one character as a fraction of the font size
    pub advance_ratio: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            line_height: 1.2,
        }
    }
}

impl ContentMeasurer for MonospaceMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        let chars = request.text.chars().count() as f32;
        let height = if request.text.is_empty() {
            0.0
        } else {
            request.font_size * self.line_height
        };
        IntrinsicSize::new(chars * request.font_size * self.advance_ratio, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measures_chars() {
        let mut measurer = MonospaceMeasurer {
            advance_ratio: 0.5,
            line_height: 1.5,
        };
        let size = measurer.measure_text(MeasureTextRequest::new("héllo", 10.0));
        assert_eq!(size, IntrinsicSize::new(25.0, 15.0));
    }

    #[test]
    fn test_empty_text_is_zero() {
        let mut measurer = MonospaceMeasurer::default();
        let size = measurer.measure_text(MeasureTextRequest::new("", 10.0));
        assert_eq!(size, IntrinsicSize::zero());
    }
}
