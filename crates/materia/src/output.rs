use crate::color::Color;
use crate::primitives::{CornerShape, EllipseShape, Point, Rect, Shape, StyledRect, TextShape};
use crate::skin::Font;

/// Shapes produced by one paint pass, in back-to-front order
///
/// This is the drawing surface widgets paint into. Backends walk `shapes` and
/// rasterize them; nothing in here knows about a graphics API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FullOutput {
    pub shapes: Vec<Shape>,
}

impl FullOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill `rect` with sharp corners
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.shapes.push(Shape::Rect(StyledRect::new(rect, color)));
    }

    /// Fill `rect` with corners rounded to `radius`
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.shapes.push(Shape::Rect(
            StyledRect::new(rect, color).with_corner_shape(CornerShape::Round(radius)),
        ));
    }

    /// Fill the ellipse inscribed in `rect`
    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.shapes.push(Shape::Ellipse(EllipseShape { rect, fill: color }));
    }

    /// Draw one line of text with its top-left corner at `position`
    pub fn draw_text(&mut self, text: &str, font: &Font, position: Point, color: Color) {
        self.shapes.push(Shape::Text(TextShape {
            position,
            text: text.to_string(),
            family: font.family.clone(),
            font_size: font.size,
            color,
        }));
    }

    /// Append the shapes of `other`, shifted by `(dx, dy)`
    pub fn extend_translated(&mut self, other: FullOutput, dx: f32, dy: f32) {
        self.shapes.extend(other.shapes.into_iter().map(|mut shape| {
            shape.translate(dx, dy);
            shape
        }));
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
