use crate::color::Color;
use glam::Vec2;

/// A 2D point in widget-local space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Sentinel location used while the cursor is outside a widget
    pub const fn outside() -> Self {
        Self { x: -1.0, y: -1.0 }
    }

    /// Offset this point by `(dx, dy)`
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<[f32; 2]> for Point {
    fn from(arr: [f32; 2]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
        }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        Vec2::new(point.x, point.y)
    }
}

/// Width and height of a widget in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Rectangle of this size anchored at the origin
    pub fn to_rect(self) -> Rect {
        Rect::from_min_size([0.0, 0.0], [self.width, self.height])
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    /// Square of side `size` centered on `center`
    pub fn from_center_size(center: Point, size: f32) -> Self {
        let half = size / 2.0;
        Self {
            min: [center.x - half, center.y - half],
            max: [center.x + half, center.y + half],
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        )
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x <= self.max[0]
            && point.y >= self.min[1]
            && point.y <= self.max[1]
    }

    /// Translate the rectangle by `(dx, dy)`
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            min: [self.min[0] + dx, self.min[1] + dy],
            max: [self.max[0] + dx, self.max[1] + dy],
        }
    }
}

/// Corner shape for rectangles
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerShape {
    /// Sharp 90-degree corners
    None,
    /// Circular arc rounding with the given radius in logical pixels
    Round(f32),
}

impl CornerShape {
    /// Get the maximum distance this corner shape extends from the corner point
    pub fn extent(&self) -> f32 {
        match self {
            CornerShape::None => 0.0,
            CornerShape::Round(r) => *r,
        }
    }
}

/// Filled rectangle with customizable corner shape
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRect {
    pub rect: Rect,
    pub corner_shape: CornerShape,
    pub fill: Color,
}

impl StyledRect {
    pub fn new(rect: Rect, fill: Color) -> Self {
        Self {
            rect,
            corner_shape: CornerShape::None,
            fill,
        }
    }

    pub fn with_corner_shape(mut self, corner_shape: CornerShape) -> Self {
        self.corner_shape = corner_shape;
        self
    }
}

/// Filled ellipse inscribed in `rect`
#[derive(Clone, Debug, PartialEq)]
pub struct EllipseShape {
    pub rect: Rect,
    pub fill: Color,
}

/// Single line of text anchored at its top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    /// Top-left corner of the text's bounding box
    pub position: Point,
    pub text: String,
    /// Font family name (backend-defined meaning)
    pub family: String,
    /// Font size in logical pixels
    pub font_size: f32,
    pub color: Color,
}

/// Shapes that can be rendered
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(StyledRect),
    Ellipse(EllipseShape),
    Text(TextShape),
}

impl Shape {
    /// Move the shape by `(dx, dy)`
    pub fn translate(&mut self, dx: f32, dy: f32) {
        match self {
            Shape::Rect(rect) => rect.rect = rect.rect.translate(dx, dy),
            Shape::Ellipse(ellipse) => ellipse.rect = ellipse.rect.translate(dx, dy),
            Shape::Text(text) => text.position = text.position.offset(dx, dy),
        }
    }

    /// Fill color of the shape (text color for text)
    pub fn color(&self) -> Color {
        match self {
            Shape::Rect(rect) => rect.fill,
            Shape::Ellipse(ellipse) => ellipse.fill,
            Shape::Text(text) => text.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_center_size() {
        let rect = Rect::from_center_size(Point::new(10.0, 10.0), 4.0);
        assert_eq!(rect.min, [8.0, 8.0]);
        assert_eq!(rect.max, [12.0, 12.0]);
        assert_eq!(rect.center(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_shape_translate() {
        let mut shape = Shape::Rect(StyledRect::new(
            Rect::from_min_size([0.0, 0.0], [5.0, 5.0]),
            Color::transparent(),
        ));
        shape.translate(3.0, 4.0);

        let Shape::Rect(rect) = shape else {
            panic!("expected rect");
        };
        assert_eq!(rect.rect.min, [3.0, 4.0]);
        assert_eq!(rect.rect.max, [8.0, 9.0]);
    }
}
