//! Hit-testing helpers for widgets with non-rectangular interactive areas

use crate::primitives::{Point, Rect};
use glam::Vec2;

/// Check whether `point` lies within the circle inscribed in `bounds`
///
/// Points on the circumference count as inside. For non-square bounds the
/// smaller side decides the radius.
pub fn hit_test_circle(bounds: &Rect, point: Point) -> bool {
    let radius = bounds.width().min(bounds.height()) / 2.0;
    if radius <= 0.0 {
        return false;
    }
    let center = Vec2::from(bounds.center());
    Vec2::from(point).distance_squared(center) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::from_min_size([0.0, 0.0], [20.0, 20.0])
    }

    #[test]
    fn test_center_and_edge_are_inside() {
        assert!(hit_test_circle(&bounds(), Point::new(10.0, 10.0)));
        assert!(hit_test_circle(&bounds(), Point::new(20.0, 10.0)));
        assert!(hit_test_circle(&bounds(), Point::new(10.0, 0.0)));
    }

    #[test]
    fn test_corners_are_outside() {
        // Inside the bounding square but outside the circle
        assert!(bounds().contains(Point::new(1.0, 1.0)));
        assert!(!hit_test_circle(&bounds(), Point::new(1.0, 1.0)));
        assert!(!hit_test_circle(&bounds(), Point::new(19.5, 19.5)));
    }

    #[test]
    fn test_outside_sentinel() {
        assert!(!hit_test_circle(&bounds(), Point::outside()));
    }

    #[test]
    fn test_degenerate_bounds_never_hit() {
        let empty = Rect::from_min_size([5.0, 5.0], [0.0, 0.0]);
        assert!(!hit_test_circle(&empty, Point::new(5.0, 5.0)));
    }
}
