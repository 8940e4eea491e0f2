//! Screen-space geometry shared by every on-screen widget.

use serde::{Deserialize, Serialize};

/// Dimensions of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// The surface the original artwork is laid out for.
    pub const REFERENCE: Self = Self::new(2048.0, 1024.0);

    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ratio between this viewport's height and the reference height.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.height / Self::REFERENCE.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle described by its centre, as the scene graph
/// positions shapes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Centre of the rectangle.
    pub center: Point,
    /// Full width.
    pub width: f32,
    /// Full height.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle centred on `center`.
    #[must_use]
    pub const fn centered(center: Point, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    /// Returns true if `point` lies inside or on the edge of the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (point.x - self.center.x).abs() <= self.width / 2.0
            && (point.y - self.center.y).abs() <= self.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_viewport_has_unit_scale() {
        assert!((Viewport::REFERENCE.scale() - 1.0).abs() < f32::EPSILON);
        assert!((Viewport::new(1024.0, 512.0).scale() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rect_contains_points_inside_and_on_edges() {
        // Arrange
        let rect = Rect::centered(Point::new(100.0, 50.0), 40.0, 20.0);

        // Assert
        assert!(rect.contains(Point::new(100.0, 50.0)));
        assert!(rect.contains(Point::new(80.0, 40.0)));
        assert!(!rect.contains(Point::new(79.0, 50.0)));
        assert!(!rect.contains(Point::new(100.0, 61.0)));
        assert!((rect.left() - 80.0).abs() < f32::EPSILON);
        assert!((rect.top() - 40.0).abs() < f32::EPSILON);
    }
}
