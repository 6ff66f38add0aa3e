use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport range must be positive: {x}x{y}")]
    InvalidRange { x: f64, y: f64 },
    #[error("viewport center must be finite: ({x}, {y})")]
    NonFiniteCenter { x: f64, y: f64 },
}

/// The visible window on the fractal plane, described by its center and
/// its full extent along each axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Point,
    pub range: Point,
}

impl Viewport {
    pub fn new(center: Point, range: Point) -> Result<Self, ViewportError> {
        let viewport = Self { center, range };
        viewport.check()?;

        Ok(viewport)
    }

    pub fn check(&self) -> Result<(), ViewportError> {
        if !self.center.is_finite() {
            return Err(ViewportError::NonFiniteCenter {
                x: self.center.x,
                y: self.center.y,
            });
        }

        // NaN fails the comparison as well
        if !(self.range.x > 0.0 && self.range.y > 0.0) || !self.range.is_finite() {
            return Err(ViewportError::InvalidRange {
                x: self.range.x,
                y: self.range.y,
            });
        }

        Ok(())
    }

    /// Lower-left and upper-right corners of the window.
    #[must_use]
    pub fn bounds(&self) -> (Point, Point) {
        let half = self.range.scale(0.5);
        (self.center - half, self.center + half)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.range.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.range.y
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let (min, max) = self.bounds();

        min.x <= point.x && min.y <= point.y && max.x >= point.x && max.y >= point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(Point::new(0.25, 0.25), Point::new(1.0, 1.0));

        assert!(viewport.is_ok());
        let value = viewport.unwrap();
        assert_eq!(value.center, Point::new(0.25, 0.25));
        assert_eq!(value.width(), 1.0);
        assert_eq!(value.height(), 1.0);
    }

    #[test]
    fn test_viewport_range_must_be_positive() {
        let zero_x = Viewport::new(Point::new(0.0, 0.0), Point::new(0.0, 4.0));
        let negative_y = Viewport::new(Point::new(0.0, 0.0), Point::new(4.0, -1.0));
        let nan_x = Viewport::new(Point::new(0.0, 0.0), Point::new(f64::NAN, 4.0));

        assert_eq!(zero_x, Err(ViewportError::InvalidRange { x: 0.0, y: 4.0 }));
        assert_eq!(
            negative_y,
            Err(ViewportError::InvalidRange { x: 4.0, y: -1.0 })
        );
        assert!(matches!(nan_x, Err(ViewportError::InvalidRange { .. })));
    }

    #[test]
    fn test_viewport_center_must_be_finite() {
        let result = Viewport::new(Point::new(f64::INFINITY, 0.0), Point::new(1.0, 1.0));

        assert!(matches!(result, Err(ViewportError::NonFiniteCenter { .. })));
    }

    #[test]
    fn test_viewport_bounds() {
        let viewport = Viewport::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0)).unwrap();

        let (min, max) = viewport.bounds();

        assert_eq!(min, Point::new(-2.0, -2.0));
        assert_eq!(max, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_viewport_contains_point() {
        let viewport = Viewport::new(Point::new(0.25, 0.25), Point::new(1.0, 1.0)).unwrap();

        assert!(viewport.contains_point(Point::new(0.25, 0.25)));
        assert!(viewport.contains_point(Point::new(-0.25, -0.25)));
        assert!(viewport.contains_point(Point::new(0.75, 0.75)));
        assert!(!viewport.contains_point(Point::new(0.76, 0.5)));
        assert!(!viewport.contains_point(Point::new(0.5, -0.26)));
    }
}
