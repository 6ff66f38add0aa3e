use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point (or extent) on the fractal plane.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let result = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
        assert_eq!(result, Point::new(4.0, 6.0));
    }

    #[test]
    fn test_sub_negative() {
        let result = Point::new(1.0, 2.0) - Point::new(3.0, 7.0);
        assert_eq!(result.x, -2.0);
        assert_eq!(result.y, -5.0);
    }

    #[test]
    fn test_scale() {
        let result = Point::new(4.0, -100.0).scale(0.5);
        assert_eq!(result, Point::new(2.0, -50.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(0.25, 0.25).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
