//! Transformations

use crate::point::Point;

/// Rotation about a center followed by a translation
///
/// Points are transformed in real arithmetic and truncated back to
/// integers toward zero.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    /// Rotation angle in radians
    pub angle: f64,
    /// Center of rotation
    pub cx: f64,
    pub cy: f64,
    /// Translation applied after rotation
    pub dx: f64,
    pub dy: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates the identity Transform
    pub fn new() -> Self {
        Self { angle: 0.0,
               cx: 0.0, cy: 0.0,
               dx: 0.0, dy: 0.0,
        }
    }
    /// Rotation by `angle` radians about (`cx`,`cy`)
    pub fn new_rotate(angle: f64, cx: f64, cy: f64) -> Self {
        Self { angle, cx, cy, ..Self::new() }
    }
    /// Translation by (`dx`,`dy`)
    pub fn new_translate(dx: f64, dy: f64) -> Self {
        Self { dx, dy, ..Self::new() }
    }
    /// Add a translation to the transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.dx += dx;
        self.dy += dy;
    }
    /// Perform the transform
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        let ca = self.angle.cos();
        let sa = self.angle.sin();
        let tx = x - self.cx;
        let ty = y - self.cy;
        (tx * ca - ty * sa + self.cx + self.dx,
         tx * sa + ty * ca + self.cy + self.dy)
    }
    /// Transform a real coordinate and truncate it to a pixel
    pub fn transform_point(&self, x: f64, y: f64) -> Point {
        let (x, y) = self.transform(x, y);
        Point::trunc(x, y)
    }
    /// Transform every point in `points`
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        points.iter()
            .map(|p| self.transform_point(p.x as f64, p.y as f64))
            .collect()
    }
}

/// Rotate `points` by `angle` radians about `center`
///
///     use phantom_gen::{rotate_points, Point};
///     use std::f64::consts::PI;
///
///     let p = rotate_points(PI, (5.0, 5.0), &[Point::new(7, 5)]);
///     assert_eq!(p, vec![Point::new(3, 5)]);
///
pub fn rotate_points(angle: f64, center: (f64, f64), points: &[Point]) -> Vec<Point> {
    Transform::new_rotate(angle, center.0, center.1).apply(points)
}

/// Shift `points` by `offset`
pub fn translate_points(offset: (f64, f64), points: &[Point]) -> Vec<Point> {
    Transform::new_translate(offset.0, offset.1).apply(points)
}
