//! Integer pixel coordinates

use std::ops::Add;
use std::ops::Neg;
use std::ops::Sub;

/// Pixel coordinate in a grid
///
/// `x` runs along the width, `y` along the height. Values outside the
/// grid are allowed; the rasterizer drops them when painting.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
    /// Truncate a real coordinate toward zero
    ///
    /// This is the only float to integer conversion used for geometry.
    ///
    ///     use phantom_gen::Point;
    ///
    ///     assert_eq!(Point::trunc(2.9, -2.9), Point::new(2, -2));
    ///
    pub fn trunc(x: f64, y: f64) -> Self {
        Point { x: x as i64, y: y as i64 }
    }
    /// Squared euclidean distance to `other`
    pub fn dist2(&self, other: Point) -> i64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }
}

impl From<(i64, i64)> for Point {
    fn from(xy: (i64, i64)) -> Self {
        Point::new(xy.0, xy.1)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
