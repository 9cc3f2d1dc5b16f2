//! Disk and point rasterization
//!
//! Pixels are written directly into a [Grid]; anything falling outside of
//! the grid is dropped. A disk is painted in two passes: the perimeter ring
//! at an attenuated value, then the interior at full value. The interior
//! overwrites whatever the ring put inside it.
//!
//! [Grid]: ../grid/struct.Grid.html

use crate::error::{Error, Result};
use crate::grid::{Grid, Sample};
use crate::point::Point;

/// Pixels on the circle of `radius` around `center`
///
/// Bresenham's circle algorithm, mirrored into all eight octants. Points
/// on the octant boundaries are repeated. Radius 0 yields only the center.
/// Points whose coordinates overflow are skipped.
///
/// Every point is collected; use [paint_disk] to draw into a grid.
///
/// [paint_disk]: fn.paint_disk.html
pub fn circle_perimeter(center: Point, radius: i64) -> Vec<Point> {
    let mut out = vec![];
    let r = i128::from(radius);
    let mut x = 0i128;
    let mut y = r;
    let mut d = 3 - 2 * r;
    while y >= x {
        for &(px, py) in &[(y, x), (-y, x), (y, -x), (-y, -x),
                           (x, y), (-x, y), (x, -y), (-x, -y)] {
            if let Some(p) = offset_point(center, px, py) {
                out.push(p);
            }
        }
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
    out
}

/// Pixels strictly inside the circle of `radius` around `center`
///
/// Selects every pixel with `dx*dx + dy*dy < radius*radius`. Radius 0
/// yields only the center.
///
///     use phantom_gen::{disk, Point};
///
///     assert_eq!(disk(Point::new(4, 4), 0), vec![Point::new(4, 4)]);
///     assert_eq!(disk(Point::new(4, 4), 1), vec![Point::new(4, 4)]);
///     assert_eq!(disk(Point::new(4, 4), 2).len(), 9);
///
pub fn disk(center: Point, radius: i64) -> Vec<Point> {
    let r = i128::from(radius);
    let mut out = vec![];
    for dy in -r ..= r {
        for dx in -r ..= r {
            if in_disk(r, dx, dy) {
                out.extend(offset_point(center, dx, dy));
            }
        }
    }
    out
}

/// Paint a filled disk with a perimeter ring into `grid`
///
/// Ring pixels get `value * ring_ratio`, interior pixels get `value`. The
/// ring is the same pixel set as [circle_perimeter] and the interior the
/// same as [disk], but only the part of the bounding box inside the grid is
/// visited.
///
///     use phantom_gen::{paint_disk, Grid, Point};
///
///     let mut g = Grid::<f64>::new(9, 9);
///     paint_disk(&mut g, Point::new(4, 4), 3, 10.0, 0.5).unwrap();
///     assert_eq!(g[(4, 4)], 10.0);
///     assert_eq!(g[(7, 4)], 5.0);
///     assert_eq!(g[(8, 4)], 0.0);
///
/// [circle_perimeter]: fn.circle_perimeter.html
/// [disk]: fn.disk.html
pub fn paint_disk<T: Sample>(grid: &mut Grid<T>, center: Point, radius: i64, value: T, ring_ratio: f64) -> Result<()> {
    if radius < 0 {
        return Err(Error::NegativeRadius(radius));
    }
    let ring = T::from_f64(value.to_f64() * ring_ratio);
    let (cx, cy, r) = (i128::from(center.x), i128::from(center.y), i128::from(radius));
    let x0 = (cx - r).max(0);
    let x1 = (cx + r).min(grid.width() as i128 - 1);
    let y0 = (cy - r).max(0);
    let y1 = (cy + r).min(grid.height() as i128 - 1);
    // Ring pixels lie within half a pixel of the radius
    let outer = (r + 1) * (r + 1);
    for y in y0 ..= y1 {
        let dy = y - cy;
        for x in x0 ..= x1 {
            let dx = x - cx;
            let v = if in_disk(r, dx, dy) {
                value
            } else if dx * dx + dy * dy <= outer && on_ring(r, dx.abs(), dy.abs()) {
                ring
            } else {
                continue;
            };
            grid[(x as usize, y as usize)] = v;
        }
    }
    Ok(())
}

fn offset_point(center: Point, dx: i128, dy: i128) -> Option<Point> {
    let x = i64::try_from(i128::from(center.x) + dx).ok()?;
    let y = i64::try_from(i128::from(center.y) + dy).ok()?;
    Some(Point::new(x, y))
}

fn in_disk(r: i128, dx: i128, dy: i128) -> bool {
    if r == 0 {
        return dx == 0 && dy == 0;
    }
    dx * dx + dy * dy < r * r
}

/// Whether the offset (`a`, `b`), both non-negative, is a Bresenham ring pixel
fn on_ring(r: i128, a: i128, b: i128) -> bool {
    (a <= b && ring_y(r, a) == b) || (b <= a && ring_y(r, b) == a)
}

/// Ordinate the Bresenham walk reaches at abscissa `x`
///
/// The walk keeps `y` while `2x^2 + y^2 + (y-1)^2 < 2r^2`, so for `x > 0`
/// this is the largest `y` with `y(y-1) < r^2 - x^2`, capped at `r`.
fn ring_y(r: i128, x: i128) -> i128 {
    if x == 0 {
        return r;
    }
    let u = r * r - x * x;
    if u <= 0 {
        return 0;
    }
    let k = isqrt(u);
    let m = if k * (k + 1) < u { k + 1 } else { k };
    m.min(r)
}

fn isqrt(n: i128) -> i128 {
    let mut s = (n as f64).sqrt() as i128;
    if s > 0 {
        s = (s + n / s) / 2;
    }
    while s * s > n {
        s -= 1;
    }
    while (s + 1) * (s + 1) <= n {
        s += 1;
    }
    s
}

/// Set each of `points` to `value`
///
/// Writes are independent; the last write to a pixel wins.
pub fn paint_points<T: Sample>(grid: &mut Grid<T>, points: &[Point], value: T) {
    for p in points {
        grid.set_clipped(p.x, p.y, value);
    }
}
