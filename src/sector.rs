//! Hexagonal sector lattice
//!
//! A Derenzo pattern is made of six triangular rod clusters. Each cluster
//! fills a 60 degree wedge whose apex is the sector anchor and whose rows
//! grow outward along the wedge bisector. Sector `s` is centered on the
//! direction `s * 60` degrees.
//!
//! Rod centers sit on a hexagonal lattice. A row `L` of the triangle holds
//! `L+1` rods; the "short" coefficient is the row number and the "long"
//! coefficient walks the row as `-L, -L+2, ..., L`. Lattice coordinates are
//! expressed in half steps, `pitch_short = floor(pitch_half * sqrt(3))` along
//! x and `pitch_half` along y. Since the hexagonal lattice maps onto itself
//! under 60 degree rotation, each sector is an exact integer remapping of the
//! coefficients and no rotation is needed.

use crate::error::{Error, Result};
use crate::point::Point;

/// Number of sectors in a Derenzo pattern
pub const SECTOR_COUNT: usize = 6;

/// Layout parameters of one sector
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct SectorSpec {
    /// Sector index, 0 to 5
    pub id: usize,
    /// Anchor point, the apex rod of the triangle
    pub base: Point,
    /// Half the center to center rod distance
    pub pitch_half: i64,
    /// Number of rows in the triangle
    pub layer_count: usize,
    /// Rod radius
    pub radius: i64,
}

impl SectorSpec {
    /// Rod centers for this sector
    pub fn points(&self) -> Result<Vec<Point>> {
        sector_points(self.base, self.pitch_half, self.layer_count, self.id)
    }
}

/// Row spacing of the lattice, `floor(pitch_half * sqrt(3))`
pub fn pitch_short(pitch_half: i64) -> i64 {
    (pitch_half as f64 * 3f64.sqrt()).floor() as i64
}

/// Number of rods in a triangle with `layer_count` rows
pub fn rod_count(layer_count: usize) -> usize {
    layer_count * (layer_count + 1) / 2
}

/// (short, long) coefficient pairs, row by row
///
///     use phantom_gen::lattice_coefficients;
///
///     let c = lattice_coefficients(3);
///     assert_eq!(c, vec![(0,0), (1,-1), (1,1), (2,-2), (2,0), (2,2)]);
///
pub fn lattice_coefficients(layer_count: usize) -> Vec<(i64, i64)> {
    let mut out = Vec::with_capacity(rod_count(layer_count));
    for layer in 0 .. layer_count as i64 {
        for step in 0 ..= layer {
            out.push((layer, -layer + 2 * step));
        }
    }
    out
}

/// Map a coefficient pair to half-lattice indices for a sector
///
/// `long` has the parity of `short` so every halving is exact.
fn sector_axes(sector_id: usize, short: i64, long: i64) -> (i64, i64) {
    let (l, k) = (short, long);
    match sector_id {
        0 => ( l, k),
        1 => ( (l - k) / 2,  (3 * l + k) / 2),
        2 => (-(l + k) / 2,  (3 * l - k) / 2),
        3 => (-l, -k),
        4 => (-(l - k) / 2, -(3 * l + k) / 2),
        5 => ( (l + k) / 2, -(3 * l - k) / 2),
        _ => unreachable!("sector id checked by caller"),
    }
}

/// Rod centers of one sector, placed directly in image coordinates
///
/// Returns `layer_count * (layer_count + 1) / 2` points, starting with
/// `base` and moving outward row by row.
///
///     use phantom_gen::{sector_points, Point};
///
///     let p = sector_points(Point::new(50, 50), 2, 2, 0).unwrap();
///     assert_eq!(p, vec![Point::new(50,50), Point::new(53,48), Point::new(53,52)]);
///
pub fn sector_points(base: Point, pitch_half: i64, layer_count: usize, sector_id: usize) -> Result<Vec<Point>> {
    if sector_id >= SECTOR_COUNT {
        return Err(Error::InvalidSector(sector_id));
    }
    if pitch_half < 1 {
        return Err(Error::InvalidPitch(pitch_half));
    }
    let ps = pitch_short(pitch_half);
    let points = lattice_coefficients(layer_count)
        .into_iter()
        .map(|(short, long)| {
            let (a, b) = sector_axes(sector_id, short, long);
            Point::new(base.x + a * ps, base.y + b * pitch_half)
        })
        .collect();
    Ok(points)
}
