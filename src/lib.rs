//! Synthetic phantoms for imaging calibration
//!
//! A phantom is an intensity image plus an integer label mask of the same
//! shape; the mask records which pattern element produced each pixel.
//!
//! How does this work
//!
//! ```text
//!  build("derenzo", (W, H))
//!    PhantomKind::from_str         -- invalid tags stop here
//!    Shape::new                    -- positive dimensions only
//!    PhantomBuilder::build
//!      derenzo_sectors()           -- per sector: radius, pitch, rows, anchor
//!        Transform::new_rotate     -- anchor on the sector bisector
//!        sector_points()           -- rod centers on the hexagonal lattice
//!      paint_disk()                -- ring at value*ratio, then filled interior
//!        Grid::set_clipped         -- pixels outside the grid are dropped
//!    Phantom::new(kind, image, mask)
//!  save_all(phantom, outdir)
//!    save_npz, save_png
//! ```
//!
//! Example
//!
//!     let p = phantom_gen::build("disk", (100, 100), Some((50, 50).into()), Some(10)).unwrap();
//!     assert_eq!(p.typename(), "disk");
//!     assert_eq!(p.mask()[(50, 50)], 1);
//!     assert_eq!(p.mask()[(50, 61)], 0);
//!

pub mod error;
pub mod point;
pub mod transform;
pub mod sector;
pub mod grid;
pub mod raster;
pub mod phantom;
pub mod config;
pub mod builder;
pub mod output;

pub use error::*;
pub use point::*;
pub use transform::*;
pub use sector::*;
pub use grid::*;
pub use raster::*;
pub use phantom::*;
pub use config::*;
pub use builder::*;
pub use output::*;

/// Generate a phantom from a type tag with the default constants
///
/// The tag is checked before any work is done; `contrast` is recognized but
/// returns [Error::NotImplemented].
///
/// [Error::NotImplemented]: enum.Error.html#variant.NotImplemented
pub fn build(ptype: &str, shape: (i64, i64), position: Option<Point>, radius: Option<i64>) -> Result<Phantom> {
    let kind: PhantomKind = ptype.parse()?;
    let shape = Shape::new(shape.0, shape.1)?;
    PhantomBuilder::new().build(kind, shape, position, radius)
}
