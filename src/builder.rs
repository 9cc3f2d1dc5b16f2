//! Phantom generation
//!
//! Data flow
//!
//! ```text
//! build(kind, shape)
//!   derenzo_sectors()        -- radius, pitch, layers, anchor per sector
//!     sector_points()        -- rod centers
//!     paint_disk()           -- image (dim ring), mask (label s+1)
//!   dot: paint_points()
//!   disk: paint_disk()
//! Phantom::new(kind, image, mask)
//! ```

use std::f64::consts::FRAC_PI_3;

use tracing::{debug, info, warn};

use crate::config::PhantomConfig;
use crate::error::{Error, Result};
use crate::grid::{Image, Mask};
use crate::phantom::{Phantom, PhantomKind, Shape};
use crate::point::Point;
use crate::raster::{paint_disk, paint_points};
use crate::sector::{SectorSpec, SECTOR_COUNT};
use crate::transform::Transform;

/// Generates phantoms from a fixed [PhantomConfig]
///
/// Builds share no state; a single builder may be used from several
/// threads at once.
///
/// [PhantomConfig]: ../config/struct.PhantomConfig.html
#[derive(Debug,Clone,Default)]
pub struct PhantomBuilder {
    config: PhantomConfig,
}

impl PhantomBuilder {
    /// Builder with the default constants
    pub fn new() -> Self {
        Self::default()
    }
    /// Builder with custom constants
    ///
    /// Fails with [Error::Config] if the constants do not pass
    /// [PhantomConfig::validate].
    ///
    /// [Error::Config]: ../error/enum.Error.html
    /// [PhantomConfig::validate]: ../config/struct.PhantomConfig.html#method.validate
    pub fn with_config(config: PhantomConfig) -> Result<Self> {
        config.validate()?;
        Ok(PhantomBuilder { config })
    }
    pub fn config(&self) -> &PhantomConfig {
        &self.config
    }
    /// Generate a phantom of `kind`
    ///
    /// `position` places dots and disks and defaults to the image center.
    /// `radius` sets the disk radius and defaults to a quarter of the width.
    /// Both are ignored for Derenzo phantoms.
    ///
    ///     use phantom_gen::{PhantomBuilder, PhantomKind, Shape};
    ///
    ///     let b = PhantomBuilder::new();
    ///     let p = b.build(PhantomKind::Dot, Shape::new(10, 10).unwrap(), None, None).unwrap();
    ///     assert_eq!(p.image()[(5, 5)], 10.0);
    ///     assert_eq!(p.mask()[(5, 5)], 1);
    ///
    pub fn build(&self, kind: PhantomKind, shape: Shape, position: Option<Point>, radius: Option<i64>) -> Result<Phantom> {
        info!("Produce {} phantom, with dimension {}", kind, shape);
        match kind {
            PhantomKind::Derenzo  => self.derenzo(shape),
            PhantomKind::Dot      => self.dot(shape, position),
            PhantomKind::Disk     => self.disk(shape, position, radius),
            PhantomKind::Contrast => Err(Error::NotImplemented(kind)),
        }
    }

    fn derenzo(&self, shape: Shape) -> Result<Phantom> {
        let mut image = Image::new(shape.width(), shape.height());
        let mut mask = Mask::new(shape.width(), shape.height());
        let cfg = &self.config;
        for sector in derenzo_sectors(shape, cfg) {
            debug!("sector {}: base ({}, {}) radius {} pitch_half {} layers {}",
                   sector.id, sector.base.x, sector.base.y,
                   sector.radius, sector.pitch_half, sector.layer_count);
            let label = sector.id as i32 + 1;
            for p in sector.points()? {
                paint_disk(&mut image, p, sector.radius, cfg.intensity, cfg.image_ring_ratio)?;
                paint_disk(&mut mask, p, sector.radius, label, cfg.mask_ring_ratio)?;
            }
        }
        Phantom::new(PhantomKind::Derenzo, image, mask)
    }

    fn dot(&self, shape: Shape, position: Option<Point>) -> Result<Phantom> {
        let mut image = Image::new(shape.width(), shape.height());
        let mut mask = Mask::new(shape.width(), shape.height());
        let p = position.unwrap_or_else(|| shape.center().into());
        if !image.contains(p.x, p.y) {
            warn!("dot at ({}, {}) lies outside of {} image", p.x, p.y, shape);
        }
        paint_points(&mut image, &[p], self.config.intensity);
        paint_points(&mut mask, &[p], self.config.label);
        Phantom::new(PhantomKind::Dot, image, mask)
    }

    fn disk(&self, shape: Shape, position: Option<Point>, radius: Option<i64>) -> Result<Phantom> {
        let cfg = &self.config;
        let radius = radius.unwrap_or_else(|| {
            (cfg.disk.radius_fraction * shape.width() as f64).round() as i64
        });
        if radius < 0 {
            return Err(Error::NegativeRadius(radius));
        }
        let mut image = Image::new(shape.width(), shape.height());
        let mut mask = Mask::new(shape.width(), shape.height());
        let p = position.unwrap_or_else(|| shape.center().into());
        paint_disk(&mut image, p, radius, cfg.intensity, cfg.image_ring_ratio)?;
        paint_disk(&mut mask, p, radius, cfg.label, cfg.mask_ring_ratio)?;
        Phantom::new(PhantomKind::Disk, image, mask)
    }
}

/// Distance from the image center the sectors must stay within
pub fn derenzo_fit_limit(shape: Shape, config: &PhantomConfig) -> f64 {
    config.derenzo.fit_fraction * shape.min_side() as f64 * 0.5
}

/// Layout of the six Derenzo sectors for `shape`
///
/// Depends only on `shape` and `config`. Rod radii and the start radius
/// scale with the smaller image side, the same side the fit limit uses, so
/// wide images keep every sector inside. For square and tall images that
/// side is the width. Each sector gets as many rows as fit inside
/// [derenzo_fit_limit], and at least one.
///
/// [derenzo_fit_limit]: fn.derenzo_fit_limit.html
pub fn derenzo_sectors(shape: Shape, config: &PhantomConfig) -> Vec<SectorSpec> {
    let d = &config.derenzo;
    let size = shape.min_side() as f64;
    let (cx, cy) = (shape.width() as f64 * 0.5, shape.height() as f64 * 0.5);
    let start_radius = (d.start_radius_percent * size / 100.0) as i64;
    let limit = derenzo_fit_limit(shape, config);

    (0 .. SECTOR_COUNT).map(|id| {
        let radius = (d.radius_ratios[id] * size / d.reference_width).ceil() as i64;
        let pitch_half = ((radius as f64 * d.pitch_factor).round() as i64).max(d.min_pitch_half);
        let offset = start_radius.saturating_add(radius);
        let fit = ((limit - offset as f64) / (2.0 * pitch_half as f64)).floor();
        let layer_count = if fit >= 1.0 { fit as usize } else { 1 };
        let rot = Transform::new_rotate(id as f64 * FRAC_PI_3, cx, cy);
        let base = rot.transform_point(cx + offset as f64, cy);
        SectorSpec { id, base, pitch_half, layer_count, radius }
    }).collect()
}
