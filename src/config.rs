//! Generation constants
//!
//! Every number that shapes a phantom lives here and is handed to the
//! builder explicitly. Values can be overridden from a TOML file; missing
//! keys keep their defaults.
//!
//! ```toml
//! intensity = 10.0
//! image_ring_ratio = 0.7
//!
//! [derenzo]
//! radius_ratios = [1.0, 2.0, 3.0, 4.0, 5.0, 5.0]
//! fit_fraction = 0.95
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sector::SECTOR_COUNT;

const MAX_PITCH_FACTOR: f64 = 100.0;
const MAX_MIN_PITCH_HALF: i64 = 1 << 20;

/// Derenzo sizing policy
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DerenzoConfig {
    /// Rod radius per sector, in pixels per `reference_width` of image width
    pub radius_ratios: [f64; SECTOR_COUNT],
    /// Image width the ratios are expressed against
    pub reference_width: f64,
    /// Half pitch as a multiple of the rod radius
    pub pitch_factor: f64,
    pub min_pitch_half: i64,
    /// Distance from image center to the innermost rods, percent of width
    pub start_radius_percent: f64,
    /// Fraction of the half width the sectors may extend to
    pub fit_fraction: f64,
}

impl Default for DerenzoConfig {
    fn default() -> Self {
        DerenzoConfig {
            radius_ratios: [1.0, 2.0, 3.0, 4.0, 5.0, 5.0],
            reference_width: 100.0,
            pitch_factor: 1.5,
            min_pitch_half: 2,
            start_radius_percent: 12.0,
            fit_fraction: 0.95,
        }
    }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiskConfig {
    /// Default radius as a fraction of the image width
    pub radius_fraction: f64,
}

impl Default for DiskConfig {
    fn default() -> Self {
        DiskConfig { radius_fraction: 0.25 }
    }
}

/// Constants used by [PhantomBuilder]
///
/// [PhantomBuilder]: ../builder/struct.PhantomBuilder.html
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhantomConfig {
    /// Image value of painted pixels
    pub intensity: f64,
    /// Mask label for single element phantoms
    pub label: i32,
    /// Ring value relative to fill in the image
    pub image_ring_ratio: f64,
    /// Ring value relative to fill in the mask
    pub mask_ring_ratio: f64,
    pub derenzo: DerenzoConfig,
    pub disk: DiskConfig,
}

impl Default for PhantomConfig {
    fn default() -> Self {
        PhantomConfig {
            intensity: 10.0,
            label: 1,
            image_ring_ratio: 0.7,
            mask_ring_ratio: 1.0,
            derenzo: DerenzoConfig::default(),
            disk: DiskConfig::default(),
        }
    }
}

impl PhantomConfig {
    /// Parse and validate a TOML document
    ///
    ///     use phantom_gen::PhantomConfig;
    ///
    ///     let c = PhantomConfig::from_toml_str("intensity = 4.0").unwrap();
    ///     assert_eq!(c.intensity, 4.0);
    ///     assert_eq!(c.image_ring_ratio, 0.7);
    ///
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: PhantomConfig = toml::from_str(s)
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
    /// Read a TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
    /// Check that every value is usable by the builder
    ///
    /// Values are bounded so that every derived radius and pitch stays
    /// within the image: a rod is never wider than the reference width and
    /// a default disk never wider than the image.
    pub fn validate(&self) -> Result<()> {
        let d = &self.derenzo;
        if !(d.reference_width.is_finite() && d.reference_width > 0.0) {
            return Err(Error::Config(format!("reference_width must be positive, got {}", d.reference_width)));
        }
        if d.radius_ratios.iter().any(|&r| !(r > 0.0 && r <= d.reference_width)) {
            return Err(Error::Config(format!("radius_ratios must be in (0, {}], got {:?}",
                                             d.reference_width, d.radius_ratios)));
        }
        if !(d.pitch_factor > 0.0 && d.pitch_factor <= MAX_PITCH_FACTOR) {
            return Err(Error::Config(format!("pitch_factor must be in (0, {}], got {}", MAX_PITCH_FACTOR, d.pitch_factor)));
        }
        if !(1 ..= MAX_MIN_PITCH_HALF).contains(&d.min_pitch_half) {
            return Err(Error::Config(format!("min_pitch_half must be in [1, {}], got {}", MAX_MIN_PITCH_HALF, d.min_pitch_half)));
        }
        if !(0.0 ..= 100.0).contains(&d.start_radius_percent) {
            return Err(Error::Config(format!("start_radius_percent must be in [0, 100], got {}", d.start_radius_percent)));
        }
        if !(d.fit_fraction > 0.0 && d.fit_fraction <= 1.0) {
            return Err(Error::Config(format!("fit_fraction must be in (0, 1], got {}", d.fit_fraction)));
        }
        if !self.intensity.is_finite() {
            return Err(Error::Config(format!("intensity must be finite, got {}", self.intensity)));
        }
        for (name, r) in &[("image_ring_ratio", self.image_ring_ratio), ("mask_ring_ratio", self.mask_ring_ratio)] {
            if !(0.0 ..= 1.0).contains(r) {
                return Err(Error::Config(format!("{} must be in [0, 1], got {}", name, r)));
            }
        }
        if !(self.disk.radius_fraction > 0.0 && self.disk.radius_fraction <= 1.0) {
            return Err(Error::Config(format!("disk radius_fraction must be in (0, 1], got {}", self.disk.radius_fraction)));
        }
        Ok(())
    }
}
