//! Phantom entity

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::grid::{Image, Mask};

/// Phantom types
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum PhantomKind {
    /// Six sectors of graduated hexagonal rod clusters
    Derenzo,
    /// Single pixel
    Dot,
    /// Single disk with a perimeter ring
    Disk,
    /// Recognized, no generator yet
    Contrast,
}

impl PhantomKind {
    /// All recognized types
    pub const ALL: [PhantomKind; 4] = [
        PhantomKind::Derenzo, PhantomKind::Contrast, PhantomKind::Dot, PhantomKind::Disk,
    ];
    /// Type tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PhantomKind::Derenzo  => "derenzo",
            PhantomKind::Dot      => "dot",
            PhantomKind::Disk     => "disk",
            PhantomKind::Contrast => "contrast",
        }
    }
}

impl fmt::Display for PhantomKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhantomKind {
    type Err = Error;
    /// Parse a type tag
    ///
    ///     use phantom_gen::PhantomKind;
    ///
    ///     assert_eq!("disk".parse::<PhantomKind>().unwrap(), PhantomKind::Disk);
    ///     assert!("hexagon".parse::<PhantomKind>().is_err());
    ///
    fn from_str(s: &str) -> Result<Self> {
        PhantomKind::ALL.iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::InvalidType(s.to_string()))
    }
}

/// Validated phantom dimensions
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Shape {
    width: usize,
    height: usize,
}

impl Shape {
    /// Both dimensions must be positive
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidShape { width, height });
        }
        Ok(Shape { width: width as usize, height: height as usize })
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Center pixel, integer halved
    pub fn center(&self) -> (i64, i64) {
        (self.width as i64 / 2, self.height as i64 / 2)
    }
    /// Smaller of width and height
    pub fn min_side(&self) -> usize {
        self.width.min(self.height)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Synthetic test image with a co-registered label mask
///
/// Image and mask always have the same shape. A phantom is read-only once
/// built.
#[derive(Debug,Clone,PartialEq)]
pub struct Phantom {
    kind: PhantomKind,
    image: Image,
    mask: Mask,
}

impl Phantom {
    /// Bundle an image and mask
    ///
    /// Fails if the two grids differ in shape
    pub fn new(kind: PhantomKind, image: Image, mask: Mask) -> Result<Self> {
        if image.shape() != mask.shape() {
            return Err(Error::ShapeMismatch { image: image.shape(), mask: mask.shape() });
        }
        Ok(Phantom { kind, image, mask })
    }
    pub fn kind(&self) -> PhantomKind {
        self.kind
    }
    /// Type tag, e.g. `derenzo`
    pub fn typename(&self) -> &'static str {
        self.kind.as_str()
    }
    pub fn image(&self) -> &Image {
        &self.image
    }
    pub fn mask(&self) -> &Mask {
        &self.mask
    }
    /// (width, height) shared by image and mask
    pub fn shape(&self) -> (usize, usize) {
        self.image.shape()
    }
}

impl fmt::Display for Phantom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (w, h) = self.shape();
        write!(f, "{} ({}, {})", self.typename(), w, h)
    }
}
