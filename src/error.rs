//! Error types

use std::path::PathBuf;

use thiserror::Error;

use crate::phantom::PhantomKind;

/// Result type alias for phantom generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating or saving a phantom
#[derive(Error, Debug)]
pub enum Error {
    /// Type tag is not one of the recognized phantom types
    #[error("Unknown phantom type: {0}")]
    InvalidType(String),

    /// Type tag is recognized but has no generator
    #[error("{0} phantom is not implemented")]
    NotImplemented(PhantomKind),

    #[error("Invalid shape {width}x{height}: dimensions must be positive")]
    InvalidShape { width: i64, height: i64 },

    #[error("Radius must not be negative, got {0}")]
    NegativeRadius(i64),

    #[error("Invalid sector id {0}, expected 0 to 5")]
    InvalidSector(usize),

    #[error("Lattice half pitch must be at least 1, got {0}")]
    InvalidPitch(i64),

    /// Image and mask grids of a phantom disagree
    #[error("Image shape {image:?} does not match mask shape {mask:?}")]
    ShapeMismatch { image: (usize, usize), mask: (usize, usize) },

    #[error("Output directory \"{}\" does not exist. Create it first.", .0.display())]
    MissingOutputDir(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to write npz archive: {0}")]
    Npz(#[from] ndarray_npy::WriteNpzError),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
