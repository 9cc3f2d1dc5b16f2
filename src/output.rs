//! Writing phantoms to disk
//!
//! Two files are produced per phantom, both named from the type and shape:
//!
//! - `{type}_phantom_data_{W}x{H}.npz` compressed numpy archive holding
//!   `phantom type`, `image`, `mask` and `shape`
//! - `{type}_phantom_plot_{W}x{H}.png` image and mask side by side, with a
//!   shared grayscale colorbar
//!
//! The output directory must already exist.
use std::fs::File;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use ndarray::{Array1, Array2};
use ndarray_npy::NpzWriter;
use tracing::info;

use crate::error::{Error, Result};
use crate::grid::{Grid, Sample};
use crate::phantom::Phantom;

/// Fail unless `outdir` is an existing directory
pub fn check_outdir<P: AsRef<Path>>(outdir: P) -> Result<()> {
    let outdir = outdir.as_ref();
    if !outdir.is_dir() {
        return Err(Error::MissingOutputDir(outdir.to_path_buf()));
    }
    Ok(())
}

fn file_name(phantom: &Phantom, ftype: &str, ext: &str) -> String {
    let (w, h) = phantom.shape();
    format!("{}_phantom_{}_{}x{}.{}", phantom.typename(), ftype, w, h, ext)
}

/// Name of the npz archive, e.g. `disk_phantom_data_100x100.npz`
pub fn data_file_name(phantom: &Phantom) -> String {
    file_name(phantom, "data", "npz")
}

/// Name of the plot, e.g. `disk_phantom_plot_100x100.png`
pub fn plot_file_name(phantom: &Phantom) -> String {
    file_name(phantom, "plot", "png")
}

/// Copy a grid into an array of shape (width, height), indexed `[x, y]`
pub fn grid_to_array<T: Sample>(grid: &Grid<T>) -> Array2<T> {
    Array2::from_shape_fn(grid.shape(), |(x, y)| grid[(x, y)])
}

/// Write the phantom to a compressed npz archive
pub fn save_npz<P: AsRef<Path>>(phantom: &Phantom, filename: P) -> Result<()> {
    let (w, h) = phantom.shape();
    let mut npz = NpzWriter::new_compressed(File::create(filename)?);
    npz.add_array("phantom type", &Array1::from(phantom.typename().as_bytes().to_vec()))?;
    npz.add_array("image", &grid_to_array(phantom.image()))?;
    npz.add_array("mask", &grid_to_array(phantom.mask()))?;
    npz.add_array("shape", &Array1::from(vec![w as i64, h as i64]))?;
    npz.finish()?;
    Ok(())
}

/// Plot rendering options
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct PlotOptions {
    /// Pixels per grid cell
    pub scale: u32,
    /// Value drawn black
    pub vmin: f64,
    /// Value drawn white
    pub vmax: f64,
    /// Columns between the two panels, and before the colorbar
    pub gap: u32,
    /// Colorbar width in pixels, 0 leaves it out
    pub colorbar: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions { scale: 4, vmin: 0.0, vmax: 10.0, gap: 8, colorbar: 12 }
    }
}

impl PlotOptions {
    fn gray(&self, v: f64) -> u8 {
        let t = ((v - self.vmin) / (self.vmax - self.vmin)).max(0.0).min(1.0);
        (t * 255.0).round() as u8
    }
}

/// Render image and mask side by side in grayscale
///
/// Both panels share the `vmin..vmax` scale, shown by a gradient strip on
/// the right running from `vmin` at the bottom to `vmax` at the top. The
/// grid origin is placed at the bottom left, `x` running right and `y`
/// running up.
///
///     use phantom_gen::{render_plot, PhantomBuilder, PhantomKind, PlotOptions, Shape};
///
///     let p = PhantomBuilder::new()
///         .build(PhantomKind::Dot, Shape::new(4, 3).unwrap(), None, None).unwrap();
///     let opts = PlotOptions { scale: 1, gap: 2, colorbar: 0, ..PlotOptions::default() };
///     assert_eq!(render_plot(&p, &opts).dimensions(), (10, 3));
///     let opts = PlotOptions { colorbar: 5, ..opts };
///     assert_eq!(render_plot(&p, &opts).dimensions(), (17, 3));
///
pub fn render_plot(phantom: &Phantom, opts: &PlotOptions) -> GrayImage {
    let (w, h) = phantom.shape();
    let s = opts.scale.max(1);
    let (pw, ph) = (w as u32 * s, h as u32 * s);
    let bar_x = 2 * pw + 2 * opts.gap;
    let width = if opts.colorbar > 0 { bar_x + opts.colorbar } else { 2 * pw + opts.gap };
    let mut img = GrayImage::from_pixel(width, ph, Luma([255u8]));
    let mask = mask_as_image(phantom);
    let panels = [(0, phantom.image()), (pw + opts.gap, &mask)];
    for &(x0, grid) in panels.iter() {
        for row in 0 .. ph {
            let y = (h - 1) - (row / s) as usize;
            for col in 0 .. pw {
                let x = (col / s) as usize;
                img.put_pixel(x0 + col, row, Luma([opts.gray(grid[(x, y)])]));
            }
        }
    }
    for row in 0 .. ph {
        let t = if ph > 1 { f64::from(row) / f64::from(ph - 1) } else { 0.0 };
        let gray = Luma([opts.gray(opts.vmax - t * (opts.vmax - opts.vmin))]);
        for col in bar_x .. width {
            img.put_pixel(col, row, gray);
        }
    }
    img
}

fn mask_as_image(phantom: &Phantom) -> Grid<f64> {
    let mask = phantom.mask();
    let mut out = Grid::<f64>::new(mask.width(), mask.height());
    for y in 0 .. mask.height() {
        for x in 0 .. mask.width() {
            out[(x, y)] = mask[(x, y)].to_f64();
        }
    }
    out
}

/// Write the plot of the phantom to a PNG file
pub fn save_png<P: AsRef<Path>>(phantom: &Phantom, filename: P, opts: &PlotOptions) -> Result<()> {
    render_plot(phantom, opts).save(filename)?;
    Ok(())
}

/// Read back a grayscale image as (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>, usize, usize)> {
    let img = image::open(filename)?.to_luma8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Save the npz archive and the plot into `outdir`
///
/// Returns the paths written, data first.
pub fn save_all<P: AsRef<Path>>(phantom: &Phantom, outdir: P, opts: &PlotOptions) -> Result<Vec<PathBuf>> {
    let outdir = outdir.as_ref();
    check_outdir(outdir)?;
    let data = outdir.join(data_file_name(phantom));
    info!("Save phantom data to {}", data.display());
    save_npz(phantom, &data)?;
    let plot = outdir.join(plot_file_name(phantom));
    info!("Save phantom plot to {}", plot.display());
    save_png(phantom, &plot, opts)?;
    Ok(vec![data, plot])
}
