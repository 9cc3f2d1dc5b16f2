//! Raster grids

use std::fmt::Debug;
use std::ops::Index;
use std::ops::IndexMut;

/// Cell value stored in a [Grid]
///
/// Values are scaled in real arithmetic and converted back with a
/// truncating cast.
///
/// [Grid]: struct.Grid.html
pub trait Sample: Copy + Default + PartialEq + Debug {
    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl Sample for f64 {
    fn from_f64(v: f64) -> Self { v }
    fn to_f64(self) -> f64 { self }
}

impl Sample for i32 {
    fn from_f64(v: f64) -> Self { v as i32 }
    fn to_f64(self) -> f64 { f64::from(self) }
}

/// 2D grid of samples
///
/// Data is stored as row-major order (C-format), `data[y * width + x]`,
/// and indexed as `(x, y)`.
#[derive(Debug,Clone,PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

/// Intensity image
pub type Image = Grid<f64>;
/// Integer label mask
pub type Mask = Grid<i32>;

impl<T: Sample> Grid<T> {
    /// Create a new zeroed grid of width * height
    ///
    ///     use phantom_gen::Grid;
    ///
    ///     let g = Grid::<f64>::new(3, 2);
    ///     assert_eq!(g.shape(), (3, 2));
    ///     assert!(g.iter().all(|&v| v == 0.0));
    ///
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create grid with 0 width or height");
        }
        Grid { data: vec![T::default(); width * height], width, height }
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// (width, height)
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Underlying row-major data
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
    /// Whether (`x`,`y`) lies inside the grid
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }
    /// Value at (`x`,`y`), None outside of the grid
    pub fn get(&self, x: i64, y: i64) -> Option<T> {
        if self.contains(x, y) {
            Some(self[(x as usize, y as usize)])
        } else {
            None
        }
    }
    /// Set the value at (`x`,`y`)
    ///
    /// Locations outside of the grid are ignored
    ///
    ///     use phantom_gen::Grid;
    ///
    ///     let mut g = Grid::<i32>::new(2, 2);
    ///     g.set_clipped(1, 0, 4);
    ///     g.set_clipped(-1, 5, 4); // Ignored, outside of range
    ///     assert_eq!(g.get(1, 0), Some(4));
    ///     assert_eq!(g.iter().filter(|&&v| v != 0).count(), 1);
    ///
    pub fn set_clipped(&mut self, x: i64, y: i64, v: T) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self[(x as usize, y as usize)] = v;
        true
    }
    /// Number of cells not equal to zero
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != T::default()).count()
    }
}

impl<T> Index<(usize,usize)> for Grid<T> {
    type Output = T;
    fn index(&self, index: (usize, usize)) -> &T {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl<T> IndexMut<(usize,usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}
