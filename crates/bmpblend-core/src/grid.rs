//! In-memory pixel storage.
//!
//! [`PixelGrid`] is a dense, row-major `rows × cols` array of [`Pixel`]s.
//! The linear layout is an implementation detail: callers address pixels by
//! `(row, col)` through [`PixelGrid::get`], [`PixelGrid::set`] or indexing.
//!
//! Row 0 is the first row of the grid. The bitmap codec maps it to the first
//! scanline stored in the file, so decode and encode agree on row order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// A 24-bit RGB pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Per-channel integer mean of two pixels, truncating toward zero.
    #[inline]
    pub fn average(self, other: Pixel) -> Pixel {
        #[inline]
        fn mean(a: u8, b: u8) -> u8 {
            ((u16::from(a) + u16::from(b)) / 2) as u8
        }
        Pixel {
            red: mean(self.red, other.red),
            green: mean(self.green, other.green),
            blue: mean(self.blue, other.blue),
        }
    }

    /// Build a pixel from the blue-green-red byte order used on disk.
    #[inline]
    pub fn from_bgr([blue, green, red]: [u8; 3]) -> Pixel {
        Pixel { red, green, blue }
    }

    /// Channel bytes in on-disk (blue, green, red) order.
    #[inline]
    pub fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Channel bytes in (red, green, blue) order.
    #[inline]
    pub fn to_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Errors raised when constructing a [`PixelGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows or columns is zero.
    #[error("Invalid dimensions: rows ({rows}) and cols ({cols}) must be non-zero")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The supplied pixel buffer does not hold exactly `rows * cols` pixels.
    #[error("Invalid pixel data: expected {expected} pixels, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// A rectangular, owned grid of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Create a grid with every pixel set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: Pixel) -> Result<Self, GridError> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            pixels: vec![fill; len],
        })
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(rows: usize, cols: usize, pixels: Vec<Pixel>) -> Result<Self, GridError> {
        let expected = checked_len(rows, cols)?;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { rows, cols, pixels })
    }

    /// Build a grid by evaluating `f(row, col)` for every position.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let len = checked_len(rows, cols)?;
        let mut pixels = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                pixels.push(f(row, col));
            }
        }
        Ok(Self { rows, cols, pixels })
    }

    /// Build a grid from packed RGB bytes (3 bytes per pixel, row-major).
    pub fn from_rgb_bytes(rows: usize, cols: usize, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = checked_len(rows, cols)?;
        if bytes.len() != expected * 3 {
            return Err(GridError::LengthMismatch {
                expected,
                actual: bytes.len() / 3,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Ok(Self { rows, cols, pixels })
    }

    /// Create a grid from an `image::RgbImage`.
    pub fn from_rgb_image(img: &image::RgbImage) -> Result<Self, GridError> {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| {
                let [red, green, blue] = p.0;
                Pixel { red, green, blue }
            })
            .collect();
        Self::from_pixels(height as usize, width as usize, pixels)
    }

    /// Convert to an `image::RgbImage`.
    ///
    /// Returns `None` if a dimension does not fit in `u32`.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let width = u32::try_from(self.cols).ok()?;
        let height = u32::try_from(self.rows).ok()?;
        image::RgbImage::from_raw(width, height, self.to_rgb_bytes())
    }

    /// Packed RGB bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgb()).collect()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: a grid has at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        self.offset(row, col).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(row, col)`. Returns false when out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// Pixels of one row, or `None` when `row` is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.pixels[start..start + self.cols])
    }

    /// Iterate rows from first to last.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks_exact(self.cols)
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// A new grid of the same dimensions with `f(row, col, pixel)` applied
    /// to every position.
    pub fn map_indexed<F>(&self, mut f: F) -> PixelGrid
    where
        F: FnMut(usize, usize, Pixel) -> Pixel,
    {
        let cols = self.cols;
        let pixels = self
            .pixels
            .iter()
            .enumerate()
            .map(|(i, &p)| f(i / cols, i % cols, p))
            .collect();
        PixelGrid {
            rows: self.rows,
            cols: self.cols,
            pixels,
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        let i = self.offset(row, col).unwrap_or_else(|| {
            panic!(
                "pixel ({row}, {col}) out of bounds for {}x{} grid",
                self.rows, self.cols
            )
        });
        &self.pixels[i]
    }
}

impl IndexMut<(usize, usize)> for PixelGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        let (rows, cols) = (self.rows, self.cols);
        let i = self
            .offset(row, col)
            .unwrap_or_else(|| panic!("pixel ({row}, {col}) out of bounds for {rows}x{cols} grid"));
        &mut self.pixels[i]
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(GridError::InvalidDimensions { rows, cols })
}
