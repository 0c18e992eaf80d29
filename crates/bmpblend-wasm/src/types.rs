//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core bmpblend
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use bmpblend_core::{GridError, PixelGrid};
use wasm_bindgen::prelude::*;

/// A pixel grid wrapper for JavaScript.
///
/// Pixels are held as packed RGB bytes (3 bytes per pixel, row-major), which
/// maps directly onto a `Uint8Array` on the JavaScript side.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. Call the generated `free()` to
/// release WASM memory early; otherwise wasm-bindgen's finalizer handles it.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsPixelGrid {
    rows: u32,
    cols: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a new JsPixelGrid from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32, pixels: Vec<u8>) -> JsPixelGrid {
        JsPixelGrid { rows, cols, pixels }
    }

    /// Number of rows
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Get the number of bytes in the pixel buffer (rows * cols * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsPixelGrid {
    /// Create a JsPixelGrid from a core PixelGrid.
    pub(crate) fn from_grid(grid: &PixelGrid) -> Self {
        Self {
            rows: grid.rows() as u32,
            cols: grid.cols() as u32,
            pixels: grid.to_rgb_bytes(),
        }
    }

    /// Convert back to a core PixelGrid, validating the buffer length.
    pub(crate) fn to_grid(&self) -> Result<PixelGrid, GridError> {
        PixelGrid::from_rgb_bytes(self.rows as usize, self.cols as usize, &self.pixels)
    }
}
