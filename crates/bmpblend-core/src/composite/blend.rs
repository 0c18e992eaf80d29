//! Averaged overlay of two images.

use super::alignment::Alignment;
use crate::grid::PixelGrid;

/// Blend two images by averaging the inner image into the outer one.
///
/// The output has the outer image's dimensions (see [`Alignment`]). Every
/// output pixel is the per-channel truncating mean of the outer pixel and its
/// substitute: the inner pixel where the inner image covers the position,
/// otherwise the outer pixel itself, which leaves it unchanged.
///
/// # Example
///
/// ```ignore
/// use bmpblend_core::{blend, Pixel, PixelGrid};
///
/// let white = PixelGrid::filled(4, 4, Pixel::WHITE)?;
/// let black = PixelGrid::filled(2, 2, Pixel::BLACK)?;
/// let out = blend(&white, &black);
/// assert_eq!(out[(2, 2)], Pixel::new(127, 127, 127));
/// ```
pub fn blend(first: &PixelGrid, second: &PixelGrid) -> PixelGrid {
    let alignment = Alignment::new(first, second);
    alignment
        .outer()
        .map_indexed(|row, col, outer| outer.average(alignment.substitute(row, col)))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
