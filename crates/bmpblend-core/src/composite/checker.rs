//! Checkerboard overlay of two images.
//!
//! The output is divided into bands of `rows / 8` along two axes: the row
//! index, and the linear index `row * cols + col` of the flattened grid. A
//! position takes the outer pixel when both band numbers have the same parity
//! and the substitute pixel otherwise.
//!
//! Images with fewer than eight rows have a band size of zero under that
//! formula; the band size is clamped to one so every pixel forms its own band.

use super::alignment::Alignment;
use crate::grid::PixelGrid;

/// Number of bands the row axis is divided into.
pub const CHECKER_BANDS: usize = 8;

/// Band size for an image with `rows` rows, never less than one.
#[inline]
pub fn band_size(rows: usize) -> usize {
    (rows / CHECKER_BANDS).max(1)
}

/// Whether the checkerboard cell at `(row, col)` shows the outer image.
#[inline]
pub fn takes_outer(row: usize, col: usize, cols: usize, band: usize) -> bool {
    let row_band = row / band;
    let linear_band = (row * cols + col) / band;
    row_band % 2 == linear_band % 2
}

/// Interleave two images in a checkerboard pattern.
///
/// Output dimensions and the substitute pixel follow [`Alignment`]; every
/// output pixel is copied whole from either the outer pixel or its
/// substitute, never mixed.
pub fn checker(first: &PixelGrid, second: &PixelGrid) -> PixelGrid {
    let alignment = Alignment::new(first, second);
    let (rows, cols) = alignment.outer().dimensions();
    let band = band_size(rows);
    alignment.outer().map_indexed(|row, col, outer| {
        if takes_outer(row, col, cols, band) {
            outer
        } else {
            alignment.substitute(row, col)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Pixel;

    fn grid(rows: usize, cols: usize, fill: Pixel) -> PixelGrid {
        PixelGrid::filled(rows, cols, fill).unwrap()
    }

    #[test]
    fn test_band_size() {
        assert_eq!(band_size(64), 8);
        assert_eq!(band_size(17), 2);
        assert_eq!(band_size(8), 1);
        assert_eq!(band_size(7), 1);
        assert_eq!(band_size(1), 1);
    }

    #[test]
    fn test_takes_outer_pattern() {
        let row0: Vec<_> = (0..4).map(|c| takes_outer(0, c, 4, 2)).collect();
        assert_eq!(row0, vec![true, true, false, false]);

        // row band 1 flips the rule
        let row2: Vec<_> = (0..4).map(|c| takes_outer(2, c, 4, 2)).collect();
        assert_eq!(row2, vec![false, false, true, true]);
    }

    #[test]
    fn test_checker_selects_whole_pixels() {
        let white = grid(16, 4, Pixel::WHITE);
        let black = grid(16, 4, Pixel::BLACK);
        let out = checker(&white, &black);

        assert_eq!(out.dimensions(), (16, 4));
        // linear index 9, band 4: substitute, and (2, 1) is covered
        assert_eq!(out[(2, 1)], Pixel::BLACK);
        // linear index 10, band 5: outer
        assert_eq!(out[(2, 2)], Pixel::WHITE);
        // substitute outside the covered area is the outer pixel itself
        assert_eq!(out[(0, 2)], Pixel::WHITE);
    }

    #[test]
    fn test_checker_identical_is_identity() {
        let img = PixelGrid::from_fn(9, 7, |r, c| Pixel::new(r as u8, c as u8, 3)).unwrap();
        assert_eq!(checker(&img, &img), img);
    }

    #[test]
    fn test_checker_small_image_does_not_panic() {
        let white = grid(3, 3, Pixel::WHITE);
        let black = grid(3, 3, Pixel::BLACK);
        let out = checker(&white, &black);

        assert_eq!(out.dimensions(), (3, 3));
        // band size 1: (1, 1) has row band 1, linear band 4, so it is substituted
        assert_eq!(out[(1, 1)], Pixel::BLACK);
        // (1, 2) has linear band 5: outer
        assert_eq!(out[(1, 2)], Pixel::WHITE);
    }

    #[test]
    fn test_checker_black_images() {
        let a = grid(4, 4, Pixel::BLACK);
        let b = grid(2, 2, Pixel::BLACK);
        assert_eq!(checker(&a, &b), grid(4, 4, Pixel::BLACK));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
