//! Placement of one image centered inside another.

use crate::grid::{Pixel, PixelGrid};

/// Two images overlaid with the smaller one centered on the larger.
///
/// The image with more rows is the *outer* image (ties go to the first
/// argument) and fixes the output dimensions. The other is the *inner*
/// image, shifted by `((outer_rows - inner_rows) / 2, (outer_cols - inner_cols) / 2)`.
/// The column offset is negative when the inner image is wider.
///
/// An outer position `(row, col)` is covered when
/// `row_offset < row < outer_rows - row_offset` and
/// `col_offset < col < outer_cols - col_offset`. Both bounds are strict, so
/// the first row and column of the centered rectangle are never covered.
#[derive(Debug, Clone, Copy)]
pub struct Alignment<'a> {
    outer: &'a PixelGrid,
    inner: &'a PixelGrid,
    row_offset: isize,
    col_offset: isize,
}

impl<'a> Alignment<'a> {
    pub fn new(first: &'a PixelGrid, second: &'a PixelGrid) -> Self {
        let (outer, inner) = if second.rows() > first.rows() {
            (second, first)
        } else {
            (first, second)
        };
        let row_offset = (outer.rows() as isize - inner.rows() as isize) / 2;
        let col_offset = (outer.cols() as isize - inner.cols() as isize) / 2;
        Self {
            outer,
            inner,
            row_offset,
            col_offset,
        }
    }

    #[inline]
    pub fn outer(&self) -> &'a PixelGrid {
        self.outer
    }

    #[inline]
    pub fn inner(&self) -> &'a PixelGrid {
        self.inner
    }

    /// `(row_offset, col_offset)` of the inner image.
    #[inline]
    pub fn offsets(&self) -> (isize, isize) {
        (self.row_offset, self.col_offset)
    }

    /// Whether `(row, col)` lies strictly inside the centered rectangle.
    #[inline]
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        let (row, col) = (row as isize, col as isize);
        let rows = self.outer.rows() as isize;
        let cols = self.outer.cols() as isize;
        row > self.row_offset
            && row < rows - self.row_offset
            && col > self.col_offset
            && col < cols - self.col_offset
    }

    /// The inner pixel over `(row, col)`.
    ///
    /// `None` when the position is not covered. When the size difference is
    /// odd the covered band reaches one past the inner image's last row or
    /// column; those positions are also `None`.
    #[inline]
    pub fn inner_pixel(&self, row: usize, col: usize) -> Option<Pixel> {
        if !self.is_covered(row, col) {
            return None;
        }
        // coverage guarantees both are at least 1
        let inner_row = (row as isize - self.row_offset) as usize;
        let inner_col = (col as isize - self.col_offset) as usize;
        self.inner.get(inner_row, inner_col)
    }

    /// The pixel paired with the outer pixel at `(row, col)`: the inner pixel
    /// where there is one, otherwise the outer pixel itself.
    #[inline]
    pub fn substitute(&self, row: usize, col: usize) -> Pixel {
        self.inner_pixel(row, col)
            .unwrap_or_else(|| self.outer[(row, col)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize, fill: Pixel) -> PixelGrid {
        PixelGrid::filled(rows, cols, fill).unwrap()
    }

    #[test]
    fn test_larger_row_count_is_outer() {
        let small = grid(2, 2, Pixel::BLACK);
        let large = grid(4, 4, Pixel::WHITE);

        let a = Alignment::new(&small, &large);
        assert_eq!(a.outer().dimensions(), (4, 4));
        assert_eq!(a.inner().dimensions(), (2, 2));
        assert_eq!(a.offsets(), (1, 1));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let first = grid(4, 2, Pixel::BLACK);
        let second = grid(4, 6, Pixel::WHITE);

        assert_eq!(Alignment::new(&first, &second).outer().cols(), 2);
        assert_eq!(Alignment::new(&second, &first).outer().cols(), 6);
    }

    #[test]
    fn test_coverage_is_strict() {
        let outer = grid(4, 4, Pixel::WHITE);
        let inner = grid(2, 2, Pixel::BLACK);
        let a = Alignment::new(&outer, &inner);

        let covered: Vec<_> = (0..4)
            .flat_map(|r| (0..4).map(move |c| (r, c)))
            .filter(|&(r, c)| a.is_covered(r, c))
            .collect();
        assert_eq!(covered, vec![(2, 2)]);
    }

    #[test]
    fn test_same_size_skips_first_row_and_col() {
        let outer = grid(3, 3, Pixel::WHITE);
        let inner = grid(3, 3, Pixel::BLACK);
        let a = Alignment::new(&outer, &inner);

        assert!(!a.is_covered(0, 1));
        assert!(!a.is_covered(1, 0));
        assert!(a.is_covered(1, 1));
        assert!(a.is_covered(2, 2));
        assert_eq!(a.substitute(2, 2), Pixel::BLACK);
        assert_eq!(a.substitute(0, 0), Pixel::WHITE);
    }

    #[test]
    fn test_wider_inner_has_negative_col_offset() {
        let outer = grid(6, 4, Pixel::WHITE);
        let inner = PixelGrid::from_fn(2, 8, |r, c| Pixel::new(r as u8, c as u8, 1)).unwrap();
        let a = Alignment::new(&outer, &inner);

        assert_eq!(a.offsets(), (2, -2));
        for col in 0..4 {
            assert!(a.is_covered(3, col));
            assert_eq!(a.substitute(3, col), Pixel::new(1, col as u8 + 2, 1));
        }
        assert!(!a.is_covered(2, 0));
    }

    #[test]
    fn test_odd_difference_stays_in_bounds() {
        let outer = grid(5, 5, Pixel::WHITE);
        let inner = PixelGrid::from_fn(2, 2, |r, c| Pixel::new(r as u8, c as u8, 0)).unwrap();
        let a = Alignment::new(&outer, &inner);

        // rows 2 and 3 are covered, but row 3 maps past the inner image
        assert!(a.is_covered(3, 3));
        assert_eq!(a.inner_pixel(3, 3), None);
        assert_eq!(a.substitute(3, 3), Pixel::WHITE);
        assert_eq!(a.inner_pixel(2, 2), Some(Pixel::new(1, 1, 0)));
    }
}
