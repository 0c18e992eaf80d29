//! Bitmap encoding.

use super::error::BmpError;
use super::header::{scanline_padding, BmpHeader};
use crate::grid::PixelGrid;
use std::io::{self, Read, Write};

/// Encode `grid` as an uncompressed 24-bit bitmap.
///
/// The pixel data is placed at offset 1078; the bytes between the headers and
/// that offset are zero. Rows are written in grid order, each followed by the
/// zero padding that aligns the scanline to four bytes. The writer is flushed
/// before returning.
///
/// # Errors
///
/// - [`BmpError::Format`] if the grid is too large to describe in the headers
/// - [`BmpError::Io`] if any write does not complete
pub fn encode<W: Write>(grid: &PixelGrid, mut writer: W) -> Result<(), BmpError> {
    let (rows, cols) = grid.dimensions();
    let header = BmpHeader::for_grid(rows, cols)?;
    log::debug!(
        "encoding {}x{} bitmap, {} bytes declared",
        cols,
        rows,
        header.file.file_size
    );

    writer.write_all(&header.to_bytes())?;
    io::copy(&mut io::repeat(0).take(header.gap_len()), &mut writer)?;

    let padding = scanline_padding(cols);
    let mut scanline = Vec::with_capacity(cols * 3 + padding);
    for row in grid.rows_iter() {
        scanline.clear();
        scanline.extend(row.iter().flat_map(|p| p.to_bgr()));
        scanline.resize(scanline.len() + padding, 0);
        writer.write_all(&scanline)?;
    }

    writer.flush()?;
    Ok(())
}

/// Encode `grid` into a new byte buffer.
pub fn encode_to_vec(grid: &PixelGrid) -> Result<Vec<u8>, BmpError> {
    let mut buffer = Vec::new();
    encode(grid, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::decode::decode_bytes;
    use crate::bmp::header::{scanline_len, DEFAULT_PIXEL_OFFSET};
    use crate::grid::Pixel;

    #[test]
    fn test_encode_layout() {
        let grid = PixelGrid::from_fn(2, 1, |r, _| Pixel::new(r as u8, 0x20, 0x30)).unwrap();
        let bytes = encode_to_vec(&grid).unwrap();

        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(bytes.len(), DEFAULT_PIXEL_OFFSET as usize + 2 * 4);
        assert!(bytes[54..1078].iter().all(|&b| b == 0));
        // first scanline: B G R + 1 padding byte
        assert_eq!(&bytes[1078..1082], &[0x30, 0x20, 0x00, 0x00]);
        assert_eq!(&bytes[1082..1086], &[0x30, 0x20, 0x01, 0x00]);
    }

    #[test]
    fn test_encode_file_size_field() {
        let grid = PixelGrid::filled(3, 5, Pixel::WHITE).unwrap();
        let bytes = encode_to_vec(&grid).unwrap();
        let declared = u32::from_le_bytes(bytes[2..6].try_into().unwrap());
        assert_eq!(declared as usize, 54 + 3 * scanline_len(5).unwrap());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let grid = PixelGrid::from_fn(5, 7, |r, c| {
            Pixel::new((r * 40) as u8, (c * 30) as u8, (r * c) as u8)
        })
        .unwrap();
        let bytes = encode_to_vec(&grid).unwrap();
        assert_eq!(decode_bytes(&bytes).unwrap(), grid);
    }

    #[test]
    fn test_encode_readable_by_image_crate() {
        let grid =
            PixelGrid::from_fn(3, 2, |r, c| Pixel::new(r as u8 * 50, c as u8 * 90, 7)).unwrap();
        let bytes = encode_to_vec(&grid).unwrap();

        let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Bmp)
            .unwrap()
            .to_rgb8();
        assert_eq!(img.dimensions(), (2, 3));
        // positive height means the first stored scanline is the bottom row
        for r in 0..3 {
            for c in 0..2 {
                let p = img.get_pixel(c as u32, (2 - r) as u32).0;
                assert_eq!(p, grid[(r, c)].to_rgb());
            }
        }
    }

    /// Accepts at most `limit` bytes in total, then fails.
    struct Limited {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for Limited {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "device full"));
            }
            // one byte per call to force partial writes
            let n = buf.len().min(room).min(1);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_encode_completes_partial_writes() {
        let grid = PixelGrid::filled(2, 3, Pixel::new(1, 2, 3)).unwrap();
        let mut sink = Limited {
            written: Vec::new(),
            limit: usize::MAX,
        };
        encode(&grid, &mut sink).unwrap();
        assert_eq!(sink.written, encode_to_vec(&grid).unwrap());
    }

    #[test]
    fn test_encode_failed_write_is_io_error() {
        let grid = PixelGrid::filled(2, 3, Pixel::BLACK).unwrap();
        let mut sink = Limited {
            written: Vec::new(),
            limit: 1100,
        };
        let err = encode(&grid, &mut sink).unwrap_err();
        assert!(matches!(err, BmpError::Io(_)));
    }

    #[test]
    fn test_encoded_gap_is_skippable() {
        let grid = PixelGrid::filled(1, 1, Pixel::WHITE).unwrap();
        let bytes = encode_to_vec(&grid).unwrap();
        let mut rest = Vec::new();
        (&bytes[1078..]).read_to_end(&mut rest).unwrap();
        assert_eq!(rest, vec![255, 255, 255, 0]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
