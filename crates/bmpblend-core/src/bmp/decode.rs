//! Bitmap decoding.

use super::error::{BmpError, FormatError};
use super::header::{read_header, scanline_len};
use crate::grid::{Pixel, PixelGrid};
use std::io::{self, Read};

/// Decode an uncompressed 24-bit bitmap from `reader`.
///
/// Bytes between the headers and the declared pixel data offset are skipped.
/// Scanlines are read in stored order, so grid row 0 is the first scanline in
/// the stream. Scanline padding is discarded without inspection.
///
/// # Errors
///
/// - [`BmpError::Format`] if the headers are not an uncompressed 24-bit bitmap,
///   or declare dimensions whose pixel data cannot be addressed
/// - [`BmpError::Io`] if the stream fails or ends before the last scanline
pub fn decode<R: Read>(mut reader: R) -> Result<PixelGrid, BmpError> {
    let header = read_header(&mut reader)?;
    let (rows, cols) = (header.rows(), header.cols());
    log::debug!(
        "decoding {}x{} bitmap, pixel data at offset {}",
        cols,
        rows,
        header.file.pixel_offset
    );

    skip(&mut reader, header.gap_len())?;

    let too_large = || FormatError::TooLarge { rows, cols };
    let line_len = scanline_len(cols).ok_or_else(too_large)?;
    rows.checked_mul(cols).ok_or_else(too_large)?;

    // Buffers grow with the bytes actually received, never with the
    // declared dimensions alone.
    let mut scanline = Vec::new();
    let mut pixels = Vec::new();
    for _ in 0..rows {
        scanline.clear();
        (&mut reader).take(line_len as u64).read_to_end(&mut scanline)?;
        if scanline.len() < line_len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("stream ended {} bytes into a scanline", scanline.len()),
            )
            .into());
        }
        pixels.extend(
            scanline[..cols * 3]
                .chunks_exact(3)
                .map(|bgr| Pixel::from_bgr([bgr[0], bgr[1], bgr[2]])),
        );
    }

    PixelGrid::from_pixels(rows, cols, pixels).map_err(|_| {
        BmpError::Format(FormatError::InvalidDimensions {
            width: header.info.width,
            height: header.info.height,
        })
    })
}

/// Decode a bitmap held in memory.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelGrid, BmpError> {
    decode(bytes)
}

/// Discard exactly `len` bytes from `reader`.
fn skip<R: Read>(reader: &mut R, len: u64) -> io::Result<()> {
    if len == 0 {
        return Ok(());
    }
    let skipped = io::copy(&mut reader.take(len), &mut io::sink())?;
    if skipped < len {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("stream ended {} bytes before pixel data", len - skipped),
        ));
    }
    Ok(())
}
