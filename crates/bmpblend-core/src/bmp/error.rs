//! Error types for the bitmap codec.

use std::io;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a bitmap.
#[derive(Debug, Error)]
pub enum BmpError {
    /// The byte stream failed, or ended before a header, the gap before the
    /// pixel data, or a scanline was complete.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The headers describe a bitmap this codec does not handle.
    #[error("Unsupported bitmap: {0}")]
    Format(#[from] FormatError),
}

impl BmpError {
    /// True when the stream ended before all expected bytes were read.
    pub fn is_short_read(&self) -> bool {
        matches!(self, BmpError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// Header contents rejected by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("bad signature {0:02X?}, expected \"BM\"")]
    InvalidSignature([u8; 2]),

    #[error("compressed bitmaps unsupported (compression = {0})")]
    UnsupportedCompression(u32),

    #[error("only 24-bit truecolor supported (bit depth = {0})")]
    UnsupportedBitDepth(u16),

    #[error("width ({width}) and height ({height}) must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// Pixel data would start inside the 54 bytes of headers.
    #[error("pixel data offset {0} overlaps the headers")]
    InvalidPixelOffset(u32),

    #[error("{rows}x{cols} pixels do not fit in a bitmap file")]
    TooLarge { rows: usize, cols: usize },
}
