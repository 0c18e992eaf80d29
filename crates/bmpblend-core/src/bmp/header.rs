//! Bitmap file and image headers.
//!
//! Both headers are serialized field by field in little-endian order, so the
//! on-disk layout never depends on native struct layout or padding.
//!
//! ```text
//! offset  size  field
//!      0     2  signature "BM"
//!      2     4  file size
//!      6     2  reserved
//!      8     2  reserved
//!     10     4  pixel data offset
//!     14     4  image header size (40)
//!     18     4  width  (signed)
//!     22     4  height (signed)
//!     26     2  planes (1)
//!     28     2  bit depth (24)
//!     30     4  compression (0)
//!     34     4  image size
//!     38     4  horizontal resolution
//!     42     4  vertical resolution
//!     46     4  colors used
//!     50     4  colors important
//! ```

use super::error::{BmpError, FormatError};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Length of the file header on disk.
pub const FILE_HEADER_LEN: usize = 14;
/// Length of the image header on disk.
pub const INFO_HEADER_LEN: usize = 40;
/// Combined length of both headers.
pub const HEADERS_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;
/// Pixel data offset written by the encoder.
pub const DEFAULT_PIXEL_OFFSET: u32 = 1078;
/// The two signature bytes every bitmap starts with.
pub const SIGNATURE: [u8; 2] = *b"BM";

const BYTES_PER_PIXEL: usize = 3;
const TRUECOLOR_BIT_DEPTH: u16 = 24;

/// Zero bytes appended to a scanline of `cols` pixels so its length is a
/// multiple of four.
#[inline]
pub fn scanline_padding(cols: usize) -> usize {
    (4 - (cols % 4) * BYTES_PER_PIXEL % 4) % 4
}

/// Bytes occupied on disk by one scanline of `cols` pixels, padding included.
///
/// `None` when the length does not fit in `usize`.
#[inline]
pub fn scanline_len(cols: usize) -> Option<usize> {
    cols.checked_mul(BYTES_PER_PIXEL)?
        .checked_add(scanline_padding(cols))
}

/// The 14-byte file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_offset: u32,
}

/// The 40-byte image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_depth: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Both headers of a bitmap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmpHeader {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl BmpHeader {
    /// Headers for an uncompressed 24-bit bitmap of `rows × cols` pixels with
    /// pixel data at [`DEFAULT_PIXEL_OFFSET`].
    pub fn for_grid(rows: usize, cols: usize) -> Result<Self, FormatError> {
        let too_large = || FormatError::TooLarge { rows, cols };
        let width = i32::try_from(cols).map_err(|_| too_large())?;
        let height = i32::try_from(rows).map_err(|_| too_large())?;
        let file_size = rows
            .checked_mul(scanline_len(cols).ok_or_else(too_large)?)
            .and_then(|data| data.checked_add(HEADERS_LEN))
            .and_then(|size| u32::try_from(size).ok())
            .ok_or_else(too_large)?;

        Ok(Self {
            file: FileHeader {
                signature: SIGNATURE,
                file_size,
                reserved1: 0,
                reserved2: 0,
                pixel_offset: DEFAULT_PIXEL_OFFSET,
            },
            info: InfoHeader {
                header_size: INFO_HEADER_LEN as u32,
                width,
                height,
                planes: 1,
                bit_depth: TRUECOLOR_BIT_DEPTH,
                compression: 0,
                image_size: 0,
                x_pixels_per_meter: 0,
                y_pixels_per_meter: 0,
                colors_used: 0,
                colors_important: 0,
            },
        })
    }

    /// Parse both headers without validating them.
    pub fn from_bytes(bytes: &[u8; HEADERS_LEN]) -> Self {
        let mut r = LeReader { bytes, pos: 0 };
        let file = FileHeader {
            signature: [r.u8(), r.u8()],
            file_size: r.u32(),
            reserved1: r.u16(),
            reserved2: r.u16(),
            pixel_offset: r.u32(),
        };
        let info = InfoHeader {
            header_size: r.u32(),
            width: r.i32(),
            height: r.i32(),
            planes: r.u16(),
            bit_depth: r.u16(),
            compression: r.u32(),
            image_size: r.u32(),
            x_pixels_per_meter: r.i32(),
            y_pixels_per_meter: r.i32(),
            colors_used: r.u32(),
            colors_important: r.u32(),
        };
        Self { file, info }
    }

    /// Serialize both headers.
    pub fn to_bytes(&self) -> [u8; HEADERS_LEN] {
        let mut w = LeWriter {
            bytes: [0; HEADERS_LEN],
            pos: 0,
        };
        let FileHeader {
            signature,
            file_size,
            reserved1,
            reserved2,
            pixel_offset,
        } = self.file;
        w.put(&signature);
        w.put(&file_size.to_le_bytes());
        w.put(&reserved1.to_le_bytes());
        w.put(&reserved2.to_le_bytes());
        w.put(&pixel_offset.to_le_bytes());

        let info = &self.info;
        w.put(&info.header_size.to_le_bytes());
        w.put(&info.width.to_le_bytes());
        w.put(&info.height.to_le_bytes());
        w.put(&info.planes.to_le_bytes());
        w.put(&info.bit_depth.to_le_bytes());
        w.put(&info.compression.to_le_bytes());
        w.put(&info.image_size.to_le_bytes());
        w.put(&info.x_pixels_per_meter.to_le_bytes());
        w.put(&info.y_pixels_per_meter.to_le_bytes());
        w.put(&info.colors_used.to_le_bytes());
        w.put(&info.colors_important.to_le_bytes());
        debug_assert_eq!(w.pos, HEADERS_LEN);
        w.bytes
    }

    /// Check that the headers describe a bitmap the codec can decode.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.file.signature != SIGNATURE {
            return Err(FormatError::InvalidSignature(self.file.signature));
        }
        if self.info.compression != 0 {
            return Err(FormatError::UnsupportedCompression(self.info.compression));
        }
        if self.info.bit_depth != TRUECOLOR_BIT_DEPTH {
            return Err(FormatError::UnsupportedBitDepth(self.info.bit_depth));
        }
        if self.info.width <= 0 || self.info.height <= 0 {
            return Err(FormatError::InvalidDimensions {
                width: self.info.width,
                height: self.info.height,
            });
        }
        if (self.file.pixel_offset as usize) < HEADERS_LEN {
            return Err(FormatError::InvalidPixelOffset(self.file.pixel_offset));
        }
        Ok(())
    }

    /// Number of scanlines. Zero for headers that fail [`validate`](Self::validate).
    pub fn rows(&self) -> usize {
        usize::try_from(self.info.height).unwrap_or(0)
    }

    /// Pixels per scanline. Zero for headers that fail [`validate`](Self::validate).
    pub fn cols(&self) -> usize {
        usize::try_from(self.info.width).unwrap_or(0)
    }

    /// Bytes between the end of the headers and the start of pixel data.
    pub fn gap_len(&self) -> u64 {
        u64::from(self.file.pixel_offset).saturating_sub(HEADERS_LEN as u64)
    }
}

/// Read and validate the headers at the front of `reader`.
///
/// On success the reader is positioned directly after the 54 header bytes.
pub fn read_header<R: Read>(mut reader: R) -> Result<BmpHeader, BmpError> {
    let mut bytes = [0u8; HEADERS_LEN];
    reader.read_exact(&mut bytes)?;
    let header = BmpHeader::from_bytes(&bytes);
    header.validate()?;
    Ok(header)
}

struct LeReader<'a> {
    bytes: &'a [u8; HEADERS_LEN],
    pos: usize,
}

impl LeReader<'_> {
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    fn u8(&mut self) -> u8 {
        self.take::<1>()[0]
    }

    fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }
}

struct LeWriter {
    bytes: [u8; HEADERS_LEN],
    pos: usize,
}

impl LeWriter {
    fn put(&mut self, field: &[u8]) {
        self.bytes[self.pos..self.pos + field.len()].copy_from_slice(field);
        self.pos += field.len();
    }
}
