//! Uncompressed 24-bit bitmap codec.
//!
//! This module provides:
//! - Decoding a bitmap byte stream into a [`PixelGrid`](crate::PixelGrid)
//! - Encoding a grid back into a bitmap byte stream
//! - Header inspection without reading pixel data
//!
//! # Format
//!
//! Only the uncompressed truecolor variant is handled: a 14-byte file header,
//! a 40-byte image header, an optional gap up to the declared pixel data
//! offset, then `rows` scanlines of blue-green-red triples, each padded with
//! zero bytes to a multiple of four. Palettes, other bit depths and
//! compression are rejected with [`FormatError`].
//!
//! # Row order
//!
//! Grid row 0 is the first scanline in the stream for both decode and encode.
//! Bitmaps with a positive height store the bottom row first, so a viewer will
//! show the grid vertically flipped; a decode/encode round trip is exact.
//!
//! # Examples
//!
//! ```ignore
//! use bmpblend_core::bmp::{decode, encode};
//!
//! let grid = decode(std::fs::File::open("in.bmp")?)?;
//! encode(&grid, std::fs::File::create("out.bmp")?)?;
//! ```

mod decode;
mod encode;
mod error;
mod header;

pub use decode::{decode, decode_bytes};
pub use encode::{encode, encode_to_vec};
pub use error::{BmpError, FormatError};
pub use header::{
    read_header, scanline_len, scanline_padding, BmpHeader, FileHeader, InfoHeader,
    DEFAULT_PIXEL_OFFSET, HEADERS_LEN, SIGNATURE,
};
