//! Bitmap codec WASM bindings.
//!
//! This module exposes the bmpblend-core bitmap decoder and encoder to
//! JavaScript.
//!
//! # Functions
//!
//! - [`decode_bmp`] - Decode bitmap bytes into a JsPixelGrid
//! - [`encode_bmp`] - Encode a JsPixelGrid into bitmap bytes
//! - [`read_bmp_header`] - Inspect bitmap headers without decoding pixels
//!
//! # Example
//!
//! ```typescript
//! import { decode_bmp, encode_bmp } from '@bmpblend/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const grid = decode_bmp(bytes);
//! console.log(`Decoded ${grid.cols}x${grid.rows}`);
//! const out = encode_bmp(grid);
//! ```

use crate::js_error;
use crate::types::JsPixelGrid;
use bmpblend_core::bmp::{self, BmpError, BmpHeader};
use wasm_bindgen::prelude::*;

/// Decode an uncompressed 24-bit bitmap.
///
/// # Errors
///
/// Returns an error if the headers are not an uncompressed 24-bit bitmap or
/// the data ends before the last scanline.
#[wasm_bindgen]
pub fn decode_bmp(bytes: &[u8]) -> Result<JsPixelGrid, JsValue> {
    decode_grid(bytes).map_err(|e| js_error("decode_bmp", e))
}

/// Encode a grid as an uncompressed 24-bit bitmap.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the grid dimensions.
#[wasm_bindgen]
pub fn encode_bmp(grid: &JsPixelGrid) -> Result<Vec<u8>, JsValue> {
    let core = grid.to_grid().map_err(|e| js_error("encode_bmp", e))?;
    bmp::encode_to_vec(&core).map_err(|e| js_error("encode_bmp", e))
}

/// Read and validate the bitmap headers.
///
/// Returns a plain object mirroring the file and image headers:
/// `{ file: { signature, file_size, pixel_offset, ... }, info: { width, height, ... } }`.
#[wasm_bindgen]
pub fn read_bmp_header(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let header = header_of(bytes).map_err(|e| js_error("read_bmp_header", e))?;
    serde_wasm_bindgen::to_value(&header).map_err(JsValue::from)
}

pub(crate) fn decode_grid(bytes: &[u8]) -> Result<JsPixelGrid, BmpError> {
    let grid = bmp::decode_bytes(bytes)?;
    Ok(JsPixelGrid::from_grid(&grid))
}

pub(crate) fn header_of(bytes: &[u8]) -> Result<BmpHeader, BmpError> {
    bmp::read_header(bytes)
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_encode_round_trip() {
        let grid = JsPixelGrid::new(2, 2, vec![7u8; 12]);
        let bytes = encode_bmp(&grid).unwrap();
        let back = decode_bmp(&bytes).unwrap();
        assert_eq!(back.pixels(), grid.pixels());
    }

    #[wasm_bindgen_test]
    fn test_decode_bmp_invalid() {
        assert!(decode_bmp(&[0u8; 10]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_read_bmp_header() {
        let grid = JsPixelGrid::new(1, 1, vec![0u8; 3]);
        let bytes = encode_bmp(&grid).unwrap();
        assert!(read_bmp_header(&bytes).unwrap().is_object());
    }
}
