//! bmpblend Core - Bitmap codec and compositing library
//!
//! This crate reads and writes uncompressed 24-bit bitmaps and combines two
//! images into an averaged blend or a checkerboard overlay.
//!
//! # Pipeline
//!
//! ```text
//! bytes ─ bmp::decode ─┐
//!                      ├─ composite::blend / composite::checker ─ bmp::encode ─ bytes
//! bytes ─ bmp::decode ─┘
//! ```

pub mod bmp;
pub mod composite;
pub mod grid;

pub use bmp::{decode, decode_bytes, encode, encode_to_vec, BmpError, BmpHeader, FormatError};
pub use composite::{blend, checker, Alignment};
pub use grid::{GridError, Pixel, PixelGrid};

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(rows: usize, cols: usize) -> PixelGrid {
        PixelGrid::from_fn(rows, cols, |r, c| {
            Pixel::new((r * 255 / rows) as u8, (c * 255 / cols) as u8, 128)
        })
        .unwrap()
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let first = encode_to_vec(&gradient(20, 13)).unwrap();
        let second = encode_to_vec(&PixelGrid::filled(9, 30, Pixel::BLACK).unwrap()).unwrap();

        let one = decode_bytes(&first).unwrap();
        let two = decode_bytes(&second).unwrap();

        let blended = blend(&one, &two);
        let checkered = checker(&one, &two);
        assert_eq!(blended.dimensions(), (20, 13));
        assert_eq!(checkered.dimensions(), (20, 13));

        for out in [blended, checkered] {
            let bytes = encode_to_vec(&out).unwrap();
            assert_eq!(decode_bytes(&bytes).unwrap(), out);
        }
    }

    #[test]
    fn test_pipeline_rejects_bad_input() {
        let mut bytes = encode_to_vec(&gradient(4, 4)).unwrap();
        bytes[28] = 8;
        assert!(matches!(
            decode_bytes(&bytes),
            Err(BmpError::Format(FormatError::UnsupportedBitDepth(8)))
        ));
    }
}
