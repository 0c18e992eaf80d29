//! bmpblend WASM - WebAssembly bindings for bmpblend
//!
//! This crate provides WASM bindings to expose the bmpblend-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for pixel grids
//! - `codec` - Bitmap decode, encode and header inspection
//! - `composite` - Blend and checkerboard compositing
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_bmp, blend, encode_bmp } from '@bmpblend/wasm';
//!
//! await init();
//!
//! const a = decode_bmp(new Uint8Array(await fileA.arrayBuffer()));
//! const b = decode_bmp(new Uint8Array(await fileB.arrayBuffer()));
//! const out = encode_bmp(blend(a, b));
//! ```

use std::fmt::Display;
use wasm_bindgen::prelude::*;

mod codec;
mod composite;
mod types;

// Re-export public types
pub use codec::{decode_bmp, encode_bmp, read_bmp_header};
pub use composite::{blend, checker};
pub use types::JsPixelGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Build the error handed back to JavaScript, logging it to the console.
pub(crate) fn js_error(operation: &str, err: impl Display) -> JsValue {
    let message = format!("{operation} failed: {err}");
    let value = JsValue::from_str(&message);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&value);
    value
}
