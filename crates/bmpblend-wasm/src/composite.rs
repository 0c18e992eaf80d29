//! Compositing WASM bindings.
//!
//! Both functions take two grids of any size and return a new grid with the
//! dimensions of the one with more rows. See `bmpblend_core::composite` for
//! the alignment rules.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const blended = blend(first, second);
//! const checkered = checker(first, second);
//! ```

use crate::js_error;
use crate::types::JsPixelGrid;
use bmpblend_core::{composite, GridError, PixelGrid};
use wasm_bindgen::prelude::*;

/// Average the smaller grid into the larger one.
#[wasm_bindgen]
pub fn blend(first: &JsPixelGrid, second: &JsPixelGrid) -> Result<JsPixelGrid, JsValue> {
    combine(first, second, composite::blend).map_err(|e| js_error("blend", e))
}

/// Interleave the two grids in a checkerboard pattern.
#[wasm_bindgen]
pub fn checker(first: &JsPixelGrid, second: &JsPixelGrid) -> Result<JsPixelGrid, JsValue> {
    combine(first, second, composite::checker).map_err(|e| js_error("checker", e))
}

fn combine(
    first: &JsPixelGrid,
    second: &JsPixelGrid,
    op: fn(&PixelGrid, &PixelGrid) -> PixelGrid,
) -> Result<JsPixelGrid, GridError> {
    let a = first.to_grid()?;
    let b = second.to_grid()?;
    Ok(JsPixelGrid::from_grid(&op(&a, &b)))
}
