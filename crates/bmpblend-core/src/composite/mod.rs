//! Compositing two images of possibly different sizes.
//!
//! Both operations center the smaller image (by row count) inside the larger
//! one and produce an output with the larger image's dimensions:
//!
//! - [`blend`] averages the two images channel by channel
//! - [`checker`] alternates whole pixels from each image in a banded pattern
//!
//! The alignment rules shared by both live in [`Alignment`]. The operations
//! are pure and independent of each other.

mod alignment;
mod blend;
mod checker;

pub use alignment::Alignment;
pub use blend::blend;
pub use checker::{band_size, checker, takes_outer, CHECKER_BANDS};
