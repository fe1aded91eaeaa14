//! Icon slicing for navslice.
//!
//! Cuts the navigation sprite sheet into fixed-size PNG icons:
//!
//! - [`IconSlicer`] - runs the whole probe, decode, crop, resize, save pipeline
//! - [`probe_codecs`] - checks the PNG codec was compiled in
//! - [`PixelRect`] - a normalized box mapped onto a concrete image size

mod error;
mod ops;
mod slicer;

pub use error::SliceError;
pub use ops::*;
pub use slicer::{slice, IconSlicer};
