//! Image operations used by the slicer.

mod capability;
mod crop;
mod image_utils;
mod resize;

pub use capability::*;
pub use crop::*;
pub use image_utils::*;
pub use resize::*;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
