//! # alphamask-kit
//!
//! Offset-aware alpha mask compositing for RGBA images, plus a few small raster helpers.
//!
//! This crate provides:
//!
//! - **Mask Application**: Cuts a mask-sized region out of an image at any offset,
//!   including offsets that push the mask partly or entirely outside the image, and
//!   applies the mask's alpha ("destination-in")
//! - **Overlap Geometry**: The clipping math behind mask application, usable on its own
//! - **Resize To Fit**: Aspect-preserving nearest-neighbor resize into a bounding box
//! - **Dominant Color**: Area-average downsampling to a single representative color
//! - **Coordinate Mapping**: Translates positions in a scaled view into image pixels
//!
//! ## Example Usage
//!
//! ```no_run
//! use alphamask_kit::{
//!     ApplyMaskExt, DominantColorExt, Offset, ResizeToFitExt, map_view_to_image,
//! };
//! use image::{Rgba, RgbaImage};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let photo = RgbaImage::from_pixel(640, 480, Rgba([30, 120, 200, 255]));
//! let mask = RgbaImage::from_pixel(128, 128, Rgba([0, 0, 0, 255]));
//!
//! // Mask placed at a pointer position, hanging off the left edge
//! let cut = (&photo).apply_mask(mask, Offset::new(-40, 100))?;
//!
//! // Auxiliary helpers
//! let thumbnail = photo.resize_to_fit(64, 64)?;
//! let accent = thumbnail.dominant_color();
//! let pixel = map_view_to_image((160, 120), (320, 240), (640, 480))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde`: Enables serialization support for geometry types (optional)

mod alphamask_kit;
mod error;
mod utils;

#[cfg(test)]
mod test_utils;

pub use alphamask_kit::apply_alpha_mask::{ApplyMaskExt, apply_mask};
pub use alphamask_kit::collaborators::{DisplaySurface, FileImageSource, ImageSource};
pub use alphamask_kit::coordinates::{map_surface_to_image, map_view_to_image};
pub use alphamask_kit::dominant_color::{
    DominantColorExt, FALLBACK_COLOR, dominant_color, try_dominant_color,
};
pub use alphamask_kit::geometry::{MaskGeometry, Offset, Rect, resolve_geometry};
pub use alphamask_kit::lifecycle::release;
pub use alphamask_kit::resize_to_fit::{ResizeToFitExt, fit_dimensions, resize_to_fit};
pub use error::{
    AlphaMaskError, DecodeError, MapCoordinatesError, ResizeError, SampleColorError,
};

// Re-export imageproc::definitions::Image for convenience
pub use imageproc::definitions::Image;
