//! Error types for every operation family in the crate.

use thiserror::Error;

/// Errors raised while compositing a mask onto an image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlphaMaskError {
    /// The image or the mask has a zero dimension.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("mask resize failed: {0}")]
    Resize(#[from] ResizeError),
}

/// Errors raised by the aspect-preserving resizer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResizeError {
    #[error("source image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("target box must be non-zero, got {width}x{height}")]
    InvalidTargetDimensions { width: u32, height: u32 },
}

/// Errors raised while sampling the dominant color of an image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleColorError {
    #[error("cannot sample a color from an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}

/// Errors raised when mapping view coordinates to image coordinates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapCoordinatesError {
    #[error("view dimensions must be non-zero, got {width}x{height}")]
    ZeroViewDimension { width: u32, height: u32 },

    #[error("coordinate mapping overflowed")]
    Overflow,

    #[error("the display surface is not showing an image")]
    NoImage,
}

/// Errors raised by an [`ImageSource`](crate::ImageSource).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}
