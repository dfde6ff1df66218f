//! Internal utility functions for alphamask-kit.
//!
//! This module contains common functionality used across different image operations.

/// Multiplies two 8-bit alpha values, rounding to the nearest representable value.
///
/// # Arguments
///
/// * `alpha` - The alpha value being attenuated
/// * `coverage` - The attenuating alpha value
///
/// # Returns
///
/// `round(alpha * coverage / 255)`, which never exceeds `min(alpha, coverage)`
#[inline]
pub const fn multiply_alpha(alpha: u8, coverage: u8) -> u8 {
    let product = alpha as u32 * coverage as u32;
    // Exact rounded division by 255 without a divide
    ((product + 128 + ((product + 128) >> 8)) >> 8) as u8
}

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
/// * `context` - A description of the context for error messages
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise an error
pub fn validate_non_empty_image(width: u32, height: u32, context: &str) -> Result<(), String> {
    if width == 0 || height == 0 {
        Err(format!("{context}: Image dimensions must be non-zero"))
    } else {
        Ok(())
    }
}
