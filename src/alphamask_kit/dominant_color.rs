use image::{Pixel, Rgba};
use imageproc::definitions::Image;
use tracing::debug;

use crate::error::SampleColorError;

/// Color returned when an image cannot be sampled.
pub const FALLBACK_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Approximate the dominant color of an image.
///
/// The image is downsampled to a single pixel with an area average. Color channels
/// are weighted by alpha, so transparent pixels do not tint the result; alpha is the
/// plain mean. Means are rounded, so a uniform image yields exactly its own color.
/// A fully transparent image yields transparent black.
///
/// Never fails. An image that cannot be sampled yields opaque black.
///
/// # Examples
/// ```
/// use alphamask_kit::{Image, dominant_color};
/// use image::Rgba;
///
/// let red: Image<Rgba<u8>> = Image::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
/// assert_eq!(dominant_color(&red), Rgba([255, 0, 0, 255]));
///
/// let empty: Image<Rgba<u8>> = Image::new(0, 0);
/// assert_eq!(dominant_color(&empty), Rgba([0, 0, 0, 255]));
/// ```
#[must_use]
pub fn dominant_color<P>(image: &Image<P>) -> Rgba<u8>
where
    P: Pixel<Subpixel = u8>,
{
    try_dominant_color(image).unwrap_or_else(|err| {
        debug!(%err, "dominant color sampling failed, using fallback");
        FALLBACK_COLOR
    })
}

/// Fallible form of [`dominant_color`].
///
/// # Errors
///
/// * `SampleColorError::EmptyImage` - When the image has a zero dimension
pub fn try_dominant_color<P>(image: &Image<P>) -> Result<Rgba<u8>, SampleColorError>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(SampleColorError::EmptyImage { width, height });
    }

    let area = u64::from(width) * u64::from(height);
    let ([red, green, blue], alpha_sum) = image.pixels().fold(
        ([0u64; 3], 0u64),
        |(mut color_sums, alpha_sum), pixel| {
            let Rgba([r, g, b, a]) = pixel.to_rgba();
            let weight = u64::from(a);
            for (sum, value) in color_sums.iter_mut().zip([r, g, b]) {
                *sum += u64::from(value) * weight;
            }
            (color_sums, alpha_sum + weight)
        },
    );

    // Weighted means of values <= 255 stay <= 255
    let weighted = |sum: u64| match alpha_sum {
        0 => 0,
        total => ((sum + total / 2) / total) as u8,
    };
    let alpha = ((alpha_sum + area / 2) / area) as u8;

    Ok(Rgba([weighted(red), weighted(green), weighted(blue), alpha]))
}

/// Extension trait for sampling the dominant color of an image.
pub trait DominantColorExt {
    /// Approximate the dominant color, falling back to opaque black.
    ///
    /// This is a helper method that doesn't consume self.
    ///
    /// # Examples
    /// ```no_run
    /// use alphamask_kit::{DominantColorExt, Image};
    /// use image::Rgb;
    ///
    /// let image: Image<Rgb<u8>> = Image::from_pixel(4, 4, Rgb([10, 20, 30]));
    /// let color = image.dominant_color();
    /// ```
    fn dominant_color(&self) -> Rgba<u8>;
}

impl<P> DominantColorExt for Image<P>
where
    P: Pixel<Subpixel = u8>,
{
    fn dominant_color(&self) -> Rgba<u8> {
        dominant_color(self)
    }
}
