use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::{Pixel, Primitive};
use imageproc::definitions::Image;

use crate::error::ResizeError;

/// Compute the size of an image scaled to fit a bounding box.
///
/// The longer side of the source drives the scale: a landscape source takes the full
/// `max_width`, anything else takes the full `max_height`. The other side follows the
/// source aspect ratio with integer truncation and is never smaller than one pixel.
///
/// # Arguments
///
/// * `size` - Source size (width, height), both non-zero
/// * `max_size` - Bounding box (width, height)
///
/// # Examples
/// ```
/// use alphamask_kit::fit_dimensions;
///
/// assert_eq!(fit_dimensions((200, 100), (50, 50)), (50, 25));
/// assert_eq!(fit_dimensions((100, 100), (50, 50)), (50, 50));
/// ```
#[must_use]
pub fn fit_dimensions(size: (u32, u32), max_size: (u32, u32)) -> (u32, u32) {
    let (width, height) = size;
    let (max_width, max_height) = max_size;

    if width > height {
        (max_width, scale_side_impl(height, max_width, width))
    } else {
        (scale_side_impl(width, max_height, height), max_height)
    }
}

/// Like [`fit_dimensions`], but guarantees the result fits inside `max_size` on both
/// axes even when the box and the source have very different aspect ratios.
pub(crate) fn fit_within_dimensions(size: (u32, u32), max_size: (u32, u32)) -> (u32, u32) {
    let (width, height) = size;
    let (max_width, max_height) = max_size;
    let (fit_width, fit_height) = fit_dimensions(size, max_size);

    if fit_height > max_height {
        (scale_side_impl(width, max_height, height), max_height)
    } else if fit_width > max_width {
        (max_width, scale_side_impl(height, max_width, width))
    } else {
        (fit_width, fit_height)
    }
}

/// `side * numerator / denominator`, truncated and clamped to `[1, u32::MAX]`.
#[inline]
fn scale_side_impl(side: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(side) * u64::from(numerator) / u64::from(denominator.max(1));
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

/// Resize an image to fit within `max_width` x `max_height`, preserving aspect ratio.
///
/// Scaling uses nearest-neighbor sampling so pixel values stay deterministic.
///
/// # Errors
///
/// * `ResizeError::EmptyImage` - When the source has a zero dimension
/// * `ResizeError::InvalidTargetDimensions` - When either bound is zero
///
/// # Examples
/// ```
/// use alphamask_kit::{Image, resize_to_fit};
/// use image::Rgba;
///
/// let mask: Image<Rgba<u8>> = Image::from_pixel(100, 40, Rgba([0, 0, 0, 255]));
/// let fitted = resize_to_fit(&mask, 50, 50).unwrap();
/// assert_eq!(fitted.dimensions(), (50, 20));
/// ```
pub fn resize_to_fit<P>(
    image: &Image<P>,
    max_width: u32,
    max_height: u32,
) -> Result<Image<P>, ResizeError>
where
    P: Pixel + 'static,
    P::Subpixel: Primitive + 'static,
{
    resize_to_fit_impl(Cow::Borrowed(image), max_width, max_height)
}

fn resize_to_fit_impl<P>(
    image: Cow<'_, Image<P>>,
    max_width: u32,
    max_height: u32,
) -> Result<Image<P>, ResizeError>
where
    P: Pixel + 'static,
    P::Subpixel: Primitive + 'static,
{
    validate_resize_impl(&*image, max_width, max_height)?;
    let (width, height) = fit_dimensions(image.dimensions(), (max_width, max_height));
    Ok(resize_nearest_impl(image, width, height))
}

/// Resize so the result fits inside the box on both axes.
pub(crate) fn resize_within<P>(
    image: &Image<P>,
    max_width: u32,
    max_height: u32,
) -> Result<Image<P>, ResizeError>
where
    P: Pixel + 'static,
    P::Subpixel: Primitive + 'static,
{
    validate_resize_impl(image, max_width, max_height)?;
    let (width, height) = fit_within_dimensions(image.dimensions(), (max_width, max_height));
    Ok(resize_nearest_impl(Cow::Borrowed(image), width, height))
}

fn validate_resize_impl<P: Pixel>(
    image: &Image<P>,
    max_width: u32,
    max_height: u32,
) -> Result<(), ResizeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ResizeError::EmptyImage { width, height });
    }
    if max_width == 0 || max_height == 0 {
        return Err(ResizeError::InvalidTargetDimensions {
            width: max_width,
            height: max_height,
        });
    }
    Ok(())
}

/// An owned image that already has the target size is returned as is.
#[inline]
fn resize_nearest_impl<P>(image: Cow<'_, Image<P>>, width: u32, height: u32) -> Image<P>
where
    P: Pixel + 'static,
    P::Subpixel: Primitive + 'static,
{
    if image.dimensions() == (width, height) {
        return image.into_owned();
    }
    imageops::resize(&*image, width, height, FilterType::Nearest)
}

/// Extension trait providing aspect-preserving resize.
pub trait ResizeToFitExt<P: Pixel> {
    /// Resize the image to fit within the given bounds.
    ///
    /// This consumes the original image.
    ///
    /// # Errors
    ///
    /// See [`resize_to_fit`].
    ///
    /// # Examples
    /// ```no_run
    /// use alphamask_kit::{Image, ResizeToFitExt};
    /// use image::Rgba;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgba<u8>> = Image::new(640, 480);
    /// let thumbnail = image.resize_to_fit(64, 64)?;
    /// # Ok(())
    /// # }
    /// ```
    fn resize_to_fit(self, max_width: u32, max_height: u32) -> Result<Self, ResizeError>
    where
        Self: Sized;
}

impl<P> ResizeToFitExt<P> for Image<P>
where
    P: Pixel + 'static,
    P::Subpixel: Primitive + 'static,
{
    fn resize_to_fit(self, max_width: u32, max_height: u32) -> Result<Self, ResizeError> {
        resize_to_fit_impl(Cow::Owned(self), max_width, max_height)
    }
}
