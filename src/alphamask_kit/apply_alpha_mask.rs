use std::borrow::Cow;

use image::{GenericImageView, Rgba, RgbaImage};
use itertools::{Itertools, iproduct};
use tracing::{debug, trace};

use super::geometry::{MaskGeometry, Offset, resolve_geometry};
use super::resize_to_fit::resize_within;
use crate::error::AlphaMaskError;
use crate::utils::{multiply_alpha, validate_non_empty_image};

/// Trait providing functionality to apply an alpha mask at an offset.
///
/// The result is the part of the image under the mask, cut out to the mask's size,
/// with the mask's alpha channel applied ("destination-in" compositing). Mask color
/// channels are ignored.
///
/// The trait is implemented for owned images, which are consumed, and for borrowed
/// images, which are left untouched while only the region under the mask is copied.
pub trait ApplyMaskExt {
    /// Applies `mask` with its top-left corner at `offset` in image coordinates.
    ///
    /// The mask is consumed. When it is larger than the image it is first shrunk,
    /// preserving its aspect ratio, to fit inside the image. Offsets may place the
    /// mask partially or entirely outside the image; uncovered pixels come out
    /// fully transparent.
    ///
    /// # Arguments
    ///
    /// * `mask` - The alpha mask; only its alpha channel is used
    /// * `offset` - Position of the mask's top-left corner
    ///
    /// # Returns
    ///
    /// RGBA image with the dimensions of the (possibly shrunk) mask
    ///
    /// # Errors
    ///
    /// * `AlphaMaskError::EmptyImage` - When the image or the mask has a zero dimension
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use alphamask_kit::{ApplyMaskExt, Offset};
    /// use image::{Rgba, RgbaImage};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let photo = RgbaImage::from_pixel(100, 100, Rgba([200, 10, 10, 255]));
    /// let mask = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255]));
    ///
    /// let cut = photo.apply_mask(mask, Offset::new(-10, -10))?;
    /// assert_eq!(cut.dimensions(), (50, 50));
    /// # Ok(())
    /// # }
    /// ```
    fn apply_mask(self, mask: RgbaImage, offset: Offset) -> Result<RgbaImage, AlphaMaskError>;
}

impl ApplyMaskExt for RgbaImage {
    fn apply_mask(self, mask: RgbaImage, offset: Offset) -> Result<RgbaImage, AlphaMaskError> {
        apply_mask(Cow::Owned(self), mask, offset)
    }
}

impl ApplyMaskExt for &RgbaImage {
    fn apply_mask(self, mask: RgbaImage, offset: Offset) -> Result<RgbaImage, AlphaMaskError> {
        apply_mask(Cow::Borrowed(self), mask, offset)
    }
}

/// Applies `mask` to `image` with the mask's top-left corner at `offset`.
///
/// Function form of [`ApplyMaskExt::apply_mask`]. An owned image is consumed and
/// released before this returns; a borrowed one is only read.
///
/// # Errors
///
/// * `AlphaMaskError::EmptyImage` - When the image or the mask has a zero dimension
///
/// # Examples
/// ```
/// use std::borrow::Cow;
///
/// use alphamask_kit::{Offset, apply_mask};
/// use image::{Rgba, RgbaImage};
///
/// let photo = RgbaImage::from_pixel(100, 100, Rgba([200, 10, 10, 255]));
/// let mask = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255]));
///
/// let cut = apply_mask(Cow::Borrowed(&photo), mask, Offset::new(90, 90)).unwrap();
/// assert_eq!(cut.get_pixel(5, 5), &Rgba([200, 10, 10, 255]));
/// assert_eq!(cut.get_pixel(20, 20)[3], 0);
/// ```
pub fn apply_mask(
    image: Cow<'_, RgbaImage>,
    mask: RgbaImage,
    offset: Offset,
) -> Result<RgbaImage, AlphaMaskError> {
    validate_inputs_impl(&image, &mask)?;
    let mask = fit_mask_impl(mask, image.dimensions())?;
    Ok(composite_impl(image, mask, offset))
}

fn validate_inputs_impl(image: &RgbaImage, mask: &RgbaImage) -> Result<(), AlphaMaskError> {
    for (width, height) in [image.dimensions(), mask.dimensions()] {
        validate_non_empty_image(width, height, "ApplyMask")
            .map_err(|_| AlphaMaskError::EmptyImage { width, height })?;
    }
    Ok(())
}

/// Shrinks the mask so it fits inside the image on both axes.
fn fit_mask_impl(mask: RgbaImage, image_size: (u32, u32)) -> Result<RgbaImage, AlphaMaskError> {
    let (image_width, image_height) = image_size;
    let (mask_width, mask_height) = mask.dimensions();

    if mask_width <= image_width && mask_height <= image_height {
        return Ok(mask);
    }

    let fitted = resize_within(&mask, image_width, image_height)?;
    debug!(
        from = ?(mask_width, mask_height),
        to = ?fitted.dimensions(),
        "mask larger than image, resized to fit"
    );
    Ok(fitted)
}

/// Cuts the masked region out of `image`. Expects a mask no larger than the image.
fn composite_impl(
    image: Cow<'_, RgbaImage>,
    mask: RgbaImage,
    offset: Offset,
) -> RgbaImage {
    let geometry = resolve_geometry(image.dimensions(), mask.dimensions(), offset);

    let mut canvas = if geometry.is_unclipped() {
        let region = geometry.overlap;
        image
            .view(region.x, region.y, region.width, region.height)
            .to_image()
    } else {
        debug!(
            ?offset,
            image = ?image.dimensions(),
            mask = ?mask.dimensions(),
            "mask overlaps the image edge, compositing clipped region"
        );
        clipped_canvas_impl(&image, mask.dimensions(), &geometry)
    };
    drop(image);

    apply_destination_in_impl(&mut canvas, &mask);
    canvas
}

/// Builds a transparent mask-sized canvas holding the visible part of the image.
fn clipped_canvas_impl(
    image: &RgbaImage,
    mask_size: (u32, u32),
    geometry: &MaskGeometry,
) -> RgbaImage {
    let (mask_width, mask_height) = mask_size;
    let mut canvas = RgbaImage::from_pixel(mask_width, mask_height, Rgba([0, 0, 0, 0]));

    if geometry.is_empty() {
        trace!("mask does not overlap the image, result is fully transparent");
        return canvas;
    }

    let source = geometry.overlap;
    let placement = geometry.placement;
    iproduct!(0..source.height, 0..source.width).for_each(|(row, column)| {
        let pixel = *image.get_pixel(source.x + column, source.y + row);
        canvas.put_pixel(placement.x + column, placement.y + row, pixel);
    });

    canvas
}

/// Destination-in: keeps the canvas colors and scales canvas alpha by mask alpha.
///
/// The canvas is always built at the mask's size.
fn apply_destination_in_impl(canvas: &mut RgbaImage, mask: &RgbaImage) {
    canvas
        .pixels_mut()
        .zip_eq(mask.pixels())
        .for_each(|(pixel, Rgba([_, _, _, coverage]))| {
            let Rgba([red, green, blue, alpha]) = *pixel;
            *pixel = Rgba([red, green, blue, multiply_alpha(alpha, *coverage)]);
        });
}
