use image::GenericImageView;

use super::collaborators::DisplaySurface;
use crate::error::MapCoordinatesError;

/// Map a position in a displayed (scaled) view to the underlying image pixel.
///
/// Scales each axis linearly, `x = pos_x * image_width / view_width`, truncating
/// toward zero. A zero-sized view is rejected instead of dividing by zero.
///
/// # Arguments
///
/// * `position` - Position (x, y) in view coordinates
/// * `view_size` - Displayed size (width, height) of the view
/// * `image_size` - Size (width, height) of the underlying image
///
/// # Errors
///
/// * `MapCoordinatesError::ZeroViewDimension` - When the view has a zero dimension
/// * `MapCoordinatesError::Overflow` - When the scaled position does not fit in `i64`
///
/// # Examples
/// ```
/// use alphamask_kit::map_view_to_image;
///
/// // A 400x300 photo shown at 200x150
/// let pixel = map_view_to_image((50, 75), (200, 150), (400, 300)).unwrap();
/// assert_eq!(pixel, (100, 150));
/// ```
pub fn map_view_to_image(
    position: (i64, i64),
    view_size: (u32, u32),
    image_size: (u32, u32),
) -> Result<(i64, i64), MapCoordinatesError> {
    let (view_width, view_height) = view_size;
    let (image_width, image_height) = image_size;

    if view_width == 0 || view_height == 0 {
        return Err(MapCoordinatesError::ZeroViewDimension {
            width: view_width,
            height: view_height,
        });
    }

    let x = scale_axis_impl(position.0, image_width, view_width)?;
    let y = scale_axis_impl(position.1, image_height, view_height)?;
    Ok((x, y))
}

#[inline]
fn scale_axis_impl(
    position: i64,
    image_len: u32,
    view_len: u32,
) -> Result<i64, MapCoordinatesError> {
    position
        .checked_mul(i64::from(image_len))
        .map(|scaled| scaled / i64::from(view_len))
        .ok_or(MapCoordinatesError::Overflow)
}

/// Map a position on a [`DisplaySurface`] to a pixel of the image it shows.
///
/// # Errors
///
/// * `MapCoordinatesError::NoImage` - When the surface is not showing an image
/// * See [`map_view_to_image`] for the remaining cases
pub fn map_surface_to_image<S>(
    surface: &S,
    position: (i64, i64),
) -> Result<(i64, i64), MapCoordinatesError>
where
    S: DisplaySurface + ?Sized,
{
    let image_size = surface
        .current_image()
        .map(|image| image.dimensions())
        .ok_or(MapCoordinatesError::NoImage)?;
    let view_size = (surface.displayed_width(), surface.displayed_height());

    map_view_to_image(position, view_size, image_size)
}
