//! Shared image builders for unit tests.

use image::Rgba;
use imageproc::definitions::Image;

pub const OPAQUE_RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Colors of the four quadrants produced by [`create_quadrant_rgba_image`],
/// in top-left, top-right, bottom-left, bottom-right order.
pub const QUADRANT_COLORS: [Rgba<u8>; 4] = [
    Rgba([255, 0, 0, 255]),
    Rgba([0, 255, 0, 255]),
    Rgba([0, 0, 255, 255]),
    Rgba([255, 255, 0, 255]),
];

/// Square image split into four solid quadrants.
pub fn create_quadrant_rgba_image(size: u32) -> Image<Rgba<u8>> {
    let half = size / 2;
    Image::from_fn(size, size, |x, y| {
        let index = usize::from(x >= half) + 2 * usize::from(y >= half);
        QUADRANT_COLORS[index]
    })
}

/// Opaque image whose red and green channels encode the pixel position.
///
/// Lets a test recover where a composited pixel was read from.
pub fn create_coordinate_rgba_image(width: u32, height: u32) -> Image<Rgba<u8>> {
    Image::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
}

/// Fully opaque mask of the given size.
pub fn create_opaque_mask(width: u32, height: u32) -> Image<Rgba<u8>> {
    Image::from_pixel(width, height, Rgba([0, 0, 0, 255]))
}

/// Mask whose alpha follows a gradient so every pixel has a distinct coverage.
pub fn create_gradient_mask(width: u32, height: u32) -> Image<Rgba<u8>> {
    Image::from_fn(width, height, |x, y| {
        Rgba([17, 34, 51, ((x * 7 + y * 13) % 256) as u8])
    })
}

/// Returns `true` when every pixel of the image is fully transparent.
pub fn is_fully_transparent(image: &Image<Rgba<u8>>) -> bool {
    image.pixels().all(|pixel| pixel[3] == 0)
}
