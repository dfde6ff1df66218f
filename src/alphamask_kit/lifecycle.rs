use image::Pixel;
use imageproc::definitions::Image;
use tracing::trace;

/// Release the image held in `slot`, freeing its pixel buffer immediately.
///
/// Idempotent: an empty slot, whether never filled or already released, is left
/// as is.
///
/// # Examples
/// ```
/// use alphamask_kit::{Image, release};
/// use image::Rgba;
///
/// let mut preview: Option<Image<Rgba<u8>>> = Some(Image::new(64, 64));
/// release(&mut preview);
/// release(&mut preview);
/// assert!(preview.is_none());
/// ```
pub fn release<P: Pixel>(slot: &mut Option<Image<P>>) {
    if let Some(image) = slot.take() {
        trace!(dimensions = ?image.dimensions(), "releasing image buffer");
        drop(image);
    }
}
