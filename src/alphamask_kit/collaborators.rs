use std::path::{Path, PathBuf};

use image::{GenericImageView, RgbaImage};
use tracing::trace;

use crate::error::DecodeError;

/// Supplies decoded images by identifier.
///
/// Images come back as straight (non-premultiplied) 8-bit RGBA buffers owned by the
/// caller, ready to be passed to the compositor.
pub trait ImageSource {
    /// Identifier of a stored image.
    type Id: ?Sized;

    /// Decode the image identified by `id`.
    ///
    /// # Errors
    ///
    /// * `DecodeError::Image` - When the image cannot be read or decoded
    fn decode(&self, id: &Self::Id) -> Result<RgbaImage, DecodeError>;
}

/// [`ImageSource`] reading image files relative to a root directory.
///
/// The format is detected from the file contents and extension by the `image` crate.
#[derive(Debug, Clone)]
pub struct FileImageSource {
    root: PathBuf,
}

impl FileImageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageSource for FileImageSource {
    type Id = Path;

    fn decode(&self, id: &Path) -> Result<RgbaImage, DecodeError> {
        let path = self.root.join(id);
        trace!(path = %path.display(), "decoding image");
        Ok(image::open(&path)?.to_rgba8())
    }
}

/// A view that displays an image, possibly scaled.
///
/// Used to translate positions in the view (pointer or touch input) into pixels of
/// the image being shown; see [`map_surface_to_image`](crate::map_surface_to_image).
pub trait DisplaySurface {
    type Image: GenericImageView;

    /// The image currently shown, if any.
    fn current_image(&self) -> Option<&Self::Image>;

    /// Width of the view in display pixels.
    fn displayed_width(&self) -> u32;

    /// Height of the view in display pixels.
    fn displayed_height(&self) -> u32;
}
