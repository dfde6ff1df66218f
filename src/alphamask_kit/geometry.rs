/// Signed placement of a mask's top-left corner relative to the image's top-left corner.
///
/// Offsets may be negative or push the mask past the far edge of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    /// Horizontal offset in pixels
    pub x: i64,
    /// Vertical offset in pixels
    pub y: i64,
}

impl Offset {
    /// Create a new offset.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Offset {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle with a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` when the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `(width, height)`.
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Overlap between an image and a mask placed at an [`Offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskGeometry {
    /// Region covered by both image and mask, in image coordinates
    pub overlap: Rect,
    /// The same region expressed in mask-canvas coordinates
    pub placement: Rect,
    /// Whether the mask lies entirely inside the image
    pub unclipped: bool,
}

impl MaskGeometry {
    /// Returns `true` when no image pixel falls under the mask.
    pub const fn is_empty(&self) -> bool {
        self.overlap.is_empty()
    }

    /// Returns `true` when the mask lies entirely inside the image.
    pub const fn is_unclipped(&self) -> bool {
        self.unclipped
    }
}

/// Visible span of the mask along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AxisSpan {
    source_start: i64,
    canvas_start: i64,
    length: i64,
}

/// Resolve the overlap between an image and a mask placed at `offset`.
///
/// The mask is normally shrunk to fit the image before this is called, but the
/// result never reaches outside either the image or the mask canvas regardless.
/// A placement with no visible pixels yields empty rectangles at the origin.
///
/// # Arguments
///
/// * `image_size` - Image size (width, height)
/// * `mask_size` - Mask size (width, height)
/// * `offset` - Position of the mask's top-left corner in image coordinates
///
/// # Examples
/// ```
/// use alphamask_kit::{Offset, Rect, resolve_geometry};
///
/// let geometry = resolve_geometry((100, 100), (50, 50), Offset::new(-10, -10));
/// assert_eq!(geometry.overlap, Rect::new(0, 0, 40, 40));
/// assert_eq!(geometry.placement, Rect::new(10, 10, 40, 40));
/// assert!(!geometry.is_unclipped());
/// ```
#[must_use]
pub fn resolve_geometry(
    image_size: (u32, u32),
    mask_size: (u32, u32),
    offset: Offset,
) -> MaskGeometry {
    let (image_width, image_height) = image_size;
    let (mask_width, mask_height) = mask_size;

    let unclipped = is_inside_impl(offset.x, mask_width, image_width)
        && is_inside_impl(offset.y, mask_height, image_height);

    if unclipped {
        // Both offsets are within [0, image_len - mask_len] here
        let overlap = Rect::new(offset.x as u32, offset.y as u32, mask_width, mask_height);
        return MaskGeometry {
            overlap,
            placement: Rect::new(0, 0, mask_width, mask_height),
            unclipped,
        };
    }

    let horizontal = clip_axis_impl(offset.x, mask_width, image_width);
    let vertical = clip_axis_impl(offset.y, mask_height, image_height);

    if horizontal.length == 0 || vertical.length == 0 {
        return MaskGeometry {
            overlap: Rect::default(),
            placement: Rect::default(),
            unclipped,
        };
    }

    // Non-empty spans are bounded by the u32 image and mask sizes
    let width = horizontal.length as u32;
    let height = vertical.length as u32;
    MaskGeometry {
        overlap: Rect::new(
            horizontal.source_start as u32,
            vertical.source_start as u32,
            width,
            height,
        ),
        placement: Rect::new(
            horizontal.canvas_start as u32,
            vertical.canvas_start as u32,
            width,
            height,
        ),
        unclipped,
    }
}

#[inline]
fn is_inside_impl(offset: i64, mask_len: u32, image_len: u32) -> bool {
    offset >= 0 && offset.saturating_add(i64::from(mask_len)) <= i64::from(image_len)
}

/// Intersects `[offset, offset + mask_len)` with `[0, image_len)`.
fn clip_axis_impl(offset: i64, mask_len: u32, image_len: u32) -> AxisSpan {
    let source_start = offset.max(0);
    let source_end = offset
        .saturating_add(i64::from(mask_len))
        .min(i64::from(image_len));
    let length = source_end.saturating_sub(source_start).max(0);
    let canvas_start = if offset < 0 { offset.saturating_neg() } else { 0 };

    AxisSpan {
        source_start,
        canvas_start,
        length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_new_sets_corner_and_size() {
        let rect = Rect::new(3, 4, 10, 0);

        assert_eq!((rect.x, rect.y), (3, 4));
        assert_eq!(rect.size(), (10, 0));
        assert!(rect.is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn resolve_geometry_with_mask_inside_returns_full_mask_rect() {
        let geometry = resolve_geometry((100, 100), (50, 50), Offset::new(0, 0));

        assert!(geometry.is_unclipped());
        assert_eq!(geometry.overlap, Rect::new(0, 0, 50, 50));
        assert_eq!(geometry.placement, Rect::new(0, 0, 50, 50));

        let geometry = resolve_geometry((100, 100), (50, 50), Offset::new(50, 25));
        assert!(geometry.is_unclipped());
        assert_eq!(geometry.overlap, Rect::new(50, 25, 50, 50));
        assert_eq!(geometry.placement, Rect::new(0, 0, 50, 50));
    }

    #[test]
    fn resolve_geometry_with_negative_offset_places_piece_inside_canvas() {
        let geometry = resolve_geometry((100, 100), (50, 50), Offset::new(-10, -10));

        assert!(!geometry.is_unclipped());
        assert_eq!(geometry.overlap, Rect::new(0, 0, 40, 40));
        assert_eq!(geometry.placement, Rect::new(10, 10, 40, 40));
    }

    #[test]
    fn resolve_geometry_with_far_edge_overflow_clips_to_image() {
        let geometry = resolve_geometry((100, 100), (50, 50), Offset::new(90, 90));

        assert!(!geometry.is_unclipped());
        assert_eq!(geometry.overlap, Rect::new(90, 90, 10, 10));
        assert_eq!(geometry.placement, Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn resolve_geometry_clips_each_axis_independently() {
        let geometry = resolve_geometry((100, 80), (30, 20), Offset::new(-5, 70));

        assert_eq!(geometry.overlap, Rect::new(0, 70, 25, 10));
        assert_eq!(geometry.placement, Rect::new(5, 0, 25, 10));
    }

    #[test]
    fn resolve_geometry_with_mask_outside_returns_empty() {
        let offsets = [
            Offset::new(-50, 0),
            Offset::new(-80, -80),
            Offset::new(100, 0),
            Offset::new(0, 150),
            Offset::new(i64::MAX, i64::MIN),
            Offset::new(i64::MIN, 0),
        ];

        for offset in offsets {
            let geometry = resolve_geometry((100, 100), (50, 50), offset);
            assert!(geometry.is_empty(), "offset {offset:?}");
            assert!(!geometry.is_unclipped());
            assert_eq!(geometry.overlap, Rect::default());
            assert_eq!(geometry.placement, Rect::default());
        }
    }

    #[test]
    fn resolve_geometry_with_mask_touching_edge_is_still_unclipped() {
        let geometry = resolve_geometry((100, 100), (50, 50), Offset::new(50, 50));

        assert!(geometry.is_unclipped());
        assert_eq!(geometry.overlap, Rect::new(50, 50, 50, 50));
    }

    #[test]
    fn resolve_geometry_with_oversized_mask_never_leaves_image() {
        // Not produced by the compositor, which fits the mask first
        let geometry = resolve_geometry((100, 100), (200, 50), Offset::new(-10, 0));

        assert_eq!(geometry.overlap, Rect::new(0, 0, 100, 50));
        assert_eq!(geometry.placement, Rect::new(10, 0, 100, 50));
    }

    #[test]
    fn resolve_geometry_overlap_and_placement_stay_in_bounds() {
        let (image_w, image_h) = (37u32, 23u32);
        let (mask_w, mask_h) = (11u32, 17u32);

        for x in -20..50 {
            for y in -20..40 {
                let geometry = resolve_geometry((image_w, image_h), (mask_w, mask_h), Offset::new(x, y));
                let Rect {
                    x: sx,
                    y: sy,
                    width,
                    height,
                } = geometry.overlap;
                assert!(sx + width <= image_w && sy + height <= image_h);

                let placement = geometry.placement;
                assert_eq!(placement.size(), (width, height));
                assert!(placement.x + width <= mask_w && placement.y + height <= mask_h);
            }
        }
    }
}
