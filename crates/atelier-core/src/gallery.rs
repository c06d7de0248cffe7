//! Lightbox gallery state machine.
//!
//! An ordered, fixed-at-load collection of images with a current index,
//! open/closed visibility, and circular forward/backward navigation.
//! Captions are associated with images up front, at content definition
//! time, rather than re-derived on every open.

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};

/// A single image in a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image source URL or asset path
    pub src: String,
    /// Alternative text, also the caption fallback
    pub alt: String,
    /// Optional caption shown below the image in the lightbox
    pub caption: Option<String>,
}

impl GalleryImage {
    /// Create an image with no caption
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            caption: None,
        }
    }

    /// Create an image with a caption
    pub fn with_caption(
        src: impl Into<String>,
        alt: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            caption: Some(caption.into()),
        }
    }

    /// Caption text for the lightbox caption slot.
    ///
    /// Falls back to the alt text when no caption was associated.
    pub fn display_caption(&self) -> &str {
        self.caption.as_deref().unwrap_or(&self.alt)
    }
}

/// Modal image viewer state.
///
/// Invariant: `current` is always in `[0, len)` while the lightbox is
/// open. While closed the index keeps its last value but carries no
/// meaning. Navigation wraps at both ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    images: Vec<GalleryImage>,
    current: usize,
    open: bool,
}

impl Lightbox {
    /// Create a closed lightbox over a fixed image collection
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            current: 0,
            open: false,
        }
    }

    /// Number of images in the collection
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the collection holds no images
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether the viewer is currently open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the currently shown image
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The full image collection, in display order
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// The image currently shown, if the viewer is open
    pub fn current(&self) -> Option<&GalleryImage> {
        if self.open {
            self.images.get(self.current)
        } else {
            None
        }
    }

    /// Open the viewer at `index`.
    ///
    /// Errors on an empty collection or an out-of-range index; neither
    /// can happen from well-formed gallery markup, so callers log and
    /// ignore rather than surface these.
    pub fn open(&mut self, index: usize) -> GalleryResult<&GalleryImage> {
        if self.images.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        if index >= self.images.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }

        self.current = index;
        self.open = true;
        tracing::debug!(index, "lightbox opened");
        Ok(&self.images[index])
    }

    /// Close the viewer. Idempotent: closing a closed lightbox is a no-op.
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!(index = self.current, "lightbox closed");
        }
        self.open = false;
    }

    /// Advance to the next image, wrapping from last back to first
    pub fn next(&mut self) -> GalleryResult<&GalleryImage> {
        if self.images.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        let index = (self.current + 1) % self.images.len();
        self.open(index)
    }

    /// Step back to the previous image, wrapping from first to last
    pub fn previous(&mut self) -> GalleryResult<&GalleryImage> {
        if self.images.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        let len = self.images.len();
        let index = (self.current + len - 1) % len;
        self.open(index)
    }

    /// Whether prev/next controls should be shown.
    ///
    /// Single-image galleries open normally but suppress navigation.
    pub fn shows_navigation(&self) -> bool {
        self.open && self.images.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Lightbox {
        Lightbox::new(
            (0..n)
                .map(|i| GalleryImage::new(format!("img-{i}.webp"), format!("Image {i}")))
                .collect(),
        )
    }

    #[test]
    fn test_open_sets_index_and_state() {
        let mut lb = gallery(3);
        assert!(!lb.is_open());

        let img = lb.open(1).unwrap();
        assert_eq!(img.src, "img-1.webp");
        assert!(lb.is_open());
        assert_eq!(lb.current_index(), 1);
        assert_eq!(lb.current().unwrap().alt, "Image 1");
    }

    #[test]
    fn test_open_empty_gallery_is_an_error() {
        let mut lb = gallery(0);
        assert_eq!(lb.open(0), Err(GalleryError::EmptyGallery));
        assert_eq!(lb.next().unwrap_err(), GalleryError::EmptyGallery);
        assert_eq!(lb.previous().unwrap_err(), GalleryError::EmptyGallery);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_open_out_of_range_is_an_error() {
        let mut lb = gallery(2);
        assert_eq!(
            lb.open(2),
            Err(GalleryError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(!lb.is_open());
    }

    #[test]
    fn test_navigation_wraps_both_ends() {
        let mut lb = gallery(3);
        lb.open(2).unwrap();

        lb.next().unwrap();
        assert_eq!(lb.current_index(), 0);

        lb.previous().unwrap();
        assert_eq!(lb.current_index(), 2);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut lb = gallery(2);
        lb.open(0).unwrap();

        lb.close();
        let after_one = lb.clone();
        lb.close();
        assert_eq!(lb, after_one);
        assert!(!lb.is_open());
        assert!(lb.current().is_none());
    }

    #[test]
    fn test_single_image_gallery_hides_navigation() {
        let mut lb = gallery(1);
        lb.open(0).unwrap();
        assert!(lb.is_open());
        assert!(!lb.shows_navigation());

        let mut multi = gallery(2);
        multi.open(0).unwrap();
        assert!(multi.shows_navigation());
    }

    #[test]
    fn test_navigation_hidden_while_closed() {
        let lb = gallery(5);
        assert!(!lb.shows_navigation());
    }

    #[test]
    fn test_caption_falls_back_to_alt() {
        let with = GalleryImage::with_caption("a.webp", "Alt text", "A caption");
        assert_eq!(with.display_caption(), "A caption");

        let without = GalleryImage::new("b.webp", "Only alt");
        assert_eq!(without.display_caption(), "Only alt");
    }
}
