//! Error types for Atelier page behavior

use thiserror::Error;

/// Main error type for gallery operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GalleryError {
    /// The gallery has no images; open/next/previous are meaningless
    #[error("Gallery is empty")]
    EmptyGallery,

    /// Requested index is outside the image collection
    #[error("Image index {index} out of range (gallery has {len} images)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::EmptyGallery;
        assert_eq!(format!("{}", err), "Gallery is empty");

        let err = GalleryError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(
            format!("{}", err),
            "Image index 4 out of range (gallery has 3 images)"
        );
    }
}
