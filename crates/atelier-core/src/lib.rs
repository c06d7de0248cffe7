//! Atelier Core Library
//!
//! Page-behavior state machines for the Atelier portfolio app: the
//! lightbox gallery, scroll-reveal tracking, contact form validation,
//! page chrome (header styling, anchors, scroll lock), and the
//! fixed-timezone clock. Everything here is pure state; the desktop
//! crate wires it to input events and rendering.
//!
//! ## Quick Start
//!
//! ```
//! use atelier_core::gallery::{GalleryImage, Lightbox};
//!
//! let mut lightbox = Lightbox::new(vec![
//!     GalleryImage::with_caption("studio.webp", "The studio", "Morning light"),
//!     GalleryImage::new("detail.webp", "Detail shot"),
//! ]);
//!
//! lightbox.open(0)?;
//! lightbox.next()?;
//! assert_eq!(lightbox.current().unwrap().display_caption(), "Detail shot");
//! lightbox.close();
//! # Ok::<(), atelier_core::GalleryError>(())
//! ```

pub mod chrome;
pub mod clock;
pub mod content;
pub mod error;
pub mod form;
pub mod gallery;
pub mod reveal;

// Re-exports
pub use chrome::{MobileMenu, ScrollLock, ScrollLockOwner};
pub use content::{CaseStudy, Project};
pub use error::{GalleryError, GalleryResult};
pub use form::{ContactForm, FieldErrors, FormField, SubmissionCounter};
pub use gallery::{GalleryImage, Lightbox};
pub use reveal::{RevealConfig, RevealMode, RevealTracker};
