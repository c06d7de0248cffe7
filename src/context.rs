//! Scroll-lock context for the Atelier app.
//!
//! The page body must stop scrolling while either the mobile menu or
//! the lightbox is open. Both overlays share one owner-flagged
//! [`ScrollLock`] provided at the app root, so closing one overlay
//! never unlocks the page while the other is still open.

use atelier_core::ScrollLock;
use dioxus::prelude::*;

/// Hook to access the shared scroll lock from context.
///
/// # Example
///
/// ```ignore
/// let mut scroll_lock = use_scroll_lock();
/// scroll_lock.write().engage(ScrollLockOwner::Lightbox);
/// ```
pub fn use_scroll_lock() -> Signal<ScrollLock> {
    use_context::<Signal<ScrollLock>>()
}
