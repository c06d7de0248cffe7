//! Page chrome helpers: header scroll styling, smooth-anchor offsets,
//! the mobile menu toggle, and the shared scroll-lock registry.

/// Scroll offset at or above which the header takes its "scrolled" style
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Fixed header clearance for in-page anchor scrolling, in CSS pixels
pub const HEADER_CLEARANCE: f64 = 80.0;

/// Pure function of the current scroll offset; no hysteresis
pub fn header_is_scrolled(offset: f64) -> bool {
    offset >= HEADER_SCROLL_THRESHOLD
}

/// Scroll-container target for a named in-page anchor.
///
/// `element_top` is the target's top edge relative to the viewport,
/// `scroll_offset` the container's current scroll position. The target
/// ends up [`HEADER_CLEARANCE`] below the viewport top, clamped so we
/// never ask for a negative position. A bare `#` anchor scrolls to 0
/// and skips this math entirely.
pub fn anchor_scroll_top(element_top: f64, scroll_offset: f64) -> f64 {
    (element_top + scroll_offset - HEADER_CLEARANCE).max(0.0)
}

/// Overlays that suppress page scrolling while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollLockOwner {
    MobileMenu,
    Lightbox,
}

/// Owner-flagged scroll lock shared by the mobile menu and the lightbox.
///
/// Each overlay engages and releases its own flag, so closing one
/// overlay never unlocks the page while the other is still open. Both
/// being open at once is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    menu: bool,
    lightbox: bool,
}

impl ScrollLock {
    pub fn engage(&mut self, owner: ScrollLockOwner) {
        match owner {
            ScrollLockOwner::MobileMenu => self.menu = true,
            ScrollLockOwner::Lightbox => self.lightbox = true,
        }
    }

    /// Idempotent; releasing a flag that is not held is a no-op
    pub fn release(&mut self, owner: ScrollLockOwner) {
        match owner {
            ScrollLockOwner::MobileMenu => self.menu = false,
            ScrollLockOwner::Lightbox => self.lightbox = false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.menu || self.lightbox
    }

    pub fn is_held_by(&self, owner: ScrollLockOwner) -> bool {
        match owner {
            ScrollLockOwner::MobileMenu => self.menu,
            ScrollLockOwner::Lightbox => self.lightbox,
        }
    }
}

/// Mobile navigation overlay state.
///
/// One toggle drives the trigger's active style, the panel's active
/// style, and the `aria-expanded` mirror; clicking any link inside the
/// open menu runs the same toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip open state; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "mobile menu toggled");
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the trigger's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
