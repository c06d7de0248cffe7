//! Property-based tests for the lightbox and page-chrome state machines.
//!
//! Uses proptest to verify the wraparound-navigation cycle properties
//! and the scroll-lock and reveal invariants.

use proptest::prelude::*;

use atelier_core::chrome::{ScrollLock, ScrollLockOwner};
use atelier_core::gallery::{GalleryImage, Lightbox};
use atelier_core::reveal::{RevealConfig, RevealMode, RevealTracker};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate a non-empty gallery of up to 12 images
fn gallery_strategy() -> impl Strategy<Value = Lightbox> {
    (1usize..=12).prop_map(|n| {
        Lightbox::new(
            (0..n)
                .map(|i| GalleryImage::new(format!("img-{i}.webp"), format!("Image {i}")))
                .collect(),
        )
    })
}

/// A gallery together with a valid start index
fn gallery_with_index() -> impl Strategy<Value = (Lightbox, usize)> {
    gallery_strategy().prop_flat_map(|lb| {
        let len = lb.len();
        (Just(lb), 0..len)
    })
}

/// Navigation steps in either direction
#[derive(Debug, Clone, Copy)]
enum NavOp {
    Next,
    Previous,
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![Just(NavOp::Next), Just(NavOp::Previous)],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Calling next() N times from any start index returns to that index
    #[test]
    fn next_cycles_back_to_start((mut lb, start) in gallery_with_index()) {
        lb.open(start).unwrap();
        for _ in 0..lb.len() {
            lb.next().unwrap();
        }
        prop_assert_eq!(lb.current_index(), start);
        prop_assert!(lb.is_open());
    }

    /// Calling previous() N times from any start index returns to that index
    #[test]
    fn previous_cycles_back_to_start((mut lb, start) in gallery_with_index()) {
        lb.open(start).unwrap();
        for _ in 0..lb.len() {
            lb.previous().unwrap();
        }
        prop_assert_eq!(lb.current_index(), start);
    }

    /// previous() undoes next() at every position
    #[test]
    fn previous_is_inverse_of_next((mut lb, start) in gallery_with_index()) {
        lb.open(start).unwrap();
        lb.next().unwrap();
        lb.previous().unwrap();
        prop_assert_eq!(lb.current_index(), start);
    }

    /// The current index stays in range under any navigation sequence
    #[test]
    fn index_always_in_range(
        (mut lb, start) in gallery_with_index(),
        ops in nav_ops_strategy(40),
    ) {
        lb.open(start).unwrap();
        for op in ops {
            match op {
                NavOp::Next => { lb.next().unwrap(); }
                NavOp::Previous => { lb.previous().unwrap(); }
            }
            prop_assert!(lb.current_index() < lb.len());
            prop_assert!(lb.is_open());
        }
    }

    /// Navigation controls are shown exactly for multi-image galleries
    #[test]
    fn navigation_visibility_follows_size((mut lb, start) in gallery_with_index()) {
        lb.open(start).unwrap();
        prop_assert_eq!(lb.shows_navigation(), lb.len() > 1);
    }

    /// close() is idempotent from any open state
    #[test]
    fn close_twice_equals_close_once((mut lb, start) in gallery_with_index()) {
        lb.open(start).unwrap();
        lb.close();
        let once = lb.clone();
        lb.close();
        prop_assert_eq!(lb, once);
    }

    /// Engaging and releasing one owner leaves the other owner's lock intact
    #[test]
    fn scroll_lock_never_clobbered(menu_open in any::<bool>(), lightbox_open in any::<bool>()) {
        let mut lock = ScrollLock::default();
        if menu_open {
            lock.engage(ScrollLockOwner::MobileMenu);
        }
        if lightbox_open {
            lock.engage(ScrollLockOwner::Lightbox);
        }

        lock.engage(ScrollLockOwner::Lightbox);
        lock.release(ScrollLockOwner::Lightbox);

        prop_assert_eq!(lock.is_locked(), menu_open);
        prop_assert_eq!(lock.is_held_by(ScrollLockOwner::MobileMenu), menu_open);
    }

    /// Revealed flags survive any later sequence of intersection ratios
    #[test]
    fn reveal_flag_is_monotonic(
        ratios in prop::collection::vec(0.0f64..=1.0, 1..30),
        mode in prop_oneof![Just(RevealMode::Persistent), Just(RevealMode::Once)],
    ) {
        let mut tracker = RevealTracker::new(RevealConfig::main_page(), mode);
        tracker.observe("el");

        let mut seen_reveal = false;
        for ratio in ratios {
            tracker.record("el", ratio);
            seen_reveal |= tracker.is_revealed("el");
            // Once revealed, the flag never drops
            prop_assert_eq!(tracker.is_revealed("el"), seen_reveal);
        }
    }
}
