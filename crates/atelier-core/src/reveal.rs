//! Scroll-reveal tracking.
//!
//! Elements tagged for reveal get a monotonic "revealed" flag the first
//! time enough of them intersects the viewport. Two subscription modes
//! exist: the main page keeps observing revealed elements, case-study
//! pages drop the subscription after first reveal. Either way a revealed
//! element is never unrevealed.

use std::collections::{HashMap, HashSet};

/// How the effective viewport box is adjusted before the visibility
/// check. Negative values shrink the box, so elements reveal slightly
/// after their edge enters the real viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMargin {
    /// Bottom margin in CSS pixels
    Px(i32),
    /// Bottom margin as a percentage of viewport height
    Percent(i32),
}

/// Visibility threshold and margin for a page's reveal set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    pub margin: RevealMargin,
}

impl RevealConfig {
    /// Main page profile: 10% visible, 50px bottom inset
    pub fn main_page() -> Self {
        Self {
            threshold: 0.1,
            margin: RevealMargin::Px(-50),
        }
    }

    /// Case-study page profile: 10% visible, 10% bottom inset
    pub fn case_page() -> Self {
        Self {
            threshold: 0.1,
            margin: RevealMargin::Percent(-10),
        }
    }
}

/// Whether an element stays observed after its first reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Keep observing; effectively one-shot anyway since the flag is monotonic
    Persistent,
    /// Unsubscribe the element immediately after first reveal
    Once,
}

/// Per-element reveal state for one page.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    config: RevealConfig,
    mode: RevealMode,
    observed: HashSet<String>,
    revealed: HashMap<String, bool>,
}

impl RevealTracker {
    pub fn new(config: RevealConfig, mode: RevealMode) -> Self {
        Self {
            config,
            mode,
            observed: HashSet::new(),
            revealed: HashMap::new(),
        }
    }

    pub fn config(&self) -> RevealConfig {
        self.config
    }

    /// Register an element for observation. Re-registering an already
    /// revealed element does not clear its flag.
    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.revealed.get(&id).copied().unwrap_or(false) && self.mode == RevealMode::Once {
            return;
        }
        self.observed.insert(id);
    }

    /// Feed an intersection ratio for an element.
    ///
    /// Returns `true` exactly when the element transitions to revealed.
    /// Ratios below the threshold never reveal, and nothing ever
    /// un-reveals: the flag is monotonic.
    pub fn record(&mut self, id: &str, ratio: f64) -> bool {
        if !self.observed.contains(id) {
            return false;
        }
        if ratio < self.config.threshold {
            return false;
        }

        let flag = self.revealed.entry(id.to_string()).or_insert(false);
        if *flag {
            return false;
        }
        *flag = true;

        if self.mode == RevealMode::Once {
            self.observed.remove(id);
        }
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }

    /// Number of elements still under observation
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// True when there is nothing to observe, so no observation work runs
    pub fn is_idle(&self) -> bool {
        self.observed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(mode: RevealMode) -> RevealTracker {
        let mut t = RevealTracker::new(RevealConfig::main_page(), mode);
        t.observe("hero");
        t.observe("work");
        t
    }

    #[test]
    fn test_reveal_at_threshold() {
        let mut t = tracker(RevealMode::Persistent);
        assert!(!t.record("hero", 0.05));
        assert!(!t.is_revealed("hero"));

        assert!(t.record("hero", 0.1));
        assert!(t.is_revealed("hero"));
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut t = tracker(RevealMode::Persistent);
        assert!(t.record("hero", 0.5));

        // Element leaves the viewport; flag stays set
        assert!(!t.record("hero", 0.0));
        assert!(t.is_revealed("hero"));

        // Re-entering does not count as a new transition
        assert!(!t.record("hero", 0.9));
    }

    #[test]
    fn test_once_mode_unsubscribes_after_reveal() {
        let mut t = tracker(RevealMode::Once);
        assert_eq!(t.observed_count(), 2);

        assert!(t.record("hero", 0.4));
        assert_eq!(t.observed_count(), 1);
        assert!(t.is_revealed("hero"));

        // Later events for the dropped element are ignored but the flag holds
        assert!(!t.record("hero", 1.0));
        assert!(t.is_revealed("hero"));
    }

    #[test]
    fn test_persistent_mode_keeps_observing() {
        let mut t = tracker(RevealMode::Persistent);
        t.record("hero", 0.4);
        assert_eq!(t.observed_count(), 2);
    }

    #[test]
    fn test_unobserved_elements_never_reveal() {
        let mut t = tracker(RevealMode::Persistent);
        assert!(!t.record("stray", 1.0));
        assert!(!t.is_revealed("stray"));
    }

    #[test]
    fn test_empty_set_is_idle() {
        let t = RevealTracker::new(RevealConfig::case_page(), RevealMode::Once);
        assert!(t.is_idle());
        assert_eq!(t.observed_count(), 0);
    }
}
