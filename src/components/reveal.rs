//! Reveal wrapper: fades a block in the first time it scrolls into view.

use dioxus::prelude::*;

use atelier_core::RevealTracker;

/// Wraps content in the fade-in presentation and feeds viewport
/// intersection events to the page's [`RevealTracker`]. The tracker
/// decides thresholding and whether the subscription survives the first
/// reveal; this component only renders the resulting class.
#[component]
pub fn Reveal(tracker: Signal<RevealTracker>, id: String, children: Element) -> Element {
    let mut tracker = tracker;

    // Register once per mounted element; re-renders must not re-arm a
    // one-shot subscription.
    {
        let id = id.clone();
        use_hook(move || tracker.write().observe(id));
    }

    let revealed = tracker.read().is_revealed(&id);

    rsx! {
        div {
            class: if revealed { "fade-in visible" } else { "fade-in" },
            onvisible: move |evt| {
                let data = evt.data();
                let ratio = data.get_intersection_ratio().unwrap_or(0.0);
                if tracker.write().record(&id, ratio) {
                    tracing::debug!(element = %id, "revealed");
                }
            },
            {children}
        }
    }
}
