use dioxus::prelude::*;

use atelier_core::ScrollLock;

use crate::pages::{CaseStudyPage, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Main portfolio page: hero, project grid, contact form
/// - `/work/:slug` - Case-study page with figure gallery and lightbox
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/work/:slug")]
    CaseStudyPage { slug: String },
}

/// Root application component.
///
/// Provides global styles, the shared scroll-lock, and routing.
#[component]
pub fn App() -> Element {
    // The scroll lock is shared by the mobile menu and the lightbox;
    // each engages and releases its own owner flag.
    let scroll_lock: Signal<ScrollLock> = use_signal(ScrollLock::default);
    use_context_provider(|| scroll_lock);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
