//! Lightbox modal: full-screen image viewer with wraparound navigation.
//!
//! Rendered only while open, so the keyboard handler can never act on a
//! closed viewer. Backdrop clicks close; clicks on the content and the
//! controls stop propagation so they are never taken for backdrop
//! clicks. Closing releases only the lightbox's own scroll-lock flag.

use dioxus::prelude::*;

use atelier_core::{Lightbox, ScrollLockOwner};

use crate::context::use_scroll_lock;

#[component]
pub fn LightboxViewer(lightbox: Signal<Lightbox>) -> Element {
    let mut lightbox = lightbox;
    let mut scroll_lock = use_scroll_lock();

    // The lock outlives this component (it sits at the app root), so
    // navigating away with the viewer open must release our flag or the
    // next page renders locked with no way to unlock.
    use_drop(move || {
        scroll_lock.write().release(ScrollLockOwner::Lightbox);
    });

    if !lightbox.read().is_open() {
        return rsx! {};
    }

    let (src, alt, caption) = {
        let lb = lightbox.read();
        match lb.current() {
            Some(img) => (
                img.src.clone(),
                img.alt.clone(),
                img.display_caption().to_string(),
            ),
            None => return rsx! {},
        }
    };
    let show_nav = lightbox.read().shows_navigation();

    let mut close = move || {
        lightbox.write().close();
        scroll_lock.write().release(ScrollLockOwner::Lightbox);
    };
    let mut previous = move || {
        if let Err(err) = lightbox.write().previous() {
            tracing::error!(%err, "lightbox previous failed");
        }
    };
    let mut next = move || {
        if let Err(err) = lightbox.write().next() {
            tracing::error!(%err, "lightbox next failed");
        }
    };

    let handle_keydown = move |e: KeyboardEvent| match e.key() {
        Key::Escape => close(),
        Key::ArrowLeft => previous(),
        Key::ArrowRight => next(),
        _ => {}
    };

    rsx! {
        div {
            class: "lightbox-overlay",
            role: "dialog",
            "aria-hidden": "false",
            "aria-label": "Image viewer",
            tabindex: 0,
            autofocus: true,
            onclick: move |_| close(),
            onkeydown: handle_keydown,

            figure {
                class: "lightbox-content",
                onclick: move |e| e.stop_propagation(),

                img { class: "lightbox-image", src: "{src}", alt: "{alt}" }
                figcaption { class: "lightbox-caption", "{caption}" }
            }

            button {
                r#type: "button",
                class: "lightbox-close",
                "aria-label": "Close viewer",
                onclick: move |e| {
                    e.stop_propagation();
                    close();
                },
                "×"
            }

            if show_nav {
                button {
                    r#type: "button",
                    class: "lightbox-nav lightbox-prev",
                    "aria-label": "Previous image",
                    onclick: move |e| {
                        e.stop_propagation();
                        previous();
                    },
                    "‹"
                }
                button {
                    r#type: "button",
                    class: "lightbox-nav lightbox-next",
                    "aria-label": "Next image",
                    onclick: move |e| {
                        e.stop_propagation();
                        next();
                    },
                    "›"
                }
            }
        }
    }
}
