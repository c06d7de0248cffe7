//! Case-study figure grid; clicking a figure opens the lightbox there.

use dioxus::prelude::*;

use atelier_core::{Lightbox, RevealTracker, ScrollLockOwner};

use crate::components::Reveal;
use crate::context::use_scroll_lock;

#[component]
pub fn CaseGallery(lightbox: Signal<Lightbox>, tracker: Signal<RevealTracker>) -> Element {
    let mut lightbox = lightbox;
    let mut scroll_lock = use_scroll_lock();

    let images = lightbox.read().images().to_vec();

    rsx! {
        div { class: "case-gallery",
            for (index, image) in images.into_iter().enumerate() {
                Reveal { tracker, id: format!("figure-{index}"),
                    figure { class: "case-figure",
                        img {
                            class: "case-image",
                            src: "{image.src}",
                            alt: "{image.alt}",
                            onclick: move |e| {
                                e.stop_propagation();
                                match lightbox.write().open(index) {
                                    Ok(_) => scroll_lock.write().engage(ScrollLockOwner::Lightbox),
                                    Err(err) => {
                                        tracing::error!(%err, index, "could not open lightbox");
                                    }
                                }
                            },
                        }
                        if let Some(caption) = image.caption.clone() {
                            figcaption { class: "figure-caption", "{caption}" }
                        }
                    }
                }
            }
        }
    }
}
