//! Page scaffold: fixed header over a scrollable content column.
//!
//! The shell owns the scroll container every offset calculation runs
//! against: the header's "scrolled" styling, smooth anchor scrolling,
//! and the scroll lock engaged by the overlays.

use dioxus::document;
use dioxus::prelude::*;

use atelier_core::chrome;

use crate::components::{NavHeader, SiteFooter};
use crate::context::use_scroll_lock;

/// Id of the scroll container all offset math runs against
pub const PAGE_ID: &str = "page";

/// Smooth-scroll the page container to an in-page anchor.
///
/// `None` is the bare-`#` case and scrolls to the top. Named targets
/// land [`chrome::HEADER_CLEARANCE`] below the viewport top; a missing
/// target is logged and ignored.
pub async fn smooth_scroll_to(target: Option<&str>) {
    let top = match target {
        None => 0.0,
        Some(id) => {
            let probe = format!(
                "const page = document.getElementById('{PAGE_ID}'); \
                 const el = document.getElementById('{id}'); \
                 return el ? [el.getBoundingClientRect().top, page.scrollTop] : null;"
            );
            let value = match document::eval(&probe).await {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(?err, target = id, "anchor probe failed");
                    return;
                }
            };
            let element_top = value.get(0).and_then(|v| v.as_f64());
            let scroll_offset = value.get(1).and_then(|v| v.as_f64());
            match (element_top, scroll_offset) {
                (Some(element_top), Some(scroll_offset)) => {
                    chrome::anchor_scroll_top(element_top, scroll_offset)
                }
                _ => {
                    tracing::warn!(target = id, "anchor target missing");
                    return;
                }
            }
        }
    };

    let scroll = format!(
        "document.getElementById('{PAGE_ID}').scrollTo({{ top: {top}, behavior: 'smooth' }});"
    );
    if let Err(err) = document::eval(&scroll).await {
        tracing::warn!(?err, "smooth scroll failed");
    }
}

/// Scaffold shared by every page: header, content column, footer.
#[component]
pub fn PageShell(at_home: bool, children: Element) -> Element {
    let scroll_lock = use_scroll_lock();
    let mut scrolled = use_signal(|| false);

    let locked = scroll_lock.read().is_locked();

    rsx! {
        div {
            id: PAGE_ID,
            class: if locked { "page page--locked" } else { "page" },
            // The webview delivers scroll events passively; the handler
            // only reads the offset back and derives the header style.
            onscroll: move |_| {
                spawn(async move {
                    let probe =
                        format!("return document.getElementById('{PAGE_ID}').scrollTop;");
                    match document::eval(&probe).await {
                        Ok(value) => {
                            if let Some(offset) = value.as_f64() {
                                scrolled.set(chrome::header_is_scrolled(offset));
                            }
                        }
                        Err(err) => tracing::debug!(?err, "scroll probe failed"),
                    }
                });
            },

            NavHeader { scrolled: scrolled(), at_home }
            main { class: "page-main", {children} }
            SiteFooter {}
        }
    }
}
