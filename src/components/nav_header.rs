//! Site header: logo, in-page anchor links, burger-driven mobile menu.
//!
//! The header reflects scroll position through a presentation class and
//! hosts the mobile menu overlay. Opening the menu engages its own
//! scroll-lock flag; clicking any menu link closes it again.

use dioxus::prelude::*;

use atelier_core::{MobileMenu, ScrollLockOwner};

use crate::app::Route;
use crate::components::page_shell::smooth_scroll_to;
use crate::context::use_scroll_lock;

/// In-page anchors shared by the desktop links and the mobile menu
const ANCHORS: [(&str, &str); 3] = [
    ("about", "About"),
    ("work", "Work"),
    ("contact", "Contact"),
];

#[component]
pub fn NavHeader(scrolled: bool, at_home: bool) -> Element {
    let navigator = use_navigator();
    let mut menu = use_signal(MobileMenu::default);
    let mut scroll_lock = use_scroll_lock();

    // Same unmount rule as the lightbox: the header remounts on route
    // changes, and an open menu must not leave its flag behind.
    use_drop(move || {
        scroll_lock.write().release(ScrollLockOwner::MobileMenu);
    });

    let menu_open = menu.read().is_open();

    let mut toggle_menu = move || {
        let open = menu.write().toggle();
        let mut lock = scroll_lock.write();
        if open {
            lock.engage(ScrollLockOwner::MobileMenu);
        } else {
            lock.release(ScrollLockOwner::MobileMenu);
        }
    };

    // Anchors smooth-scroll on the main page; from a case study they
    // navigate home instead.
    let go_to = move |target: Option<&'static str>| {
        if at_home {
            spawn(async move {
                smooth_scroll_to(target).await;
            });
        } else {
            navigator.push(Route::Home {});
        }
    };

    rsx! {
        header {
            class: if scrolled { "header header--scrolled" } else { "header" },
            div { class: "header-inner",
                a {
                    class: "header-logo",
                    href: "#",
                    onclick: move |e| {
                        e.prevent_default();
                        go_to(None);
                    },
                    "Atelier"
                }

                nav { class: "header-links",
                    for (id, label) in ANCHORS {
                        a {
                            class: "header-link",
                            href: "#{id}",
                            onclick: move |e| {
                                e.prevent_default();
                                go_to(Some(id));
                            },
                            {label}
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: if menu_open { "header-burger header-burger--active" } else { "header-burger" },
                    "aria-label": "Toggle navigation",
                    "aria-expanded": menu.read().aria_expanded(),
                    onclick: move |_| toggle_menu(),
                    span { class: "burger-line" }
                    span { class: "burger-line" }
                    span { class: "burger-line" }
                }
            }
        }

        div {
            class: if menu_open { "mobile-menu mobile-menu--active" } else { "mobile-menu" },
            "aria-hidden": if menu_open { "false" } else { "true" },
            nav { class: "mobile-menu-links",
                for (id, label) in ANCHORS {
                    a {
                        class: "mobile-menu-link",
                        href: "#{id}",
                        onclick: move |e| {
                            e.prevent_default();
                            // A link click closes the menu, then scrolls
                            toggle_menu();
                            go_to(Some(id));
                        },
                        {label}
                    }
                }
            }
        }
    }
}
