//! Footer: studio clock and the current year.

use chrono::Utc;
use dioxus::prelude::*;

use atelier_core::clock;

use crate::components::LocalTime;

#[component]
pub fn SiteFooter() -> Element {
    let year = clock::current_year(Utc::now());

    rsx! {
        footer { class: "site-footer",
            LocalTime {}
            p { class: "footer-year", "© {year} Atelier" }
        }
    }
}
