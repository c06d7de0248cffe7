//! Studio-local clock line, refreshed once per minute.

use chrono::Utc;
use dioxus::prelude::*;

use atelier_core::clock;

#[component]
pub fn LocalTime() -> Element {
    let mut line = use_signal(|| clock::local_time_line(Utc::now()));

    // Uncancelled minute tick; lives as long as the app does
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(clock::CLOCK_REFRESH).await;
                line.set(clock::local_time_line(Utc::now()));
            }
        });
    });

    rsx! {
        p { class: "local-time", "{line}" }
    }
}
