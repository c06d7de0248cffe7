//! Project card: keyboard-operable summary card on the main page.
//!
//! Cards are focusable; Enter or Space activates the case-study link
//! with the default scroll-on-space suppressed. Cards without a case
//! study render no link and ignore activation.

use dioxus::prelude::*;

use atelier_core::Project;

use crate::app::Route;

#[component]
pub fn ProjectCard(project: Project) -> Element {
    let navigator = use_navigator();
    let key_slug = project.case_study.clone();
    let link_slug = project.case_study.clone();

    rsx! {
        article {
            class: "project-card",
            tabindex: 0,
            role: "article",
            onkeydown: move |e| {
                let key = e.key();
                if key == Key::Enter || key == Key::Character(" ".to_string()) {
                    // Keep Space from scrolling the page
                    e.prevent_default();
                    if let Some(slug) = key_slug.clone() {
                        navigator.push(Route::CaseStudyPage { slug });
                    }
                }
            },

            h3 { class: "project-card-title", "{project.title}" }
            p { class: "project-card-summary", "{project.summary}" }
            div { class: "project-card-tags",
                for tag in project.tags.iter() {
                    span { class: "project-tag", "{tag}" }
                }
            }

            if let Some(slug) = link_slug {
                Link {
                    class: "project-card-link",
                    to: Route::CaseStudyPage { slug },
                    "View case study"
                }
            }
        }
    }
}
