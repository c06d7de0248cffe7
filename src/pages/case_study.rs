//! Case-study page: intro, figure gallery, lightbox viewer.

use dioxus::prelude::*;

use atelier_core::{RevealConfig, RevealMode, RevealTracker};

use crate::app::Route;
use crate::components::{CaseGallery, LightboxViewer, PageShell, Reveal};
use crate::content;

#[component]
pub fn CaseStudyPage(slug: String) -> Element {
    let navigator = use_navigator();
    let study = content::case_study(&slug);

    // Case-study reveals are one-shot: unobserved after first reveal
    let tracker = use_signal(|| RevealTracker::new(RevealConfig::case_page(), RevealMode::Once));
    let lightbox = use_signal({
        let study = study.clone();
        move || study.as_ref().map(|s| s.lightbox()).unwrap_or_default()
    });

    let Some(study) = study else {
        // Unknown slug degrades to the main page
        tracing::warn!(%slug, "unknown case study");
        navigator.replace(Route::Home {});
        return rsx! {};
    };

    rsx! {
        PageShell { at_home: false,
            article { class: "case-study",
                Reveal { tracker, id: "case-intro".to_string(),
                    h1 { class: "case-title", "{study.title}" }
                    p { class: "case-intro", "{study.intro}" }
                }

                CaseGallery { lightbox, tracker }

                Link { class: "case-back", to: Route::Home {}, "← Back to all work" }
            }

            LightboxViewer { lightbox }
        }
    }
}
