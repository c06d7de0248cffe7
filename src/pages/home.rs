//! Main portfolio page: hero, project grid, contact.

use dioxus::prelude::*;

use atelier_core::{RevealConfig, RevealMode, RevealTracker};

use crate::components::{ContactSection, PageShell, ProjectCard, Reveal};
use crate::content;

#[component]
pub fn Home() -> Element {
    // Main-page reveals stay observed after first reveal
    let tracker =
        use_signal(|| RevealTracker::new(RevealConfig::main_page(), RevealMode::Persistent));
    let projects = content::projects();

    rsx! {
        PageShell { at_home: true,
            section { id: "about", class: "hero",
                Reveal { tracker, id: "hero".to_string(),
                    h1 { class: "hero-title", "Graphic design & photography, made slowly." }
                    p { class: "hero-lede",
                        "Atelier is a one-person studio in Berlin working on identities, \
                         signage and photographic series for people who are not in a hurry."
                    }
                }
            }

            section { id: "work", class: "work",
                Reveal { tracker, id: "work-heading".to_string(),
                    h2 { class: "section-title", "Selected work" }
                }
                div { class: "project-grid",
                    for project in projects {
                        Reveal { tracker, id: format!("project-{}", project.slug),
                            ProjectCard { project }
                        }
                    }
                }
            }

            section { id: "contact", class: "contact",
                Reveal { tracker, id: "contact-heading".to_string(),
                    h2 { class: "section-title", "Get in touch" }
                    ContactSection {}
                }
            }
        }
    }
}
