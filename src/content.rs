//! Static portfolio content.
//!
//! Fixed at startup; captions are attached to figures here, so the
//! lightbox never has to derive them from surrounding markup.

use atelier_core::{CaseStudy, GalleryImage, Project};

/// Project cards for the main page, in display order
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            slug: "wayfinding".into(),
            title: "Wayfinding for Haus Elf".into(),
            summary: "Signage and orientation system for a five-floor studio collective, \
                      from typography to door plates."
                .into(),
            tags: vec!["Identity".into(), "Signage".into(), "Print".into()],
            case_study: Some("wayfinding".into()),
        },
        Project {
            slug: "stillness".into(),
            title: "Stillness".into(),
            summary: "A single long-exposure series shot over one winter on the Spree."
                .into(),
            tags: vec!["Photography".into()],
            case_study: Some("stillness".into()),
        },
        Project {
            slug: "archive".into(),
            title: "Process Archive".into(),
            summary: "Sketchbooks, test prints and rejected directions. Currently being \
                      digitized; no case study yet."
                .into(),
            tags: vec!["Archive".into()],
            case_study: None,
        },
    ]
}

/// Look up a case study by slug
pub fn case_study(slug: &str) -> Option<CaseStudy> {
    case_studies().into_iter().find(|cs| cs.slug == slug)
}

fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            slug: "wayfinding".into(),
            title: "Wayfinding for Haus Elf".into(),
            intro: "Haus Elf hosts forty studios behind identical doors. The brief: let \
                    first-time visitors navigate without a front desk, using only paint, \
                    type and light."
                .into(),
            figures: vec![
                GalleryImage::with_caption(
                    "assets/work/wayfinding-01.webp",
                    "Entrance hall with painted floor numerals",
                    "Floor numerals, entrance hall",
                ),
                GalleryImage::with_caption(
                    "assets/work/wayfinding-02.webp",
                    "Stairwell color coding, floors two to five",
                    "Stairwell coding by floor",
                ),
                GalleryImage::new(
                    "assets/work/wayfinding-03.webp",
                    "Door plate typography detail",
                ),
                GalleryImage::with_caption(
                    "assets/work/wayfinding-04.webp",
                    "Night view of the illuminated house sign",
                    "The house sign after dark",
                ),
            ],
        },
        CaseStudy {
            slug: "stillness".into(),
            title: "Stillness".into(),
            intro: "One camera position, one river, twelve weeks. The series lives from \
                    what the long exposure removes."
                .into(),
            figures: vec![GalleryImage::with_caption(
                "assets/work/stillness-01.webp",
                "Long exposure of the Spree at dawn",
                "Week nine, first light",
            )],
        },
    ]
}
