//! Portfolio content model.
//!
//! Projects and case studies are fixed at startup; the image-to-caption
//! association is built here, once, instead of being re-derived from
//! surrounding markup every time the lightbox opens.

use serde::{Deserialize, Serialize};

use crate::gallery::{GalleryImage, Lightbox};

/// A project card on the main page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier, also used for reveal tracking
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    /// Slug of the linked case study, if the card has one
    pub case_study: Option<String>,
}

impl Project {
    /// Whether the card carries a primary link to activate
    pub fn has_case_study(&self) -> bool {
        self.case_study.is_some()
    }
}

/// A case-study page with its figure gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub slug: String,
    pub title: String,
    pub intro: String,
    /// Figures in display order; same order the lightbox navigates
    pub figures: Vec<GalleryImage>,
}

impl CaseStudy {
    /// A closed lightbox over this case study's figures
    pub fn lightbox(&self) -> Lightbox {
        Lightbox::new(self.figures.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightbox_preserves_figure_order() {
        let cs = CaseStudy {
            slug: "s".into(),
            title: "S".into(),
            intro: String::new(),
            figures: vec![
                GalleryImage::new("1.webp", "one"),
                GalleryImage::with_caption("2.webp", "two", "Second figure"),
            ],
        };

        let mut lb = cs.lightbox();
        assert_eq!(lb.len(), 2);
        assert!(!lb.is_open());
        assert_eq!(lb.open(1).unwrap().display_caption(), "Second figure");
    }
}
