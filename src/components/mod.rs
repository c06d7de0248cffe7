//! UI components for the Atelier portfolio.

mod case_gallery;
mod contact_form;
mod lightbox;
mod local_time;
mod nav_header;
mod page_shell;
mod project_card;
mod reveal;
mod site_footer;

pub use case_gallery::CaseGallery;
pub use contact_form::ContactSection;
pub use lightbox::LightboxViewer;
pub use local_time::LocalTime;
pub use nav_header::NavHeader;
pub use page_shell::PageShell;
pub use project_card::ProjectCard;
pub use reveal::Reveal;
pub use site_footer::SiteFooter;
