//! Page components for the Atelier portfolio.

mod case_study;
mod home;

pub use case_study::CaseStudyPage;
pub use home::Home;
