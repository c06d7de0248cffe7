//! Visual theme for the Atelier portfolio.

mod styles;

pub use styles::GLOBAL_STYLES;
