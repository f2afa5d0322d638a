//! Visual styling utilities.
//!
//! The `style` module is the umbrella for widget appearance. Themes hold the
//! colour schemes shared by the table and the text field; per-widget knobs
//! such as field variants live next to the widgets themselves.

/// Colour schemes bundled with the library.
pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};
