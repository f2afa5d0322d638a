mod catalog;
mod types;

pub use catalog::{by_name, default_theme, names};
pub use types::Theme;

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
