//! Themes bundled into the library.
//!
//! Every `themes/*.toml` file describes one theme: a name, optional aliases
//! and a `[styles.<field>]` table per [`Theme`] field. Exactly one file sets
//! `default = true`. The files are embedded at compile time and parsed on
//! first use.

use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, include_dir};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::Theme;

static THEME_FILES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/themes");

/// Look up a bundled theme by its name or one of its aliases, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	catalog().find(name.trim()).map(|entry| entry.theme)
}

/// Canonical names of the bundled themes in case-insensitive order.
#[must_use]
pub fn names() -> Vec<String> {
	catalog()
		.entries
		.iter()
		.map(|entry| entry.name.clone())
		.collect()
}

/// The theme used when nothing else is configured.
#[must_use]
pub fn default_theme() -> Theme {
	catalog().default_theme()
}

fn catalog() -> &'static Catalog {
	static CATALOG: OnceLock<Catalog> = OnceLock::new();
	CATALOG.get_or_init(|| match bundled() {
		Ok(catalog) => catalog,
		Err(err) => {
			log::error!("bundled themes failed to load: {err:#}");
			Catalog::default()
		}
	})
}

fn bundled() -> Result<Catalog> {
	let mut builder = CatalogBuilder::default();
	for file in THEME_FILES.files() {
		if file.path().extension().is_none_or(|ext| ext != "toml") {
			continue;
		}
		let origin = file.path().display().to_string();
		let text = file
			.contents_utf8()
			.with_context(|| format!("{origin} is not valid UTF-8"))?;
		builder.add(&origin, text)?;
	}
	builder.finish()
}

#[derive(Debug, Default)]
struct Catalog {
	/// Sorted by lowercased name.
	entries: Vec<Entry>,
	default: usize,
}

impl Catalog {
	fn find(&self, name: &str) -> Option<&Entry> {
		self.entries.iter().find(|entry| entry.answers_to(name))
	}

	fn default_theme(&self) -> Theme {
		self.entries
			.get(self.default)
			.map_or_else(Theme::plain, |entry| entry.theme)
	}
}

#[derive(Debug)]
struct Entry {
	name: String,
	aliases: Vec<String>,
	theme: Theme,
}

impl Entry {
	fn answers_to(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

#[derive(Debug, Default)]
struct CatalogBuilder {
	entries: Vec<Entry>,
	default: Option<String>,
}

impl CatalogBuilder {
	fn add(&mut self, origin: &str, text: &str) -> Result<()> {
		let file: ThemeFile = toml::from_str(text).with_context(|| format!("parsing {origin}"))?;
		let theme = file
			.styles
			.into_theme()
			.with_context(|| format!("in {origin}"))?;

		for label in std::iter::once(&file.name).chain(&file.aliases) {
			if let Some(owner) = self.entries.iter().find(|entry| entry.answers_to(label)) {
				bail!("{origin}: `{label}` already names theme `{}`", owner.name);
			}
		}
		if file.default {
			if let Some(previous) = &self.default {
				bail!(
					"{origin}: `{}` and `{previous}` are both marked as the default",
					file.name
				);
			}
			self.default = Some(file.name.clone());
		}

		log::debug!("loaded theme {} from {origin}", file.name);
		self.entries.push(Entry {
			name: file.name,
			aliases: file.aliases,
			theme,
		});
		Ok(())
	}

	fn finish(mut self) -> Result<Catalog> {
		let Some(default_name) = self.default else {
			bail!("no bundled theme is marked as the default");
		};
		self.entries.sort_by_key(|entry| entry.name.to_lowercase());
		let default = self
			.entries
			.iter()
			.position(|entry| entry.name == default_name)
			.unwrap_or_default();
		Ok(Catalog {
			entries: self.entries,
			default,
		})
	}
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: StyleTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleTable {
	header: StyleSpec,
	row_highlight: StyleSpec,
	selected: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	error: StyleSpec,
	border: StyleSpec,
	focus_border: StyleSpec,
	#[serde(default)]
	disabled: StyleSpec,
	#[serde(default)]
	filled: StyleSpec,
}

impl StyleTable {
	fn into_theme(self) -> Result<Theme> {
		Ok(Theme {
			header: self.header.resolve("header")?,
			row_highlight: self.row_highlight.resolve("row_highlight")?,
			selected: self.selected.resolve("selected")?,
			prompt: self.prompt.resolve("prompt")?,
			empty: self.empty.resolve("empty")?,
			highlight: self.highlight.resolve("highlight")?,
			error: self.error.resolve("error")?,
			border: self.border.resolve("border")?,
			focus_border: self.focus_border.resolve("focus_border")?,
			disabled: self.disabled.resolve("disabled")?,
			filled: self.filled.resolve("filled")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn resolve(&self, field: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(colour(fg).with_context(|| format!("styles.{field}.fg"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(colour(bg).with_context(|| format!("styles.{field}.bg"))?);
		}
		for name in &self.modifiers {
			style = style
				.add_modifier(modifier(name).with_context(|| format!("styles.{field}.modifiers"))?);
		}
		Ok(style)
	}
}

/// Colour names, `#rrggbb` and ANSI palette indices, as ratatui reads them.
fn colour(value: &str) -> Result<Color> {
	Color::from_str(value.trim()).map_err(|_| anyhow!("unknown colour `{value}`"))
}

fn modifier(name: &str) -> Result<Modifier> {
	let key = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
	Ok(match key.as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"blink" | "slow_blink" => Modifier::SLOW_BLINK,
		"rapid_blink" => Modifier::RAPID_BLINK,
		"reverse" | "reversed" => Modifier::REVERSED,
		"hidden" => Modifier::HIDDEN,
		"strikethrough" | "crossed_out" => Modifier::CROSSED_OUT,
		_ => bail!("unknown modifier `{name}`"),
	})
}
