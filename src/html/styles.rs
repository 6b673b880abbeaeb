//! CSS style declaration collection

use std::fmt;

use crate::color::RgbaColor;

/// A collection of CSS declarations for inline `style` attributes and
/// small stylesheet blocks.
///
/// Declarations are kept per property (setting a property again replaces
/// its value) and render sorted by property name by default, so output is
/// deterministic and diff-friendly.
///
/// # Examples
///
/// ```
/// use webutils::html::Styles;
///
/// let mut styles = Styles::new();
/// styles.set("color", "#fff").px("border-width", 1).set("display", "block");
/// assert_eq!(styles.render(), "border-width:1px;color:#fff;display:block");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Styles {
	declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq)]
struct Declaration {
	property: String,
	value: String,
	important: bool,
}

impl Styles {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse an existing declaration string such as `"color: red; margin:0"`.
	///
	/// Splits on `;` and the first `:` of each declaration, trims both
	/// sides, skips empty declarations and recognizes `!important`.
	///
	/// # Examples
	///
	/// ```
	/// use webutils::html::Styles;
	///
	/// let styles = Styles::parse("color: red;; margin: 0 !important");
	/// assert_eq!(styles.render(), "color:red;margin:0 !important");
	/// ```
	pub fn parse(input: &str) -> Self {
		let mut styles = Self::new();
		for declaration in input.split(';') {
			let Some((property, value)) = declaration.split_once(':') else {
				continue;
			};
			let property = property.trim();
			let mut value = value.trim();
			if property.is_empty() || value.is_empty() {
				continue;
			}
			let mut important = false;
			if let Some(stripped) = value.strip_suffix("!important") {
				important = true;
				value = stripped.trim_end();
			}
			styles.insert(property, value.to_string(), important);
		}
		styles
	}

	/// Set a property, replacing any previous value
	pub fn set(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
		self.insert(property, value.into(), false)
	}

	/// Set a property flagged `!important`
	pub fn set_important(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
		self.insert(property, value.into(), true)
	}

	/// Set a pixel value: `px("margin-top", 4)` renders `margin-top:4px`
	pub fn px(&mut self, property: &str, value: i32) -> &mut Self {
		self.set(property, format!("{}px", value))
	}

	/// Set an em value
	pub fn em(&mut self, property: &str, value: f64) -> &mut Self {
		self.set(property, format!("{}em", format_number(value)))
	}

	/// Set a percentage value
	pub fn percent(&mut self, property: &str, value: f64) -> &mut Self {
		self.set(property, format!("{}%", format_number(value)))
	}

	/// Set a `url(...)` value
	pub fn url(&mut self, property: &str, target: &str) -> &mut Self {
		self.set(property, format!("url('{}')", target))
	}

	/// Set a color value, rendered in canonical hex form
	///
	/// # Examples
	///
	/// ```
	/// use webutils::color::RgbaColor;
	/// use webutils::html::Styles;
	///
	/// let mut styles = Styles::new();
	/// styles.color("background", &RgbaColor::rgb(204, 51, 0));
	/// assert_eq!(styles.render(), "background:#cc3300");
	/// ```
	pub fn color(&mut self, property: &str, color: &RgbaColor) -> &mut Self {
		self.set(property, color.to_hex())
	}

	/// Remove a property
	pub fn remove(&mut self, property: &str) -> &mut Self {
		let property = normalize_property(property);
		self.declarations.retain(|d| d.property != property);
		self
	}

	/// Whether a property is set
	pub fn has(&self, property: &str) -> bool {
		let property = normalize_property(property);
		self.declarations.iter().any(|d| d.property == property)
	}

	/// Current value of a property, without the `!important` flag
	pub fn get(&self, property: &str) -> Option<&str> {
		let property = normalize_property(property);
		self.declarations
			.iter()
			.find(|d| d.property == property)
			.map(|d| d.value.as_str())
	}

	/// Merge another collection into this one; its values win on conflict
	pub fn merge(&mut self, other: &Styles) -> &mut Self {
		for declaration in &other.declarations {
			self.insert(&declaration.property, declaration.value.clone(), declaration.important);
		}
		self
	}

	pub fn len(&self) -> usize {
		self.declarations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}

	/// Render as a compact declaration string, sorted by property name
	pub fn render(&self) -> String {
		let mut sorted: Vec<&Declaration> = self.declarations.iter().collect();
		sorted.sort_by(|a, b| a.property.cmp(&b.property));
		render_declarations(&sorted, ";", "", ":")
	}

	/// Render in insertion order instead of sorted order
	pub fn render_unsorted(&self) -> String {
		let declarations: Vec<&Declaration> = self.declarations.iter().collect();
		render_declarations(&declarations, ";", "", ":")
	}

	/// Render one declaration per line with trailing semicolons, for
	/// stylesheet blocks
	///
	/// # Examples
	///
	/// ```
	/// use webutils::html::Styles;
	///
	/// let mut styles = Styles::new();
	/// styles.set("color", "red").px("margin", 0);
	/// assert_eq!(styles.render_multiline(), "color: red;\nmargin: 0px;");
	/// ```
	pub fn render_multiline(&self) -> String {
		let mut sorted: Vec<&Declaration> = self.declarations.iter().collect();
		sorted.sort_by(|a, b| a.property.cmp(&b.property));
		render_declarations(&sorted, "\n", ";", ": ")
	}

	fn insert(&mut self, property: &str, value: String, important: bool) -> &mut Self {
		let property = normalize_property(property);
		let value = value.trim().to_string();
		if property.is_empty() || value.is_empty() {
			return self;
		}
		match self.declarations.iter_mut().find(|d| d.property == property) {
			Some(existing) => {
				existing.value = value;
				existing.important = important;
			}
			None => self.declarations.push(Declaration { property, value, important }),
		}
		self
	}
}

impl fmt::Display for Styles {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.render())
	}
}

fn normalize_property(property: &str) -> String {
	property.trim().to_ascii_lowercase()
}

fn render_declarations(
	declarations: &[&Declaration],
	separator: &str,
	terminator: &str,
	colon: &str,
) -> String {
	let rendered: Vec<String> = declarations
		.iter()
		.map(|d| {
			let important = if d.important { " !important" } else { "" };
			format!("{}{}{}{}{}", d.property, colon, d.value, important, terminator)
		})
		.collect();
	rendered.join(separator)
}

fn format_number(value: f64) -> String {
	if (value - value.round()).abs() < f64::EPSILON {
		format!("{}", value.round() as i64)
	} else {
		value.to_string()
	}
}
