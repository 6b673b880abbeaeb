//! Ordered HTML attribute collection

use super::escape::escape_attr;
use super::styles::Styles;
use super::{HtmlError, HtmlResult};

/// An insertion-ordered collection of HTML attributes.
///
/// Class names are managed as a deduplicated list and the `style`
/// attribute is backed by a [`Styles`] collection. Rendering puts `id`
/// first and `class` second when present, then the remaining attributes
/// in insertion order, with `style` last.
///
/// # Examples
///
/// ```
/// use webutils::html::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.set("href", "/docs?a=1&b=2").unwrap();
/// attrs.set("id", "main-link").unwrap();
/// attrs.add_class("button");
/// assert_eq!(
///     attrs.render(),
///     r#" id="main-link" class="button" href="/docs?a=1&amp;b=2""#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attributes {
	entries: Vec<(String, AttrValue)>,
	classes: Vec<String>,
	styles: Styles,
}

#[derive(Debug, Clone)]
enum AttrValue {
	Text(String),
	Flag,
}

impl Attributes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an attribute, replacing any previous value.
	///
	/// Names are trimmed and lowercased; a name must start with an ASCII
	/// letter and contain only ASCII alphanumerics or `-_:.`. Setting
	/// `class` replaces the class list (whitespace-separated) and setting
	/// `style` replaces the style collection via [`Styles::parse`].
	pub fn set(&mut self, name: &str, value: impl Into<String>) -> HtmlResult<()> {
		let name = normalize_name(name)?;
		let value = value.into();
		match name.as_str() {
			"class" => {
				self.classes.clear();
				for class in value.split_whitespace() {
					self.push_class(class);
				}
			}
			"style" => self.styles = Styles::parse(&value),
			_ => self.insert(name, AttrValue::Text(value)),
		}
		Ok(())
	}

	/// Set a boolean attribute that renders without a value, like
	/// `disabled` or `checked`
	pub fn set_flag(&mut self, name: &str) -> HtmlResult<()> {
		let name = normalize_name(name)?;
		self.insert(name, AttrValue::Flag);
		Ok(())
	}

	/// Current value of an attribute. Flags yield an empty string; `class`
	/// and `style` yield their rendered forms.
	pub fn get(&self, name: &str) -> Option<String> {
		let name = name.trim().to_ascii_lowercase();
		match name.as_str() {
			"class" => (!self.classes.is_empty()).then(|| self.classes.join(" ")),
			"style" => (!self.styles.is_empty()).then(|| self.styles.render()),
			_ => self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| match v {
				AttrValue::Text(text) => text.clone(),
				AttrValue::Flag => String::new(),
			}),
		}
	}

	/// Remove an attribute if present
	pub fn remove(&mut self, name: &str) {
		let name = name.trim().to_ascii_lowercase();
		match name.as_str() {
			"class" => self.classes.clear(),
			"style" => self.styles = Styles::new(),
			_ => self.entries.retain(|(n, _)| *n != name),
		}
	}

	/// Whether an attribute is set
	pub fn has(&self, name: &str) -> bool {
		let name = name.trim().to_ascii_lowercase();
		match name.as_str() {
			"class" => !self.classes.is_empty(),
			"style" => !self.styles.is_empty(),
			_ => self.entries.iter().any(|(n, _)| *n == name),
		}
	}

	/// Number of attributes that would render, counting `class` and
	/// `style` as one each
	pub fn len(&self) -> usize {
		self.entries.len()
			+ usize::from(!self.classes.is_empty())
			+ usize::from(!self.styles.is_empty())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Add one or more whitespace-separated class names, keeping the list
	/// deduplicated in insertion order
	pub fn add_class(&mut self, class: &str) {
		for name in class.split_whitespace() {
			self.push_class(name);
		}
	}

	/// Remove a class name if present
	pub fn remove_class(&mut self, class: &str) {
		self.classes.retain(|c| c != class);
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}

	/// The style collection backing the `style` attribute
	pub fn styles(&self) -> &Styles {
		&self.styles
	}

	pub fn styles_mut(&mut self) -> &mut Styles {
		&mut self.styles
	}

	/// Render as ` name="value"` pairs with a leading space per pair.
	/// Values are escaped for attribute position; flags render bare.
	/// Returns an empty string when no attributes are set.
	pub fn render(&self) -> String {
		let mut out = String::new();
		if let Some((_, AttrValue::Text(id))) = self.entries.iter().find(|(n, _)| n == "id") {
			push_pair(&mut out, "id", id);
		}
		if !self.classes.is_empty() {
			push_pair(&mut out, "class", &self.classes.join(" "));
		}
		for (name, value) in &self.entries {
			if name == "id" {
				continue;
			}
			match value {
				AttrValue::Text(text) => push_pair(&mut out, name, text),
				AttrValue::Flag => {
					out.push(' ');
					out.push_str(name);
				}
			}
		}
		if !self.styles.is_empty() {
			push_pair(&mut out, "style", &self.styles.render());
		}
		out
	}

	fn insert(&mut self, name: String, value: AttrValue) {
		match self.entries.iter_mut().find(|(n, _)| *n == name) {
			Some((_, existing)) => *existing = value,
			None => self.entries.push((name, value)),
		}
	}

	fn push_class(&mut self, class: &str) {
		if !self.classes.iter().any(|c| c == class) {
			self.classes.push(class.to_string());
		}
	}
}

fn push_pair(out: &mut String, name: &str, value: &str) {
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	out.push_str(&escape_attr(value));
	out.push('"');
}

fn normalize_name(name: &str) -> HtmlResult<String> {
	let name = name.trim().to_ascii_lowercase();
	let valid = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
		&& name
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));
	if valid {
		Ok(name)
	} else {
		Err(HtmlError::InvalidAttributeName(name))
	}
}
