//! Fluent HTML tag builder

use std::fmt;

use super::attributes::Attributes;
use super::escape::escape;

const VOID_ELEMENTS: [&str; 13] = [
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// A fluent HTML tag builder.
///
/// Builder methods consume and return `self` for chaining. Text content is
/// escaped on render; raw markup goes through [`Tag::html`]. Tag names are
/// trimmed and lowercased; they are programmer-supplied and not validated
/// further.
///
/// # Examples
///
/// ```
/// use webutils::html::Tag;
///
/// let link = Tag::new("a")
///     .attr("href", "/docs")
///     .class("nav-link")
///     .text("Docs & more");
/// assert_eq!(link.render(), r#"<a class="nav-link" href="/docs">Docs &amp; more</a>"#);
/// ```
#[derive(Debug, Clone)]
pub struct Tag {
	name: String,
	attributes: Attributes,
	content: Vec<Content>,
	self_closing: bool,
}

#[derive(Debug, Clone)]
enum Content {
	Text(String),
	Raw(String),
	Child(Tag),
}

impl Tag {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into().trim().to_ascii_lowercase(),
			attributes: Attributes::new(),
			content: Vec::new(),
			self_closing: false,
		}
	}

	pub fn div() -> Self {
		Self::new("div")
	}

	pub fn span() -> Self {
		Self::new("span")
	}

	/// An `<a>` tag with its label escaped
	///
	/// # Examples
	///
	/// ```
	/// use webutils::html::Tag;
	///
	/// assert_eq!(
	///     Tag::anchor("/home", "Home").render(),
	///     r#"<a href="/home">Home</a>"#
	/// );
	/// ```
	pub fn anchor(href: &str, label: &str) -> Self {
		Self::new("a").attr("href", href).text(label)
	}

	/// An `<img>` tag with `src` and `alt`
	pub fn image(src: &str, alt: &str) -> Self {
		Self::new("img").attr("src", src).attr("alt", alt)
	}

	/// Set an attribute. Invalid attribute names are dropped with a debug
	/// log, since the fluent builder cannot fail per call.
	pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
		if let Err(err) = self.attributes.set(name, value) {
			tracing::debug!("dropping attribute on <{}>: {}", self.name, err);
		}
		self
	}

	/// Set a boolean attribute like `disabled`
	pub fn flag(mut self, name: &str) -> Self {
		if let Err(err) = self.attributes.set_flag(name) {
			tracing::debug!("dropping flag on <{}>: {}", self.name, err);
		}
		self
	}

	pub fn id(self, id: &str) -> Self {
		self.attr("id", id)
	}

	/// Add one or more class names
	pub fn class(mut self, class: &str) -> Self {
		self.attributes.add_class(class);
		self
	}

	/// Set one CSS declaration on the `style` attribute
	pub fn style(mut self, property: &str, value: &str) -> Self {
		self.attributes.styles_mut().set(property, value);
		self
	}

	/// Append text content, escaped on render
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.push_content(Content::Text(text.into()));
		self
	}

	/// Append raw markup without escaping
	pub fn html(mut self, html: impl Into<String>) -> Self {
		self.push_content(Content::Raw(html.into()));
		self
	}

	/// Append a child tag
	///
	/// # Examples
	///
	/// ```
	/// use webutils::html::Tag;
	///
	/// let list = Tag::new("ul")
	///     .child(Tag::new("li").text("one"))
	///     .child(Tag::new("li").text("two"));
	/// assert_eq!(list.render(), "<ul><li>one</li><li>two</li></ul>");
	/// ```
	pub fn child(mut self, child: Tag) -> Self {
		self.push_content(Content::Child(child));
		self
	}

	/// Render with ` />` instead of `>` for XML-ish output. Only takes
	/// effect while the tag has no content.
	pub fn self_closing(mut self) -> Self {
		self.self_closing = true;
		self
	}

	/// Whether this is an HTML void element (`<br>`, `<img>`, ...)
	pub fn is_void(&self) -> bool {
		VOID_ELEMENTS.contains(&self.name.as_str())
	}

	/// The attribute collection being built
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	pub fn attributes_mut(&mut self) -> &mut Attributes {
		&mut self.attributes
	}

	/// Render the tag and its content to a string
	pub fn render(&self) -> String {
		let mut out = String::new();
		out.push('<');
		out.push_str(&self.name);
		out.push_str(&self.attributes.render());

		if self.is_void() || (self.self_closing && self.content.is_empty()) {
			out.push_str(if self.self_closing { " />" } else { ">" });
			return out;
		}

		out.push('>');
		for piece in &self.content {
			match piece {
				Content::Text(text) => out.push_str(&escape(text)),
				Content::Raw(html) => out.push_str(html),
				Content::Child(tag) => out.push_str(&tag.render()),
			}
		}
		out.push_str("</");
		out.push_str(&self.name);
		out.push('>');
		out
	}

	fn push_content(&mut self, content: Content) {
		if self.is_void() {
			tracing::debug!("ignoring content appended to void element <{}>", self.name);
			return;
		}
		self.content.push(content);
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.render())
	}
}
