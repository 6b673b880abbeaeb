//! XML loading into JSON-shaped values
//!
//! [`load_str`] and [`load_file`] walk an XML document with `quick-xml`
//! and build a [`serde_json::Value`] mirror of it: child elements become
//! object keys, repeated siblings collapse into arrays, attributes are
//! stored under prefixed keys and text under a configurable key. Empty
//! elements without attributes load as `null`.
//!
//! # Examples
//!
//! ```
//! use webutils::xml::load_str;
//!
//! let value = load_str(r#"<user id="7"><name>Ada</name></user>"#)?;
//! assert_eq!(value["user"]["@id"], "7");
//! assert_eq!(value["user"]["name"]["#text"], "Ada");
//! # Ok::<(), webutils::xml::XmlError>(())
//! ```

use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::files::{self, FileError};

/// Errors from XML loading, with the byte offset where parsing stopped
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlError {
	#[error("xml syntax error at byte {position}: {source}")]
	Syntax {
		position: u64,
		#[source]
		source: quick_xml::Error,
	},
	#[error("xml attribute error at byte {position}: {source}")]
	Attribute {
		position: u64,
		#[source]
		source: quick_xml::events::attributes::AttrError,
	},
	#[error("xml text decode error at byte {position}: {source}")]
	Decode {
		position: u64,
		#[source]
		source: quick_xml::Error,
	},
	#[error("malformed xml in {}: {source}", .path.display())]
	Malformed {
		path: PathBuf,
		#[source]
		source: Box<XmlError>,
	},
	#[error(transparent)]
	File(#[from] FileError),
}

pub type XmlResult<T> = Result<T, XmlError>;

/// How XML maps onto JSON values
#[derive(Debug, Clone)]
pub struct XmlOptions {
	/// Include attributes in the output
	pub keep_attributes: bool,
	/// Key prefix for attributes (default: "@")
	pub attribute_prefix: String,
	/// Key for element text content (default: "#text")
	pub text_key: String,
	/// Keep CDATA sections wrapped in their markers
	pub preserve_cdata: bool,
	/// Trim whitespace around text nodes
	pub trim_text: bool,
	/// Turn numeric text into JSON numbers
	pub parse_numbers: bool,
	/// Turn `true`/`false` text into JSON booleans
	pub parse_booleans: bool,
}

impl Default for XmlOptions {
	fn default() -> Self {
		Self {
			keep_attributes: true,
			attribute_prefix: "@".to_string(),
			text_key: "#text".to_string(),
			preserve_cdata: false,
			trim_text: true,
			parse_numbers: false,
			parse_booleans: false,
		}
	}
}

impl XmlOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Fluent configuration
	///
	/// # Examples
	///
	/// ```
	/// use webutils::xml::XmlOptions;
	///
	/// let options = XmlOptions::builder()
	///     .keep_attributes(false)
	///     .parse_numbers(true)
	///     .build();
	/// assert!(!options.keep_attributes);
	/// assert!(options.parse_numbers);
	/// ```
	pub fn builder() -> XmlOptionsBuilder {
		XmlOptionsBuilder::default()
	}
}

/// Builder for [`XmlOptions`]
#[derive(Debug, Default)]
pub struct XmlOptionsBuilder {
	keep_attributes: Option<bool>,
	attribute_prefix: Option<String>,
	text_key: Option<String>,
	preserve_cdata: Option<bool>,
	trim_text: Option<bool>,
	parse_numbers: Option<bool>,
	parse_booleans: Option<bool>,
}

impl XmlOptionsBuilder {
	pub fn keep_attributes(mut self, keep: bool) -> Self {
		self.keep_attributes = Some(keep);
		self
	}

	pub fn attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.attribute_prefix = Some(prefix.into());
		self
	}

	pub fn text_key(mut self, key: impl Into<String>) -> Self {
		self.text_key = Some(key.into());
		self
	}

	pub fn preserve_cdata(mut self, preserve: bool) -> Self {
		self.preserve_cdata = Some(preserve);
		self
	}

	pub fn trim_text(mut self, trim: bool) -> Self {
		self.trim_text = Some(trim);
		self
	}

	pub fn parse_numbers(mut self, parse: bool) -> Self {
		self.parse_numbers = Some(parse);
		self
	}

	pub fn parse_booleans(mut self, parse: bool) -> Self {
		self.parse_booleans = Some(parse);
		self
	}

	pub fn build(self) -> XmlOptions {
		let default = XmlOptions::default();
		XmlOptions {
			keep_attributes: self.keep_attributes.unwrap_or(default.keep_attributes),
			attribute_prefix: self.attribute_prefix.unwrap_or(default.attribute_prefix),
			text_key: self.text_key.unwrap_or(default.text_key),
			preserve_cdata: self.preserve_cdata.unwrap_or(default.preserve_cdata),
			trim_text: self.trim_text.unwrap_or(default.trim_text),
			parse_numbers: self.parse_numbers.unwrap_or(default.parse_numbers),
			parse_booleans: self.parse_booleans.unwrap_or(default.parse_booleans),
		}
	}
}

/// Load an XML string with default options.
pub fn load_str(xml: &str) -> XmlResult<Value> {
	load_str_with(xml, &XmlOptions::default())
}

/// Load an XML string.
///
/// An input without a root element loads as `Value::Null`.
pub fn load_str_with(xml: &str, options: &XmlOptions) -> XmlResult<Value> {
	let mut reader = Reader::from_str(xml);
	let mut stack: Vec<(String, Map<String, Value>)> = Vec::new();
	let mut current_text = String::new();

	loop {
		let position = reader.buffer_position();
		match reader.read_event() {
			Ok(Event::Start(start)) => {
				let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
				let mut obj = Map::new();
				if options.keep_attributes {
					collect_attributes(&start, &mut obj, options, position)?;
				}
				stack.push((name, obj));
				current_text.clear();
			}

			Ok(Event::End(_)) => {
				if let Some((name, mut obj)) = stack.pop() {
					if !current_text.is_empty() {
						let value = scalar_value(&current_text, options);
						obj.insert(options.text_key.clone(), value);
						current_text.clear();
					}

					let value = Value::Object(obj);
					if let Some((_, parent)) = stack.last_mut() {
						add_to_parent(parent, &name, value);
					} else {
						return Ok(json!({ name: value }));
					}
				}
			}

			Ok(Event::Text(text)) => {
				let decoded = text
					.xml_content()
					.map_err(|source| XmlError::Decode {
						position,
						source: quick_xml::Error::Encoding(source),
					})?;
				if options.trim_text {
					let trimmed = decoded.trim();
					if !trimmed.is_empty() {
						current_text.push_str(trimmed);
					}
				} else {
					current_text.push_str(&decoded);
				}
			}

			Ok(Event::CData(cdata)) => {
				let text = String::from_utf8_lossy(cdata.into_inner().as_ref()).to_string();
				if options.preserve_cdata {
					current_text.push_str(&format!("<![CDATA[{text}]]>"));
				} else {
					current_text.push_str(&text);
				}
			}

			Ok(Event::Empty(empty)) => {
				let name = String::from_utf8_lossy(empty.name().as_ref()).to_string();
				let mut obj = Map::new();
				if options.keep_attributes {
					collect_attributes(&empty, &mut obj, options, position)?;
				}

				// <empty/> without attributes is null, not {}
				let value = if obj.is_empty() { Value::Null } else { Value::Object(obj) };
				if let Some((_, parent)) = stack.last_mut() {
					add_to_parent(parent, &name, value);
				} else {
					return Ok(json!({ name: value }));
				}
			}

			Ok(Event::Eof) => break,

			Ok(_) => {}

			Err(source) => {
				return Err(XmlError::Syntax { position: reader.buffer_position(), source });
			}
		}
	}

	Ok(Value::Null)
}

/// Load an XML file with default options. A UTF-8 BOM is tolerated.
pub fn load_file(path: impl AsRef<Path>) -> XmlResult<Value> {
	load_file_with(path, &XmlOptions::default())
}

/// Load an XML file. Every error names the file it came from.
pub fn load_file_with(path: impl AsRef<Path>, options: &XmlOptions) -> XmlResult<Value> {
	let path = path.as_ref();
	tracing::debug!("loading xml from {}", path.display());
	let text = files::read_string(path)?;
	load_str_with(&text, options).map_err(|source| XmlError::Malformed {
		path: path.to_path_buf(),
		source: Box::new(source),
	})
}

fn collect_attributes(
	element: &quick_xml::events::BytesStart<'_>,
	obj: &mut Map<String, Value>,
	options: &XmlOptions,
	position: u64,
) -> XmlResult<()> {
	for attr in element.attributes() {
		let attr = attr.map_err(|source| XmlError::Attribute { position, source })?;
		let key = format!(
			"{}{}",
			options.attribute_prefix,
			String::from_utf8_lossy(attr.key.as_ref())
		);
		let value = String::from_utf8_lossy(&attr.value).to_string();
		obj.insert(key, scalar_value(&value, options));
	}
	Ok(())
}

// A repeated sibling turns the existing entry into an array.
fn add_to_parent(parent: &mut Map<String, Value>, name: &str, value: Value) {
	if let Some(existing) = parent.get_mut(name) {
		match existing {
			Value::Array(items) => items.push(value),
			_ => {
				let first = existing.clone();
				*existing = json!([first, value]);
			}
		}
	} else {
		parent.insert(name.to_string(), value);
	}
}

fn scalar_value(text: &str, options: &XmlOptions) -> Value {
	if options.parse_numbers {
		if let Ok(int) = text.parse::<i64>() {
			return json!(int);
		}
		if let Ok(float) = text.parse::<f64>() {
			return json!(float);
		}
	}
	if options.parse_booleans {
		match text.to_lowercase().as_str() {
			"true" => return json!(true),
			"false" => return json!(false),
			_ => {}
		}
	}
	json!(text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_load_simple_document() {
		let value = load_str("<root><name>Ada</name><age>36</age></root>").unwrap();
		assert_eq!(value["root"]["name"]["#text"], "Ada");
		assert_eq!(value["root"]["age"]["#text"], "36");
	}

	#[test]
	fn test_load_attributes() {
		let value = load_str(r#"<root id="123"><name lang="en">Ada</name></root>"#).unwrap();
		assert_eq!(value["root"]["@id"], "123");
		assert_eq!(value["root"]["name"]["@lang"], "en");
		assert_eq!(value["root"]["name"]["#text"], "Ada");
	}

	#[test]
	fn test_load_without_attributes() {
		let options = XmlOptions::builder().keep_attributes(false).build();
		let value = load_str_with(r#"<root id="123"><a>x</a></root>"#, &options).unwrap();
		assert_eq!(value["root"].get("@id"), None);
		assert_eq!(value["root"]["a"]["#text"], "x");
	}

	#[test]
	fn test_load_repeated_siblings_become_array() {
		let value = load_str("<root><item>1</item><item>2</item><item>3</item></root>").unwrap();
		let items = value["root"]["item"].as_array().unwrap();
		assert_eq!(items.len(), 3);
		assert_eq!(items[0]["#text"], "1");
		assert_eq!(items[2]["#text"], "3");
	}

	#[test]
	fn test_load_empty_elements() {
		let value = load_str(r#"<root><bare/><tagged id="7"/></root>"#).unwrap();
		assert_eq!(value["root"]["bare"], Value::Null);
		assert_eq!(value["root"]["tagged"]["@id"], "7");
	}

	#[test]
	fn test_load_empty_root() {
		assert_eq!(load_str("<root/>").unwrap(), json!({ "root": null }));
	}

	#[test]
	fn test_load_nested_structure() {
		let value =
			load_str("<root><person><name>Ada</name><address><city>London</city></address></person></root>")
				.unwrap();
		assert_eq!(value["root"]["person"]["address"]["city"]["#text"], "London");
	}

	#[test]
	fn test_load_parses_numbers_on_request() {
		let options = XmlOptions::builder().parse_numbers(true).build();
		let value =
			load_str_with("<root><count>42</count><price>19.99</price></root>", &options)
				.unwrap();
		assert_eq!(value["root"]["count"]["#text"], json!(42));
		assert_eq!(value["root"]["price"]["#text"], json!(19.99));
	}

	#[test]
	fn test_load_parses_booleans_on_request() {
		let options = XmlOptions::builder().parse_booleans(true).build();
		let value = load_str_with("<root><on>TRUE</on><off>false</off></root>", &options).unwrap();
		assert_eq!(value["root"]["on"]["#text"], json!(true));
		assert_eq!(value["root"]["off"]["#text"], json!(false));
	}

	#[test]
	fn test_load_numeric_attribute_with_parse_numbers() {
		let options = XmlOptions::builder().parse_numbers(true).build();
		let value = load_str_with(r#"<root level="3"/>"#, &options).unwrap();
		assert_eq!(value["root"]["@level"], json!(3));
	}

	#[test]
	fn test_load_cdata() {
		let value = load_str("<root><![CDATA[<b>bold</b>]]></root>").unwrap();
		assert_eq!(value["root"]["#text"], "<b>bold</b>");

		let options = XmlOptions::builder().preserve_cdata(true).build();
		let kept = load_str_with("<root><![CDATA[x]]></root>", &options).unwrap();
		assert_eq!(kept["root"]["#text"], "<![CDATA[x]]>");
	}

	#[test]
	fn test_load_decodes_entities() {
		let value = load_str("<root><a>fish &amp; chips</a></root>").unwrap();
		assert_eq!(value["root"]["a"]["#text"], "fish & chips");
	}

	#[test]
	fn test_load_trim_text_off_keeps_whitespace() {
		let options = XmlOptions::builder().trim_text(false).build();
		let value = load_str_with("<root><a>  padded  </a></root>", &options).unwrap();
		assert_eq!(value["root"]["a"]["#text"], "  padded  ");
	}

	#[test]
	fn test_load_whitespace_only_text_is_dropped() {
		let value = load_str("<root>\n\t<a>x</a>\n</root>").unwrap();
		assert_eq!(value["root"].get("#text"), None);
		assert_eq!(value["root"]["a"]["#text"], "x");
	}

	#[test]
	fn test_load_empty_input_is_null() {
		assert_eq!(load_str("").unwrap(), Value::Null);
	}

	#[test]
	fn test_load_custom_keys() {
		let options = XmlOptions::builder()
			.attribute_prefix("$")
			.text_key("value")
			.build();
		let value = load_str_with(r#"<root id="1">x</root>"#, &options).unwrap();
		assert_eq!(value["root"]["$id"], "1");
		assert_eq!(value["root"]["value"], "x");
	}

	#[rstest]
	#[case("<root><a></root>")]
	#[case("<root attr=oops></root>")]
	fn test_load_malformed_input_errors(#[case] xml: &str) {
		let err = load_str(xml).unwrap_err();
		// the message carries a byte offset for debugging
		assert!(err.to_string().contains("byte"));
	}

	#[test]
	fn test_load_file_roundtrip() {
		let dir = tempfile::TempDir::new().unwrap();
		let path = dir.path().join("config.xml");
		std::fs::write(&path, "<config><debug>true</debug></config>").unwrap();
		let value = load_file(&path).unwrap();
		assert_eq!(value["config"]["debug"]["#text"], "true");
	}

	#[test]
	fn test_load_file_tolerates_bom() {
		let dir = tempfile::TempDir::new().unwrap();
		let path = dir.path().join("bom.xml");
		std::fs::write(&path, b"\xEF\xBB\xBF<root><a>1</a></root>").unwrap();
		let value = load_file(&path).unwrap();
		assert_eq!(value["root"]["a"]["#text"], "1");
	}

	#[test]
	fn test_load_file_missing_reports_path() {
		let err = load_file("/no/such/file.xml").unwrap_err();
		assert!(matches!(err, XmlError::File(_)));
		assert!(err.to_string().contains("file.xml"));
	}

	#[test]
	fn test_load_file_malformed_reports_path_and_offset() {
		let dir = tempfile::TempDir::new().unwrap();
		let path = dir.path().join("broken.xml");
		std::fs::write(&path, "<root><a></root>").unwrap();
		let err = load_file(&path).unwrap_err();
		assert!(matches!(err, XmlError::Malformed { .. }));
		let message = err.to_string();
		assert!(message.contains("broken.xml"));
		assert!(message.contains("byte"));
	}

	#[test]
	fn test_options_builder_defaults() {
		let options = XmlOptions::builder().build();
		assert!(options.keep_attributes);
		assert_eq!(options.attribute_prefix, "@");
		assert_eq!(options.text_key, "#text");
		assert!(!options.preserve_cdata);
		assert!(options.trim_text);
		assert!(!options.parse_numbers);
		assert!(!options.parse_booleans);
	}
}
