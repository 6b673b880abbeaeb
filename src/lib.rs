//! # webutils
//!
//! Everyday helpers for web applications: the small conversions,
//! builders and file chores that every project reimplements.
//!
//! Each module stands alone and stays dependency-light:
//!
//! - [`convert`] - case conversions, transliteration, byte/duration
//!   formatting, boolean parsing
//! - [`html`] - escaping plus fluent [`Tag`](html::Tag),
//!   [`Attributes`](html::Attributes) and [`Styles`](html::Styles) builders
//! - [`color`] - RGBA hex parsing/formatting and HSV conversion
//! - [`csv`] - tabular output with [`CsvBuilder`](csv::CsvBuilder) and
//!   lenient parsing
//! - [`request`] - query-string decoding and declarative parameter
//!   filtering with [`ParamSet`](request::ParamSet)
//! - [`url`] - never-failing URL parsing, classification, validation and
//!   link extraction
//! - [`files`] - file reading/writing conveniences and directory
//!   discovery with [`FileFinder`](files::FileFinder)
//! - [`xml`] - XML documents loaded as `serde_json::Value` trees
//!
//! ## Example
//!
//! ```
//! use webutils::convert::to_title_case;
//! use webutils::html::Tag;
//!
//! let card = Tag::div()
//!     .class("card")
//!     .child(Tag::new("h2").text(to_title_case("user_profile")))
//!     .render();
//! assert_eq!(card, "<div class=\"card\"><h2>User Profile</h2></div>");
//! ```

pub mod color;
pub mod convert;
pub mod csv;
pub mod files;
pub mod html;
pub mod request;
pub mod url;
pub mod xml;

/// The most commonly used items in one import
pub mod prelude {
	pub use crate::color::RgbaColor;
	pub use crate::convert::{
		format_bytes, format_duration, parse_bool, to_camel_case, to_kebab_case,
		to_pascal_case, to_snake_case, to_title_case,
	};
	pub use crate::csv::CsvBuilder;
	pub use crate::files::FileFinder;
	pub use crate::html::{Attributes, Styles, Tag, escape, escape_attr};
	pub use crate::request::{ParamSet, parse_query};
	pub use crate::url::{UrlInfo, UrlType, find_urls};
	pub use crate::xml::{XmlOptions, load_str as load_xml_str};
}
