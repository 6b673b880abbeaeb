//! HTML rendering of parsed URLs
//!
//! Each component becomes a `<span>` with a `url-*` class so stylesheets
//! can color schemes, hosts and query parts independently. Separators
//! stay outside the spans. All text goes through the html module's
//! escaping.

use crate::color::RgbaColor;
use crate::html::{Styles, Tag};

use super::{UrlInfo, UrlType};

fn span(class: &str, text: &str) -> String {
	Tag::new("span").class(class).text(text).render()
}

pub(crate) fn highlight(info: &UrlInfo) -> String {
	match info.url_type() {
		UrlType::Fragment => {
			format!("#{}", span("url-fragment", info.fragment().unwrap_or_default()))
		}
		UrlType::Email => format!(
			"{}:{}",
			span("url-scheme", "mailto"),
			span("url-email", info.email().unwrap_or_default())
		),
		UrlType::Phone => format!(
			"{}:{}",
			span("url-scheme", "tel"),
			span("url-phone", info.phone_number().unwrap_or_default())
		),
		UrlType::Url => highlight_url(info),
	}
}

fn highlight_url(info: &UrlInfo) -> String {
	let mut out = String::new();

	if let Some(scheme) = info.scheme() {
		out.push_str(&span("url-scheme", scheme));
		out.push_str("://");
	}
	if let Some(user) = info.username() {
		out.push_str(&span("url-username", user));
		if let Some(pass) = info.password() {
			out.push(':');
			out.push_str(&span("url-password", pass));
		}
		out.push('@');
	}
	if let Some(host) = info.host() {
		out.push_str(&span("url-host", host));
	}
	if let Some(port) = info.port() {
		out.push(':');
		out.push_str(&span("url-port", &port.to_string()));
	}
	if !info.path().is_empty() {
		out.push_str(&span("url-path", info.path()));
	}
	let pairs = info.query_pairs();
	for (index, (key, value)) in pairs.iter().enumerate() {
		out.push_str(if index == 0 { "?" } else { "&amp;" });
		out.push_str(&span("url-query-key", key));
		out.push('=');
		out.push_str(&span("url-query-value", value));
	}
	if let Some(fragment) = info.fragment() {
		out.push('#');
		out.push_str(&span("url-fragment", fragment));
	}
	out
}

/// A small default stylesheet for the classes [`UrlInfo::highlight`]
/// emits, one rule per line.
///
/// # Examples
///
/// ```
/// let css = webutils::url::highlight_styles();
/// assert!(css.contains(".url-host"));
/// ```
pub fn highlight_styles() -> String {
	let rules: [(&str, RgbaColor, bool); 9] = [
		("url-scheme", RgbaColor::rgb(0x6f, 0x42, 0xc1), false),
		("url-username", RgbaColor::rgb(0xcf, 0x22, 0x2e), false),
		("url-password", RgbaColor::rgb(0xcf, 0x22, 0x2e), false),
		("url-host", RgbaColor::rgb(0x09, 0x69, 0xda), true),
		("url-port", RgbaColor::rgb(0x95, 0x38, 0x00), false),
		("url-path", RgbaColor::rgb(0x1a, 0x7f, 0x37), false),
		("url-query-key", RgbaColor::rgb(0x9a, 0x67, 0x00), false),
		("url-query-value", RgbaColor::rgb(0x57, 0x60, 0x6a), false),
		("url-fragment", RgbaColor::rgb(0x82, 0x50, 0xdf), false),
	];

	let mut lines: Vec<String> = rules
		.iter()
		.map(|(class, color, bold)| {
			let mut styles = Styles::new();
			styles.color("color", color);
			if *bold {
				styles.set("font-weight", "600");
			}
			format!(".{} {{ {} }}", class, styles.render())
		})
		.collect();
	// e-mails and phone numbers share the host color
	let mut shared = Styles::new();
	shared.color("color", &RgbaColor::rgb(0x09, 0x69, 0xda));
	lines.push(format!(".url-email, .url-phone {{ {} }}", shared.render()));
	lines.join("\n")
}
