//! HTML escaping primitives
//!
//! All HTML rendering in this crate routes through these functions, so the
//! escaping policy lives in exactly one place.

/// Escape HTML special characters in text content
///
/// # Examples
///
/// ```
/// use webutils::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape a value for use in an HTML attribute.
///
/// In attribute position, newlines, carriage returns and tabs also become
/// numeric entities so the attribute survives reserialization.
///
/// # Examples
///
/// ```
/// use webutils::html::escape_attr;
///
/// assert_eq!(escape_attr("value with \"quotes\""),
///            "value with &quot;quotes&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Unescape HTML entities.
///
/// Handles the named entities this crate emits plus decimal and hex numeric
/// entities. Unknown entities are left intact.
///
/// # Examples
///
/// ```
/// use webutils::html::unescape;
///
/// assert_eq!(unescape("&lt;div&gt;"), "<div>");
/// assert_eq!(unescape("&#x27;"), "'");
/// assert_eq!(unescape("&#10;"), "\n");
/// assert_eq!(unescape("&unknown;"), "&unknown;");
/// ```
pub fn unescape(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut chars = text.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch != '&' {
			result.push(ch);
			continue;
		}
		let entity: String = chars.by_ref().take_while(|&c| c != ';').collect();
		match entity.as_str() {
			"amp" => result.push('&'),
			"lt" => result.push('<'),
			"gt" => result.push('>'),
			"quot" => result.push('"'),
			"apos" => result.push('\''),
			_ => match decode_numeric(&entity) {
				Some(decoded) => result.push(decoded),
				None => {
					result.push('&');
					result.push_str(&entity);
					result.push(';');
				}
			},
		}
	}
	result
}

fn decode_numeric(entity: &str) -> Option<char> {
	let digits = entity.strip_prefix('#')?;
	let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
		u32::from_str_radix(hex, 16).ok()?
	} else {
		digits.parse::<u32>().ok()?
	};
	char::from_u32(code)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape() {
		assert_eq!(escape("Hello, World!"), "Hello, World!");
		assert_eq!(
			escape("<script>alert('XSS')</script>"),
			"&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
		);
		assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
		assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
	}

	#[test]
	fn test_escape_empty() {
		assert_eq!(escape(""), "");
	}

	#[test]
	fn test_escape_multibyte() {
		assert_eq!(escape("こんにちは<>&"), "こんにちは&lt;&gt;&amp;");
	}

	#[test]
	fn test_escape_attr() {
		assert_eq!(escape_attr("value"), "value");
		assert_eq!(
			escape_attr("value with \"quotes\""),
			"value with &quot;quotes&quot;"
		);
		assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
		assert_eq!(escape_attr("tab\there"), "tab&#9;here");
		assert_eq!(escape_attr("cr\rhere"), "cr&#13;here");
	}

	#[test]
	fn test_unescape_named() {
		assert_eq!(unescape("&lt;div&gt;"), "<div>");
		assert_eq!(unescape("&amp;"), "&");
		assert_eq!(unescape("&quot;test&quot;"), "\"test\"");
		assert_eq!(unescape("&apos;"), "'");
	}

	#[test]
	fn test_unescape_numeric() {
		assert_eq!(unescape("&#39;"), "'");
		assert_eq!(unescape("&#x27;"), "'");
		assert_eq!(unescape("&#X27;"), "'");
		assert_eq!(unescape("&#10;"), "\n");
		assert_eq!(unescape("&#x1F600;"), "😀");
	}

	#[test]
	fn test_unescape_unknown_entity_intact() {
		assert_eq!(unescape("&unknown;"), "&unknown;");
		assert_eq!(unescape("&#xZZ;"), "&#xZZ;");
		assert_eq!(unescape("&#;"), "&#;");
	}

	#[test]
	fn test_unescape_incomplete_entity() {
		// An unterminated entity runs to the end of input
		assert_eq!(unescape("&lt"), "<");
		assert_eq!(unescape("&"), "&;");
	}

	#[test]
	fn test_escape_unescape_roundtrip() {
		let original = "<a href=\"x\">it's & it isn't</a>";
		assert_eq!(unescape(&escape(original)), original);
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_escape_output_is_inert(s in "\\PC*") {
			let escaped = escape(&s);
			assert!(!escaped.contains('<'));
			assert!(!escaped.contains('>'));
			assert!(!escaped.contains('"'));
			assert!(!escaped.contains('\''));
		}

		#[test]
		fn prop_escape_attr_no_raw_whitespace_controls(s in "\\PC*") {
			let escaped = escape_attr(&format!("{}\n\r\t", s));
			assert!(!escaped.contains('\n'));
			assert!(!escaped.contains('\r'));
			assert!(!escaped.contains('\t'));
		}

		#[test]
		fn prop_unescape_inverts_escape(s in "\\PC*") {
			assert_eq!(unescape(&escape(&s)), s);
		}

		#[test]
		fn prop_unescape_inverts_escape_attr(s in "\\PC*") {
			assert_eq!(unescape(&escape_attr(&s)), s);
		}
	}
}
