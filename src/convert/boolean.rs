//! Lenient boolean strings

use super::{ConvertError, ConvertResult};

/// Output style for [`format_bool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolStyle {
	/// `true` / `false`
	TrueFalse,
	/// `yes` / `no`
	YesNo,
	/// `1` / `0`
	OneZero,
}

/// Parse a boolean from its common string spellings.
///
/// Accepts `true/false`, `yes/no`, `1/0` and `on/off`, case-insensitively,
/// ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use webutils::convert::parse_bool;
///
/// assert_eq!(parse_bool("yes").unwrap(), true);
/// assert_eq!(parse_bool(" OFF ").unwrap(), false);
/// assert_eq!(parse_bool("1").unwrap(), true);
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(input: &str) -> ConvertResult<bool> {
	match input.trim().to_ascii_lowercase().as_str() {
		"true" | "yes" | "1" | "on" => Ok(true),
		"false" | "no" | "0" | "off" => Ok(false),
		_ => Err(ConvertError::InvalidBool(input.trim().to_string())),
	}
}

/// Render a boolean in the requested style
///
/// # Examples
///
/// ```
/// use webutils::convert::{format_bool, BoolStyle};
///
/// assert_eq!(format_bool(true, BoolStyle::YesNo), "yes");
/// assert_eq!(format_bool(false, BoolStyle::OneZero), "0");
/// ```
pub fn format_bool(value: bool, style: BoolStyle) -> &'static str {
	match (style, value) {
		(BoolStyle::TrueFalse, true) => "true",
		(BoolStyle::TrueFalse, false) => "false",
		(BoolStyle::YesNo, true) => "yes",
		(BoolStyle::YesNo, false) => "no",
		(BoolStyle::OneZero, true) => "1",
		(BoolStyle::OneZero, false) => "0",
	}
}
