//! String, number, boolean and duration conversion utilities

mod boolean;
mod bytes;
mod case;
mod duration;
mod text;

pub use boolean::{BoolStyle, format_bool, parse_bool};
pub use bytes::{format_bytes, format_bytes_si, parse_bytes};
pub use case::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, to_title_case};
pub use duration::{format_duration, time_ago};
pub use text::{
	hidden_chars, normalize_newlines, spaces_to_tabs, tabs_to_spaces, transliterate, truncate,
	word_wrap,
};

use thiserror::Error;

/// Errors raised by the conversion utilities
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
	#[error("cannot parse boolean from '{0}'")]
	InvalidBool(String),

	#[error("cannot parse byte size from '{0}'")]
	InvalidByteSize(String),

	#[error("unknown byte unit '{0}'")]
	UnknownByteUnit(String),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		assert_eq!(
			ConvertError::InvalidBool("maybe".to_string()).to_string(),
			"cannot parse boolean from 'maybe'"
		);
		assert_eq!(
			ConvertError::InvalidByteSize("x".to_string()).to_string(),
			"cannot parse byte size from 'x'"
		);
		assert_eq!(
			ConvertError::UnknownByteUnit("parsec".to_string()).to_string(),
			"unknown byte unit 'parsec'"
		);
	}
}
