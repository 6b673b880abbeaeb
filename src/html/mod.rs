//! HTML escaping and rendering helpers
//!
//! Escaping primitives plus three small builders that compose: [`Styles`]
//! for CSS declarations, [`Attributes`] for attribute collections and
//! [`Tag`] for whole elements. All rendering escapes through the same
//! functions, so output is safe by construction unless raw markup is
//! explicitly requested.

mod attributes;
mod escape;
mod styles;
mod tag;

pub use attributes::Attributes;
pub use escape::{escape, escape_attr, unescape};
pub use styles::Styles;
pub use tag::Tag;

use thiserror::Error;

/// Errors raised by the HTML builders
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HtmlError {
	#[error("invalid attribute name '{0}'")]
	InvalidAttributeName(String),
}

/// Result type for HTML operations
pub type HtmlResult<T> = Result<T, HtmlError>;
